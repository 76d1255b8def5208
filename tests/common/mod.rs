//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use postboard::config::SourceConfig;
use postboard::posts::Post;

/// Posts from the three-post walkthrough: users 7, 7, 9.
pub fn scenario_posts() -> Vec<Post> {
    vec![
        Post::new(1, 7, "A", "a"),
        Post::new(2, 7, "B", "b"),
        Post::new(3, 9, "C", "c"),
    ]
}

pub fn scenario_json() -> String {
    serde_json::to_string(&scenario_posts()).unwrap()
}

/// Source config pointing at `url` with short timeouts.
pub fn source_for(url: &str) -> SourceConfig {
    SourceConfig {
        url: url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    }
}
