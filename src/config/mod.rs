mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SourceConfig, UiConfig, DEFAULT_POSTS_URL};
