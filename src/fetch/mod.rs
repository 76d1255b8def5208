//! Fetching posts from the remote API.

mod client;
mod effect;
mod error;

pub use client::PostsClient;
pub use effect::{spawn_fetch, FetchOutcome};
pub use error::FetchError;
