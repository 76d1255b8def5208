use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::fetch::error::FetchError;
use crate::posts::Post;

/// HTTP client bound to a single posts endpoint.
#[derive(Clone)]
pub struct PostsClient {
    client: Client,
    url: String,
}

impl PostsClient {
    pub fn new(source: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(source.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(source.timeout_seconds.into()))
            .user_agent(concat!("postboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: source.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one GET and decode the body as a list of posts.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        debug!(url = %self.url, "fetching posts");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let posts: Vec<Post> = response.json().await.map_err(|source| FetchError::Decode {
            url: self.url.clone(),
            source,
        })?;
        info!(count = posts.len(), "posts fetched");
        Ok(posts)
    }
}
