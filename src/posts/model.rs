use serde::{Deserialize, Serialize};

/// Identifier of the author owning a post.
pub type UserId = u64;

/// A single post as served by the posts API.
///
/// Field names follow the wire format (`userId` is camelCase upstream).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: u64, user_id: UserId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}
