//! Intents for the posts board, plus their serialized action form.

use serde::Deserialize;
use thiserror::Error;

use crate::posts::{Post, UserId};
use crate::ui::mvi::Intent;

/// Wire name of [`BoardIntent::ReplacePosts`].
pub const SET_POSTS: &str = "SET_POSTS";
/// Wire name of [`BoardIntent::SelectUser`].
pub const SET_SELECTED_USER: &str = "SET_SELECTED_USER";

#[derive(Debug, Clone, PartialEq)]
pub enum BoardIntent {
    /// Replace the whole post list. Selection is left untouched.
    ReplacePosts(Vec<Post>),
    /// Select a user for the detail view. Not validated against `posts`.
    SelectUser(UserId),
}

impl Intent for BoardIntent {}

#[derive(Debug, Error)]
pub enum IntentError {
    #[error("Malformed action: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Invalid payload for action '{kind}': {source}")]
    Payload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown action type '{0}'")]
    UnknownAction(String),
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl BoardIntent {
    /// Decode a serialized action such as
    /// `{"type": "SET_SELECTED_USER", "payload": 7}`.
    ///
    /// Unrecognized `type` values are an error, never a no-op.
    pub fn decode(json: &str) -> Result<Self, IntentError> {
        let RawAction { kind, payload } =
            serde_json::from_str(json).map_err(IntentError::Malformed)?;
        let decoded = match kind.as_str() {
            SET_POSTS => serde_json::from_value(payload).map(BoardIntent::ReplacePosts),
            SET_SELECTED_USER => serde_json::from_value(payload).map(BoardIntent::SelectUser),
            _ => return Err(IntentError::UnknownAction(kind)),
        };
        decoded.map_err(|source| IntentError::Payload { kind, source })
    }
}
