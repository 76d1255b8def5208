//! State of the posts board.

use crate::posts::{Post, UserId};
use crate::ui::mvi::UiState;

/// Everything the board views render from.
///
/// `selected_user` is kept when `posts` is replaced, even if the new list no
/// longer contains that user; the detail view then shows no posts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    pub posts: Vec<Post>,
    pub selected_user: Option<UserId>,
}

impl UiState for BoardState {}

impl BoardState {
    pub fn has_selection(&self) -> bool {
        self.selected_user.is_some()
    }
}
