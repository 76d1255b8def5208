use tracing::debug;

use crate::ui::board::intent::BoardIntent;
use crate::ui::board::state::BoardState;
use crate::ui::mvi::Reducer;

pub struct BoardReducer;

impl Reducer for BoardReducer {
    type State = BoardState;
    type Intent = BoardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BoardIntent::ReplacePosts(posts) => {
                debug!(count = posts.len(), "replace posts");
                BoardState { posts, ..state }
            }
            BoardIntent::SelectUser(user) => {
                debug!(user, "select user");
                BoardState {
                    selected_user: Some(user),
                    ..state
                }
            }
        }
    }
}
