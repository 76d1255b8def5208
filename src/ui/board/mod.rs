mod intent;
mod reducer;
mod state;

pub use intent::{BoardIntent, IntentError, SET_POSTS, SET_SELECTED_USER};
pub use reducer::BoardReducer;
pub use state::BoardState;
