//! Presentational views over [`BoardState`](crate::ui::board::BoardState).

pub mod detail;
pub mod user_list;

pub use detail::{DetailView, NO_POSTS};
pub use user_list::{detail_panel, user_rows, DetailPanel, UserListView, UserRow, PLACEHOLDER};
