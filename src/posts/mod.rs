//! Post records and the derivations the views are built from.

mod grouping;
mod model;

pub use grouping::{derive_users, first_post_of, posts_of};
pub use model::{Post, UserId};
