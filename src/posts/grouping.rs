//! Derivations over the post list: distinct authors and per-author filters.

use std::collections::HashSet;

use crate::posts::model::{Post, UserId};

/// Distinct user ids in order of first occurrence.
pub fn derive_users(posts: &[Post]) -> Vec<UserId> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .map(|post| post.user_id)
        .filter(|user| seen.insert(*user))
        .collect()
}

/// First post authored by `user`, scanning in list order.
pub fn first_post_of(posts: &[Post], user: UserId) -> Option<&Post> {
    posts.iter().find(|post| post.user_id == user)
}

/// All posts authored by `user`, in list order.
pub fn posts_of(posts: &[Post], user: UserId) -> Vec<&Post> {
    posts.iter().filter(|post| post.user_id == user).collect()
}
