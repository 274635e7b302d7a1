//! Pure projection helpers over [`AppState`].
//!
//! The cloning selectors (`users`, `posts`, `comments`, `modals`) are meant
//! for [`AppStore::subscribe`](crate::AppStore::subscribe), which needs an
//! owned, comparable value to cache. The lookup helpers return `None` or an
//! empty collection for ids absent from the current collections — the store
//! does not enforce referential integrity, so a dangling `user_id` or
//! `post_id` reads as "not found" rather than an error.

use crate::modal::Modals;
use crate::state::AppState;
use crate::types::{Comment, Post, User};

pub fn users(state: &AppState) -> Vec<User> {
    state.users.clone()
}

pub fn posts(state: &AppState) -> Vec<Post> {
    state.posts.clone()
}

pub fn comments(state: &AppState) -> Vec<Comment> {
    state.comments.clone()
}

pub fn modals(state: &AppState) -> Modals {
    state.modals.clone()
}

pub fn user_by_id(state: &AppState, user_id: u64) -> Option<&User> {
    state.users.iter().find(|u| u.id == user_id)
}

pub fn post_by_id(state: &AppState, post_id: u64) -> Option<&Post> {
    state.posts.iter().find(|p| p.id == post_id)
}

/// A user's posts, newest id first — the order the user pane renders.
pub fn posts_by_user(state: &AppState, user_id: u64) -> Vec<Post> {
    let mut posts: Vec<Post> = state
        .posts
        .iter()
        .filter(|p| p.user_id == user_id)
        .cloned()
        .collect();
    posts.sort_by(|a, b| b.id.cmp(&a.id));
    posts
}

pub fn comments_for_post(state: &AppState, post_id: u64) -> Vec<Comment> {
    state
        .comments
        .iter()
        .filter(|c| c.post_id == post_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PostDraft;

    fn state_with_posts() -> AppState {
        AppState {
            posts: vec![
                PostDraft::new("a", "b", 1).with_id(2),
                PostDraft::new("c", "d", 2).with_id(5),
                PostDraft::new("e", "f", 1).with_id(4),
            ],
            ..AppState::default()
        }
    }

    #[test]
    fn posts_by_user_sorts_newest_first() {
        let state = state_with_posts();
        let ids: Vec<u64> = posts_by_user(&state, 1).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 2]);
    }

    #[test]
    fn dangling_ids_read_as_not_found() {
        let state = state_with_posts();
        assert!(user_by_id(&state, 99).is_none());
        assert!(post_by_id(&state, 99).is_none());
        assert!(posts_by_user(&state, 99).is_empty());
        assert!(comments_for_post(&state, 2).is_empty());
    }
}
