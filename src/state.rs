//! Root application state and the shallow-merge patch applied to it.

use crate::modal::Modals;
use crate::types::{Comment, Post, User};

/// The single root of truth: the three collections plus the modal map.
///
/// Created once, all-empty, and mutated only through
/// [`Actions`](crate::Actions) for the lifetime of the application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub modals: Modals,
}

/// A partial `AppState`. Applying a patch replaces each top-level key that
/// is present wholesale — a shallow merge, never a deep one. Absent keys
/// are untouched.
#[derive(Debug, Clone, Default)]
pub struct StatePatch {
    users: Option<Vec<User>>,
    posts: Option<Vec<Post>>,
    comments: Option<Vec<Comment>>,
    modals: Option<Modals>,
}

impl StatePatch {
    pub fn new() -> Self {
        StatePatch::default()
    }

    pub fn users(mut self, users: Vec<User>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = Some(posts);
        self
    }

    pub fn comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn modals(mut self, modals: Modals) -> Self {
        self.modals = Some(modals);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_none()
            && self.posts.is_none()
            && self.comments.is_none()
            && self.modals.is_none()
    }

    /// Replace each present key in `state`; leave the rest alone.
    pub fn apply_to(self, state: &mut AppState) {
        if let Some(users) = self.users {
            state.users = users;
        }
        if let Some(posts) = self.posts {
            state.posts = posts;
        }
        if let Some(comments) = self.comments {
            state.comments = comments;
        }
        if let Some(modals) = self.modals {
            state.modals = modals;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PostDraft;

    #[test]
    fn patch_replaces_only_present_keys() {
        let mut state = AppState {
            posts: vec![PostDraft::new("t", "b", 1).with_id(1)],
            modals: Modals::error_info("x"),
            ..AppState::default()
        };

        StatePatch::new()
            .posts(vec![
                PostDraft::new("t2", "b2", 1).with_id(2),
                PostDraft::new("t3", "b3", 2).with_id(3),
            ])
            .apply_to(&mut state);

        assert_eq!(state.posts.len(), 2);
        // untouched keys survive
        assert_eq!(state.modals, Modals::error_info("x"));
        assert!(state.users.is_empty());
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut state = AppState::default();
        let before = state.clone();
        assert!(StatePatch::new().is_empty());
        StatePatch::new().apply_to(&mut state);
        assert_eq!(state, before);
    }
}
