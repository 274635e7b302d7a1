//! The action set: fetch, add_post, delete_post, set_modals.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use super::{ActionError, CancelHandle, ScopedActions};
use crate::gateway::Gateway;
use crate::modal::Modals;
use crate::state::StatePatch;
use crate::store::AppStore;
use crate::types::{Post, PostDraft};

/// Synchronization actions over one store and one gateway.
///
/// Clone-friendly; all clones share the store, the gateway, and the
/// `add_post` writer gate.
#[derive(Clone)]
pub struct Actions {
    store: AppStore,
    gateway: Arc<dyn Gateway>,
    // Serializes add_post callers so no two read the same posts snapshot.
    add_gate: Arc<tokio::sync::Mutex<()>>,
}

impl Actions {
    pub fn new(store: AppStore, gateway: Arc<dyn Gateway>) -> Self {
        Actions {
            store,
            gateway,
            add_gate: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// The underlying store handle — the raw `get_state`/`set_state`
    /// escape hatches live there and carry no extra contract.
    pub fn store(&self) -> &AppStore {
        &self.store
    }

    /// Derive a cancellable view of these actions, for callers whose UI
    /// context may go away while a gateway call is in flight.
    pub fn scoped(&self) -> (ScopedActions, CancelHandle) {
        ScopedActions::new(self.clone())
    }

    /// Fetch the three collections concurrently and apply them in a single
    /// store write. All three must succeed; if any one fails the store is
    /// left completely unchanged and the failure propagates. `modals` is
    /// never touched.
    pub async fn fetch(&self) -> Result<(), ActionError> {
        self.fetch_inner(None).await
    }

    /// Create a post remotely, then append it locally under a synthesized
    /// id strictly greater than any id currently present. The gateway's
    /// echoed id is discarded. Returns the appended post.
    pub async fn add_post(&self, draft: PostDraft) -> Result<Post, ActionError> {
        self.add_post_inner(draft, None).await
    }

    /// Delete a post remotely, then remove it locally. Pessimistic: the
    /// local entry is only removed once the gateway confirms. An id absent
    /// from the local collection is not an error.
    pub async fn delete_post(&self, post_id: u64) -> Result<(), ActionError> {
        self.delete_post_inner(post_id, None).await
    }

    /// Replace the entire modal map with `next`. Full-replace: any slot not
    /// carried in `next` is closed.
    pub fn set_modals(&self, next: Modals) {
        self.store.set_state(StatePatch::new().modals(next));
    }

    pub(super) async fn fetch_inner(
        &self,
        cancelled: Option<&AtomicBool>,
    ) -> Result<(), ActionError> {
        let (users, posts, comments) = tokio::try_join!(
            self.gateway.fetch_users(),
            self.gateway.fetch_posts(),
            self.gateway.fetch_comments(),
        )?;
        check_cancelled(cancelled)?;
        debug!(
            users = users.len(),
            posts = posts.len(),
            comments = comments.len(),
            "collections fetched"
        );
        self.store.set_state(
            StatePatch::new()
                .users(users)
                .posts(posts)
                .comments(comments),
        );
        Ok(())
    }

    pub(super) async fn add_post_inner(
        &self,
        draft: PostDraft,
        cancelled: Option<&AtomicBool>,
    ) -> Result<Post, ActionError> {
        let _writer = self.add_gate.lock().await;
        self.gateway.create_post(&draft).await?;
        check_cancelled(cancelled)?;

        // One snapshot for both the id and the append base.
        let mut posts = self.store.select(|state| state.posts.clone());
        let new_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post = draft.with_id(new_id);
        debug!(post_id = post.id, user_id = post.user_id, "post appended");
        posts.push(post.clone());
        self.store.set_state(StatePatch::new().posts(posts));
        Ok(post)
    }

    pub(super) async fn delete_post_inner(
        &self,
        post_id: u64,
        cancelled: Option<&AtomicBool>,
    ) -> Result<(), ActionError> {
        self.gateway.delete_post(post_id).await?;
        check_cancelled(cancelled)?;
        let posts: Vec<Post> = self
            .store
            .select(|state| state.posts.iter().filter(|p| p.id != post_id).cloned().collect());
        debug!(post_id, "post deleted");
        self.store.set_state(StatePatch::new().posts(posts));
        Ok(())
    }
}

fn check_cancelled(cancelled: Option<&AtomicBool>) -> Result<(), ActionError> {
    match cancelled {
        Some(flag) if flag.load(Ordering::SeqCst) => {
            warn!("scope cancelled, suppressing store write");
            Err(ActionError::Cancelled)
        }
        _ => Ok(()),
    }
}
