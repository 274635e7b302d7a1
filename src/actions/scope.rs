//! Scoped actions - explicit cancellation for teardown.
//!
//! There is no request cancellation at the gateway: an in-flight call runs
//! to completion regardless. What a cancelled scope suppresses is the
//! *store write* that would follow, so an action resolving after its
//! triggering UI context has gone away can no longer push a stale update
//! into the shared store. Suppressed actions resolve with
//! [`ActionError::Cancelled`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{ActionError, Actions};
use crate::modal::Modals;
use crate::types::{Post, PostDraft};

/// Cancels the paired [`ScopedActions`]. Cloneable; cancelling any clone
/// cancels the scope. Typically cancelled on consumer teardown.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// A cancellable view over [`Actions`]. Same operations, same semantics,
/// except that once the paired [`CancelHandle`] is cancelled no operation
/// will write to the store.
pub struct ScopedActions {
    inner: Actions,
    cancelled: Arc<AtomicBool>,
}

impl ScopedActions {
    pub(super) fn new(inner: Actions) -> (Self, CancelHandle) {
        let cancelled = Arc::new(AtomicBool::new(false));
        let handle = CancelHandle {
            cancelled: cancelled.clone(),
        };
        (ScopedActions { inner, cancelled }, handle)
    }

    pub async fn fetch(&self) -> Result<(), ActionError> {
        self.inner.fetch_inner(Some(&self.cancelled)).await
    }

    pub async fn add_post(&self, draft: PostDraft) -> Result<Post, ActionError> {
        self.inner.add_post_inner(draft, Some(&self.cancelled)).await
    }

    pub async fn delete_post(&self, post_id: u64) -> Result<(), ActionError> {
        self.inner.delete_post_inner(post_id, Some(&self.cancelled)).await
    }

    pub fn set_modals(&self, next: Modals) -> Result<(), ActionError> {
        if self.cancelled.load(Ordering::SeqCst) {
            return Err(ActionError::Cancelled);
        }
        self.inner.set_modals(next);
        Ok(())
    }
}
