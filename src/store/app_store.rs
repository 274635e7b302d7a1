//! The store handle: shared state behind a lock, plus the subscriber list.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::state::{AppState, StatePatch};
use crate::store::{Subscriber, SubscriptionId};

/// Shared handle to the application state. Clone-friendly via `Arc`; all
/// clones observe the same state and subscriber list.
///
/// Reads never block each other. Mutation goes through [`set_state`]
/// (directly or via [`Actions`](crate::Actions)); after the patch is
/// applied, every subscriber whose selector output changed is notified on
/// the mutating task. Subscriber callbacks must not call back into
/// `set_state` — the target model has a single mutation at a time between
/// suspension points.
///
/// [`set_state`]: AppStore::set_state
#[derive(Clone)]
pub struct AppStore {
    state: Arc<RwLock<AppState>>,
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    /// Create a store with all collections empty and no active modal.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store seeded with an initial state.
    pub fn with_state(initial: AppState) -> Self {
        AppStore {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Clone of the full current state. Side-effect free.
    pub fn get_state(&self) -> AppState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run a projection under the read lock without cloning the whole state.
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Shallow-merge `patch` into the state (each present key replaced
    /// wholesale), then notify subscribers whose selector output changed.
    pub fn set_state(&self, patch: StatePatch) {
        let snapshot = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            patch.apply_to(&mut state);
            state.clone()
        };
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for subscriber in subscribers.iter_mut() {
            (subscriber.notify)(&snapshot);
        }
    }

    /// Register a subscriber. `selector` is a pure projection of the state;
    /// `callback` fires only when a fresh computation of the selector
    /// differs from its cached previous result.
    pub fn subscribe<T, S, F>(&self, selector: S, callback: F) -> SubscriptionId
    where
        T: PartialEq + Send + 'static,
        S: Fn(&AppState) -> T + Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let subscriber = {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            Subscriber::new(id, &state, selector, callback)
        };
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(subscriber);
        SubscriptionId(id)
    }

    /// Remove a subscriber. Returns false if the id was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id.0);
        subscribers.len() < before
    }
}
