//! Actions - the only code permitted to mutate the store.
//!
//! Every mutation is mediated against the gateway: the network call always
//! completes (success or failure) before the corresponding store write, and
//! a failed call leaves the store untouched and re-raises to the caller.
//! There is no ordering guarantee between two independently triggered
//! actions, except that `add_post` calls are serialized among themselves so
//! two concurrent adds can never mint the same id.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use feedstore::{Actions, AppStore, HttpGateway, Modals, PostDraft};
//!
//! let store = AppStore::new();
//! let actions = Actions::new(store.clone(), Arc::new(HttpGateway::default()));
//!
//! if let Err(e) = actions.fetch().await {
//!     actions.set_modals(Modals::error_info(e.load_message()));
//! }
//!
//! actions.add_post(PostDraft::new("title", "body", 1)).await?;
//! ```

mod actions;
mod error;
mod scope;

pub use actions::Actions;
pub use error::ActionError;
pub use scope::{CancelHandle, ScopedActions};
