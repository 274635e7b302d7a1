//! AppStore - the single mutable state container plus change notification.
//!
//! The store is an explicitly constructed, cheaply cloneable handle — no
//! module-level singleton — so every test (and every embedding) gets an
//! isolated instance with a defined creation lifecycle.
//!
//! ## Example
//!
//! ```ignore
//! use feedstore::{AppStore, StatePatch, select};
//!
//! let store = AppStore::new();
//! let sub = store.subscribe(select::posts, |posts| {
//!     println!("posts changed: {} entries", posts.len());
//! });
//!
//! store.set_state(StatePatch::new().posts(fetched));
//! store.unsubscribe(sub);
//! ```

mod app_store;
mod subscriber;

pub use app_store::AppStore;
pub use subscriber::SubscriptionId;

pub(crate) use subscriber::Subscriber;
