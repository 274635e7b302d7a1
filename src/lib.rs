mod actions;
mod gateway;
mod modal;
mod state;
mod store;
mod types;

pub mod select;

pub use actions::{ActionError, Actions, CancelHandle, ScopedActions};
pub use gateway::{Gateway, GatewayConfig, GatewayError, HttpGateway};
pub use modal::{
    AddPostModal, ErrorInfoModal, ModalSlot, Modals, PostInfoModal, UserInfoModal,
};
pub use state::{AppState, StatePatch};
pub use store::{AppStore, SubscriptionId};
pub use types::{Address, Comment, Company, Geo, Post, PostDraft, User};
