//! Gateway - the remote collection-resource service boundary.
//!
//! The core depends only on the [`Gateway`] trait; [`HttpGateway`] is the
//! reqwest-backed implementation speaking the JSONPlaceholder-shaped
//! protocol:
//!
//! - `GET <users_url>` / `GET <posts_url>` / `GET <comments_url>` — the
//!   three collections
//! - `POST <posts_url>` with a [`PostDraft`] body — create; the response
//!   body is ignored beyond confirming success (the service echoes a fixed
//!   placeholder id, which is never trusted)
//! - `DELETE <posts_url>/<id>` — success/failure signal only

mod config;
mod error;
mod http;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::HttpGateway;

use async_trait::async_trait;

use crate::types::{Comment, Post, PostDraft, User};

/// The service boundary providing collection reads and post create/delete.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, GatewayError>;

    async fn fetch_posts(&self) -> Result<Vec<Post>, GatewayError>;

    async fn fetch_comments(&self) -> Result<Vec<Comment>, GatewayError>;

    /// Submit a draft for creation. Success/failure is all that matters;
    /// any id the service returns is discarded by the caller.
    async fn create_post(&self, draft: &PostDraft) -> Result<(), GatewayError>;

    async fn delete_post(&self, post_id: u64) -> Result<(), GatewayError>;
}
