//! Reqwest-backed gateway implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{Gateway, GatewayConfig, GatewayError};
use crate::types::{Comment, Post, PostDraft, User};

/// HTTP gateway speaking the JSONPlaceholder-shaped collection protocol.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use a preconfigured client (proxies, default headers, timeouts).
    pub fn with_client(client: reqwest::Client, config: GatewayConfig) -> Self {
        HttpGateway { client, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GatewayError> {
        debug!(url, "fetching collection");
        let response = self.client.get(url).send().await?;
        Ok(check_status(response)?.json().await?)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(GatewayError::Status {
            status: response.status().as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_users(&self) -> Result<Vec<User>, GatewayError> {
        self.get_json(&self.config.users_url).await
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, GatewayError> {
        self.get_json(&self.config.posts_url).await
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, GatewayError> {
        self.get_json(&self.config.comments_url).await
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<(), GatewayError> {
        debug!(user_id = draft.user_id, "submitting post draft");
        let response = self
            .client
            .post(&self.config.posts_url)
            .json(draft)
            .send()
            .await?;
        // Body carries the service's placeholder id; discard it.
        check_status(response)?;
        Ok(())
    }

    async fn delete_post(&self, post_id: u64) -> Result<(), GatewayError> {
        let url = format!("{}/{}", self.config.posts_url, post_id);
        debug!(url, "deleting post");
        let response = self.client.delete(&url).send().await?;
        check_status(response)?;
        Ok(())
    }
}
