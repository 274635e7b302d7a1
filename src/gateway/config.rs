//! Endpoint configuration for the HTTP gateway.

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// The three collection endpoints the gateway talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub users_url: String,
    pub posts_url: String,
    pub comments_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl GatewayConfig {
    /// Derive the three collection URLs from a service base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        GatewayConfig {
            users_url: format!("{base}/users"),
            posts_url: format!("{base}/posts"),
            comments_url: format!("{base}/comments"),
        }
    }
}
