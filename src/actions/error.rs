use std::error::Error;
use std::fmt;

use crate::gateway::GatewayError;

/// Failure of a synchronization action. The pending store mutation was
/// aborted; nothing local changed.
#[derive(Debug)]
pub enum ActionError {
    /// The gateway call failed.
    Gateway(GatewayError),
    /// The action's scope was cancelled before the store write.
    Cancelled,
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Gateway(e) => write!(f, "{}", e),
            ActionError::Cancelled => write!(f, "action cancelled before store write"),
        }
    }
}

impl Error for ActionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ActionError::Gateway(e) => Some(e),
            ActionError::Cancelled => None,
        }
    }
}

impl From<GatewayError> for ActionError {
    fn from(err: GatewayError) -> Self {
        ActionError::Gateway(err)
    }
}

/// Message templates the presentation layer feeds into
/// [`Modals::error_info`](crate::Modals::error_info). A failed `fetch` and
/// a failed `add_post`/`delete_post` use the same reporting mechanism but
/// different templates.
impl ActionError {
    pub fn load_message(&self) -> String {
        format!("Failed to load data: {}", self)
    }

    pub fn submit_message(&self) -> String {
        format!("Failed to submit post: {}", self)
    }

    pub fn delete_message(&self) -> String {
        format!("Failed to delete post: {}", self)
    }
}
