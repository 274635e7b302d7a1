use std::error::Error;
use std::fmt;

/// Failure at the remote service boundary.
#[derive(Debug)]
pub enum GatewayError {
    /// Transport-level failure: connection, timeout, TLS, or a response
    /// body that failed to decode.
    Transport(reqwest::Error),
    /// The service answered with a non-success status.
    Status { status: u16, url: String },
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Transport(e) => write!(f, "gateway transport failure: {}", e),
            GatewayError::Status { status, url } => {
                write!(f, "gateway returned status {} for {}", status, url)
            }
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GatewayError::Transport(e) => Some(e),
            GatewayError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err)
    }
}
