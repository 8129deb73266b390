//! Error types for the Launchpad service

use thiserror::Error;

/// Main error type for the Launchpad service
#[derive(Error, Debug)]
pub enum LaunchpadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Remote deploy platform responded with status {status}: {body}")]
    RemoteError { status: u16, body: String },

    #[error("Malformed response from remote deploy platform: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LaunchpadError {
    /// HTTP status carried by the failure, when the remote supplied one.
    /// The inbound layer falls back to 500 for everything else.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            LaunchpadError::RemoteError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for LaunchpadError {
    fn from(err: anyhow::Error) -> Self {
        LaunchpadError::Internal(err.to_string())
    }
}
