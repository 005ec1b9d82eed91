//! Detector error types.

use thiserror::Error;

/// Result type for detector operations.
pub type DetectorResult<T> = Result<T, DetectorError>;

/// Errors from the pose-detection collaborator.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("Invalid media URL: {0}")]
    InvalidUrl(String),

    #[error("Detection service returned {status}: {message}")]
    ServiceError { status: u16, message: String },

    #[error("Detection request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode detection response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DetectorError {
    /// True for failures worth retrying (timeouts, connection problems,
    /// service-side 5xx). Client-side errors and decode failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ServiceError { status, .. } => *status >= 500,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::InvalidUrl(_) | Self::Decode(_) => false,
        }
    }
}
