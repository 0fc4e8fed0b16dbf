/*
[INPUT]:  Error sources (HTTP transport, status classification, serialization, URLs)
[OUTPUT]: Structured error types for every backend call
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for dashboard backend calls
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Transport-level failure (connection refused, broken body, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered 403; the session is no longer valid
    #[error("Authentication failed")]
    Authentication,

    /// Backend answered with any status other than 200 or 403
    #[error("Request failed: {status} {status_text}")]
    Request { status: u16, status_text: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body was readable but not usable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, DashboardError::Authentication)
    }

    /// Create a request failure from a non-200, non-403 status
    pub fn request_failure(status: StatusCode) -> Self {
        DashboardError::Request {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

/// Result type alias for dashboard backend operations
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        assert!(DashboardError::Authentication.is_auth_error());
        assert!(!DashboardError::request_failure(StatusCode::NOT_FOUND).is_auth_error());
        assert!(!DashboardError::Config("missing".to_string()).is_auth_error());
    }

    #[test]
    fn test_request_failure_creation() {
        let err = DashboardError::request_failure(StatusCode::INTERNAL_SERVER_ERROR);
        match err {
            DashboardError::Request { status, status_text } => {
                assert_eq!(status, 500);
                assert_eq!(status_text, "Internal Server Error");
            }
            _ => panic!("Expected Request error variant"),
        }
    }

    #[test]
    fn test_request_failure_display() {
        let err = DashboardError::request_failure(StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Request failed: 400 Bad Request");
    }
}
