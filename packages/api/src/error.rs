//! Error types for the portal client

use thiserror::Error;

use crate::roles::Access;

/// Everything that can go wrong between a view asking for data and the data
/// arriving in a usable shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session's user type or role does not satisfy the view's gate.
    /// Raised client-side; no request was sent.
    #[error("not authorized: requires {0}")]
    Unauthorized(Access),

    /// The request never produced a response (DNS, connection refused, timeout).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx HTTP status.
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    /// The backend answered 2xx, but the envelope carried a failing `statusCode`.
    #[error("Request rejected ({status_code}): {message}")]
    Rejected { status_code: u16, message: String },

    /// The body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// A document payload was not valid base64.
    #[error("Invalid document payload: {0}")]
    Document(#[from] base64::DecodeError),
}

impl ApiError {
    /// Text suitable for an error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized(access) => {
                format!("You are not authorized to access {}.", access.describe())
            }
            ApiError::Transport(_) => {
                "Could not reach the server. Please check your connection and try again."
                    .to_string()
            }
            ApiError::Status { status: 401, .. } => "Please login to continue.".to_string(),
            ApiError::Status { status: 403, .. } => {
                "You don't have permission to perform this action.".to_string()
            }
            ApiError::Status { message, .. } | ApiError::Rejected { message, .. }
                if !message.is_empty() =>
            {
                message.clone()
            }
            ApiError::Status { .. } | ApiError::Rejected { .. } => {
                "The server could not complete the request. Please try again.".to_string()
            }
            ApiError::Malformed(_) => {
                "The server sent a response the portal could not read.".to_string()
            }
            ApiError::Document(_) => "The document is corrupted and cannot be opened.".to_string(),
        }
    }

    /// True for errors raised by the client-side role gate.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Result type for portal operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_auth_messages() {
        let unauthenticated = ApiError::Status {
            status: 401,
            message: "jwt expired".into(),
        };
        assert_eq!(unauthenticated.user_message(), "Please login to continue.");

        let forbidden = ApiError::Status {
            status: 403,
            message: String::new(),
        };
        assert!(forbidden.user_message().contains("permission"));
    }

    #[test]
    fn test_server_message_passes_through() {
        let err = ApiError::Rejected {
            status_code: 409,
            message: "Username already taken".into(),
        };
        assert_eq!(err.user_message(), "Username already taken");

        let blank = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert!(blank.user_message().contains("try again"));
    }

    #[test]
    fn test_malformed_is_not_reported_as_empty() {
        let err = ApiError::Malformed("expected a sequence".into());
        assert!(!err.user_message().to_lowercase().contains("no data"));
        assert!(err.user_message().contains("could not read"));
    }
}
