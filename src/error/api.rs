//! Classified outcomes of requests to the backend.

use std::fmt;

use thiserror::Error;

pub const UNAUTHORIZED_MESSAGE: &str = "Please login again.";
pub const FORBIDDEN_MESSAGE: &str = "Access denied.";
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Coarse classification of a failed request, used for uniform handling by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Unauthorized,
    Forbidden,
    NotFound,
    BadRequest,
    GenericFailure,
    Timeout,
    NetworkFailure,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not-found",
            Self::BadRequest => "bad-request",
            Self::GenericFailure => "generic-failure",
            Self::Timeout => "timeout",
            Self::NetworkFailure => "network-failure",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by every call made through [`ApiClient`](crate::client::ApiClient).
///
/// The `Display` implementation produces the exact message presented to the operator.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 401, the session token is missing, stale or rejected.
    #[error("Please login again.")]
    Unauthorized,
    /// 403, the session is valid but lacks the required role.
    #[error("Access denied.")]
    Forbidden,
    /// 404 for the named resource (e.g. "User", "Product").
    #[error("{resource} not found.")]
    NotFound { resource: String },
    /// 400 carrying the server-provided message.
    #[error("{0}")]
    BadRequest(String),
    /// Any other non-success status, carrying the server message or a "Failed to ..." default.
    #[error("{0}")]
    Failed(String),
    /// No response within the configured request timeout; the request was aborted.
    #[error("Request timed out. Please try again.")]
    Timeout,
    /// The request never produced a response (connection refused, DNS, TLS, reset).
    #[error("Network error. Please check your connection and try again.")]
    Network(#[source] reqwest::Error),
    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// A success response whose body could not be decoded into the expected shape.
    #[error("Failed to parse response from server: {0}")]
    Decode(#[source] serde_json::Error),
    /// The endpoint path could not be joined onto the configured base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Maps the error onto its [`ErrorCategory`].
    ///
    /// Encode, decode and URL errors have no dedicated category and classify as generic failures.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Unauthorized => ErrorCategory::Unauthorized,
            Self::Forbidden => ErrorCategory::Forbidden,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::BadRequest(_) => ErrorCategory::BadRequest,
            Self::Failed(_) | Self::Encode(_) | Self::Decode(_) | Self::InvalidUrl(_) => {
                ErrorCategory::GenericFailure
            }
            Self::Timeout => ErrorCategory::Timeout,
            Self::Network(_) => ErrorCategory::NetworkFailure,
        }
    }
}
