//! # Common Error Types
//!
//! Consolidated error handling for the booking desk.
//!
//! ## Error Categories
//!
//! - **Network**: transport failures (connection refused, DNS, reset)
//! - **Http**: the server answered with a 4xx/5xx status, optionally with a
//!   structured [`ErrorBody`]
//! - **Decode**: the server answered 2xx with an unexpected body
//! - **Validation**: client-side input checks; no request was issued
//! - **Config**: invalid startup configuration
//! - **State**: a request was abandoned before it produced a result
//!
//! Errors never escape to a global handler. Every call site turns them into a
//! display-state transition plus a message from [`crate::core::messages`].

use shared::ErrorBody;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// Transport failure before any HTTP status was received.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status.
    ///
    /// `body` is `None` when the response carried no parsable error body.
    #[error("HTTP error: status {status}")]
    Http {
        status: u16,
        body: Option<ErrorBody>,
    },

    /// Success status but the body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Startup configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Application state error.
    #[error("State error: {0}")]
    State(String),
}

impl AppError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured error body carried by the error, if any.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            AppError::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}
