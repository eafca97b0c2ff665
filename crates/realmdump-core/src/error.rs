//! Error types for the realmdump libraries.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, protocol, sink, and input validation errors.
//! All of them are fatal for the invocation they occur in: the exporter
//! never retries internally, the host scheduler is the retry boundary.

use std::fmt;
use thiserror::Error;

/// The unified error type for realmdump operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (token response without a usable access token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Protocol errors (non-2xx listing responses, unexpected body shapes).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A downstream sink rejected or failed to commit a page.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// Input validation errors (invalid server URL, empty realm name).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP transport error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint answered, but without a non-empty `access_token`.
    #[error("invalid credential response: access token missing or empty")]
    InvalidCredentialResponse,
}

/// Protocol-level errors from admin API responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error code reported by the server (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// A 2xx response whose body did not have the expected JSON shape.
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self {
            status: 200,
            error: Some("MalformedBody".to_string()),
            message: Some(detail.into()),
        }
    }
}

/// Errors raised by a page sink while accepting or committing a page.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SinkError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SinkError {
    /// Create a sink error from a message alone.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a sink error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::with_source("I/O failure", err)
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid server base URL.
    #[error("invalid server URL '{value}': {reason}")]
    ServerUrl { value: String, reason: String },

    /// Invalid realm name.
    #[error("invalid realm '{value}': {reason}")]
    Realm { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display_includes_all_parts() {
        let err = ProtocolError::new(
            403,
            Some("unknown_error".to_string()),
            Some("forbidden".to_string()),
        );
        assert_eq!(err.to_string(), "HTTP 403 [unknown_error]: forbidden");
    }

    #[test]
    fn protocol_error_display_status_only() {
        let err = ProtocolError::new(503, None, None);
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn auth_error_names_the_condition() {
        let err = Error::from(AuthError::InvalidCredentialResponse);
        assert!(err.to_string().contains("access token missing or empty"));
    }

    #[test]
    fn sink_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SinkError::from(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
