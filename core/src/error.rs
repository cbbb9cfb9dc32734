//! Error types for the movie service client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the movie does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `RemoteError` with the raw
//! status code and body for debugging. Failures below HTTP (no response at
//! all) are `TransportError` and carry a coarse kind so callers can tell a
//! timeout from a refused connection without string matching.

use std::fmt;

use thiserror::Error;

/// Errors returned by `MoviesApi` parse methods and `MoviesClient` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested movie does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    RemoteError { status: u16, body: String },

    /// No HTTP response was obtained.
    #[error("transport failure: {0}")]
    TransportError(#[from] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// Client configuration could not be read.
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// HTTP status of the response that caused this error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::RemoteError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

/// What went wrong below the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// A connect, read, or write deadline elapsed.
    Timeout,
    /// The peer reset or closed the connection before a full response.
    ConnectionClosed,
    /// The connection could not be established.
    Connect,
    /// The host name did not resolve.
    Dns,
    /// The peer sent something that is not valid HTTP.
    Protocol,
    /// The request URL could not be used.
    InvalidUrl,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TransportErrorKind::Timeout => "timed out",
            TransportErrorKind::ConnectionClosed => "connection closed",
            TransportErrorKind::Connect => "connect failed",
            TransportErrorKind::Dns => "host not found",
            TransportErrorKind::Protocol => "protocol error",
            TransportErrorKind::InvalidUrl => "invalid url",
            TransportErrorKind::Other => "transport error",
        };
        f.write_str(text)
    }
}

/// A failure to obtain an HTTP response at all.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
