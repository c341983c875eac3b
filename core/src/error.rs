//! Error types for the blog API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a delete or update racing
//! another client is the most common failure. All other non-2xx responses land
//! in `HttpError` with the raw status and body for debugging. The controller
//! treats every variant the same way: log, record, leave state untouched.

use thiserror::Error;

/// Errors returned by `PostClient` parse methods and `Transport`s.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested post does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS,
    /// timeout, broken body stream).
    #[error("transport failed: {0}")]
    TransportError(String),
}

/// Errors raised while building a `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported base URL {0:?}: expected an http or https URL with a path")]
    UnsupportedScheme(String),
}
