//! Unified error type for movietracker.
//!
//! Catalog failures are split by where they happened (transport, provider
//! authentication, provider status, body decoding, content policy) so API
//! handlers can derive an HTTP status code via [`Error::http_status`].

use std::fmt;

/// Unified error type covering all failure modes in movietracker.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The provider could not be reached (connection, DNS, timeout).
    #[error("Transport error: {source}")]
    Transport {
        /// The underlying transport error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Re-authenticating against the provider failed.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The provider answered with a non-2xx status after the retry ceiling.
    #[error("Upstream returned status {status}")]
    UpstreamStatus {
        /// HTTP status code returned by the provider.
        status: u16,
    },

    /// The provider's response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A single-item lookup was rejected by the content filter.
    #[error("Content policy rejected movie: {reason}")]
    ContentPolicy {
        /// Human-readable rejection reason.
        reason: String,
    },

    /// Request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested entity could not be found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g. "movie").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    ///
    /// Content policy rejections are reported like a missing movie.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Transport { .. } => 502,
            Error::Authentication(_) => 502,
            Error::UpstreamStatus { status: 404 } => 404,
            Error::UpstreamStatus { .. } => 502,
            Error::Decode(_) => 502,
            Error::ContentPolicy { .. } => 404,
            Error::Validation(_) => 400,
            Error::NotFound { .. } => 404,
            Error::Internal(_) => 500,
        }
    }

    /// Short machine-readable code for API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Transport { .. } => "transport_error",
            Error::Authentication(_) => "authentication_error",
            Error::UpstreamStatus { .. } => "upstream_status",
            Error::Decode(_) => "decode_error",
            Error::ContentPolicy { .. } => "content_policy",
            Error::Validation(_) => "validation_error",
            Error::NotFound { .. } => "not_found",
            Error::Internal(_) => "internal_error",
        }
    }

    /// Convenience constructor for [`Error::Transport`].
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Transport {
            source: source.into(),
        }
    }

    /// Convenience constructor for [`Error::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode(msg.into())
    }

    /// Convenience constructor for [`Error::ContentPolicy`].
    pub fn content_policy(reason: impl Into<String>) -> Self {
        Error::ContentPolicy {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for [`Error::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
