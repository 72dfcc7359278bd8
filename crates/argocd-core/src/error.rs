//! Error types for Argo CD API operations.
//!
//! Every failure falls into one of three kinds: the server answered with a
//! non-success status (`Api`), the server could not be reached or its answer
//! could not be decoded (`Network`), or the client was misconfigured
//! (`Config`). Nothing is retried or recovered internally; errors always
//! propagate to the caller.

use thiserror::Error;

/// Main error type for Argo CD API operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The server answered but signaled failure with a non-2xx status.
    #[error("Request failed with status code {status}: {message}")]
    Api {
        /// Numeric HTTP status code returned by the server.
        status: u16,
        /// Human-readable message, drawn from the response body's `message`
        /// field when present.
        message: String,
    },

    /// The server could not be reached, or its response could not be decoded.
    #[error("Network error: {0}")]
    Network(String),

    /// Client configuration is invalid (base URL, token, headers).
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized result type for Argo CD API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the HTTP status code if the server answered with an error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server answered with `404 Not Found`.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}
