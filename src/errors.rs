//! Error types for secret retrieval operations.

use thiserror::Error;

/// Result type for secret retrieval operations.
pub type Result<T> = std::result::Result<T, SecretsError>;

/// Errors that can occur while configuring or reading from the secrets backend.
#[derive(Error, Debug)]
pub enum SecretsError {
    /// A required connection parameter is missing or malformed.
    ///
    /// Fatal at construction: no provider is produced.
    #[error("invalid vault configuration: {reason}")]
    Configuration { reason: String },

    /// Client or transport setup failed at construction time.
    #[error("failed to set up vault client: {message}")]
    Connection { message: String },

    /// The backend call for a path failed. Carries the path and the
    /// underlying cause; the core never retries, the caller decides.
    #[error("unable to read secret from vault at '{path}'")]
    Retrieval {
        path: String,
        #[source]
        source: Box<SecretsError>,
    },

    /// The secret at the path did not have the expected shape
    /// (missing `value` field, or a non-string value).
    #[error("malformed secret at '{path}': {reason}")]
    Format { path: String, reason: String },

    /// Backend-specific failure reported by a secrets engine.
    #[error("backend error: {message}")]
    Backend { message: String },

    /// The caller's cancellation token fired before the round trip completed.
    #[error("secret read at '{path}' was cancelled")]
    Cancelled { path: String },
}

impl SecretsError {
    /// Create a configuration error.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration { reason: reason.into() }
    }

    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection { message: message.into() }
    }

    /// Create a retrieval error wrapping the underlying cause.
    pub fn retrieval(path: impl Into<String>, source: SecretsError) -> Self {
        Self::Retrieval { path: path.into(), source: Box::new(source) }
    }

    /// Create a format error.
    pub fn format(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format { path: path.into(), reason: reason.into() }
    }

    /// Create a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend { message: message.into() }
    }

    /// Create a cancellation error.
    pub fn cancelled(path: impl Into<String>) -> Self {
        Self::Cancelled { path: path.into() }
    }
}
