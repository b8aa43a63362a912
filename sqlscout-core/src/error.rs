//! Error types for the dialect adapter layer.
//!
//! Dialects have exactly two runtime failure modes: configuration problems
//! caught at construction time and connection failures when a handle is
//! opened. Native driver errors are always wrapped so callers never have to
//! branch on backend identity.

use thiserror::Error;

/// Main error type for SQLScout dialect operations.
///
/// SQL-text-generating operations are infallible by contract; only
/// construction and connection handling produce these errors.
#[derive(Debug, Error)]
pub enum SqlScoutError {
    /// Database connection failed (native driver error wrapped)
    #[error("Database connection failed: {context}")]
    Connection {
        /// Human-readable description of what was being attempted
        context: String,
        /// The underlying driver error, type-erased
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration
        message: String,
    },

    /// No dialect is registered for the requested backend tag
    #[error("Unsupported backend: no dialect registered for '{backend}'")]
    UnsupportedBackend {
        /// The backend tag that failed to resolve
        backend: String,
    },
}

/// Convenience type alias for Results with SqlScoutError
pub type Result<T> = std::result::Result<T, SqlScoutError>;

impl SqlScoutError {
    /// Creates a connection error wrapping the native driver failure.
    pub fn connection_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a configuration error for a required connection field that
    /// is absent or resolves to an empty string.
    pub fn missing_field(field: &str) -> Self {
        Self::Configuration {
            message: format!("required connection field '{}' is missing or empty", field),
        }
    }

    /// Creates an unsupported-backend error for a registry miss
    pub fn unsupported_backend(backend: impl Into<String>) -> Self {
        Self::UnsupportedBackend {
            backend: backend.into(),
        }
    }
}
