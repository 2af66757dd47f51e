//! Document fetch error types.
//!
//! Defined in `studydrill-core` so the session loader can classify fetch
//! failures without string matching. Every variant is recoverable: a failed
//! fetch degrades the topic to zero concepts instead of failing the session.

use thiserror::Error;

/// Errors that can occur when fetching a study document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No document exists under the requested name.
    #[error("document not found: {name}")]
    NotFound { name: String },

    /// A local read failed.
    #[error("io error: {0}")]
    Io(String),

    /// The server answered with a non-success status.
    #[error("HTTP error (status {status}): {message}")]
    Http { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),
}

impl DocumentError {
    /// Returns `true` when the document simply does not exist, as opposed
    /// to a transient transport problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocumentError::NotFound { .. })
    }
}
