//! Error types for the docnav plugin.
//!
//! [`DocnavError`] collects every failure the library can report, and
//! [`Result`] is the matching alias. Only [`DocnavError::IndexLoad`] ever
//! originates from the document server; the remaining variants cover local
//! concerns like theme files and configuration.

use thiserror::Error;

/// The main error type for docnav operations.
///
/// # Examples
///
/// ```
/// use docnav::DocnavError;
///
/// let err = DocnavError::IndexLoad { status: Some(503), reason: "service unavailable".into() };
/// assert_eq!(err.to_string(), "Index load failed (status 503): service unavailable");
/// ```
#[derive(Debug, Error)]
pub enum DocnavError {
    /// The document index could not be obtained.
    ///
    /// Covers transport failures, non-success HTTP statuses and bodies that do
    /// not decode as a document index. These are not distinguished beyond the
    /// optional status code; callers log them and keep the previous index.
    #[error("Index load failed{}: {reason}", status_suffix(.status))]
    IndexLoad {
        /// HTTP status of the response, if one was received.
        status: Option<u16>,
        /// What went wrong.
        reason: String,
    },

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DocnavError {
    /// Builds an [`DocnavError::IndexLoad`] for a response that carried `status`.
    pub fn index_status(status: u16, reason: impl Into<String>) -> Self {
        Self::IndexLoad {
            status: Some(status),
            reason: reason.into(),
        }
    }

    /// Builds an [`DocnavError::IndexLoad`] with no usable status code.
    pub fn index_body(reason: impl Into<String>) -> Self {
        Self::IndexLoad {
            status: None,
            reason: reason.into(),
        }
    }

    /// Returns `true` for the index load failure kind.
    #[must_use]
    pub const fn is_index_load(&self) -> bool {
        matches!(self, Self::IndexLoad { .. })
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

/// A specialized `Result` type for docnav operations.
pub type Result<T> = std::result::Result<T, DocnavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_load_message_includes_status_when_present() {
        let err = DocnavError::index_status(404, "not found");
        assert_eq!(err.to_string(), "Index load failed (status 404): not found");
        assert!(err.is_index_load());
    }

    #[test]
    fn index_load_message_omits_missing_status() {
        let err = DocnavError::index_body("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Index load failed: expected value at line 1 column 1"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DocnavError = io.into();
        assert!(matches!(err, DocnavError::Io(_)));
        assert!(!err.is_index_load());
    }
}
