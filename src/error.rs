//! Error types for the lexicon library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`LexiconError`]. A term that is absent from an index is *not* an error:
//! lookups report it through [`QueryResult::NotFound`](crate::query::QueryResult)
//! or `Option::None`.
//!
//! # Examples
//!
//! ```
//! use lexicon::error::{LexiconError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexiconError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexicon operations.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// I/O errors (reading document files in the CLI, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Invalid argument or configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error with context attached by the caller (file being read, etc.)
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexiconError.
pub type Result<T> = std::result::Result<T, LexiconError>;

impl LexiconError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        LexiconError::Index(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexiconError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexiconError::InvalidArgument(format!("configuration: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexiconError::index("Test index error");
        assert_eq!(error.to_string(), "Index error: Test index error");

        let error = LexiconError::invalid_argument("bad input");
        assert_eq!(error.to_string(), "Invalid argument: bad input");

        let error = LexiconError::invalid_config("expected_terms too large");
        assert_eq!(
            error.to_string(),
            "Invalid argument: configuration: expected_terms too large"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexicon_error = LexiconError::from(io_error);

        match lexicon_error {
            LexiconError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_context_chain_is_displayed() {
        use anyhow::Context;

        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let result: std::result::Result<(), io::Error> = Err(io_error);
        let lexicon_error: LexiconError = result.context("reading docs.txt").unwrap_err().into();

        assert!(matches!(lexicon_error, LexiconError::Anyhow(_)));
        assert_eq!(lexicon_error.to_string(), "reading docs.txt: File not found");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let lexicon_error: LexiconError = json_error.into();

        assert!(matches!(lexicon_error, LexiconError::Json(_)));
    }
}
