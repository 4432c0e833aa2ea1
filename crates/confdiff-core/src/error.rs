//! Unified error handling for confdiff
//!
//! This module provides the error type shared by the parser and reporting
//! crates. Everything that can go wrong while processing a configure log is
//! either an I/O failure or a truncated/malformed log.

use thiserror::Error;

/// Unified error type for all confdiff operations
#[derive(Error, Debug)]
pub enum Error {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An expected section marker was never matched before end-of-input
    #[error("unexpected end of log while scanning for `{marker}`")]
    UnexpectedEof {
        /// The pattern that was being scanned for when input ran out
        marker: String,
    },

    /// Error wrapped with additional context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Result type using the unified Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an end-of-input error for the given marker pattern
    pub fn unexpected_eof(marker: impl Into<String>) -> Self {
        Error::UnexpectedEof {
            marker: marker.into(),
        }
    }

    /// Wrap this error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check if this is a truncated-log error, looking through context wrappers
    pub fn is_unexpected_eof(&self) -> bool {
        match self {
            Error::UnexpectedEof { .. } => true,
            Error::WithContext { source, .. } => source.is_unexpected_eof(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
