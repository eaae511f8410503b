//! Error types for trazar operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trazar operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Expression failed to compile or uses more than one variable.
    #[error("expression error: {0}")]
    Expr(String),

    /// Expression text exceeds the input buffer bound.
    #[error("expression too long: {length} bytes (limit {max})")]
    ExprTooLong {
        /// Length of the rejected text in bytes.
        length: usize,
        /// Maximum accepted length in bytes.
        max: usize,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Scale domain error (degenerate viewport bounds).
    #[error("scale domain error: {0}")]
    ScaleDomain(String),

    /// Terminal initialization or rendering error.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
