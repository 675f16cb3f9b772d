//! Parse error types.

use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The parser itself failed on the input.
    #[error("Internal parser error: {0}")]
    Internal(String),

    /// Reading the character stream failed.
    #[error("Failed to read markup: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
