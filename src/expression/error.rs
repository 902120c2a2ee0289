//! Error types for sum-of-products parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised when text is not a rendered sum-of-products expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The text does not follow the sum-of-products grammar
    InvalidSop {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Optional byte position in the input where the error occurred
        position: Option<usize>,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidSop {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Not a sum-of-products expression (position {}): {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(
                        f,
                        "Not a sum-of-products expression: {}. Input: {:?}",
                        message, input
                    )
                }
            }
        }
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for io::Error {
    fn from(err: FormatError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
