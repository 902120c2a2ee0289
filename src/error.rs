//! Error types for the Quine-McCluskey minimizer
//!
//! Each stage has its own error type; [`QmError`] wraps them for callers that
//! only want a single error type.

use std::fmt;
use std::io;

pub use crate::expression::FormatError;
pub use crate::input::{InputError, TermList};
pub use crate::problem::ProblemError;

/// The main error type of the crate
#[derive(Debug)]
pub enum QmError {
    /// The minterm or don't-care input could not be used
    InvalidInput(InputError),
    /// Text passed to the product-of-sums transform is not a sum of products
    Format(FormatError),
    /// A problem file could not be read
    Problem(ProblemError),
}

impl fmt::Display for QmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QmError::InvalidInput(err) => write!(f, "{}", err),
            QmError::Format(err) => write!(f, "{}", err),
            QmError::Problem(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for QmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QmError::InvalidInput(err) => Some(err),
            QmError::Format(err) => Some(err),
            QmError::Problem(err) => Some(err),
        }
    }
}

impl From<InputError> for QmError {
    fn from(err: InputError) -> Self {
        QmError::InvalidInput(err)
    }
}

impl From<FormatError> for QmError {
    fn from(err: FormatError) -> Self {
        QmError::Format(err)
    }
}

impl From<ProblemError> for QmError {
    fn from(err: ProblemError) -> Self {
        match err {
            ProblemError::Input(err) => QmError::InvalidInput(err),
            other => QmError::Problem(other),
        }
    }
}

// Conversion from QmError to io::Error for callers working with io::Result
impl From<QmError> for io::Error {
    fn from(err: QmError) -> Self {
        match err {
            QmError::InvalidInput(err) => err.into(),
            QmError::Format(err) => err.into(),
            QmError::Problem(err) => err.into(),
        }
    }
}
