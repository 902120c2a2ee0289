//! Error types for input normalization

use std::fmt;
use std::io;
use std::sync::Arc;

/// Which of the two input lists a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermList {
    /// The minterm list
    Minterms,
    /// The don't-care list
    DontCares,
}

impl fmt::Display for TermList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermList::Minterms => write!(f, "minterm"),
            TermList::DontCares => write!(f, "don't-care"),
        }
    }
}

/// Errors raised while turning user input into terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A token is not a non-negative integer that fits in 64 bits
    InvalidToken {
        /// The list the token belongs to
        list: TermList,
        /// The offending token (trimmed)
        token: Arc<str>,
        /// Zero-based index of the token within its list
        position: usize,
    },
    /// Both lists are empty, so there is no value to derive a bit width from
    NoTerms,
    /// The derived bit width exceeds the number of available variables
    TooManyVariables {
        /// The required width
        width: usize,
        /// The configured maximum
        max: usize,
    },
    /// A textual term contains a symbol other than `0`, `1` or `-`
    InvalidSymbol {
        /// The invalid symbol
        symbol: char,
        /// Position in the term
        position: usize,
    },
    /// A textual term is empty
    EmptyTerm,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidToken {
                list,
                token,
                position,
            } => write!(
                f,
                "Invalid {} '{}' at position {}. Expected a non-negative integer.",
                list, token, position
            ),
            InputError::NoTerms => write!(
                f,
                "No minterms or don't-cares given; cannot derive the number of variables"
            ),
            InputError::TooManyVariables { width, max } => write!(
                f,
                "Input requires {} variables but at most {} are supported",
                width, max
            ),
            InputError::InvalidSymbol { symbol, position } => write!(
                f,
                "Invalid term symbol '{}' at position {}. Expected '0', '1' or '-'.",
                symbol, position
            ),
            InputError::EmptyTerm => write!(f, "Term must contain at least one symbol"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<InputError> for io::Error {
    fn from(err: InputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
