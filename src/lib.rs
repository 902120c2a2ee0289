//! # Quine-McCluskey Logic Minimizer
//!
//! This crate minimizes single-output Boolean functions given as a list of
//! minterms (the input combinations where the function is 1) and an optional
//! list of don't-cares, using the Quine-McCluskey tabular method.
//!
//! ## Overview
//!
//! A run goes through five stages:
//!
//! 1. **Normalization** - the value lists are sorted, the number of variables is
//!    derived from the largest value and the terms are grouped by their number
//!    of `1` bits ([`input`])
//! 2. **Prime implicants** - adjacent groups are merged round after round until
//!    nothing merges any more ([`reduce`])
//! 3. **Chart** - every prime implicant is expanded back to the minterms it
//!    covers ([`CoverageChart`])
//! 4. **Cover** - essential prime implicants are selected, plus one extra
//!    implicant for whatever they leave uncovered ([`Cover`])
//! 5. **Rendering** - the chosen implicants are written as a sum of products
//!    ([`SopExpression`]) and optionally rewritten into product-of-sums text
//!    ([`to_pos`])
//!
//! ## Minimizing
//!
//! ```
//! use qmc_logic::minimize;
//!
//! # fn main() -> Result<(), qmc_logic::QmError> {
//! // f = m(0, 4, 8, 10) + d(11, 15)
//! let result = minimize(&[0, 4, 8, 10], &[11, 15])?;
//!
//! assert_eq!(result.sop(), "AB'D' + A'C'D'");
//! assert_eq!(result.term_count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Comma-separated text is accepted directly:
//!
//! ```
//! use qmc_logic::minimize_text;
//!
//! # fn main() -> Result<(), qmc_logic::QmError> {
//! let result = minimize_text("1, 3, 5, 7", "")?;
//! assert_eq!(result.sop(), "C");
//! # Ok(())
//! # }
//! ```
//!
//! ## Product-of-sums text
//!
//! ```
//! use qmc_logic::to_pos;
//!
//! assert_eq!(to_pos("AB'D' + A'C'D'").unwrap(), "(A' + B + D) . (A + C + D)");
//! ```
//!
//! ## Limitations
//!
//! - The cover step is greedy. When the minterms left after the essential prime
//!   implicants need more than one further implicant, the result does not cover
//!   all of them. [`Minimization::uncovered_minterms`] lists what is missing.
//! - [`to_pos`] complements each literal of each product term in the text. It
//!   does not compute the Boolean dual, so the result generally describes a
//!   different function.
//! - At most [`MAX_VARIABLES`] variables (`A`..`Z`, `a`..`z`) are supported.
//!   Run time is exponential in the number of variables in the worst case.
//!
//! ## Thread Safety
//!
//! All state lives inside a single call. A [`Minimizer`] can be shared between
//! threads and used concurrently without synchronization.

// Public modules
pub mod chart;
pub mod cover;
pub mod error;
pub mod expression;
pub mod input;
pub mod minimizer;
pub mod problem;
pub mod reduce;
pub mod term;

// Re-export high-level public API
pub use chart::CoverageChart;
pub use cover::Cover;
pub use error::{FormatError, InputError, ProblemError, QmError, TermList};
pub use expression::{Literal, Product, SopExpression};
pub use minimizer::{Minimization, Minimizer, QmConfig};
pub use problem::Problem;
pub use term::{Bit, Term, MAX_VARIABLES};

/// Minimize with the default configuration
///
/// See [`Minimizer::minimize`].
pub fn minimize(minterms: &[u64], dont_cares: &[u64]) -> Result<Minimization, QmError> {
    Minimizer::default().minimize(minterms, dont_cares)
}

/// Parse comma-separated lists and minimize with the default configuration
///
/// See [`Minimizer::minimize_text`].
pub fn minimize_text(minterms: &str, dont_cares: &str) -> Result<Minimization, QmError> {
    Minimizer::default().minimize_text(minterms, dont_cares)
}

/// Convert a rendered sum-of-products string into product-of-sums text
///
/// See [`expression::sop_to_pos`].
pub fn to_pos(sop: &str) -> Result<String, FormatError> {
    expression::sop_to_pos(sop)
}
