//! Input normalization
//!
//! Turns the minterm and don't-care lists into the starting point of the
//! reduction: sorted value lists, the bit width and the initial groups of
//! terms keyed by population count.

mod error;

pub use error::{InputError, TermList};

use std::collections::{BTreeMap, BTreeSet};

use crate::term::{Term, MAX_VARIABLES};

/// Terms of one reduction level, keyed by their number of `1` bits
pub type Groups = BTreeMap<usize, BTreeSet<Term>>;

/// Parse a comma-separated list of non-negative integers
///
/// Tokens are trimmed and empty tokens are skipped, so `"1, 2,,3,"` yields
/// `[1, 2, 3]`.
///
/// # Examples
///
/// ```
/// use qmc_logic::input::{parse_list, TermList};
///
/// assert_eq!(parse_list(" 4, 0,8 ,", TermList::Minterms).unwrap(), vec![4, 0, 8]);
/// assert!(parse_list("1,-2", TermList::Minterms).is_err());
/// ```
pub fn parse_list(text: &str, list: TermList) -> Result<Vec<u64>, InputError> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<u64>().map_err(|_| InputError::InvalidToken {
                list,
                token: token.into(),
                position,
            })
        })
        .collect()
}

/// Number of bits needed to represent `value` (at least 1)
pub fn bit_width(value: u64) -> usize {
    ((u64::BITS - value.leading_zeros()) as usize).max(1)
}

/// Normalized minimization input
#[derive(Debug, Clone)]
pub struct NormalizedInput {
    minterms: Vec<u64>,
    dont_cares: Vec<u64>,
    width: usize,
    groups: Groups,
}

impl NormalizedInput {
    /// Normalize the two value lists
    ///
    /// Both lists are sorted and deduplicated. The bit width is derived from the
    /// largest value over both lists and must not exceed `max_variables`
    /// (itself capped at [`MAX_VARIABLES`]).
    pub fn new(
        minterms: &[u64],
        dont_cares: &[u64],
        max_variables: usize,
    ) -> Result<Self, InputError> {
        let mut minterms = minterms.to_vec();
        minterms.sort_unstable();
        minterms.dedup();

        let mut dont_cares = dont_cares.to_vec();
        dont_cares.sort_unstable();
        dont_cares.dedup();

        let largest = minterms
            .last()
            .into_iter()
            .chain(dont_cares.last())
            .copied()
            .max()
            .ok_or(InputError::NoTerms)?;

        let width = bit_width(largest);
        let max = max_variables.min(MAX_VARIABLES);
        if width > max {
            return Err(InputError::TooManyVariables { width, max });
        }

        let mut groups = Groups::new();
        for &value in minterms.iter().chain(dont_cares.iter()) {
            let term = Term::from_value(value, width);
            groups.entry(term.ones()).or_default().insert(term);
        }

        Ok(NormalizedInput {
            minterms,
            dont_cares,
            width,
            groups,
        })
    }

    /// Parse and normalize the textual lists
    pub fn from_text(
        minterms: &str,
        dont_cares: &str,
        max_variables: usize,
    ) -> Result<Self, InputError> {
        let minterms = parse_list(minterms, TermList::Minterms)?;
        let dont_cares = parse_list(dont_cares, TermList::DontCares)?;
        Self::new(&minterms, &dont_cares, max_variables)
    }

    /// Sorted, deduplicated minterms
    pub fn minterms(&self) -> &[u64] {
        &self.minterms
    }

    /// Sorted, deduplicated don't-cares
    pub fn dont_cares(&self) -> &[u64] {
        &self.dont_cares
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// Initial groups over the union of both lists
    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    /// Consume the input, keeping the value lists and handing out the groups
    pub(crate) fn into_parts(self) -> (Vec<u64>, Vec<u64>, usize, Groups) {
        (self.minterms, self.dont_cares, self.width, self.groups)
    }
}
