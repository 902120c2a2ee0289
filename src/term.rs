//! Binary terms with don't-care positions
//!
//! This module provides the core term types used throughout the minimizer:
//! - [`Bit`]: A single position of a term (`0`, `1` or `-`)
//! - [`Term`]: A fixed-width sequence of bits, used both for minterms and implicants
//!
//! Position 0 is the most significant bit and corresponds to variable `A`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::input::InputError;

/// Maximum number of variables a term can carry (`A`..`Z` followed by `a`..`z`)
pub const MAX_VARIABLES: usize = 52;

/// One position of a term
///
/// The variant order matches the ordering of the textual symbols
/// (`'-' < '0' < '1'`), so sorting terms sorts them by their string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    /// Position eliminated by a merge (`-`)
    DontCare,
    /// Variable appears complemented (`0`)
    Zero,
    /// Variable appears uncomplemented (`1`)
    One,
}

impl Bit {
    /// Textual symbol of this bit
    pub fn symbol(self) -> char {
        match self {
            Bit::DontCare => '-',
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Bit::DontCare),
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }
}

/// A minterm or implicant over a fixed number of variables
///
/// Terms compare, hash and order by their bits, which makes them usable as
/// keys of ordinary sets and maps.
///
/// # Examples
///
/// ```
/// use qmc_logic::Term;
///
/// let a = Term::from_value(0b0100, 4);
/// let b = Term::from_value(0b1100, 4);
/// let merged = a.merge(&b).unwrap();
///
/// assert_eq!(merged.to_string(), "-100");
/// assert_eq!(merged.minterms().collect::<Vec<_>>(), vec![4, 12]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    bits: Arc<[Bit]>,
}

impl Term {
    /// Build the fully specified term for `value` over `width` variables
    ///
    /// Bits of `value` above `width` are ignored. `width` must not exceed
    /// [`MAX_VARIABLES`].
    pub fn from_value(value: u64, width: usize) -> Self {
        debug_assert!(width <= MAX_VARIABLES);
        let bits = (0..width)
            .map(|i| {
                let shift = width - 1 - i;
                if (value >> shift) & 1 == 1 {
                    Bit::One
                } else {
                    Bit::Zero
                }
            })
            .collect();
        Term { bits }
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// The bits of this term, most significant first
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Population count: the number of `1` symbols (dashes are not counted)
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit == Bit::One).count()
    }

    /// Number of `-` symbols
    pub fn dashes(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit == Bit::DontCare).count()
    }

    /// Number of literals this term renders to
    pub fn literal_count(&self) -> usize {
        self.width() - self.dashes()
    }

    /// Merge two terms that differ in exactly one specified position
    ///
    /// Both terms must share their dash positions. The differing position is
    /// replaced by a dash in the result.
    pub fn merge(&self, other: &Term) -> Option<Term> {
        if self.width() != other.width() {
            return None;
        }

        let mut difference = None;
        for (i, (a, b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            if a == b {
                continue;
            }
            if *a == Bit::DontCare || *b == Bit::DontCare || difference.is_some() {
                return None;
            }
            difference = Some(i);
        }

        let index = difference?;
        let mut bits = self.bits.to_vec();
        bits[index] = Bit::DontCare;
        Some(Term { bits: bits.into() })
    }

    /// Check whether the concrete `value` lies inside this term
    pub fn covers(&self, value: u64) -> bool {
        let width = self.width();
        if width < u64::BITS as usize && value >> width != 0 {
            return false;
        }
        self.bits.iter().enumerate().all(|(i, bit)| {
            let set = (value >> (width - 1 - i)) & 1 == 1;
            match bit {
                Bit::DontCare => true,
                Bit::Zero => !set,
                Bit::One => set,
            }
        })
    }

    /// Enumerate every concrete value represented by this term
    ///
    /// Produces `2^dashes()` values by substituting all combinations over the
    /// dash positions.
    pub fn minterms(&self) -> impl Iterator<Item = u64> + '_ {
        let width = self.width();
        let mut base = 0u64;
        let mut free = Vec::new();
        for (i, bit) in self.bits.iter().enumerate() {
            let weight = 1u64 << (width - 1 - i);
            match bit {
                Bit::One => base |= weight,
                Bit::DontCare => free.push(weight),
                Bit::Zero => {}
            }
        }

        (0..1u64 << free.len()).map(move |combination| {
            free.iter()
                .rev()
                .enumerate()
                .filter(|(j, _)| (combination >> j) & 1 == 1)
                .fold(base, |value, (_, weight)| value | weight)
        })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            write!(f, "{}", bit.symbol())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({})", self)
    }
}

impl FromStr for Term {
    type Err = InputError;

    /// Parse the textual form, e.g. `"01-1"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InputError::EmptyTerm);
        }

        let bits = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Bit::from_symbol(symbol).ok_or(InputError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if bits.len() > MAX_VARIABLES {
            return Err(InputError::TooManyVariables {
                width: bits.len(),
                max: MAX_VARIABLES,
            });
        }

        Ok(Term { bits: bits.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(s: &str) -> Term {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_value_is_msb_first() {
        assert_eq!(Term::from_value(0b0110, 4).to_string(), "0110");
        assert_eq!(Term::from_value(1, 3).to_string(), "001");
        assert_eq!(Term::from_value(0, 1).to_string(), "0");
    }

    #[test]
    fn test_ones_ignores_dashes() {
        assert_eq!(term("1-01").ones(), 2);
        assert_eq!(term("----").ones(), 0);
        assert_eq!(term("1-01").dashes(), 1);
        assert_eq!(term("1-01").literal_count(), 3);
    }

    #[test]
    fn test_merge_single_difference() {
        assert_eq!(term("0100").merge(&term("1100")), Some(term("-100")));
        assert_eq!(term("-100").merge(&term("-110")), Some(term("-1-0")));
    }

    #[test]
    fn test_merge_rejects() {
        // Two differences
        assert_eq!(term("0000").merge(&term("0011")), None);
        // Identical
        assert_eq!(term("0101").merge(&term("0101")), None);
        // Different dash positions
        assert_eq!(term("0-0").merge(&term("00-")), None);
        assert_eq!(term("0-").merge(&term("00")), None);
        // Different widths
        assert_eq!(term("01").merge(&term("011")), None);
    }

    #[test]
    fn test_minterms_expansion() {
        let mut values: Vec<u64> = term("1-0-").minterms().collect();
        values.sort_unstable();
        assert_eq!(values, vec![8, 9, 12, 13]);

        assert_eq!(term("101").minterms().collect::<Vec<_>>(), vec![5]);
        assert_eq!(term("--").minterms().count(), 4);
    }

    #[test]
    fn test_covers() {
        let t = term("1-0-");
        for value in 0..16 {
            assert_eq!(t.covers(value), [8, 9, 12, 13].contains(&value));
        }
        assert!(!t.covers(24));
    }

    #[test]
    fn test_ordering_matches_text() {
        let mut terms = vec![term("10"), term("-1"), term("01"), term("1-")];
        terms.sort();
        let text: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        let mut expected = text.clone();
        expected.sort();
        assert_eq!(text, expected);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Term>(), Err(InputError::EmptyTerm));
        assert_eq!(
            "01x".parse::<Term>(),
            Err(InputError::InvalidSymbol {
                symbol: 'x',
                position: 2
            })
        );
        assert!(matches!(
            "0".repeat(53).parse::<Term>(),
            Err(InputError::TooManyVariables { width: 53, .. })
        ));
    }
}
