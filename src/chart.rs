//! Prime implicant coverage chart
//!
//! Maps every required minterm to the prime implicants covering it.
//! Don't-cares never appear as chart keys.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use crate::term::Term;

/// Mapping from required minterm to the prime implicants that cover it
///
/// Keys iterate in ascending order and each entry lists its implicants in the
/// order they were inserted, which follows the textual order of the prime
/// implicant set. This keeps everything derived from the chart reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageChart {
    entries: BTreeMap<u64, Vec<Term>>,
}

impl CoverageChart {
    /// Build the chart by expanding every prime implicant
    ///
    /// `dont_cares` must be sorted.
    pub fn build<'a, I>(primes: I, dont_cares: &[u64]) -> Self
    where
        I: IntoIterator<Item = &'a Term>,
    {
        let mut entries: BTreeMap<u64, Vec<Term>> = BTreeMap::new();
        for prime in primes {
            for value in prime.minterms() {
                if dont_cares.binary_search(&value).is_err() {
                    entries.entry(value).or_default().push(prime.clone());
                }
            }
        }
        CoverageChart { entries }
    }

    /// Number of minterms still in the chart
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether every minterm has been removed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Implicants covering `minterm`, if it is still in the chart
    pub fn coverers(&self, minterm: u64) -> Option<&[Term]> {
        self.entries.get(&minterm).map(Vec::as_slice)
    }

    /// Minterms still in the chart, ascending
    pub fn minterms(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over `(minterm, implicants)` entries
    pub fn iter(&self) -> btree_map::Iter<'_, u64, Vec<Term>> {
        self.entries.iter()
    }

    /// Implicants that are the sole coverer of at least one minterm
    ///
    /// Deduplicated, in order of first discovery.
    pub fn essentials(&self) -> Vec<Term> {
        let mut seen = BTreeSet::new();
        self.entries
            .values()
            .filter(|coverers| coverers.len() == 1)
            .map(|coverers| &coverers[0])
            .filter(|term| seen.insert(*term))
            .cloned()
            .collect()
    }

    /// Remove every minterm `term` covers
    pub fn remove_covered(&mut self, term: &Term) {
        for value in term.minterms() {
            self.entries.remove(&value);
        }
    }

    /// Every implicant still referenced by some entry, with repetitions, in
    /// chart order
    pub fn remaining(&self) -> impl Iterator<Item = &Term> + '_ {
        self.entries.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<Term> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_build_excludes_dont_cares() {
        let primes = terms(&["-000", "0-00", "1-11", "10-0", "101-"]);
        let chart = CoverageChart::build(&primes, &[11, 15]);

        assert_eq!(chart.minterms().collect::<Vec<_>>(), vec![0, 4, 8, 10]);
        assert_eq!(chart.coverers(0).unwrap(), &terms(&["-000", "0-00"])[..]);
        assert_eq!(chart.coverers(4).unwrap(), &terms(&["0-00"])[..]);
        assert_eq!(chart.coverers(8).unwrap(), &terms(&["-000", "10-0"])[..]);
        assert_eq!(chart.coverers(10).unwrap(), &terms(&["10-0", "101-"])[..]);
        assert!(chart.coverers(11).is_none());
    }

    #[test]
    fn test_essentials_deduplicated() {
        // 0-- is the only coverer of 0, 1, 2 and 3
        let primes = terms(&["0--", "1-1"]);
        let chart = CoverageChart::build(&primes, &[]);
        assert_eq!(chart.essentials(), terms(&["0--", "1-1"]));
    }

    #[test]
    fn test_remove_covered() {
        let primes = terms(&["-000", "0-00", "1-11", "10-0", "101-"]);
        let mut chart = CoverageChart::build(&primes, &[11, 15]);

        chart.remove_covered(&"0-00".parse().unwrap());
        assert_eq!(chart.minterms().collect::<Vec<_>>(), vec![8, 10]);

        // Values that were never keys are ignored
        chart.remove_covered(&"1-11".parse().unwrap());
        assert_eq!(chart.len(), 2);

        chart.remove_covered(&"10-0".parse().unwrap());
        assert!(chart.is_empty());
    }

    #[test]
    fn test_iter_entries() {
        let primes = terms(&["0-", "-1"]);
        let chart = CoverageChart::build(&primes, &[3]);
        let entries: Vec<(u64, usize)> = chart
            .iter()
            .map(|(minterm, coverers)| (*minterm, coverers.len()))
            .collect();
        assert_eq!(entries, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_remaining_in_chart_order() {
        let primes = terms(&["0-", "-1"]);
        let chart = CoverageChart::build(&primes, &[]);
        let remaining: Vec<String> = chart.remaining().map(|t| t.to_string()).collect();
        assert_eq!(remaining, vec!["0-", "0-", "-1", "-1"]);
    }
}
