//! Cover selection
//!
//! Picks the implicants that make up the final expression from a coverage
//! chart: every essential prime implicant, plus at most one additional
//! implicant for the minterms the essentials leave uncovered.
//!
//! The additional implicant is chosen greedily (fewest literals among all
//! implicants still in the chart, ties going to the one reaching the most
//! leftover minterms). This is not a full set-covering solver.
//! When the leftover minterms need two or more implicants, some of them stay
//! uncovered; [`Cover::uncovered`] reports them.

use std::cmp::Reverse;

use log::debug;

use crate::chart::CoverageChart;
use crate::term::Term;

/// The implicants chosen for the final expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cover {
    essentials: Vec<Term>,
    patch: Option<Term>,
}

impl Cover {
    /// Select a cover from `chart`
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::{CoverageChart, Cover, Term};
    ///
    /// let primes: Vec<Term> = ["0-", "-1"].iter().map(|t| t.parse().unwrap()).collect();
    /// let cover = Cover::solve(CoverageChart::build(&primes, &[]));
    ///
    /// assert_eq!(cover.len(), 2);
    /// assert!(cover.patch().is_none());
    /// ```
    pub fn solve(mut chart: CoverageChart) -> Self {
        let essentials = chart.essentials();
        debug!(
            "{} essential prime implicants for {} minterms",
            essentials.len(),
            chart.len()
        );

        for term in &essentials {
            chart.remove_covered(term);
        }

        // Fewest literals first; among equals the one covering more of what is
        // left, then chart order (min_by_key keeps the first minimum)
        let patch = chart
            .remaining()
            .min_by_key(|term| {
                let reach = term
                    .minterms()
                    .filter(|&value| chart.coverers(value).is_some())
                    .count();
                (term.literal_count(), Reverse(reach))
            })
            .cloned();
        if let Some(term) = &patch {
            debug!(
                "{} minterms left after essentials, adding {}",
                chart.len(),
                term
            );
        }

        Cover { essentials, patch }
    }

    /// Essential prime implicants, in order of discovery
    pub fn essentials(&self) -> &[Term] {
        &self.essentials
    }

    /// The implicant added for minterms not covered by essentials
    pub fn patch(&self) -> Option<&Term> {
        self.patch.as_ref()
    }

    /// All chosen implicants: the patch term (if any) first, then the essentials
    pub fn terms(&self) -> impl Iterator<Item = &Term> + '_ {
        self.patch.iter().chain(self.essentials.iter())
    }

    /// Number of product terms
    pub fn len(&self) -> usize {
        self.essentials.len() + usize::from(self.patch.is_some())
    }

    /// Whether the cover selects no implicant at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether some chosen implicant contains `value`
    pub fn covers(&self, value: u64) -> bool {
        self.terms().any(|term| term.covers(value))
    }

    /// The values of `minterms` no chosen implicant contains
    pub fn uncovered(&self, minterms: &[u64]) -> Vec<u64> {
        minterms
            .iter()
            .copied()
            .filter(|&value| !self.covers(value))
            .collect()
    }
}
