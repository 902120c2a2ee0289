//! The minimization pipeline
//!
//! [`Minimizer`] runs the stages in order: input normalization, prime
//! implicant generation, chart construction, cover selection and rendering.
//! Every call builds its own state, so a single minimizer can be shared
//! freely between threads.

use log::{debug, warn};

use crate::chart::CoverageChart;
use crate::cover::Cover;
use crate::error::QmError;
use crate::expression::{sop_to_pos, FormatError, SopExpression};
use crate::input::NormalizedInput;
use crate::reduce::prime_implicants;
use crate::term::{Term, MAX_VARIABLES};

/// Configuration for the minimizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QmConfig {
    /// Largest accepted number of variables (capped at [`MAX_VARIABLES`])
    pub max_variables: usize,
    /// Log a warning when the chosen cover misses required minterms
    pub check_coverage: bool,
}

impl Default for QmConfig {
    fn default() -> Self {
        QmConfig {
            max_variables: MAX_VARIABLES,
            check_coverage: true,
        }
    }
}

impl QmConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of one minimization run
#[derive(Debug, Clone)]
pub struct Minimization {
    width: usize,
    /// Minterms that are not also don't-cares
    minterms: Vec<u64>,
    prime_implicants: Vec<Term>,
    cover: Cover,
    expression: SopExpression,
}

impl Minimization {
    /// The rendered sum-of-products expression
    pub fn sop(&self) -> String {
        self.expression.to_string()
    }

    /// Number of product terms in the expression
    pub fn term_count(&self) -> usize {
        self.cover.len()
    }

    /// The expression as products of literals
    pub fn expression(&self) -> &SopExpression {
        &self.expression
    }

    /// The chosen implicants
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// All prime implicants, in textual order
    pub fn prime_implicants(&self) -> &[Term] {
        &self.prime_implicants
    }

    /// The essential prime implicants
    pub fn essential_prime_implicants(&self) -> &[Term] {
        self.cover.essentials()
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// Required minterms the cover does not contain
    ///
    /// Empty unless the leftover chart after the essentials needed more than
    /// one additional implicant.
    pub fn uncovered_minterms(&self) -> Vec<u64> {
        self.cover.uncovered(&self.minterms)
    }

    /// The product-of-sums rendering of [`sop`](Self::sop)
    pub fn to_pos(&self) -> Result<String, FormatError> {
        sop_to_pos(&self.sop())
    }
}

/// Quine-McCluskey minimizer
///
/// # Examples
///
/// ```
/// use qmc_logic::Minimizer;
///
/// # fn main() -> Result<(), qmc_logic::QmError> {
/// let minimizer = Minimizer::default();
/// let result = minimizer.minimize(&[0, 1, 2, 3], &[])?;
///
/// assert_eq!(result.term_count(), 1);
/// assert_eq!(result.sop(), "1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Minimizer {
    config: QmConfig,
}

impl Minimizer {
    /// Create a minimizer with the given configuration
    pub fn new(config: QmConfig) -> Self {
        Minimizer { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &QmConfig {
        &self.config
    }

    /// Minimize the function with the given minterms and don't-cares
    ///
    /// Values listed as both minterm and don't-care are treated as
    /// don't-cares.
    pub fn minimize(&self, minterms: &[u64], dont_cares: &[u64]) -> Result<Minimization, QmError> {
        let input = NormalizedInput::new(minterms, dont_cares, self.config.max_variables)?;
        Ok(self.run(input))
    }

    /// Parse comma-separated lists and minimize
    pub fn minimize_text(&self, minterms: &str, dont_cares: &str) -> Result<Minimization, QmError> {
        let input = NormalizedInput::from_text(minterms, dont_cares, self.config.max_variables)?;
        Ok(self.run(input))
    }

    fn run(&self, input: NormalizedInput) -> Minimization {
        let (minterms, dont_cares, width, groups) = input.into_parts();
        debug!(
            "minimizing {} minterms and {} don't-cares over {} variables",
            minterms.len(),
            dont_cares.len(),
            width
        );

        let primes = prime_implicants(groups);
        let chart = CoverageChart::build(&primes, &dont_cares);
        debug!(
            "{} prime implicants, chart covers {} minterms",
            primes.len(),
            chart.len()
        );

        let cover = Cover::solve(chart);
        let expression = SopExpression::from_terms(cover.terms());

        let required = minterms
            .into_iter()
            .filter(|value| dont_cares.binary_search(value).is_err())
            .collect();

        let result = Minimization {
            width,
            minterms: required,
            prime_implicants: primes.into_iter().collect(),
            cover,
            expression,
        };

        if self.config.check_coverage {
            let uncovered = result.uncovered_minterms();
            if !uncovered.is_empty() {
                warn!(
                    "cover {} leaves minterms {:?} uncovered",
                    result.expression, uncovered
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputError;
    use test_log::test;

    #[test]
    fn test_textbook_example() {
        let result = Minimizer::default()
            .minimize(&[0, 4, 8, 10], &[11, 15])
            .unwrap();
        assert_eq!(result.width(), 4);
        assert_eq!(result.sop(), "AB'D' + A'C'D'");
        assert_eq!(result.term_count(), 2);
        assert!(result.uncovered_minterms().is_empty());
    }

    #[test]
    fn test_minimize_text_matches_values() {
        let minimizer = Minimizer::default();
        let from_text = minimizer.minimize_text("10, 0,4,8", "15,11").unwrap();
        let from_values = minimizer.minimize(&[0, 4, 8, 10], &[11, 15]).unwrap();
        assert_eq!(from_text.sop(), from_values.sop());
    }

    #[test]
    fn test_only_dont_cares() {
        let result = Minimizer::default().minimize(&[], &[1, 2]).unwrap();
        assert_eq!(result.sop(), "0");
        assert_eq!(result.term_count(), 0);
    }

    #[test]
    fn test_overlap_is_dont_care() {
        // 3 is both; it may be used but need not be covered
        let result = Minimizer::default().minimize(&[1, 3], &[3]).unwrap();
        assert_eq!(result.sop(), "B");
        assert!(result.uncovered_minterms().is_empty());
    }

    #[test]
    fn test_config_limits_width() {
        let minimizer = Minimizer::new(QmConfig {
            max_variables: 3,
            ..QmConfig::default()
        });
        assert!(minimizer.minimize(&[7], &[]).is_ok());
        let err = minimizer.minimize(&[8], &[]).unwrap_err();
        assert!(matches!(
            err,
            QmError::InvalidInput(InputError::TooManyVariables { width: 4, max: 3 })
        ));
    }

    #[test]
    fn test_invalid_text() {
        let err = Minimizer::default().minimize_text("1,b", "").unwrap_err();
        assert!(matches!(
            err,
            QmError::InvalidInput(InputError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_cyclic_function_reports_uncovered() {
        let result = Minimizer::default()
            .minimize(&[0, 1, 2, 5, 6, 7], &[])
            .unwrap();
        assert_eq!(result.term_count(), 1);
        assert_eq!(result.uncovered_minterms(), vec![1, 5, 6, 7]);
    }
}
