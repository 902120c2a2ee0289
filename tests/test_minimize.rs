//! Integration tests for the minimization pipeline
//!
//! These tests expand the rendered expressions back into concrete minterms
//! and compare them with the input.

use qmc_logic::expression::variable_position;
use qmc_logic::*;
use std::collections::BTreeSet;

/// Every value in `0..2^width` that some product of `sop` evaluates to 1 on
fn expand_sop(sop: &str, width: usize) -> BTreeSet<u64> {
    let expression = SopExpression::parse(sop).expect("rendered SOP should parse");
    let mut values = BTreeSet::new();
    for product in expression.products() {
        for value in 0..1u64 << width {
            let matches = product.literals().iter().all(|literal| {
                let position = variable_position(literal.variable()).unwrap();
                let set = (value >> (width - 1 - position)) & 1 == 1;
                set != literal.is_complemented()
            });
            if matches {
                values.insert(value);
            }
        }
    }
    values
}

/// Same as `expand_sop`, but also handles the constant renderings
fn expand_result(result: &Minimization) -> BTreeSet<u64> {
    let width = result.width();
    match result.sop().as_str() {
        "0" => BTreeSet::new(),
        "1" => (0..1u64 << width).collect(),
        sop => expand_sop(sop, width),
    }
}

#[test]
fn test_full_square_collapses_to_one_term() {
    let result = minimize(&[0, 1, 2, 3], &[]).unwrap();
    assert_eq!(result.term_count(), 1);
    assert_eq!(result.width(), 2);
    assert_eq!(expand_result(&result), (0..4).collect());
}

#[test]
fn test_textbook_example_with_dont_cares() {
    let result = minimize(&[0, 4, 8, 10], &[11, 15]).unwrap();
    let covered = expand_result(&result);

    for minterm in [0, 4, 8, 10] {
        assert!(covered.contains(&minterm), "minterm {} not covered", minterm);
    }
    // Only required minterms and don't-cares may be covered
    let allowed: BTreeSet<u64> = [0, 4, 8, 10, 11, 15].into_iter().collect();
    assert!(covered.is_subset(&allowed));
    assert_eq!(result.essential_prime_implicants().len(), 1);
}

#[test]
fn test_single_minterm_has_every_literal() {
    let result = minimize(&[6], &[]).unwrap();
    assert_eq!(result.term_count(), 1);
    assert_eq!(result.sop(), "ABC'");

    let product = &result.expression().products()[0];
    assert_eq!(product.len(), result.width());
}

#[test]
fn test_zero_minterm() {
    let result = minimize(&[0], &[]).unwrap();
    assert_eq!(result.width(), 1);
    assert_eq!(result.sop(), "A'");
}

#[test]
fn test_deterministic_output() {
    let minterms = [1, 3, 7, 11, 15, 20, 22, 28, 30];
    let dont_cares = [0, 2, 5, 23, 31];
    let first = minimize(&minterms, &dont_cares).unwrap().sop();
    for _ in 0..20 {
        assert_eq!(minimize(&minterms, &dont_cares).unwrap().sop(), first);
    }

    // Input order and duplicates do not matter
    let shuffled = [30, 28, 1, 22, 20, 15, 11, 7, 3, 3, 30];
    assert_eq!(minimize(&shuffled, &[31, 23, 5, 2, 0]).unwrap().sop(), first);
}

#[test]
fn test_every_three_and_four_variable_function() {
    for width in [3usize, 4] {
        let points = 1u64 << width;
        for mask in 1u64..(1 << points) {
            let minterms: Vec<u64> = (0..points).filter(|v| (mask >> v) & 1 == 1).collect();
            let result = minimize(&minterms, &[]).unwrap();
            let expected: BTreeSet<u64> = minterms.iter().copied().collect();

            // The width follows the largest minterm, not the loop variable
            let covered = expand_result(&result);
            assert!(
                covered.is_subset(&expected),
                "{:?} covers values outside {:?}",
                result.sop(),
                minterms
            );

            let uncovered: BTreeSet<u64> = result.uncovered_minterms().into_iter().collect();
            let union: BTreeSet<u64> = covered.union(&uncovered).copied().collect();
            assert_eq!(union, expected, "minterms {:?}", minterms);

            if uncovered.is_empty() {
                assert_eq!(covered, expected);
            } else {
                // Only happens when the essentials leave a chart needing more
                // than one extra implicant
                assert!(result.cover().patch().is_some());
            }
        }
    }
}

#[test]
fn test_dont_cares_are_never_required() {
    let result = minimize(&[1], &[0, 2, 3]).unwrap();
    assert_eq!(result.sop(), "1");
    assert_eq!(result.term_count(), 1);
}

#[test]
fn test_invalid_input() {
    assert!(matches!(
        minimize(&[], &[]),
        Err(QmError::InvalidInput(InputError::NoTerms))
    ));
    assert!(matches!(
        minimize_text("1,2,three", ""),
        Err(QmError::InvalidInput(InputError::InvalidToken { position: 2, .. }))
    ));
    assert!(matches!(
        minimize_text("1", "-4"),
        Err(QmError::InvalidInput(InputError::InvalidToken {
            list: TermList::DontCares,
            ..
        }))
    ));
}

#[test]
fn test_wide_single_minterm() {
    // 40 variables: only one term, so no exponential blow-up
    let value = 1u64 << 39 | 5;
    let result = minimize(&[value], &[]).unwrap();
    assert_eq!(result.width(), 40);
    assert_eq!(result.term_count(), 1);
    assert_eq!(result.expression().products()[0].len(), 40);
    assert!(result.sop().starts_with("AB'"));
}

#[test]
fn test_concurrent_minimizers() {
    let minimizer = Minimizer::default();
    let expected = minimizer.minimize(&[0, 4, 8, 10], &[11, 15]).unwrap().sop();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| minimizer.minimize(&[0, 4, 8, 10], &[11, 15])))
            .collect();
        for handle in handles {
            let result = handle.join().expect("Thread panicked").unwrap();
            assert_eq!(result.sop(), expected);
        }
    });
}
