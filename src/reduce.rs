//! Prime implicant generation
//!
//! Repeatedly merges terms of adjacent population-count groups until a round
//! produces no merge. Every term left unmerged at the end of a round is a
//! prime implicant.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::input::Groups;
use crate::term::Term;

/// Outcome of a single reduction round
struct Round {
    next: Groups,
    used: BTreeSet<Term>,
    merges: usize,
}

fn reduce_round(groups: &Groups) -> Round {
    let mut next = Groups::new();
    let mut used = BTreeSet::new();
    let mut merges = 0;

    for (&ones, lower) in groups {
        let Some(upper) = groups.get(&(ones + 1)) else {
            continue;
        };

        for a in lower {
            for b in upper {
                if let Some(merged) = a.merge(b) {
                    trace!("merge {} + {} -> {}", a, b, merged);
                    merges += 1;
                    next.entry(ones).or_default().insert(merged);
                    used.insert(a.clone());
                    used.insert(b.clone());
                }
            }
        }
    }

    Round { next, used, merges }
}

/// Compute all prime implicants reachable from the initial groups
///
/// The returned set is ordered by the textual form of the terms.
pub fn prime_implicants(initial: Groups) -> BTreeSet<Term> {
    let mut primes = BTreeSet::new();
    let mut groups = initial;
    let mut round = 0usize;

    loop {
        let Round { next, used, merges } = reduce_round(&groups);

        primes.extend(
            groups
                .values()
                .flatten()
                .filter(|term| !used.contains(*term))
                .cloned(),
        );

        debug!(
            "reduction round {}: {} merges, {} prime implicants so far",
            round,
            merges,
            primes.len()
        );

        if merges == 0 {
            break;
        }
        groups = next;
        round += 1;
    }

    primes
}
