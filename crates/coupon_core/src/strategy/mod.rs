//! Combining strategies and the `combine` entry point.

mod only_max;
mod simple;
mod simple_max;

pub use only_max::combine_only_max;
pub use simple::{combine_simple, combine_simple_random};
pub use simple_max::combine_simple_max;

use crate::coupon::{Coupon, Outcome};
use crate::error::{CombineError, Result};
use crate::method::Method;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Combine outcomes into coupons with `method`.
///
/// `seed` only affects [`Method::SimpleRandom`]; the other strategies are
/// deterministic. An empty input gives an empty result without running any
/// strategy.
///
/// # Errors
///
/// [`CombineError::MalformedInput`] if the outcomes do not all have the same
/// length. No partial result is produced.
pub fn combine(outcomes: &[Outcome], method: Method, seed: u64) -> Result<Vec<Coupon>> {
    let Some(first) = outcomes.first() else {
        return Ok(Vec::new());
    };

    let n = first.len();
    if let Some((row, outcome)) = outcomes
        .iter()
        .enumerate()
        .find(|(_, outcome)| outcome.len() != n)
    {
        return Err(CombineError::MalformedInput {
            row,
            expected: n,
            found: outcome.len(),
        });
    }

    info!(
        outcomes = outcomes.len(),
        games = n / 2,
        %method,
        "Found {} results for {} games",
        outcomes.len(),
        n / 2
    );

    let rows: Vec<Coupon> = outcomes.iter().map(|o| Coupon::from_outcome(o)).collect();
    let coupons = match method {
        Method::Simple => combine_simple(&rows),
        Method::SimpleRandom => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            combine_simple_random(&rows, &mut rng)
        }
        Method::SimpleMax => combine_simple_max(&rows),
        Method::OnlyMax => combine_only_max(&rows),
    };

    info!(coupons = coupons.len(), %method, "combine finished");
    Ok(coupons)
}

/// [`combine`] with the method given by name.
///
/// # Errors
///
/// [`CombineError::InvalidMethod`] for an unknown name, before any work is
/// done.
pub fn combine_named(outcomes: &[Outcome], method: &str, seed: u64) -> Result<Vec<Coupon>> {
    let method: Method = method.parse()?;
    combine(outcomes, method, seed)
}

/// Row length shared by all rows (0 for no rows).
fn width(rows: &[Coupon]) -> usize {
    rows.first().map_or(0, Coupon::len)
}

fn log_collapse(position: usize, rows: &[Coupon]) {
    debug!(
        position,
        rows = rows.len(),
        first_size = rows.first().map_or(0, |row| row.slots()[position].len()),
        "collapsed"
    );
}



#[cfg(test)]
mod proptests {
    use super::test_support::assert_covers;
    use super::*;
    use proptest::prelude::*;

    fn outcomes_strategy() -> impl Strategy<Value = Vec<Vec<u32>>> {
        (1usize..=4).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(0u32..4, n), 0..40))
    }

    proptest! {
        /// Property: every strategy reproduces the input set exactly
        #[test]
        fn prop_every_method_covers_input(outcomes in outcomes_strategy(), seed in any::<u64>()) {
            for method in Method::ALL {
                let coupons = combine(&outcomes, method, seed).unwrap();
                assert_covers(&outcomes, &coupons);
            }
        }

        /// Property: never more coupons than distinct outcomes
        #[test]
        fn prop_never_grows(outcomes in outcomes_strategy(), seed in any::<u64>()) {
            let distinct: std::collections::BTreeSet<_> = outcomes.iter().collect();
            for method in Method::ALL {
                let coupons = combine(&outcomes, method, seed).unwrap();
                prop_assert!(coupons.len() <= distinct.len());
            }
        }

        /// Property: each collapse step keeps or lowers the row count
        #[test]
        fn prop_collapse_monotonic(outcomes in outcomes_strategy()) {
            let mut rows = super::test_support::rows(&outcomes);
            let n = width(&rows);
            for i in 0..n {
                let next = crate::grouping::find_combinations(&rows, i);
                prop_assert!(next.len() <= rows.len());
                rows = next;
            }
        }
    }
}
