//! Expansion checks for combine results.

use crate::coupon::{Coupon, Outcome};
use crate::error::{CombineError, Result};
use rustc_hash::FxHashSet;

/// Total number of outcomes covered by `coupons`.
pub fn covered_count(coupons: &[Coupon]) -> u64 {
    coupons.iter().map(Coupon::size).sum()
}

/// Check that the expansion of `coupons` is exactly the set of `outcomes`.
///
/// Duplicate outcomes count once.
///
/// # Errors
///
/// [`CombineError::CoverageMismatch`] with the number of input outcomes no
/// coupon covers and the number of covered outcomes not in the input.
pub fn verify_coverage(outcomes: &[Outcome], coupons: &[Coupon]) -> Result<()> {
    let expected: FxHashSet<&Outcome> = outcomes.iter().collect();
    let expanded: FxHashSet<Outcome> = coupons.iter().flat_map(Coupon::expand).collect();

    let missing = expected
        .iter()
        .filter(|&&outcome| !expanded.contains(outcome))
        .count();
    let fabricated = expanded
        .iter()
        .filter(|outcome| !expected.contains(outcome))
        .count();

    if missing == 0 && fabricated == 0 {
        Ok(())
    } else {
        Err(CombineError::CoverageMismatch {
            missing,
            fabricated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupon::Slot;

    fn pair_set(home: &[u32], away: &[u32]) -> Coupon {
        Coupon::new(vec![
            Slot::Set(home.iter().copied().collect()),
            Slot::Set(away.iter().copied().collect()),
        ])
    }

    #[test]
    fn test_exact_coverage() {
        let outcomes = vec![vec![1, 1], vec![2, 1], vec![2, 1]];
        let coupons = vec![pair_set(&[1, 2], &[1])];

        assert_eq!(verify_coverage(&outcomes, &coupons), Ok(()));
        assert_eq!(covered_count(&coupons), 2);
    }

    #[test]
    fn test_missing_and_fabricated() {
        let outcomes = vec![vec![1, 1], vec![2, 1], vec![3, 3]];
        let coupons = vec![pair_set(&[1, 2], &[1, 2])];

        assert_eq!(
            verify_coverage(&outcomes, &coupons),
            Err(CombineError::CoverageMismatch {
                missing: 1,
                fabricated: 2
            })
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(verify_coverage(&[], &[]), Ok(()));
        assert_eq!(covered_count(&[]), 0);
    }
}
