//! Fixed-order collapse strategies: `simple` and `simple-random`.

use super::width;
use crate::coupon::Coupon;
use crate::grouping::find_combinations;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Collapse every position once, left to right.
pub fn combine_simple(rows: &[Coupon]) -> Vec<Coupon> {
    let n = width(rows);
    debug!(positions = n, "combine_simple");
    collapse_in_order(rows, 0..n)
}

/// Collapse every position once, in a random order drawn from `rng`.
///
/// One permutation is drawn per call.
pub fn combine_simple_random<R: Rng + ?Sized>(rows: &[Coupon], rng: &mut R) -> Vec<Coupon> {
    let mut order: Vec<usize> = (0..width(rows)).collect();
    order.shuffle(rng);
    debug!(?order, "combine_simple_random");
    collapse_in_order(rows, order)
}

fn collapse_in_order(rows: &[Coupon], order: impl IntoIterator<Item = usize>) -> Vec<Coupon> {
    let mut rows = rows.to_vec();
    for i in order {
        rows = find_combinations(&rows, i);
        super::log_collapse(i, &rows);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::{assert_covers, rows};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_simple_full_grid_is_one_coupon() {
        let mut input = Vec::new();
        for home in 0..6 {
            for away in 0..6 {
                input.push(vec![home, away]);
            }
        }
        let result = combine_simple(&rows(&input));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].size(), 36);
        assert_covers(&input, &result);
    }

    #[test]
    fn test_simple_collapses_home_then_away() {
        let input = vec![vec![1, 1], vec![2, 1], vec![4, 2], vec![4, 3]];
        let result = combine_simple(&rows(&input));

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].goal_lists(), vec![vec![4], vec![2, 3]]);
        assert_eq!(result[1].goal_lists(), vec![vec![1, 2], vec![1]]);
        assert_covers(&input, &result);
    }

    #[test]
    fn test_simple_random_same_seed_same_result() {
        let input: Vec<Vec<u32>> = (0..4)
            .flat_map(|a| (0..3).map(move |b| vec![a, b, (a + b) % 3, 1]))
            .collect();

        let first = combine_simple_random(&rows(&input), &mut ChaCha8Rng::seed_from_u64(7));
        let second = combine_simple_random(&rows(&input), &mut ChaCha8Rng::seed_from_u64(7));

        assert_eq!(first, second);
        assert_covers(&input, &first);
    }

    #[test]
    fn test_simple_random_covers_for_many_seeds() {
        let input: Vec<Vec<u32>> = (0..5)
            .flat_map(|a| (0..5).map(move |b| vec![a, b, a.min(b), 2]))
            .filter(|row| row[0] != row[1])
            .collect();

        for seed in 0..20 {
            let result = combine_simple_random(&rows(&input), &mut ChaCha8Rng::seed_from_u64(seed));
            assert_covers(&input, &result);
        }
    }

    #[test]
    fn test_empty_rows() {
        assert!(combine_simple(&[]).is_empty());
        assert!(combine_simple_random(&[], &mut ChaCha8Rng::seed_from_u64(1)).is_empty());
    }
}
