//! `only-max`: merge the single best group per pass.
//!
//! Every pass groups the current rows at every position, picks the group that
//! merges the most rows, replaces those rows with one merged coupon and leaves
//! the rest untouched. Passes repeat until no group merges two or more rows.

use super::width;
use crate::coupon::Coupon;
use crate::grouping::{Group, PositionGroups};
use rayon::prelude::*;
use tracing::debug;

pub fn combine_only_max(rows: &[Coupon]) -> Vec<Coupon> {
    let mut rows = rows.to_vec();
    let mut passes = 0usize;

    while let Some(next) = merge_best_group(&rows) {
        debug_assert!(next.len() < rows.len());
        rows = next;
        passes += 1;
    }

    debug!(passes, rows = rows.len(), "combine_only_max finished");
    rows
}

/// One pass. Returns `None` when no group merges more than one row.
fn merge_best_group(rows: &[Coupon]) -> Option<Vec<Coupon>> {
    // collect() keeps position order
    let candidates: Vec<(usize, Option<Group<'_>>)> = (0..width(rows))
        .into_par_iter()
        .map(|i| (i, PositionGroups::collect(rows, i).into_largest()))
        .collect();

    let mut best: Option<(usize, Group<'_>)> = None;
    for (i, group) in candidates {
        let Some(group) = group else { continue };
        let better = match &best {
            Some((_, current)) => group.members.len() > current.members.len(),
            None => true,
        };
        if better {
            best = Some((i, group));
        }
    }
    let (position, best) = best?;

    if best.members.len() < 2 {
        return None;
    }

    debug!(
        position,
        merged = best.members.len(),
        values = ?best.values,
        "only-max merge"
    );

    let mut merged = vec![false; rows.len()];
    for &idx in &best.members {
        merged[idx] = true;
    }

    let mut next = Vec::with_capacity(rows.len() + 1 - best.members.len());
    next.push(best.into_coupon());
    next.extend(
        rows.iter()
            .zip(&merged)
            .filter(|&(_, &is_merged)| !is_merged)
            .map(|(row, _)| row.clone()),
    );
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupon::Slot;
    use crate::strategy::test_support::{assert_covers, rows};

    #[test]
    fn test_single_outcome_untouched() {
        let result = combine_only_max(&rows(&[vec![1, 1]]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].goal_lists(), vec![vec![1], vec![1]]);
    }

    #[test]
    fn test_two_combined() {
        let result = combine_only_max(&rows(&[vec![1, 1], vec![2, 1]]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].goal_lists(), vec![vec![1, 2], vec![1]]);
    }

    #[test]
    fn test_largest_group_merged_first_rest_passed_through() {
        let input = vec![vec![4, 1], vec![4, 2], vec![4, 4], vec![1, 2]];
        let first = merge_best_group(&rows(&input)).unwrap();

        // position 1 grouped by home 4 merges three rows
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].goal_lists(), vec![vec![4], vec![1, 2, 4]]);
        assert_eq!(first[1].slots(), &[Slot::Single(1), Slot::Single(2)]);

        assert!(merge_best_group(&first).is_none());
        assert_eq!(combine_only_max(&rows(&input)), first);
    }

    #[test]
    fn test_tie_goes_to_lowest_position() {
        // position 0 and 1 both offer a two-row merge
        let input = vec![vec![1, 1], vec![2, 1], vec![3, 3], vec![3, 4]];
        let first = merge_best_group(&rows(&input)).unwrap();

        assert_eq!(first[0].goal_lists(), vec![vec![1, 2], vec![1]]);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_full_grid() {
        let input: Vec<Vec<u32>> = (0..6)
            .flat_map(|home| (0..6).map(move |away| vec![home, away]))
            .collect();
        let result = combine_only_max(&rows(&input));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].size(), 36);
    }

    #[test]
    fn test_draws_missing_covered() {
        let input: Vec<Vec<u32>> = (0..8)
            .flat_map(|home| (0..8).map(move |away| vec![home, away]))
            .filter(|row| row[0] != row[1])
            .collect();
        let result = combine_only_max(&rows(&input));

        assert!(result.len() < input.len());
        assert_covers(&input, &result);
    }

    #[test]
    fn test_row_count_strictly_decreases_per_pass() {
        let input: Vec<Vec<u32>> = (0..3)
            .flat_map(|a| (0..3).flat_map(move |b| (0..3).map(move |c| vec![a, b, c, (a * b + c) % 2])))
            .collect();
        let mut current = rows(&input);

        while let Some(next) = merge_best_group(&current) {
            assert!(next.len() < current.len());
            current = next;
        }
        assert_covers(&input, &current);
    }
}
