//! `simple-max`: greedy choice of the next position to collapse.

use super::width;
use crate::coupon::Coupon;
use crate::grouping::{count_groups, find_combinations};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Each round collapses the remaining position that leaves the fewest rows.
///
/// Ties go to the lowest position index. Candidates are scored in parallel
/// and reduced on `(row_count, position)`, so the choice does not depend on
/// scheduling.
pub fn combine_simple_max(rows: &[Coupon]) -> Vec<Coupon> {
    let mut rows = rows.to_vec();
    let mut remaining: BTreeSet<usize> = (0..width(&rows)).collect();

    while let Some(best) = best_position(&rows, &remaining) {
        rows = find_combinations(&rows, best);
        remaining.remove(&best);
        super::log_collapse(best, &rows);
    }

    rows
}

fn best_position(rows: &[Coupon], remaining: &BTreeSet<usize>) -> Option<usize> {
    let candidates: Vec<usize> = remaining.iter().copied().collect();
    candidates
        .par_iter()
        .map(|&i| (count_groups(rows, i), i))
        .min()
        .map(|(_, i)| i)
}
