//! Summary statistics for a combine result.

use crate::coupon::Coupon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of largest coupons reported by default
pub const DEFAULT_TOP: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultStats {
    /// Outcomes read from input
    pub n_input: usize,
    /// Coupons generated
    pub n_output: usize,
    /// How many of the largest coupons are reported
    pub n_top: usize,
    /// Sizes of the largest coupons, descending
    pub n_top_sizes: Vec<u64>,
    /// Share of all covered outcomes that the top coupons cover (0-100)
    pub n_top_percentage: f64,
}

impl ResultStats {
    pub fn from_coupons(coupons: &[Coupon], n_input: usize, top: usize) -> Self {
        let mut sizes: Vec<u64> = coupons.iter().map(Coupon::size).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));

        let total: u64 = sizes.iter().sum();
        let n_top = top.min(sizes.len());
        sizes.truncate(n_top);
        let top_total: u64 = sizes.iter().sum();

        let n_top_percentage = if total == 0 {
            0.0
        } else {
            100.0 * top_total as f64 / total as f64
        };

        Self {
            n_input,
            n_output: coupons.len(),
            n_top,
            n_top_sizes: sizes,
            n_top_percentage,
        }
    }
}

impl fmt::Display for ResultStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sizes: Vec<String> = self.n_top_sizes.iter().map(u64::to_string).collect();
        writeln!(f, "Summary:")?;
        writeln!(
            f,
            "Input {} scores, generated {} coupons",
            self.n_input, self.n_output
        )?;
        writeln!(f, "top {} coupon sizes: {}", self.n_top, sizes.join(", "))?;
        write!(
            f,
            "{:.2} % of scores covered by first {} coupons",
            self.n_top_percentage, self.n_top
        )
    }
}
