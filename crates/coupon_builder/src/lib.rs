//! Coupon Builder Library
//!
//! Score file → outcomes → coupons → score file, plus summary statistics.

pub mod config;
pub mod logging;
pub mod score_file;

use anyhow::{Context, Result};
use coupon_core::{combine, verify_coverage, ResultStats};
use std::fs;
use std::path::Path;
use tracing::info;

pub use config::RunConfig;
pub use score_file::{format_coupon, load_outcomes, parse_line, parse_outcomes, save_coupons};

/// Combine the outcomes in `input` and write the coupons to `output`.
///
/// # Arguments
///
/// * `input` - Score file, one outcome per line
/// * `output` - Coupon file to write
/// * `config` - Method, seed, summary size and verification switch
///
/// # Returns
///
/// Summary statistics of the written coupons
pub fn run(input: &Path, output: &Path, config: &RunConfig) -> Result<ResultStats> {
    // 1. Read outcomes
    let outcomes = load_outcomes(input)?;

    // 2. Combine
    let seed = config.resolve_seed();
    if config.method.is_randomized() {
        info!(seed, "simple-random seed");
    }
    let coupons = combine(&outcomes, config.method, seed).with_context(|| {
        format!(
            "Failed to combine {} outcomes from {} with method {}",
            outcomes.len(),
            input.display(),
            config.method
        )
    })?;

    // 3. Optional round-trip check
    if config.verify {
        verify_coverage(&outcomes, &coupons).context("Coupon verification failed")?;
        info!(coupons = coupons.len(), "coverage verified");
    }

    // 4. Write coupons
    save_coupons(output, &coupons)?;

    Ok(ResultStats::from_coupons(&coupons, outcomes.len(), config.top))
}

/// Save statistics as pretty JSON.
pub fn save_stats(path: &Path, stats: &ResultStats) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(path, json).with_context(|| format!("Failed to write stats: {}", path.display()))?;
    Ok(())
}
