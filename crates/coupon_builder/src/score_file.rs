//! Line-based score file format
//!
//! One score line per row, games separated by `;`, home and away goals by `-`:
//!
//! ```text
//! 1-0;2-0;2-0;1-1
//! ```
//!
//! Coupons use the same layout with comma-joined goal sets, e.g.
//! `0,1-0;2-0,1,2`.

use anyhow::{bail, Context, Result};
use coupon_core::{Coupon, Goal, Outcome};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Parse one score line into a flat outcome.
///
/// `"3-1;2-1"` becomes `[3, 1, 2, 1]`. Blank lines give `None`.
pub fn parse_line(line: &str) -> Result<Option<Outcome>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut outcome = Vec::new();
    for game in line.split(';') {
        let Some((home, away)) = game.split_once('-') else {
            bail!("Game '{}' is not in home-away format", game);
        };
        outcome.push(parse_goal(home)?);
        outcome.push(parse_goal(away)?);
    }
    Ok(Some(outcome))
}

fn parse_goal(value: &str) -> Result<Goal> {
    value
        .trim()
        .parse::<Goal>()
        .with_context(|| format!("Invalid goal count: '{}'", value.trim()))
}

/// Parse a whole file's contents, dropping blank lines.
pub fn parse_outcomes(data: &str) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::new();
    for (idx, line) in data.lines().enumerate() {
        if let Some(outcome) =
            parse_line(line).with_context(|| format!("Line {}: '{}'", idx + 1, line.trim()))?
        {
            outcomes.push(outcome);
        }
    }
    Ok(outcomes)
}

/// Read outcomes from a score file.
pub fn load_outcomes(path: &Path) -> Result<Vec<Outcome>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Error reading input {}", path.display()))?;
    parse_outcomes(&data).with_context(|| format!("Error parsing input {}", path.display()))
}

/// Render one coupon as a score line.
///
/// Even slots are home goals, odd slots away goals.
pub fn format_coupon(coupon: &Coupon) -> Result<String> {
    let slots = coupon.slots();
    if slots.len() % 2 != 0 {
        bail!(
            "Coupon has {} slots; home and away goals must come in pairs",
            slots.len()
        );
    }

    let games: Vec<String> = slots
        .chunks_exact(2)
        .map(|game| format!("{}-{}", game[0], game[1]))
        .collect();
    Ok(games.join(";"))
}

/// Write one line per coupon, creating the parent directory if needed.
pub fn save_coupons(path: &Path, coupons: &[Coupon]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let file = fs::File::create(path)
        .with_context(|| format!("Error saving results in {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for coupon in coupons {
        writeln!(writer, "{}", format_coupon(coupon)?)
            .with_context(|| format!("Error saving results in {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Error saving results in {}", path.display()))?;
    Ok(())
}
