//! Coupon Builder CLI
//!
//! Combines score lines into coupons:
//! `coupon_builder input.txt output.txt -m simple-max -v`

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{builder::PossibleValuesParser, ArgAction, Parser};
#[cfg(feature = "cli")]
use coupon_builder::RunConfig;
#[cfg(feature = "cli")]
use coupon_core::Method;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "coupon_builder")]
#[command(about = "Combine scores into coupons", long_about = None)]
struct Cli {
    /// Input file, one score line per row (e.g. "1-0;2-0;2-0;1-1")
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Output file for the coupons
    #[arg(default_value = "output.txt")]
    output: PathBuf,

    /// Combine method [default: simple-max]
    #[arg(short, long, value_parser = PossibleValuesParser::new(Method::NAMES))]
    method: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', action = ArgAction::Count)]
    verbosity: u8,

    /// Seed for simple-random
    #[arg(long)]
    seed: Option<u64>,

    /// Number of largest coupons shown in the summary [default: 20]
    #[arg(long)]
    top: Option<usize>,

    /// Verify that the coupons expand to exactly the input
    #[arg(long, default_value = "false")]
    verify: bool,

    /// Save summary statistics as JSON
    #[arg(long)]
    stats_json: Option<PathBuf>,

    /// JSON config file (falls back to $COUPON_CONFIG_PATH)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[cfg(feature = "cli")]
impl Cli {
    /// File/env config with explicit flags applied on top
    fn run_config(&self) -> Result<RunConfig> {
        let mut config = RunConfig::load(self.config.as_deref())?;
        if let Some(method) = &self.method {
            config.method = method.parse()?;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(top) = self.top {
            config.top = top;
        }
        config.verify |= self.verify;
        Ok(config)
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    coupon_builder::logging::init_logging(cli.verbosity);

    let config = cli.run_config()?;
    tracing::info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        method = %config.method,
        "combining"
    );

    let stats = coupon_builder::run(&cli.input, &cli.output, &config)?;
    println!("{}", stats);

    if let Some(path) = &cli.stats_json {
        coupon_builder::save_stats(path, &stats)?;
        println!("\nStats saved to: {}", path.display());
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("coupon_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
