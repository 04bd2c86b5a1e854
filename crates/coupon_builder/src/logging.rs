//! Tracing initialization for the command line tool.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable with an `EnvFilter` directive, e.g. `coupon_core=debug`
pub const LOG_ENV: &str = "COUPON_LOG";

static INIT: Once = Once::new();

/// Default level for `-v` repetitions: none warns, `-v` info, `-vv` debug.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber. `COUPON_LOG` wins over `verbosity`.
///
/// Calling this more than once is a no-op.
pub fn init_logging(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

        // Fails if a global subscriber is already set
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "debug");
    }

    #[test]
    fn test_init_twice() {
        init_logging(1);
        init_logging(2);
        tracing::info!("logging initialized");
    }
}
