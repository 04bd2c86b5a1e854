//! # coupon_core - Score Coupon Compression Engine
//!
//! Compresses a list of concrete multi-game score outcomes into coupons: score
//! lines where a slot may hold a set of goals. Expanding every coupon gives
//! back exactly the input outcomes.
//!
//! ## Features
//! - Four greedy strategies: `simple`, `simple-random`, `simple-max`, `only-max`
//! - Deterministic results (`simple-random` is seeded explicitly)
//! - Coverage verification and summary statistics
//!
//! ```
//! use coupon_core::{combine, Method};
//!
//! let coupons = combine(&[vec![1, 1], vec![2, 1]], Method::SimpleMax, 0).unwrap();
//! assert_eq!(coupons[0].goal_lists(), vec![vec![1, 2], vec![1]]);
//! ```

pub mod coupon;
pub mod coverage;
pub mod error;
pub mod grouping;
pub mod method;
pub mod stats;
pub mod strategy;

pub use coupon::{Coupon, Goal, Outcome, Slot};
pub use coverage::{covered_count, verify_coverage};
pub use error::{CombineError, Result};
pub use grouping::find_combinations;
pub use method::Method;
pub use stats::{ResultStats, DEFAULT_TOP};
pub use strategy::{
    combine, combine_named, combine_only_max, combine_simple, combine_simple_max,
    combine_simple_random,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
