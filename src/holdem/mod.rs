/// Module for comparing hands at showdown.
mod showdown;
/// Export `Outcome` and the showdown helpers
pub use self::showdown::{Outcome, showdown, showdown_hands};

/// Module with the estimator settings.
mod config;
/// Export `EquityConfig` and `Runout`
pub use self::config::{EquityConfig, Runout};

/// Module for Monte Carlo equity estimates against a candidate pool.
mod equity;
/// Export the estimator, its builder, and the result type
pub use self::equity::{EquityEstimator, EquityEstimatorBuilder, EquityResult, estimate_equity};
