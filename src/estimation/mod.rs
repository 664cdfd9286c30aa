//! estimation — Method-of-Moments and Maximum-Likelihood fitting.
//!
//! Purpose
//! -------
//! Turn a sample into fitted logistic parameters two ways: the
//! closed-form Method-of-Moments estimate and the simplex-driven
//! maximum-likelihood estimate, with the log-likelihood engine both
//! share. Results are plain value objects; formatting and display are
//! the consuming layer's concern.
//!
//! Key behaviors
//! -------------
//! - [`estimate_mom`]: mean and `std · √3 / π`, O(n), never fails on
//!   validated input.
//! - [`log_likelihood`] / [`log_likelihood_grad`]: numerically hardened
//!   objective evaluator with the −∞ sentinel for non-positive scale;
//!   the analytic gradient is exposed for gradient-capable optimizers.
//! - [`estimate_mle`]: negated log-likelihood under the simplex solver,
//!   seeded from MoM or raw statistics, scale floored at
//!   [`SCALE_FLOOR`], wall-clock timed.
//!
//! Conventions
//! -----------
//! - All entry points take explicit `(sample, ...)` arguments and return
//!   fresh values — no shared state between calls.
//! - Failures surface as [`EstError`] (sample problems absorbed from
//!   the statistics layer, optimizer rejections wrapped); optimizer
//!   non-convergence is a flag on the result, never an error.
//!
//! Downstream usage
//! ----------------
//! - The Monte Carlo harness runs both estimators per trial; inference
//!   consumes the fitted scale for Fisher-information variances.
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; the integration suite
//!   chains sampler → estimators → inference on seeded data.

pub mod errors;
pub mod likelihood;
pub mod mle;
pub mod moments;
pub mod types;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{EstError, EstResult};
pub use self::likelihood::{log_likelihood, log_likelihood_grad};
pub use self::mle::{estimate_mle, estimate_mle_with};
pub use self::moments::estimate_mom;
pub use self::types::{EstimationMethod, MleEstimate, MomEstimate, SCALE_FLOOR};
