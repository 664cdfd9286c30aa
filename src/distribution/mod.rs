//! distribution — the logistic law and its closed-form functions.
//!
//! Purpose
//! -------
//! Own the validated parameter type [`Logistic`] and its density,
//! distribution function, and quantile. Everything downstream — the
//! sampler, the estimators, the inference formulas — is written against
//! this one distribution family.
//!
//! Key behaviors
//! -------------
//! - Validate parameters once at construction ([`Logistic::new`]); the
//!   closed forms never observe a non-positive scale.
//! - Evaluate pdf/cdf in overflow-safe forms so far-tail arguments yield
//!   clean limits rather than NaN.
//!
//! Conventions
//! -----------
//! - Scale-sensitive code that must tolerate *invalid* parameters mid
//!   optimization (the log-likelihood) lives in `estimation::likelihood`
//!   with sentinel returns; this module is the validated-parameter path.
//! - Errors are reported via [`DistError`] and the alias
//!   [`DistResult<T>`]; no panics on user input.
//!
//! Downstream usage
//! ----------------
//! - `sampling` draws variates by mapping clamped uniforms through
//!   [`Logistic::quantile`].
//! - Front-ends evaluate [`Logistic::pdf`] on a grid to overlay fitted
//!   curves; the crate itself does no rendering.

pub mod errors;
pub mod logistic;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{DistError, DistResult};
pub use self::logistic::Logistic;
