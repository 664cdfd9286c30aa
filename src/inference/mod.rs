//! inference — asymptotic uncertainty quantification for fitted models.
//!
//! Purpose
//! -------
//! Provide post-estimation inference on top of a fitted logistic model:
//! Fisher-information variances for the location and scale estimators,
//! two-sided Wald z-tests against hypothesized values, and symmetric
//! confidence intervals, all through a closed-form standard normal CDF
//! approximation.
//!
//! Key behaviors
//! -------------
//! - [`fisher_information`]: diagonal asymptotic variances `3s²/n` and
//!   `9s²/(n(π² + 3))` with their information entries.
//! - [`wald_test`] / [`confidence_interval`]: z-statistic, two-sided
//!   p-value via [`standard_normal_cdf`], rejection and half-width at
//!   the pinned 1.96 critical value (see `wald` module docs for the
//!   known alpha inconsistency this preserves).
//!
//! Invariants & assumptions
//! ------------------------
//! - Everything here is asymptotic: variances and intervals are
//!   large-n approximations, and the off-diagonal Fisher term is zero
//!   by the symmetry of the logistic family.
//! - Inputs are validated at each entry point; failures surface as
//!   [`InfError`] values rather than NaN results.
//!
//! Conventions
//! -----------
//! - Scales arriving from the estimation layer are pre-floored at 0.01,
//!   so the division-by-scale formulas are well-defined on the happy
//!   path; the guards here protect direct callers.
//! - No I/O, no logging; plain value objects out.
//!
//! Downstream usage
//! ----------------
//! - Front-ends chain `fisher_information` → `wald_test` /
//!   `confidence_interval` for both parameters after an MLE fit.
//!
//! Testing notes
//! -------------
//! - Unit tests per submodule; the normal CDF approximation is held to
//!   its stated error bound against the `statrs` reference CDF.

pub mod errors;
pub mod fisher;
pub mod normal;
pub mod wald;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{InfError, InfResult};
pub use self::fisher::{fisher_information, FisherInfo};
pub use self::normal::standard_normal_cdf;
pub use self::wald::{
    confidence_interval, wald_test, ConfidenceInterval, WaldTestResult, CRITICAL_VALUE,
    DEFAULT_ALPHA,
};
