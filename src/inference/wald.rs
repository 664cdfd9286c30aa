//! inference::wald — Wald z-tests and confidence intervals.
//!
//! Purpose
//! -------
//! Compare an estimate against a hypothesized value using its asymptotic
//! standard error: `z = (estimate − null)/√variance`, two-sided p-value
//! `2·(1 − Φ(|z|))`, and the symmetric interval `estimate ± z·se`.
//!
//! Key behaviors
//! -------------
//! - [`wald_test`] validates inputs, computes the statistic, and
//!   decides rejection at `|z| > 1.96`.
//! - [`confidence_interval`] builds the matching symmetric interval and
//!   reports `level = 1 − alpha`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The rejection threshold and interval half-width both use the
//!   pinned [`CRITICAL_VALUE`] = 1.96 — the α = 0.05 two-sided
//!   threshold — regardless of the `alpha` argument. Callers depend on
//!   this exact behavior; `alpha` is still validated and still
//!   determines the reported confidence level.
//! - Variances come from `inference::fisher` and are strictly positive;
//!   a zero variance would put ±∞ into the z-score.
//!
//! Downstream usage
//! ----------------
//! - Front-ends run the test for both parameters against user-entered
//!   null values and display `{z, p, rejected}` rows plus the intervals.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the null configuration (z ≈ 0, p ≈ 1, not
//!   rejected), a clear rejection, the pinned-critical-value behavior
//!   under a non-default alpha, interval endpoints, and the validation
//!   branches.
use crate::inference::errors::{InfError, InfResult};
use crate::inference::normal::standard_normal_cdf;

// TODO: generalize to the inverse normal CDF at 1 − alpha/2 instead of
// pinning the alpha = 0.05 threshold; callers currently get 1.96 no
// matter which alpha they pass.
/// Two-sided critical value used for rejection and interval half-width.
pub const CRITICAL_VALUE: f64 = 1.96;

/// Default two-sided significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Outcome of a two-sided Wald z-test.
///
/// Fields
/// ------
/// - `estimate` / `null_value`: the compared quantities.
/// - `standard_error`: `√variance`.
/// - `z_score`: `(estimate − null_value)/standard_error`.
/// - `p_value`: `2·(1 − Φ(|z|))`, in [0, 1].
/// - `rejected`: `|z| > 1.96` (pinned threshold; see module docs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaldTestResult {
    pub estimate: f64,
    pub null_value: f64,
    pub standard_error: f64,
    pub z_score: f64,
    pub p_value: f64,
    pub rejected: bool,
}

/// Symmetric asymptotic confidence interval.
///
/// Fields
/// ------
/// - `lower` / `upper`: `estimate ∓ 1.96·√variance`.
/// - `level`: `1 − alpha` as passed to [`confidence_interval`] (the
///   half-width itself stays pinned at the α = 0.05 threshold).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub level: f64,
}

#[inline]
fn validate_common(estimate: f64, variance: f64, alpha: f64) -> InfResult<()> {
    if !estimate.is_finite() {
        return Err(InfError::NonFiniteInput {
            value: estimate,
            reason: "Estimate must be finite.",
        });
    }
    if !variance.is_finite() || variance <= 0.0 {
        return Err(InfError::InvalidVariance {
            value: variance,
            reason: "Variance must be finite and strictly positive.",
        });
    }
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(InfError::InvalidAlpha {
            value: alpha,
            reason: "Significance level must lie strictly inside (0, 1).",
        });
    }
    Ok(())
}

/// Two-sided Wald z-test of `estimate` against `null_value`.
///
/// Parameters
/// ----------
/// - `estimate`: `f64` — fitted parameter; finite.
/// - `null_value`: `f64` — hypothesized value; finite.
/// - `variance`: `f64` — asymptotic variance of the estimate (from
///   `fisher_information`); finite, > 0.
/// - `alpha`: `f64` — significance level in (0, 1). Validated and
///   reported, but the rejection threshold stays pinned at 1.96 (see
///   module docs).
///
/// Returns
/// -------
/// `InfResult<WaldTestResult>`
///   The statistic, p-value, and rejection decision.
///
/// Errors
/// ------
/// - `InfError::NonFiniteInput`, `InvalidVariance`, or `InvalidAlpha`
///   for out-of-contract arguments.
pub fn wald_test(
    estimate: f64, null_value: f64, variance: f64, alpha: f64,
) -> InfResult<WaldTestResult> {
    validate_common(estimate, variance, alpha)?;
    if !null_value.is_finite() {
        return Err(InfError::NonFiniteInput {
            value: null_value,
            reason: "Null value must be finite.",
        });
    }

    let standard_error = variance.sqrt();
    let z_score = (estimate - null_value) / standard_error;
    let p_value = 2.0 * (1.0 - standard_normal_cdf(z_score.abs()));
    let rejected = z_score.abs() > CRITICAL_VALUE;

    Ok(WaldTestResult { estimate, null_value, standard_error, z_score, p_value, rejected })
}

/// Symmetric asymptotic confidence interval `estimate ± 1.96·√variance`.
///
/// Same validation as [`wald_test`]; `level = 1 − alpha` is reported
/// while the half-width stays pinned at the α = 0.05 critical value.
pub fn confidence_interval(
    estimate: f64, variance: f64, alpha: f64,
) -> InfResult<ConfidenceInterval> {
    validate_common(estimate, variance, alpha)?;

    let half_width = CRITICAL_VALUE * variance.sqrt();
    Ok(ConfidenceInterval {
        lower: estimate - half_width,
        upper: estimate + half_width,
        level: 1.0 - alpha,
    })
}
