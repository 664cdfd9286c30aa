//! inference::fisher — asymptotic variances from Fisher information.
//!
//! Purpose
//! -------
//! Convert a fitted scale and sample size into the asymptotic variances
//! of the logistic location and scale estimators. For the logistic
//! location-scale family the Fisher information matrix is diagonal (the
//! cross term vanishes by symmetry), with per-observation entries
//! `1/(3s²)` for location and `(π² + 3)/(9s²)` for scale; inverting the
//! n-observation diagonal gives the variances used by the Wald tests and
//! confidence intervals.
//!
//! Invariants & assumptions
//! ------------------------
//! - Valid only under the large-n asymptotic approximation; for small
//!   samples the reported variances understate the real uncertainty.
//! - `n ≥ 1` and `scale > 0` are enforced at the entry point; the
//!   formulas divide by both.
//!
//! Downstream usage
//! ----------------
//! - `inference::wald` consumes `var_location` / `var_scale` as the
//!   squared standard errors of the corresponding estimates.
//!
//! Testing notes
//! -------------
//! - Unit tests pin both variances and both information entries against
//!   direct recomputation, the inverse relation between them, and the
//!   error branches.
use crate::inference::errors::{InfError, InfResult};

/// Asymptotic variances (and the information entries they invert) for
/// the logistic location-scale family at a fitted scale.
///
/// Fields
/// ------
/// - `var_location`: `f64` — `3s²/n`.
/// - `var_scale`: `f64` — `9s²/(n(π² + 3))`.
/// - `info_location`: `f64` — diagonal information entry `n/(3s²)`.
/// - `info_scale`: `f64` — diagonal information entry `n(π² + 3)/(9s²)`.
///
/// Invariants
/// ----------
/// - `var_location · info_location = 1` and `var_scale · info_scale = 1`
///   up to rounding; the off-diagonal information term is zero for this
///   family and is not represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FisherInfo {
    pub var_location: f64,
    pub var_scale: f64,
    pub info_location: f64,
    pub info_scale: f64,
}

/// Fisher-information variances for `n` observations at scale `scale`.
///
/// Parameters
/// ----------
/// - `n`: `usize` — sample size behind the estimate; must be ≥ 1.
/// - `scale`: `f64` — fitted scale; must be finite and > 0 (estimates
///   arrive pre-floored at 0.01 from the estimation layer).
///
/// Returns
/// -------
/// `InfResult<FisherInfo>`
///   The asymptotic variances and information entries.
///
/// Errors
/// ------
/// - `InfError::InvalidSampleSize` for `n == 0`.
/// - `InfError::InvalidScale` for non-finite or non-positive `scale`.
pub fn fisher_information(n: usize, scale: f64) -> InfResult<FisherInfo> {
    if n == 0 {
        return Err(InfError::InvalidSampleSize {
            n,
            reason: "Asymptotic variances require at least one observation.",
        });
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(InfError::InvalidScale {
            value: scale,
            reason: "Scale must be finite and strictly positive.",
        });
    }

    let nf = n as f64;
    let s2 = scale * scale;
    let pi2 = std::f64::consts::PI * std::f64::consts::PI;

    Ok(FisherInfo {
        var_location: 3.0 * s2 / nf,
        var_scale: 9.0 * s2 / (nf * (pi2 + 3.0)),
        info_location: nf / (3.0 * s2),
        info_scale: nf * (pi2 + 3.0) / (9.0 * s2),
    })
}
