//! estimation::moments — closed-form Method-of-Moments estimator.
//!
//! Purpose
//! -------
//! Estimate `(μ, s)` by equating sample moments to the logistic law's
//! theoretical moments: the mean estimates μ directly, and since the
//! logistic variance is s²π²/3, the scale follows from the sample
//! standard deviation as `s = std · √3 / π`.
//!
//! Key behaviors
//! -------------
//! - O(n): one descriptive-statistics pass, then two closed forms.
//! - Never fails for validated (non-empty, finite) input; the scale
//!   estimate can be arbitrarily small and is deliberately not floored
//!   here — the floor belongs to the consumers (the MLE seed and the
//!   Fisher formulas).
//!
//! Downstream usage
//! ----------------
//! - `estimation::mle` uses this estimate as its default initial guess;
//!   the Monte Carlo harness records it per trial as the closed-form
//!   baseline against the likelihood fit.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the closed form on a tiny sample and the error
//!   propagation for invalid input; large-sample parameter recovery is
//!   asserted in the integration suite against simulated data.
use crate::estimation::errors::EstResult;
use crate::estimation::types::MomEstimate;
use crate::statistics::descriptive::DescriptiveStats;

/// Method-of-Moments estimate of `(location, scale)` from `sample`.
///
/// Parameters
/// ----------
/// - `sample`: `&[f64]`
///   Observations; must be non-empty and all finite.
///
/// Returns
/// -------
/// `EstResult<MomEstimate>`
///   `location = mean`, `scale = std · √3 / π`.
///
/// Errors
/// ------
/// - Propagates `EstError::EmptySample` / `NonFiniteObservation` from
///   the descriptive-statistics pass.
pub fn estimate_mom(sample: &[f64]) -> EstResult<MomEstimate> {
    let stats = DescriptiveStats::from_sample(sample)?;
    Ok(MomEstimate {
        location: stats.mean,
        scale: stats.std * 3.0_f64.sqrt() / std::f64::consts::PI,
    })
}
