//! estimation::types — estimator result types and the method tag.
//!
//! Purpose
//! -------
//! Define the value objects the two estimators return. Both carry the
//! fitted `(location, scale)` pair; the maximum-likelihood result adds
//! the optimizer diagnostics a front-end displays next to the fit
//! (log-likelihood, iterations, convergence, wall-clock time).
//!
//! Conventions
//! -----------
//! - The scale component of a maximum-likelihood estimate is floored at
//!   [`SCALE_FLOOR`] before construction; the Fisher-information
//!   formulas downstream require a strictly positive scale.
//! - `converged` mirrors the optimizer's weak definition
//!   (`iterations < max_iter`); `stop_reason` carries the raw cause.
use crate::optimization::simplex::StopReason;
use std::time::Duration;

/// Strictly positive floor applied to fitted scale components before
/// they are returned or fed into Fisher-information formulas.
pub const SCALE_FLOOR: f64 = 0.01;

/// Which estimator produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimationMethod {
    MethodOfMoments,
    MaximumLikelihood,
}

/// Closed-form Method-of-Moments estimate.
///
/// - `location`: sample mean.
/// - `scale`: sample standard deviation × √3 / π. Can be arbitrarily
///   small for degenerate samples; the floor is applied downstream where
///   the optimizer or inference consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomEstimate {
    pub location: f64,
    pub scale: f64,
}

impl MomEstimate {
    /// Method tag for uniform reporting next to [`MleEstimate`].
    pub fn method(&self) -> EstimationMethod {
        EstimationMethod::MethodOfMoments
    }
}

/// Maximum-likelihood estimate with optimizer diagnostics.
///
/// - `location` / `scale`: fitted parameters; `scale` is floored at
///   [`SCALE_FLOOR`].
/// - `log_likelihood`: log-likelihood at the optimizer's best vertex.
/// - `iterations`: simplex iterations performed.
/// - `converged`: the optimizer's weak signal (`iterations < max_iter`).
/// - `stop_reason`: raw stopping cause behind `converged`.
/// - `elapsed`: wall-clock time of the whole estimation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MleEstimate {
    pub location: f64,
    pub scale: f64,
    pub log_likelihood: f64,
    pub iterations: usize,
    pub converged: bool,
    pub stop_reason: StopReason,
    pub elapsed: Duration,
}

impl MleEstimate {
    /// Method tag for uniform reporting next to [`MomEstimate`].
    pub fn method(&self) -> EstimationMethod {
        EstimationMethod::MaximumLikelihood
    }
}
