//! estimation::likelihood — logistic log-likelihood and its gradient.
//!
//! Purpose
//! -------
//! Evaluate the logistic log-likelihood `ℓ(μ, s)` and its analytic
//! gradient over a sample. This is the objective the maximum-likelihood
//! estimator hands (negated) to the simplex minimizer; the gradient is
//! exposed for gradient-capable optimizers even though the in-house
//! solver is derivative-free.
//!
//! Key behaviors
//! -------------
//! - [`log_likelihood`] returns −∞ immediately for `scale ≤ 0`,
//!   signaling an invalid region to any optimizer without raising.
//! - The per-observation term `ln(1 + e^{-z})` goes through a stable
//!   softplus (`max(x, 0) + ln1p(e^{-|x|})`), so outlier-heavy samples
//!   with extreme standardized residuals produce large negative values
//!   instead of NaN/∞ — the naive exponential form overflows for very
//!   negative `z`.
//! - [`log_likelihood_grad`] accumulates the analytic partials through a
//!   stable sigmoid.
//!
//! Invariants & assumptions
//! ------------------------
//! - `ℓ(μ, s) = −n·ln s − Σ zᵢ − 2·Σ ln(1 + e^{-zᵢ})` with
//!   `zᵢ = (xᵢ − μ)/s`.
//! - `∂ℓ/∂μ = Σ (2pᵢ − 1)/s` and `∂ℓ/∂s = Σ (zᵢ(2pᵢ − 1) − 1)/s` with
//!   `pᵢ = 1/(1 + e^{-zᵢ})`.
//! - The gradient requires `scale > 0`; unlike the value, it has no
//!   sentinel contract because no optimizer in this crate evaluates it
//!   in invalid regions.
//! - Samples are assumed finite; entry points that accept external data
//!   screen through `statistics::validate_sample` first.
//!
//! Conventions
//! -----------
//! - Free functions over `(sample, location, scale)` rather than methods
//!   on the validated `Logistic` type: the optimizer explores raw
//!   parameter space, including scales the validated type rejects.
//!
//! Downstream usage
//! ----------------
//! - `estimation::mle` minimizes `−log_likelihood` with a finite penalty
//!   below its scale floor.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the sentinel, a hand-computed value, agreement of
//!   the analytic gradient with central finite differences, and
//!   finiteness on extreme outliers.
use crate::optimization::types::Grad;
use ndarray::array;

/// Stable softplus `ln(1 + e^x) = max(x, 0) + ln1p(e^{-|x|})`.
#[inline]
fn softplus(x: f64) -> f64 {
    if x > 0.0 { x + (-x).exp().ln_1p() } else { x.exp().ln_1p() }
}

/// Stable sigmoid `1 / (1 + e^{-x})`, branch-kept so the exponent is
/// always non-positive.
#[inline]
fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Logistic log-likelihood of `sample` at `(location, scale)`.
///
/// Parameters
/// ----------
/// - `sample`: `&[f64]` — observations; finite by upstream validation.
/// - `location`: `f64` — candidate μ.
/// - `scale`: `f64` — candidate s; any real is accepted.
///
/// Returns
/// -------
/// `f64`
///   The log-likelihood, or −∞ when `scale ≤ 0` (invalid-region
///   sentinel; optimization loops treat it as "very bad" instead of
///   crashing).
///
/// Notes
/// -----
/// - Finite for every finite sample and positive scale thanks to the
///   softplus form; only the sentinel path returns an infinity.
pub fn log_likelihood(sample: &[f64], location: f64, scale: f64) -> f64 {
    if scale <= 0.0 {
        return f64::NEG_INFINITY;
    }
    let n = sample.len() as f64;
    let mut ll = -n * scale.ln();
    for &x in sample {
        let z = (x - location) / scale;
        ll -= z;
        ll -= 2.0 * softplus(-z);
    }
    ll
}

/// Analytic gradient `(∂ℓ/∂μ, ∂ℓ/∂s)` of the logistic log-likelihood.
///
/// Parameters
/// ----------
/// - `sample`: `&[f64]` — observations; finite by upstream validation.
/// - `location`: `f64` — candidate μ.
/// - `scale`: `f64` — candidate s; must be strictly positive (no
///   sentinel contract here, see the module docs).
///
/// Returns
/// -------
/// `Grad`
///   Length-2 vector `[∂ℓ/∂μ, ∂ℓ/∂s]`.
pub fn log_likelihood_grad(sample: &[f64], location: f64, scale: f64) -> Grad {
    let mut d_location = 0.0;
    let mut d_scale = 0.0;
    for &x in sample {
        let z = (x - location) / scale;
        let p = sigmoid(z);
        d_location += (2.0 * p - 1.0) / scale;
        d_scale += (z * (2.0 * p - 1.0) - 1.0) / scale;
    }
    array![d_location, d_scale]
}
