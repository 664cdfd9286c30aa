//! statistics::descriptive — one-pass summary of a sample.
//!
//! Purpose
//! -------
//! Compute the descriptive summary a front-end displays next to a fresh
//! sample and the moments the Method-of-Moments estimator consumes:
//! mean, population variance, standard deviation, median, and range.
//!
//! Key behaviors
//! -------------
//! - [`DescriptiveStats::from_sample`] validates input and computes all
//!   fields in one call; nothing is cached — a new sample means a new
//!   summary.
//! - Variance is the population form (division by n, not n − 1), which
//!   is the moment the MoM scale formula is calibrated against.
//! - The median averages the two middle elements of a sorted copy for
//!   even n and takes the middle element for odd n; min/max come from
//!   the sorted copy's ends.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input is validated (non-empty, all finite) before any arithmetic;
//!   the sorted copy can therefore use `f64::total_cmp` without NaN
//!   surprises.
//! - The input slice itself is never mutated; sorting happens on a copy.
//!
//! Downstream usage
//! ----------------
//! - `estimation::moments` reads `mean` and `std`; `estimation::mle`
//!   reads them for its raw-statistics initial guess.
//!
//! Testing notes
//! -------------
//! - Unit tests pin hand-computable summaries for tiny samples (odd and
//!   even lengths) and assert the loud-failure contract on empty input.
use crate::statistics::errors::StatsResult;
use crate::statistics::validation::validate_sample;

/// Descriptive summary of one sample, recomputed on demand.
///
/// Fields
/// ------
/// - `n`: `usize` — number of observations (≥ 1 by construction).
/// - `mean`: `f64` — arithmetic mean.
/// - `variance`: `f64` — population variance (division by n).
/// - `std`: `f64` — square root of `variance`.
/// - `median`: `f64` — sorted-copy midpoint (average of the two middle
///   elements for even n).
/// - `min` / `max`: `f64` — sorted-copy ends.
///
/// Invariants
/// ----------
/// - Derived from a validated sample; all fields are finite and
///   `min ≤ median ≤ max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub n: usize,
    pub mean: f64,
    pub variance: f64,
    pub std: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl DescriptiveStats {
    /// Compute the full summary of `sample`.
    ///
    /// Parameters
    /// ----------
    /// - `sample`: `&[f64]`
    ///   Observations; must be non-empty and all finite.
    ///
    /// Returns
    /// -------
    /// `StatsResult<DescriptiveStats>`
    ///   The summary, or the validation error for empty/non-finite
    ///   input.
    ///
    /// Errors
    /// ------
    /// - `StatsError::EmptySample` — no sentinel summary exists for an
    ///   empty sample; this fails loudly by design of the error taxonomy.
    /// - `StatsError::NonFiniteObservation` for NaN or ±∞ entries.
    pub fn from_sample(sample: &[f64]) -> StatsResult<Self> {
        validate_sample(sample)?;
        let n = sample.len();
        let nf = n as f64;

        let mean = sample.iter().sum::<f64>() / nf;
        let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / nf;

        let mut sorted = sample.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        Ok(Self {
            n,
            mean,
            variance,
            std: variance.sqrt(),
            median,
            min: sorted[0],
            max: sorted[n - 1],
        })
    }
}
