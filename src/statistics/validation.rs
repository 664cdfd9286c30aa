//! statistics::validation — shared input guards for sample consumers.
//!
//! Purpose
//! -------
//! Centralize the basic screening every sample-consuming entry point in
//! this crate performs: samples must be non-empty and every observation
//! finite. Externally supplied data (a front-end's parsed file, a
//! notebook array) passes through the same guard as simulated samples,
//! so downstream numeric code can assume well-formed input.
//!
//! Key behaviors
//! -------------
//! - [`validate_sample`] rejects empty slices and reports the first
//!   non-finite observation with its index and value.
//!
//! Invariants & assumptions
//! ------------------------
//! - A successful return guarantees `sample.len() ≥ 1` and all entries
//!   finite; it does not impose any distributional assumption.
//!
//! Conventions
//! -----------
//! - Pure validation: no allocation beyond error construction, no I/O.
//! - Errors are [`StatsError`] values; estimation-layer errors wrap them
//!   via `From` conversions.
//!
//! Downstream usage
//! ----------------
//! - Call at the top of statistics and estimation entry points before
//!   any computation; treat `Ok(())` as the precondition for the
//!   unchecked arithmetic that follows.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the success path and each error branch.
use crate::statistics::errors::{StatsError, StatsResult};

/// Validate a sample slice for the crate's numeric entry points.
///
/// Parameters
/// ----------
/// - `sample`: `&[f64]`
///   Candidate observations, simulated or externally supplied.
///
/// Returns
/// -------
/// `StatsResult<()>`
///   `Ok(())` when the sample is non-empty and every entry is finite.
///
/// Errors
/// ------
/// - `StatsError::EmptySample` for a zero-length slice.
/// - `StatsError::NonFiniteObservation` for the first NaN or ±∞ entry.
pub fn validate_sample(sample: &[f64]) -> StatsResult<()> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }
    for (index, &value) in sample.iter().enumerate() {
        if !value.is_finite() {
            return Err(StatsError::NonFiniteObservation { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful validation of a well-formed sample.
    // - The empty-sample branch.
    // - The non-finite branch, including the reported index.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a finite, non-empty sample passes.
    //
    // Given
    // -----
    // - A three-element finite sample.
    //
    // Expect
    // ------
    // - `validate_sample` returns `Ok(())`.
    fn validate_sample_finite_nonempty_succeeds() {
        // Arrange
        let sample = vec![0.1_f64, -2.0, 3.5];

        // Act
        let result = validate_sample(&sample);

        // Assert
        assert!(result.is_ok(), "expected Ok(()) for valid sample, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure an empty sample fails loudly rather than flowing into a
    // division by zero downstream.
    //
    // Given
    // -----
    // - A zero-length slice.
    //
    // Expect
    // ------
    // - `validate_sample` returns `Err(StatsError::EmptySample)`.
    fn validate_sample_empty_returns_empty_sample() {
        // Arrange
        let sample: Vec<f64> = Vec::new();

        // Act
        let result = validate_sample(&sample);

        // Assert
        match result {
            Err(StatsError::EmptySample) => (),
            other => panic!("expected EmptySample error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure NaN and infinite observations are rejected with the
    // offending index.
    //
    // Given
    // -----
    // - A sample containing NaN at index 1, and another with +∞ at
    //   index 2.
    //
    // Expect
    // ------
    // - `validate_sample` returns `NonFiniteObservation` with the first
    //   offending index in each case.
    fn validate_sample_non_finite_returns_index_of_offender() {
        // Arrange
        let with_nan = vec![0.1_f64, f64::NAN, 0.3];
        let with_inf = vec![0.1_f64, 0.2, f64::INFINITY];

        // Act & Assert
        match validate_sample(&with_nan) {
            Err(StatsError::NonFiniteObservation { index: 1, .. }) => (),
            other => panic!("expected NonFiniteObservation at 1, got {other:?}"),
        }
        match validate_sample(&with_inf) {
            Err(StatsError::NonFiniteObservation { index: 2, .. }) => (),
            other => panic!("expected NonFiniteObservation at 2, got {other:?}"),
        }
    }
}
