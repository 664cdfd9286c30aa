//! sampling::simulate — inverse-transform sampling of the logistic law.
//!
//! Purpose
//! -------
//! Turn a seed and a validated [`Logistic`] instance into a reproducible
//! sample: one fresh Mulberry32 stream, exactly one uniform draw per
//! observation, each clamped away from the unit-interval boundary and
//! mapped through the quantile function.
//!
//! Key behaviors
//! -------------
//! - [`simulate`] re-seeds a fresh generator per call; the same
//!   `(n, parameters, seed)` triple always yields the same sample.
//! - Uniforms are clamped into `[PROB_CLAMP_MIN, PROB_CLAMP_MAX]` before
//!   the quantile map so no draw can produce ±∞.
//!
//! Invariants & assumptions
//! ------------------------
//! - Exactly `n` generator calls per sample, one per observation, in
//!   draw order. Reproducibility across implementations with the same
//!   generator depends on this one-draw-per-observation discipline.
//! - Output order is draw order; no sorting or post-processing.
//!
//! Conventions
//! -----------
//! - `simulate(0, ..)` returns an empty vector; rejecting empty samples
//!   is the consumer's concern (descriptive statistics and the
//!   estimators error loudly on empty input).
//!
//! Downstream usage
//! ----------------
//! - Estimation entry points consume the returned `Vec<f64>` as a plain
//!   slice; the Monte Carlo harness calls [`simulate`] once per trial
//!   with a per-trial seed.
//!
//! Testing notes
//! -------------
//! - Unit tests pin reproducibility (two calls, bit-identical output),
//!   the draw count, and the clamp (no non-finite observations even for
//!   adversarial parameters).
use crate::distribution::Logistic;
use crate::sampling::rng::Mulberry32;

/// Lower clamp applied to uniform draws before the quantile map.
pub const PROB_CLAMP_MIN: f64 = 0.0001;

/// Upper clamp applied to uniform draws before the quantile map.
pub const PROB_CLAMP_MAX: f64 = 0.9999;

/// Draw `n` logistic variates by inverse-transform sampling.
///
/// Parameters
/// ----------
/// - `n`: `usize`
///   Number of observations to draw. `0` yields an empty vector.
/// - `dist`: `&Logistic`
///   Validated distribution parameters (scale > 0 guaranteed by
///   construction).
/// - `seed`: `u32`
///   Seed for the per-call Mulberry32 instance. Identical seeds yield
///   bit-identical samples.
///
/// Returns
/// -------
/// `Vec<f64>`
///   The `n` variates in draw order. Every entry is finite thanks to the
///   boundary clamp on the uniforms.
///
/// Notes
/// -----
/// - The generator is advanced exactly `n` times: one draw per
///   observation, nothing else consumes the stream.
pub fn simulate(n: usize, dist: &Logistic, seed: u32) -> Vec<f64> {
    let mut rng = Mulberry32::new(seed);
    let mut sample = Vec::with_capacity(n);
    for _ in 0..n {
        let u = rng.next_f64().clamp(PROB_CLAMP_MIN, PROB_CLAMP_MAX);
        sample.push(dist.quantile(u));
    }
    sample
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Bit-identical samples for repeated (n, parameters, seed) calls.
    // - The exact length of the returned sample.
    // - Finiteness of every observation (the boundary clamp).
    // - A pinned first observation for seed 42, tying the sampler to the
    //   canonical Mulberry32 stream and the quantile map.
    //
    // They intentionally DO NOT cover:
    // - Distributional goodness-of-fit; the estimation tests assert
    //   parameter recovery on large samples instead.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the reproducibility contract of the sampler.
    //
    // Given
    // -----
    // - Two simulate calls with identical (n = 500, μ = 5, s = 2,
    //   seed = 42).
    //
    // Expect
    // ------
    // - The two samples are bitwise identical, element by element.
    fn simulate_same_inputs_yield_bit_identical_samples() {
        // Arrange
        let dist = Logistic::new(5.0, 2.0).expect("valid parameters");

        // Act
        let a = simulate(500, &dist, 42);
        let b = simulate(500, &dist, 42);

        // Assert
        assert_eq!(a.len(), 500);
        for (i, (x, y)) in a.iter().zip(&b).enumerate() {
            assert!(
                x.to_bits() == y.to_bits(),
                "observation {i} diverged: {x} vs {y}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Pin the first observation for a known seed so the draw-clamp-map
    // pipeline cannot silently change.
    //
    // Given
    // -----
    // - simulate(3, Logistic(5, 2), seed 42).
    //
    // Expect
    // ------
    // - The first observation equals the pinned value
    //   5.8201323971631025 within 1e-12.
    fn simulate_seed_42_first_observation_matches_pinned_value() {
        // Arrange
        let dist = Logistic::new(5.0, 2.0).expect("valid parameters");

        // Act
        let sample = simulate(3, &dist, 42);

        // Assert
        assert!(
            (sample[0] - 5.820_132_397_163_102_5).abs() < 1e-12,
            "unexpected first observation {}",
            sample[0]
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure the boundary clamp keeps every observation finite and that
    // n = 0 is handled as an empty sample.
    //
    // Given
    // -----
    // - 10_000 draws from a wide distribution, plus a zero-length call.
    //
    // Expect
    // ------
    // - All observations are finite.
    // - simulate(0, ..) returns an empty vector.
    fn simulate_clamped_draws_are_finite_and_zero_length_is_empty() {
        // Arrange
        let dist = Logistic::new(0.0, 10.0).expect("valid parameters");

        // Act
        let sample = simulate(10_000, &dist, 9001);

        // Assert
        assert!(sample.iter().all(|x| x.is_finite()));
        assert!(simulate(0, &dist, 1).is_empty());
    }
}
