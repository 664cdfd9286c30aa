//! monte_carlo::config — validated study configuration and progress types.
//!
//! Purpose
//! -------
//! Define the configuration of one Monte Carlo study (trial count, true
//! parameters, per-trial sample size, progress cadence) and the small
//! value types that travel through the progress callback.
//!
//! Key behaviors
//! -------------
//! - [`MonteCarloConfig::new`] validates everything once, so the
//!   harness body can loop without re-checking.
//! - Per-trial seeds derive deterministically from the trial index as
//!   `TRIAL_SEED_BASE + i`, making trial i reproducible in isolation
//!   and independent of how many trials run around it.
//! - The progress callback returns a [`MonteCarloSignal`]; `Cancel`
//!   stops the study between trials (cooperative cancellation, no
//!   mid-trial preemption).
//!
//! Conventions
//! -----------
//! - `progress_every` defaults to 10 trials, the cadence a browser
//!   front-end uses to keep its UI thread responsive during long runs.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each validation branch; cadence and cancellation
//!   behavior are exercised in the harness tests.
use crate::distribution::Logistic;
use crate::monte_carlo::errors::{McError, McResult};

/// Base of the deterministic per-trial seed sequence: trial i draws its
/// sample with seed `TRIAL_SEED_BASE + i`.
pub const TRIAL_SEED_BASE: u32 = 1000;

/// Default progress/cancellation cadence, in trials.
pub const DEFAULT_PROGRESS_EVERY: usize = 10;

/// Validated configuration of one Monte Carlo study.
///
/// Fields
/// ------
/// - `n_sims`: `usize` — number of independent trials (≥ 1).
/// - `sample_size`: `usize` — observations per trial (≥ 1).
/// - `distribution`: [`Logistic`] — the true data-generating
///   parameters every trial samples from and every bias is measured
///   against.
/// - `progress_every`: `usize` — callback cadence in trials (≥ 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonteCarloConfig {
    pub n_sims: usize,
    pub sample_size: usize,
    pub distribution: Logistic,
    pub progress_every: usize,
}

impl MonteCarloConfig {
    /// Construct a validated configuration with the default progress
    /// cadence.
    ///
    /// Parameters
    /// ----------
    /// - `n_sims`: `usize` — trial count; must be ≥ 1.
    /// - `location` / `scale`: `f64` — true parameters; validated
    ///   through [`Logistic::new`].
    /// - `sample_size`: `usize` — per-trial observations; must be ≥ 1.
    ///
    /// Errors
    /// ------
    /// - [`McError::InvalidTrialCount`] / [`McError::InvalidSampleSize`]
    ///   for zero counts.
    /// - [`McError::InvalidLocation`] / [`McError::InvalidScale`]
    ///   converted from the distribution validation.
    pub fn new(
        n_sims: usize, location: f64, scale: f64, sample_size: usize,
    ) -> McResult<Self> {
        if n_sims == 0 {
            return Err(McError::InvalidTrialCount {
                n_sims,
                reason: "At least one trial is required.",
            });
        }
        if sample_size == 0 {
            return Err(McError::InvalidSampleSize {
                n: sample_size,
                reason: "Each trial needs at least one observation.",
            });
        }
        let distribution = Logistic::new(location, scale)?;
        Ok(Self { n_sims, sample_size, distribution, progress_every: DEFAULT_PROGRESS_EVERY })
    }

    /// Replace the progress cadence (trials between callback firings).
    ///
    /// # Errors
    /// - [`McError::InvalidProgressEvery`] if `every == 0`.
    pub fn with_progress_every(mut self, every: usize) -> McResult<Self> {
        if every == 0 {
            return Err(McError::InvalidProgressEvery {
                every,
                reason: "Cadence must be at least one trial.",
            });
        }
        self.progress_every = every;
        Ok(self)
    }
}

/// Snapshot handed to the progress callback at trial boundaries.
///
/// - `completed`: trials finished so far (the triggering trial
///   included).
/// - `total`: configured trial count.
/// - `percent`: `completed / total × 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonteCarloProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

/// Return value of the progress callback.
///
/// `Continue` keeps the study running; `Cancel` stops it before the
/// next trial and surfaces [`McError::Cancelled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonteCarloSignal {
    Continue,
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Each validation branch of the configuration constructor.
    // - The progress-cadence override and its zero guard.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify a well-formed configuration and its default cadence.
    //
    // Given
    // -----
    // - n_sims = 200, μ = 5, s = 2, n = 1000.
    //
    // Expect
    // ------
    // - Construction succeeds with progress_every = 10.
    fn monte_carlo_config_valid_arguments_succeed() {
        // Act
        let config = MonteCarloConfig::new(200, 5.0, 2.0, 1000).expect("valid configuration");

        // Assert
        assert_eq!(config.n_sims, 200);
        assert_eq!(config.sample_size, 1000);
        assert_eq!(config.progress_every, DEFAULT_PROGRESS_EVERY);
        assert_eq!(config.distribution.location(), 5.0);
        assert_eq!(config.distribution.scale(), 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure every invalid field is rejected with its own error.
    //
    // Given
    // -----
    // - Zero trials, zero sample size, non-positive scale, non-finite
    //   location, and a zero cadence override.
    //
    // Expect
    // ------
    // - The matching error variant for each case.
    fn monte_carlo_config_invalid_arguments_return_error() {
        // Act & Assert
        assert!(matches!(
            MonteCarloConfig::new(0, 5.0, 2.0, 100),
            Err(McError::InvalidTrialCount { .. })
        ));
        assert!(matches!(
            MonteCarloConfig::new(10, 5.0, 2.0, 0),
            Err(McError::InvalidSampleSize { .. })
        ));
        assert!(matches!(
            MonteCarloConfig::new(10, 5.0, 0.0, 100),
            Err(McError::InvalidScale { .. })
        ));
        assert!(matches!(
            MonteCarloConfig::new(10, f64::NAN, 2.0, 100),
            Err(McError::InvalidLocation { .. })
        ));
        let config = MonteCarloConfig::new(10, 5.0, 2.0, 100).expect("valid configuration");
        assert!(matches!(
            config.with_progress_every(0),
            Err(McError::InvalidProgressEvery { .. })
        ));
        assert_eq!(
            config.with_progress_every(25).expect("valid cadence").progress_every,
            25
        );
    }
}
