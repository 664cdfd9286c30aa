//! monte_carlo::harness — repeated estimation and bias/MSE aggregation.
//!
//! Purpose
//! -------
//! Run the sampler and both estimators across independent seeded trials
//! and aggregate how well each estimator recovers the true parameters:
//! per-parameter bias, mean squared error, and sampling standard
//! deviation for Method-of-Moments and Maximum-Likelihood side by side,
//! plus the mean MLE wall-clock time.
//!
//! Key behaviors
//! -------------
//! - Trial i draws its sample with seed `TRIAL_SEED_BASE + i`: the
//!   study is reproducible, and each trial is reproducible in
//!   isolation.
//! - Trials run sequentially; the progress callback fires at trial
//!   boundaries every `progress_every` trials and doubles as the
//!   cooperative cancellation point.
//! - Aggregation is order-independent (sums and means only), so the
//!   results would be unchanged under any trial ordering that keeps the
//!   seed-per-index mapping.
//!
//! Invariants & assumptions
//! ------------------------
//! - `bias = mean(estimates) − true`, `mse = mean((estimate − true)²)`,
//!   `std = √(mse − bias²)` — the spread identity, clamped at zero
//!   against rounding before the square root.
//! - No state is shared between trials: each gets a fresh generator,
//!   sample, and estimate.
//!
//! Conventions
//! -----------
//! - The per-trial estimate vectors are kept on the result so a
//!   front-end can draw the sampling-distribution histograms next to
//!   the aggregate table.
//! - The harness itself does no I/O; progress reporting is the
//!   caller-supplied callback.
//!
//! Downstream usage
//! ----------------
//! - Teaching front-ends run one study per button press and render the
//!   MoM-vs-MLE comparison table from [`MonteCarloRun`]; hosts with a
//!   UI thread call this from a worker and forward progress through a
//!   channel.
//!
//! Testing notes
//! -------------
//! - Unit tests cover determinism, the spread identity, progress
//!   cadence, and cancellation; the integration suite asserts the
//!   consistency property (bias and MSE shrink as the per-trial sample
//!   size grows).
use crate::estimation::mle::estimate_mle;
use crate::estimation::moments::estimate_mom;
use crate::monte_carlo::config::{
    MonteCarloConfig, MonteCarloProgress, MonteCarloSignal, TRIAL_SEED_BASE,
};
use crate::monte_carlo::errors::{McError, McResult};
use crate::sampling::simulate;
use std::time::Duration;

/// Aggregated recovery of one parameter by one method.
///
/// - `mean`: mean of the per-trial estimates.
/// - `bias`: `mean − true value`.
/// - `mse`: mean squared error against the true value.
/// - `std`: sampling standard deviation, `√(mse − bias²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSummary {
    pub mean: f64,
    pub bias: f64,
    pub mse: f64,
    pub std: f64,
}

/// Per-method aggregation plus the raw per-trial estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSummary {
    pub location: ParameterSummary,
    pub scale: ParameterSummary,
    pub location_estimates: Vec<f64>,
    pub scale_estimates: Vec<f64>,
}

/// Result of one Monte Carlo study.
///
/// - `mom` / `mle`: per-method summaries over the same trials.
/// - `avg_mle_elapsed`: mean MLE wall-clock time per trial (the MoM
///   estimator is closed-form and not worth timing).
#[derive(Debug, Clone, PartialEq)]
pub struct MonteCarloRun {
    pub mom: MethodSummary,
    pub mle: MethodSummary,
    pub avg_mle_elapsed: Duration,
}

fn summarize(estimates: &[f64], true_value: f64) -> ParameterSummary {
    let n = estimates.len() as f64;
    let mean = estimates.iter().sum::<f64>() / n;
    let bias = mean - true_value;
    let mse = estimates.iter().map(|e| (e - true_value).powi(2)).sum::<f64>() / n;
    // mse − bias² is a variance and only dips below zero by rounding.
    let std = (mse - bias * bias).max(0.0).sqrt();
    ParameterSummary { mean, bias, mse, std }
}

/// Run one Monte Carlo study.
///
/// Parameters
/// ----------
/// - `config`: `&MonteCarloConfig`
///   Validated trial count, true parameters, per-trial sample size, and
///   progress cadence.
/// - `on_progress`: `Option<&mut dyn FnMut(MonteCarloProgress) -> MonteCarloSignal>`
///   Optional callback fired after trial i completes whenever
///   `i % progress_every == 0`. Returning
///   [`MonteCarloSignal::Cancel`] stops the study before the next
///   trial.
///
/// Returns
/// -------
/// `McResult<MonteCarloRun>`
///   Aggregated bias/MSE/std per parameter per method, the raw
///   per-trial estimates, and the mean MLE wall-clock time.
///
/// Errors
/// ------
/// - [`McError::Cancelled`] when the callback requests cancellation,
///   with the number of completed trials.
/// - [`McError::Estimation`] if a trial's estimation fails (cannot
///   happen for a validated configuration: simulated samples are
///   non-empty and finite by construction).
///
/// Notes
/// -----
/// - Identical configurations produce identical results; only the
///   elapsed-time field varies between runs.
pub fn run_monte_carlo(
    config: &MonteCarloConfig,
    mut on_progress: Option<&mut dyn FnMut(MonteCarloProgress) -> MonteCarloSignal>,
) -> McResult<MonteCarloRun> {
    let n_sims = config.n_sims;
    let mut mom_location = Vec::with_capacity(n_sims);
    let mut mom_scale = Vec::with_capacity(n_sims);
    let mut mle_location = Vec::with_capacity(n_sims);
    let mut mle_scale = Vec::with_capacity(n_sims);
    let mut total_mle_elapsed = Duration::ZERO;

    for i in 0..n_sims {
        let seed = TRIAL_SEED_BASE.wrapping_add(i as u32);
        let sample = simulate(config.sample_size, &config.distribution, seed);

        let mom = estimate_mom(&sample)?;
        mom_location.push(mom.location);
        mom_scale.push(mom.scale);

        let mle = estimate_mle(&sample, true)?;
        mle_location.push(mle.location);
        mle_scale.push(mle.scale);
        total_mle_elapsed += mle.elapsed;

        if let Some(ref mut callback) = on_progress {
            if i % config.progress_every == 0 {
                let completed = i + 1;
                let progress = MonteCarloProgress {
                    completed,
                    total: n_sims,
                    percent: completed as f64 / n_sims as f64 * 100.0,
                };
                if callback(progress) == MonteCarloSignal::Cancel {
                    return Err(McError::Cancelled { completed });
                }
            }
        }
    }

    let true_location = config.distribution.location();
    let true_scale = config.distribution.scale();

    Ok(MonteCarloRun {
        mom: MethodSummary {
            location: summarize(&mom_location, true_location),
            scale: summarize(&mom_scale, true_scale),
            location_estimates: mom_location,
            scale_estimates: mom_scale,
        },
        mle: MethodSummary {
            location: summarize(&mle_location, true_location),
            scale: summarize(&mle_scale, true_scale),
            location_estimates: mle_location,
            scale_estimates: mle_scale,
        },
        avg_mle_elapsed: total_mle_elapsed / n_sims as u32,
    })
}
