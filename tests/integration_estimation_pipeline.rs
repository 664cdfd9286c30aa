//! Integration tests for the estimation and inference pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end flow: from a seeded synthetic sample,
//!   through descriptive statistics and both estimators, to
//!   Fisher-information variances, Wald tests, and confidence
//!   intervals.
//! - Exercise the Monte Carlo harness at realistic study sizes and
//!   assert the consistency property that motivates it as a teaching
//!   tool (bias and MSE shrink as the per-trial sample size grows).
//!
//! Coverage
//! --------
//! - `sampling`: seeded reproducibility feeding every stage below.
//! - `statistics::descriptive`: pinned summary of a reference sample.
//! - `estimation::moments` / `estimation::mle`: recovery of known
//!   parameters, agreement between the two estimators, never-worse-
//!   than-seed likelihood.
//! - `inference`: variance plumbing into tests and intervals at both
//!   the true null and a distant null.
//! - `monte_carlo::harness`: bias/MSE aggregation across per-trial
//!   sample sizes, MoM-vs-MLE efficiency at the larger size.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (clamps,
//!   validation guards, stop reasons) — covered by unit tests.
//! - Python bindings — expected to be tested at the package level.
//! - Exhaustive parameter grids and large-n stress runs — these belong
//!   in targeted studies, not the default test suite.
use logistic_lab::distribution::Logistic;
use logistic_lab::estimation::{estimate_mle, estimate_mom, log_likelihood};
use logistic_lab::inference::{confidence_interval, fisher_information, wald_test};
use logistic_lab::monte_carlo::{run_monte_carlo, MonteCarloConfig, MonteCarloRun};
use logistic_lab::sampling::simulate;
use logistic_lab::statistics::DescriptiveStats;

/// Reference sample shared by the pipeline tests: n = 1000 draws from
/// Logistic(5, 2) at seed 42, the configuration every front-end starts
/// from.
fn reference_sample() -> Vec<f64> {
    let dist = Logistic::new(5.0, 2.0).expect("valid parameters");
    simulate(1000, &dist, 42)
}

/// Run one Monte Carlo study at (μ = 5, s = 2) with 200 trials and the
/// given per-trial sample size.
fn study(sample_size: usize) -> MonteCarloRun {
    let config =
        MonteCarloConfig::new(200, 5.0, 2.0, sample_size).expect("valid configuration");
    run_monte_carlo(&config, None).expect("study should complete")
}

#[test]
// Purpose
// -------
// Pin the descriptive summary of the reference sample: these values tie
// the sampler bit for bit to the canonical Mulberry32 stream, so any
// drift in the PRNG, the clamp, or the quantile map shows up here.
//
// Given
// -----
// - simulate(1000, Logistic(5, 2), seed 42).
//
// Expect
// ------
// - mean, variance, and median match their pinned values to 1e-9.
fn pipeline_reference_sample_summary_is_pinned() {
    // Arrange
    let sample = reference_sample();

    // Act
    let stats = DescriptiveStats::from_sample(&sample).expect("valid sample");

    // Assert
    assert_eq!(stats.n, 1000);
    assert!((stats.mean - 5.088_893_676_829_643).abs() < 1e-9, "mean {}", stats.mean);
    assert!(
        (stats.variance - 13.149_799_324_603_41).abs() < 1e-9,
        "variance {}",
        stats.variance
    );
    assert!((stats.median - 5.142_743_366_120_86).abs() < 1e-9, "median {}", stats.median);
}

#[test]
// Purpose
// -------
// Verify Method-of-Moments recovery on a large sample — the law of
// large numbers sanity check for the whole sampling-estimation chain.
//
// Given
// -----
// - simulate(100_000, Logistic(5, 2), seed 42).
//
// Expect
// ------
// - The MoM estimate lands within ±0.05 of both true parameters.
fn pipeline_mom_large_sample_recovers_true_parameters() {
    // Arrange
    let dist = Logistic::new(5.0, 2.0).expect("valid parameters");
    let sample = simulate(100_000, &dist, 42);

    // Act
    let mom = estimate_mom(&sample).expect("valid sample");

    // Assert
    assert!((mom.location - 5.0).abs() < 0.05, "location {}", mom.location);
    assert!((mom.scale - 2.0).abs() < 0.05, "scale {}", mom.scale);
}

#[test]
// Purpose
// -------
// Chain both estimators on the reference sample and verify that the
// likelihood fit refines the moment fit without ever falling below its
// seed.
//
// Given
// -----
// - The reference sample; MoM as the MLE seed.
//
// Expect
// ------
// - Both estimates land near (5, 2); the MLE converges inside the
//   default budget; ℓ(MLE) ≥ ℓ(MoM seed) with the documented 0.1 floor
//   on the seeded scale.
fn pipeline_mle_refines_mom_fit() {
    // Arrange
    let sample = reference_sample();

    // Act
    let mom = estimate_mom(&sample).expect("valid sample");
    let mle = estimate_mle(&sample, true).expect("valid sample");

    // Assert: both estimators in the right neighborhood
    assert!((mom.location - 5.0889).abs() < 1e-3, "MoM location {}", mom.location);
    assert!((mom.scale - 1.9993).abs() < 1e-3, "MoM scale {}", mom.scale);
    assert!((mle.location - 5.1098).abs() < 5e-3, "MLE location {}", mle.location);
    assert!((mle.scale - 1.9736).abs() < 5e-3, "MLE scale {}", mle.scale);
    assert!(mle.converged);

    // Assert: the optimizer never returns a worse point than its seed
    let seed_ll = log_likelihood(&sample, mom.location, mom.scale.max(0.1));
    assert!(
        mle.log_likelihood >= seed_ll,
        "MLE log-likelihood {} fell below its seed {seed_ll}",
        mle.log_likelihood
    );
}

#[test]
// Purpose
// -------
// Run the full inference chain after an MLE fit: Fisher variances into
// Wald tests at the true null and at a distant null, plus intervals.
//
// Given
// -----
// - The reference sample's MLE fit; nulls (5, 2) and location 10.
//
// Expect
// ------
// - Tests at the true values retain the null; the distant null is
//   rejected with a near-zero p-value; both 95% intervals contain the
//   estimates they are built around.
fn pipeline_inference_chain_behaves_at_true_and_distant_nulls() {
    // Arrange
    let sample = reference_sample();
    let mle = estimate_mle(&sample, true).expect("valid sample");
    let fisher = fisher_information(sample.len(), mle.scale).expect("valid inputs");

    // Act
    let location_test =
        wald_test(mle.location, 5.0, fisher.var_location, 0.05).expect("valid inputs");
    let scale_test = wald_test(mle.scale, 2.0, fisher.var_scale, 0.05).expect("valid inputs");
    let distant_test =
        wald_test(mle.location, 10.0, fisher.var_location, 0.05).expect("valid inputs");
    let location_ci =
        confidence_interval(mle.location, fisher.var_location, 0.05).expect("valid inputs");
    let scale_ci = confidence_interval(mle.scale, fisher.var_scale, 0.05).expect("valid inputs");

    // Assert: true nulls retained
    assert!(!location_test.rejected, "z = {}", location_test.z_score);
    assert!(!scale_test.rejected, "z = {}", scale_test.z_score);
    assert!(location_test.p_value > 0.05);

    // Assert: distant null rejected decisively
    assert!(distant_test.rejected);
    assert!(distant_test.p_value < 1e-6, "p = {}", distant_test.p_value);

    // Assert: intervals bracket their estimates
    assert!(location_ci.lower < mle.location && mle.location < location_ci.upper);
    assert!(scale_ci.lower < mle.scale && mle.scale < scale_ci.upper);
    assert!((location_ci.level - 0.95).abs() < 1e-12);
}

#[test]
// Purpose
// -------
// Assert the consistency property the Monte Carlo tab demonstrates:
// growing the per-trial sample size shrinks both bias and MSE for both
// estimators and both parameters, and the likelihood estimator is at
// least as efficient as the moment estimator for the location at the
// larger size.
//
// Given
// -----
// - Two 200-trial studies at (μ = 5, s = 2): n = 100 and n = 2000,
//   with the deterministic per-trial seed sequence.
//
// Expect
// ------
// - |bias| and MSE shrink from n = 100 to n = 2000 in all four
//   (method, parameter) cells.
// - MLE location MSE ≤ MoM location MSE at n = 2000.
fn pipeline_monte_carlo_bias_and_mse_shrink_with_sample_size() {
    // Arrange & Act
    let coarse = study(100);
    let fine = study(2000);

    // Assert: bias shrinks in absolute value in every cell
    let bias_pairs = [
        (coarse.mom.location.bias, fine.mom.location.bias),
        (coarse.mom.scale.bias, fine.mom.scale.bias),
        (coarse.mle.location.bias, fine.mle.location.bias),
        (coarse.mle.scale.bias, fine.mle.scale.bias),
    ];
    for (i, (at_100, at_2000)) in bias_pairs.iter().enumerate() {
        assert!(
            at_2000.abs() < at_100.abs(),
            "bias cell {i} did not shrink: {at_100} -> {at_2000}"
        );
    }

    // Assert: MSE shrinks in every cell
    let mse_pairs = [
        (coarse.mom.location.mse, fine.mom.location.mse),
        (coarse.mom.scale.mse, fine.mom.scale.mse),
        (coarse.mle.location.mse, fine.mle.location.mse),
        (coarse.mle.scale.mse, fine.mle.scale.mse),
    ];
    for (i, (at_100, at_2000)) in mse_pairs.iter().enumerate() {
        assert!(
            at_2000 < at_100,
            "MSE cell {i} did not shrink: {at_100} -> {at_2000}"
        );
    }

    // Assert: likelihood efficiency at the larger sample size
    assert!(
        fine.mle.location.mse <= fine.mom.location.mse,
        "MLE location MSE {} exceeded MoM {}",
        fine.mle.location.mse,
        fine.mom.location.mse
    );
}

#[test]
// Purpose
// -------
// Exercise the externally-supplied-data contract: arrays that did not
// come from the sampler flow through the same guards, so non-finite
// entries and empty inputs are rejected before any estimation.
//
// Given
// -----
// - A hand-built array with a NaN "parse artifact" and an empty array.
//
// Expect
// ------
// - Both estimators reject both inputs with structured errors rather
//   than propagating NaN into results.
fn pipeline_external_data_is_screened_before_estimation() {
    // Arrange
    let with_nan = vec![1.2_f64, 3.4, f64::NAN, 0.7];
    let empty: Vec<f64> = Vec::new();

    // Act & Assert
    assert!(estimate_mom(&with_nan).is_err());
    assert!(estimate_mle(&with_nan, true).is_err());
    assert!(estimate_mom(&empty).is_err());
    assert!(estimate_mle(&empty, false).is_err());
}
