//! monte_carlo — seeded bias/MSE studies of the two estimators.
//!
//! Purpose
//! -------
//! Answer the teaching question "which estimator is better, and by how
//! much, at this sample size?" empirically: repeat sampling and
//! estimation across independent seeded trials and aggregate bias, MSE,
//! and sampling spread per parameter per method, plus MLE timing.
//!
//! Key behaviors
//! -------------
//! - Deterministic per-trial seeds (`TRIAL_SEED_BASE + i`) make the
//!   whole study reproducible and each trial independently
//!   reconstructible.
//! - Sequential execution with a progress callback at a configurable
//!   trial cadence; the callback's return value is the cooperative
//!   cancellation signal.
//!
//! Conventions
//! -----------
//! - No shared state between trials and order-independent aggregation:
//!   an implementation that parallelized trials by index would produce
//!   identical aggregates, though this crate deliberately stays
//!   sequential.
//! - No I/O or logging in the harness; hosts own all reporting.

pub mod config;
pub mod errors;
pub mod harness;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::config::{
    MonteCarloConfig, MonteCarloProgress, MonteCarloSignal, DEFAULT_PROGRESS_EVERY,
    TRIAL_SEED_BASE,
};
pub use self::errors::{McError, McResult};
pub use self::harness::{run_monte_carlo, MethodSummary, MonteCarloRun, ParameterSummary};
