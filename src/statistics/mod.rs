//! statistics — sample validation and descriptive summaries.
//!
//! Purpose
//! -------
//! Guard every sample-consuming entry point ([`validate_sample`]) and
//! compute the on-demand descriptive summary ([`DescriptiveStats`]) that
//! front-ends display and the estimators consume.
//!
//! Conventions
//! -----------
//! - Variance is the population form (÷ n); the MoM scale relation is
//!   calibrated against it.
//! - Empty samples fail loudly ([`StatsError::EmptySample`]) — no
//!   sentinel summary is mathematically defensible.
//! - Nothing here caches: a summary is a pure function of the slice it
//!   was computed from.

pub mod descriptive;
pub mod errors;
pub mod validation;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::descriptive::DescriptiveStats;
pub use self::errors::{StatsError, StatsResult};
pub use self::validation::validate_sample;
