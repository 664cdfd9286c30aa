//! sampling — seeded generation of synthetic logistic samples.
//!
//! Purpose
//! -------
//! Combine the deterministic Mulberry32 generator with the logistic
//! quantile function into a reproducible inverse-transform sampler. A
//! `(n, parameters, seed)` triple fully determines a sample, which is
//! what lets a front-end round-trip "the data behind this chart" through
//! nothing but a shared seed.
//!
//! Key behaviors
//! -------------
//! - [`Mulberry32`]: 32-bit-state uniform generator, bit-reproducible
//!   per seed.
//! - [`simulate`]: one fresh generator per call, exactly one draw per
//!   observation, uniforms clamped away from the unit-interval boundary
//!   before the quantile map.
//!
//! Conventions
//! -----------
//! - The Monte Carlo harness owns the seed-per-trial policy; this module
//!   only guarantees determinism for whatever seed it is handed.
//! - No I/O, no logging, no global generator state.

pub mod rng;
pub mod simulate;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::rng::Mulberry32;
pub use self::simulate::{simulate, PROB_CLAMP_MAX, PROB_CLAMP_MIN};
