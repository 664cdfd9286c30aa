//! optimization — derivative-free minimization for model fitting.
//!
//! Purpose
//! -------
//! Provide the simplex (Nelder–Mead) minimizer that powers
//! maximum-likelihood estimation, together with the numeric aliases and
//! error surface the solver is written against. Callers hand over a
//! scalar objective, an initial point, and validated options, and
//! receive the best vertex found with diagnostics — no solver internals
//! leak across the boundary.
//!
//! Key behaviors
//! -------------
//! - Expose [`minimize`] with the classic fixed-coefficient Nelder–Mead
//!   moves and a validated [`SimplexOptions`] configuration.
//! - Normalize configuration and input failures into a single enum
//!   ([`OptError`]) with a common result alias ([`OptResult<T>`]).
//! - Report both the weak `converged` flag (`iterations < max_iter`)
//!   and the raw [`StopReason`] behind it.
//!
//! Invariants & assumptions
//! ------------------------
//! - Objectives are expected to return large finite penalties in
//!   invalid regions rather than ±∞, so simplex arithmetic never forms
//!   differences of infinities (the MLE objective follows this rule).
//! - The solver is deterministic given a deterministic objective.
//!
//! Conventions
//! -----------
//! - Minimization only: likelihood callers negate their objective.
//! - Parameters are [`Theta`] (`ndarray::Array1<f64>`) vectors; the
//!   solver is dimension-agnostic even though this crate only fits
//!   two-parameter models.
//! - This module avoids I/O and logging; diagnostics travel in the
//!   returned [`SimplexOutcome`].
//!
//! Downstream usage
//! ----------------
//! - `estimation::mle` is the in-crate consumer; external callers can
//!   import the curated surface via `optimization::prelude::*`.
//!
//! Testing notes
//! -------------
//! - Unit tests live with the solver (`simplex`): quadratic recovery,
//!   never-worse-than-start, stop reasons, validation, determinism.

pub mod errors;
pub mod simplex;
pub mod types;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{OptError, OptResult};
pub use self::simplex::{minimize, SimplexOptions, SimplexOutcome, StopReason};
pub use self::types::{Cost, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use logistic_lab::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::simplex::{minimize, SimplexOptions, SimplexOutcome, StopReason};
    pub use super::types::{Cost, Grad, Theta};
}
