//! optimization::types — shared numeric aliases and simplex coefficients.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and the fixed Nelder–Mead
//! coefficients used by the simplex minimizer. Defining these in one
//! place keeps the rest of the optimization code agnostic to `ndarray`
//! generics and pins the algorithm constants where they can be read at a
//! glance.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors, gradients, and
//!   scalar costs (`Theta`, `Grad`, `Cost`).
//! - Pin the classic Nelder–Mead move coefficients (reflection 1,
//!   expansion 2, contraction 0.5, shrink 0.5) and the initial-simplex
//!   nudge rule constants.
//!
//! Conventions
//! -----------
//! - `Theta` and `Grad` are conceptually column vectors with length
//!   equal to the number of free parameters (two for the logistic
//!   location/scale problem, but the solver is dimension-agnostic).
//! - `Cost` is the scalar value being *minimized*; likelihood callers
//!   flip the sign of the log-likelihood before handing it over.
//!
//! Testing notes
//! -------------
//! - This module only defines aliases and constants; correctness is
//!   exercised by the simplex tests that instantiate them.
use ndarray::Array1;

/// Parameter vector for the simplex minimizer.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter
/// type throughout the optimizer.
pub type Theta = Array1<f64>;

/// Gradient vector `∇ℓ(θ)` matching the shape of [`Theta`].
///
/// The simplex solver is derivative-free; this alias exists for the
/// analytic gradient exposed by the likelihood engine.
pub type Grad = Array1<f64>;

/// Scalar objective value used by the optimizer (minimized).
pub type Cost = f64;

/// Reflection coefficient α of the Nelder–Mead update.
pub const REFLECTION: f64 = 1.0;

/// Expansion coefficient γ of the Nelder–Mead update.
pub const EXPANSION: f64 = 2.0;

/// Contraction coefficient ρ of the Nelder–Mead update.
pub const CONTRACTION: f64 = 0.5;

/// Shrink coefficient σ applied toward the best vertex.
pub const SHRINK: f64 = 0.5;

/// Relative nudge used to build the initial simplex: each coordinate is
/// displaced by this fraction of its magnitude.
pub const RELATIVE_NUDGE: f64 = 0.05;

/// Absolute nudge used for coordinates that are exactly zero, where a
/// relative displacement would collapse the simplex.
pub const ZERO_NUDGE: f64 = 0.00025;

/// Default iteration budget of the simplex minimizer.
pub const DEFAULT_MAX_ITER: usize = 500;

/// Default stop tolerance on the worst-minus-best value spread.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;
