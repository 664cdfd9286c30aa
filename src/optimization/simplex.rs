//! optimization::simplex — derivative-free Nelder–Mead minimization.
//!
//! Purpose
//! -------
//! Minimize an arbitrary scalar objective over a small real vector
//! without derivatives. This is the engine behind the maximum-likelihood
//! estimator: the likelihood caller hands over a closure and an initial
//! point and receives the best vertex found, with diagnostics.
//!
//! Key behaviors
//! -------------
//! - Build the initial simplex from the starting point plus one vertex
//!   per coordinate, nudged by 5% of the coordinate's magnitude
//!   (0.00025 for coordinates that are exactly zero).
//! - Iterate the classic reflect / expand / contract / shrink moves with
//!   the fixed coefficients from `optimization::types`.
//! - Stop when the worst-minus-best value spread drops under the
//!   tolerance, or when the iteration budget is exhausted; report which
//!   of the two happened via [`StopReason`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Vertices are sorted ascending by objective value at the top of
//!   every iteration using `f64::total_cmp` — a total order, so NaN
//!   objective values sort as worst instead of corrupting the ordering.
//!   Objectives that can reach invalid regions are expected to return a
//!   large finite penalty there (as the MLE objective does) so simplex
//!   arithmetic never mixes infinities.
//! - The objective is evaluated exactly once per candidate vertex; the
//!   evaluation count is reported in the outcome.
//! - `converged` is defined as `iterations < max_iter`, i.e., the loop
//!   exited through the tolerance check rather than the budget. This is
//!   a deliberately weak signal and part of the estimator's stable
//!   contract; [`StopReason`] carries the same information explicitly so
//!   stronger criteria can be layered on top without changing the
//!   default behavior.
//!
//! Conventions
//! -----------
//! - The solver is deterministic: identical objective, initial point,
//!   and options produce identical iterates.
//! - Termination at the tolerance does not certify a local minimum —
//!   a flat simplex can stop anywhere. Callers needing certification
//!   must verify externally (e.g., gradient norm at the result).
//!
//! Downstream usage
//! ----------------
//! - `estimation::mle` wraps [`minimize`] around the negated
//!   log-likelihood with a penalty floor on the scale coordinate.
//!
//! Testing notes
//! -------------
//! - Unit tests drive the solver on convex quadratics (interior optimum
//!   recovery within the default budget), assert the never-worse-than-
//!   start property, the zero-coordinate nudge rule, option validation,
//!   and both stop reasons.
use crate::optimization::errors::{OptError, OptResult};
use crate::optimization::types::{
    Cost, Theta, CONTRACTION, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE, EXPANSION, REFLECTION,
    RELATIVE_NUDGE, SHRINK, ZERO_NUDGE,
};

/// Validated configuration of the simplex minimizer.
///
/// Fields
/// ------
/// - `max_iter`: `usize` — hard cap on iterations (> 0).
/// - `tol`: `f64` — stop once `worst − best < tol` (finite, > 0).
///
/// Default
/// -------
/// - `max_iter = 500`, `tol = 1e-8`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexOptions {
    pub max_iter: usize,
    pub tol: f64,
}

impl SimplexOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    /// - [`OptError::InvalidTolerance`] for non-finite or non-positive
    ///   `tol`.
    pub fn new(max_iter: usize, tol: f64) -> OptResult<Self> {
        if max_iter == 0 {
            return Err(OptError::InvalidMaxIter {
                max_iter,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        if !tol.is_finite() || tol <= 0.0 {
            return Err(OptError::InvalidTolerance {
                tol,
                reason: "Tolerance must be finite and strictly positive.",
            });
        }
        Ok(Self { max_iter, tol })
    }
}

impl Default for SimplexOptions {
    fn default() -> Self {
        Self { max_iter: DEFAULT_MAX_ITER, tol: DEFAULT_TOLERANCE }
    }
}

/// Why the main loop stopped.
///
/// Variants:
/// - `ToleranceReached`: the worst-minus-best spread fell under `tol`.
/// - `MaxIterationsExhausted`: the iteration budget ran out first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    ToleranceReached,
    MaxIterationsExhausted,
}

/// Canonical result returned by [`minimize`].
///
/// - `point`: best vertex found.
/// - `value`: objective value at `point`.
/// - `iterations`: number of loop iterations actually performed.
/// - `fn_evals`: number of objective evaluations, including the initial
///   simplex.
/// - `converged`: `iterations < max_iter` — the loop exited via the
///   tolerance check rather than exhausting its budget. A weak signal;
///   see the module docs.
/// - `stop_reason`: the raw stopping cause behind `converged`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplexOutcome {
    pub point: Theta,
    pub value: Cost,
    pub iterations: usize,
    pub fn_evals: usize,
    pub converged: bool,
    pub stop_reason: StopReason,
}

/// Minimize `objective` from `x0` with the Nelder–Mead simplex method.
///
/// Parameters
/// ----------
/// - `objective`: `FnMut(&Theta) -> Cost`
///   Scalar objective to minimize. Must return a large finite penalty
///   (not ±∞/NaN) in regions it wants the solver to avoid; NaN values
///   are tolerated (they sort as worst) but degrade the search.
/// - `x0`: `&Theta`
///   Initial point; non-empty, all coordinates finite.
/// - `options`: `&SimplexOptions`
///   Validated iteration budget and tolerance.
///
/// Returns
/// -------
/// `OptResult<SimplexOutcome>`
///   The best vertex of the final simplex with diagnostics. The simplex
///   is re-sorted before returning, so the reported vertex is the best
///   evaluated one even when the budget is exhausted mid-move.
///
/// Errors
/// ------
/// - [`OptError::EmptyInitialPoint`] for a zero-length `x0`.
/// - [`OptError::InvalidInitialPoint`] for non-finite coordinates.
///
/// Notes
/// -----
/// - One iteration = one sort + convergence check + one move
///   (reflection, possibly expansion or contraction, possibly a full
///   shrink). The move costs one or two objective evaluations, plus
///   `dim` evaluations when a shrink re-evaluates the non-best
///   vertices.
pub fn minimize<F>(
    mut objective: F, x0: &Theta, options: &SimplexOptions,
) -> OptResult<SimplexOutcome>
where
    F: FnMut(&Theta) -> Cost,
{
    let dim = x0.len();
    if dim == 0 {
        return Err(OptError::EmptyInitialPoint);
    }
    for (index, &value) in x0.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidInitialPoint {
                index,
                value,
                reason: "Initial point coordinates must be finite.",
            });
        }
    }

    // Initial simplex: x0 plus one nudged vertex per coordinate.
    let mut vertices: Vec<(Theta, Cost)> = Vec::with_capacity(dim + 1);
    vertices.push((x0.clone(), 0.0));
    for i in 0..dim {
        let mut point = x0.clone();
        point[i] += if point[i] != 0.0 { RELATIVE_NUDGE * point[i].abs() } else { ZERO_NUDGE };
        vertices.push((point, 0.0));
    }
    for vertex in &mut vertices {
        vertex.1 = objective(&vertex.0);
    }
    let mut fn_evals = dim + 1;

    let mut iterations = 0;
    let mut stop_reason = StopReason::MaxIterationsExhausted;
    while iterations < options.max_iter {
        // Ascending by value; total_cmp gives a total order even for NaN.
        vertices.sort_by(|a, b| a.1.total_cmp(&b.1));

        if vertices[dim].1 - vertices[0].1 < options.tol {
            stop_reason = StopReason::ToleranceReached;
            break;
        }

        // Centroid of all vertices except the worst.
        let mut centroid = Theta::zeros(dim);
        for (vertex, _) in vertices.iter().take(dim) {
            centroid += vertex;
        }
        centroid /= dim as f64;

        let reflected = &centroid + &((&centroid - &vertices[dim].0) * REFLECTION);
        let f_reflected = objective(&reflected);
        fn_evals += 1;

        if f_reflected >= vertices[0].1 && f_reflected < vertices[dim - 1].1 {
            vertices[dim] = (reflected, f_reflected);
        } else if f_reflected < vertices[0].1 {
            let expanded = &centroid + &((&reflected - &centroid) * EXPANSION);
            let f_expanded = objective(&expanded);
            fn_evals += 1;
            if f_expanded < f_reflected {
                vertices[dim] = (expanded, f_expanded);
            } else {
                vertices[dim] = (reflected, f_reflected);
            }
        } else {
            let contracted = &centroid + &((&vertices[dim].0 - &centroid) * CONTRACTION);
            let f_contracted = objective(&contracted);
            fn_evals += 1;
            if f_contracted < vertices[dim].1 {
                vertices[dim] = (contracted, f_contracted);
            } else {
                let best = vertices[0].0.clone();
                for vertex in vertices.iter_mut().skip(1) {
                    vertex.0 = &best + &((&vertex.0 - &best) * SHRINK);
                    vertex.1 = objective(&vertex.0);
                    fn_evals += 1;
                }
            }
        }

        iterations += 1;
    }

    vertices.sort_by(|a, b| a.1.total_cmp(&b.1));
    let converged = iterations < options.max_iter;
    let (point, value) = vertices.swap_remove(0);
    Ok(SimplexOutcome { point, value, iterations, fn_evals, converged, stop_reason })
}
