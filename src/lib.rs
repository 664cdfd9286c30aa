//! logistic_lab — estimation and inference engine for the logistic law.
//!
//! Purpose
//! -------
//! Serve as the computational core behind an interactive teaching tool
//! for logistic-distribution parameter estimation, and as the PyO3
//! bridge that exposes that core to notebook front-ends via the
//! `_logistic_lab` extension module when the `python-bindings` feature
//! is enabled. The crate generates reproducible synthetic samples,
//! fits Method-of-Moments and Maximum-Likelihood estimates, runs Wald
//! tests with Fisher-information variances, and aggregates Monte Carlo
//! bias/MSE studies.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules (`distribution`, `sampling`,
//!   `statistics`, `estimation`, `optimization`, `inference`,
//!   `monte_carlo`) as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for
//!   the `_logistic_lab` Python extension behind the feature gate.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs
//!   only FFI glue, input coercion, and error mapping.
//! - Determinism is end to end: `(n, parameters, seed)` fixes a sample
//!   bit for bit, and identical samples produce identical estimates.
//! - The core is pure and synchronous — no I/O, no logging, no global
//!   state. Long-running work reports through caller-supplied
//!   callbacks, which double as cooperative cancellation points.
//!
//! Conventions
//! -----------
//! - Results are plain structured data; number formatting, charting,
//!   and persistence belong to the consuming layer.
//! - Errors from core code are rich per-module enums internally and are
//!   converted to Python exceptions at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust callers depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by `python-bindings`.
//! - Python callers import `_logistic_lab` (typically wrapped by a thin
//!   pure-Python facade) and work with the read-only result classes
//!   defined here.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   the integration suite under `tests/`, which chains
//!   sampler → estimators → inference → Monte Carlo on seeded data.

pub mod distribution;
pub mod estimation;
pub mod inference;
pub mod monte_carlo;
pub mod optimization;
pub mod sampling;
pub mod statistics;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyRuntimeError, exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    distribution::Logistic,
    estimation::{estimate_mle, estimate_mom, types::MleEstimate, types::MomEstimate},
    inference::{
        confidence_interval, fisher_information, wald_test, ConfidenceInterval, FisherInfo,
        WaldTestResult,
    },
    monte_carlo::{
        run_monte_carlo, MethodSummary, MonteCarloConfig, MonteCarloRun, MonteCarloSignal,
    },
    statistics::DescriptiveStats,
    utils::extract_f64_array,
};

/// SummaryStats — Python-facing descriptive summary of a sample.
///
/// Thin read-only wrapper over [`DescriptiveStats`]; constructed by
/// [`descriptive_stats`] and inspected through scalar getters.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "logistic_lab")]
pub struct SummaryStats {
    inner: DescriptiveStats,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SummaryStats {
    #[getter]
    pub fn n(&self) -> usize {
        self.inner.n
    }

    #[getter]
    pub fn mean(&self) -> f64 {
        self.inner.mean
    }

    #[getter]
    pub fn variance(&self) -> f64 {
        self.inner.variance
    }

    #[getter]
    pub fn std(&self) -> f64 {
        self.inner.std
    }

    #[getter]
    pub fn median(&self) -> f64 {
        self.inner.median
    }

    #[getter]
    pub fn min(&self) -> f64 {
        self.inner.min
    }

    #[getter]
    pub fn max(&self) -> f64 {
        self.inner.max
    }
}

/// MomFit — Python-facing Method-of-Moments estimate.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "logistic_lab")]
pub struct MomFit {
    inner: MomEstimate,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MomFit {
    #[getter]
    pub fn location(&self) -> f64 {
        self.inner.location
    }

    #[getter]
    pub fn scale(&self) -> f64 {
        self.inner.scale
    }
}

/// MleFit — Python-facing Maximum-Likelihood estimate with optimizer
/// diagnostics (log-likelihood, iterations, convergence, timing).
#[cfg(feature = "python-bindings")]
#[pyclass(module = "logistic_lab")]
pub struct MleFit {
    inner: MleEstimate,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MleFit {
    #[getter]
    pub fn location(&self) -> f64 {
        self.inner.location
    }

    #[getter]
    pub fn scale(&self) -> f64 {
        self.inner.scale
    }

    #[getter]
    pub fn log_likelihood(&self) -> f64 {
        self.inner.log_likelihood
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn elapsed_ms(&self) -> f64 {
        self.inner.elapsed.as_secs_f64() * 1e3
    }
}

/// FisherDiagnostics — asymptotic variances for both parameters.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "logistic_lab")]
pub struct FisherDiagnostics {
    inner: FisherInfo,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl FisherDiagnostics {
    #[getter]
    pub fn var_location(&self) -> f64 {
        self.inner.var_location
    }

    #[getter]
    pub fn var_scale(&self) -> f64 {
        self.inner.var_scale
    }
}

/// WaldOutcome — z-statistic, p-value, and rejection decision.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "logistic_lab")]
pub struct WaldOutcome {
    inner: WaldTestResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl WaldOutcome {
    #[getter]
    pub fn estimate(&self) -> f64 {
        self.inner.estimate
    }

    #[getter]
    pub fn null_value(&self) -> f64 {
        self.inner.null_value
    }

    #[getter]
    pub fn standard_error(&self) -> f64 {
        self.inner.standard_error
    }

    #[getter]
    pub fn z_score(&self) -> f64 {
        self.inner.z_score
    }

    #[getter]
    pub fn p_value(&self) -> f64 {
        self.inner.p_value
    }

    #[getter]
    pub fn rejected(&self) -> bool {
        self.inner.rejected
    }
}

/// Interval — symmetric asymptotic confidence interval.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "logistic_lab")]
pub struct Interval {
    inner: ConfidenceInterval,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Interval {
    #[getter]
    pub fn lower(&self) -> f64 {
        self.inner.lower
    }

    #[getter]
    pub fn upper(&self) -> f64 {
        self.inner.upper
    }

    #[getter]
    pub fn level(&self) -> f64 {
        self.inner.level
    }
}

/// MethodReport — one method's side of a Monte Carlo study.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "logistic_lab")]
#[derive(Clone)]
pub struct MethodReport {
    inner: MethodSummary,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MethodReport {
    #[getter]
    pub fn location_bias(&self) -> f64 {
        self.inner.location.bias
    }

    #[getter]
    pub fn location_mse(&self) -> f64 {
        self.inner.location.mse
    }

    #[getter]
    pub fn location_std(&self) -> f64 {
        self.inner.location.std
    }

    #[getter]
    pub fn scale_bias(&self) -> f64 {
        self.inner.scale.bias
    }

    #[getter]
    pub fn scale_mse(&self) -> f64 {
        self.inner.scale.mse
    }

    #[getter]
    pub fn scale_std(&self) -> f64 {
        self.inner.scale.std
    }

    /// Per-trial location estimates (for sampling-distribution plots).
    #[getter]
    pub fn location_estimates(&self) -> Vec<f64> {
        self.inner.location_estimates.clone()
    }

    /// Per-trial scale estimates (for sampling-distribution plots).
    #[getter]
    pub fn scale_estimates(&self) -> Vec<f64> {
        self.inner.scale_estimates.clone()
    }
}

/// StudyOutcome — full result of one Monte Carlo study.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "logistic_lab")]
pub struct StudyOutcome {
    inner: MonteCarloRun,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl StudyOutcome {
    #[getter]
    pub fn mom(&self) -> MethodReport {
        MethodReport { inner: self.inner.mom.clone() }
    }

    #[getter]
    pub fn mle(&self) -> MethodReport {
        MethodReport { inner: self.inner.mle.clone() }
    }

    #[getter]
    pub fn avg_mle_elapsed_ms(&self) -> f64 {
        self.inner.avg_mle_elapsed.as_secs_f64() * 1e3
    }
}

/// Draw `n` logistic variates as a numpy array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (n, location, scale, seed), text_signature = "(n, location, scale, seed, /)")]
pub fn simulate<'py>(
    py: Python<'py>, n: usize, location: f64, scale: f64, seed: u32,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let dist =
        Logistic::new(location, scale).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let sample = crate::sampling::simulate(n, &dist, seed);
    Ok(sample.into_pyarray(py))
}

/// Descriptive summary of a data array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(data, /)")]
pub fn descriptive_stats<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>,
) -> PyResult<SummaryStats> {
    let arr = extract_f64_array(py, data)?;
    let slice = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("data must be a contiguous 1-D float64 array"))?;
    let inner = DescriptiveStats::from_sample(slice)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(SummaryStats { inner })
}

/// Method-of-Moments fit of a data array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(data, /)")]
pub fn fit_mom<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<MomFit> {
    let arr = extract_f64_array(py, data)?;
    let slice = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("data must be a contiguous 1-D float64 array"))?;
    let inner = estimate_mom(slice).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(MomFit { inner })
}

/// Maximum-likelihood fit of a data array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (data, seed_with_mom = true), text_signature = "(data, /, seed_with_mom=True)")]
pub fn fit_mle<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, seed_with_mom: bool,
) -> PyResult<MleFit> {
    let arr = extract_f64_array(py, data)?;
    let slice = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("data must be a contiguous 1-D float64 array"))?;
    let inner =
        estimate_mle(slice, seed_with_mom).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(MleFit { inner })
}

/// Asymptotic Fisher-information variances at a fitted scale.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "fisher_information", text_signature = "(n, scale, /)")]
pub fn fisher_information_py(n: usize, scale: f64) -> PyResult<FisherDiagnostics> {
    let inner =
        fisher_information(n, scale).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(FisherDiagnostics { inner })
}

/// Two-sided Wald z-test of an estimate against a null value.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "wald_test",
    signature = (estimate, null_value, variance, alpha = 0.05),
    text_signature = "(estimate, null_value, variance, /, alpha=0.05)"
)]
pub fn wald_test_py(
    estimate: f64, null_value: f64, variance: f64, alpha: f64,
) -> PyResult<WaldOutcome> {
    let inner = wald_test(estimate, null_value, variance, alpha)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(WaldOutcome { inner })
}

/// Symmetric asymptotic confidence interval around an estimate.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "confidence_interval",
    signature = (estimate, variance, alpha = 0.05),
    text_signature = "(estimate, variance, /, alpha=0.05)"
)]
pub fn confidence_interval_py(estimate: f64, variance: f64, alpha: f64) -> PyResult<Interval> {
    let inner = confidence_interval(estimate, variance, alpha)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(Interval { inner })
}

/// Monte Carlo bias/MSE study with an optional progress callable.
///
/// The callable receives the completed percentage and may return
/// `False` to cancel the study between trials.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "monte_carlo",
    signature = (n_sims, location, scale, n, progress = None),
    text_signature = "(n_sims, location, scale, n, /, progress=None)"
)]
pub fn monte_carlo_py<'py>(
    n_sims: usize, location: f64, scale: f64, n: usize, progress: Option<&Bound<'py, PyAny>>,
) -> PyResult<StudyOutcome> {
    let config = MonteCarloConfig::new(n_sims, location, scale, n)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let mut callback_error: Option<PyErr> = None;
    let mut callback = |snapshot: crate::monte_carlo::MonteCarloProgress| {
        let Some(callable) = progress else {
            return MonteCarloSignal::Continue;
        };
        match callable.call1((snapshot.percent,)) {
            Ok(returned) => match returned.is_truthy() {
                Ok(false) => MonteCarloSignal::Cancel,
                _ => MonteCarloSignal::Continue,
            },
            Err(err) => {
                callback_error = Some(err);
                MonteCarloSignal::Cancel
            }
        }
    };

    let result = run_monte_carlo(&config, Some(&mut callback));
    if let Some(err) = callback_error {
        return Err(err);
    }
    let inner = result.map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
    Ok(StudyOutcome { inner })
}

/// _logistic_lab — PyO3 module initializer for the Python extension.
///
/// Registers the estimation, inference, and Monte Carlo surface on the
/// `_logistic_lab` module; a thin pure-Python package is expected to
/// wrap it with user-facing names.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _logistic_lab<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_function(wrap_pyfunction!(descriptive_stats, m)?)?;
    m.add_function(wrap_pyfunction!(fit_mom, m)?)?;
    m.add_function(wrap_pyfunction!(fit_mle, m)?)?;
    m.add_function(wrap_pyfunction!(fisher_information_py, m)?)?;
    m.add_function(wrap_pyfunction!(wald_test_py, m)?)?;
    m.add_function(wrap_pyfunction!(confidence_interval_py, m)?)?;
    m.add_function(wrap_pyfunction!(monte_carlo_py, m)?)?;
    m.add_class::<SummaryStats>()?;
    m.add_class::<MomFit>()?;
    m.add_class::<MleFit>()?;
    m.add_class::<FisherDiagnostics>()?;
    m.add_class::<WaldOutcome>()?;
    m.add_class::<Interval>()?;
    m.add_class::<MethodReport>()?;
    m.add_class::<StudyOutcome>()?;
    Ok(())
}
