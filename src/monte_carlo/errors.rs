use crate::distribution::errors::DistError;
use crate::estimation::errors::EstError;

/// Crate-wide result alias for Monte Carlo operations.
pub type McResult<T> = Result<T, McError>;

#[derive(Debug, Clone, PartialEq)]
pub enum McError {
    // ---- Configuration ----
    /// At least one trial is required.
    InvalidTrialCount {
        n_sims: usize,
        reason: &'static str,
    },

    /// Per-trial samples must contain at least one observation.
    InvalidSampleSize {
        n: usize,
        reason: &'static str,
    },

    /// Progress cadence must be at least one trial.
    InvalidProgressEvery {
        every: usize,
        reason: &'static str,
    },

    /// True location parameter must be finite.
    InvalidLocation {
        value: f64,
        reason: &'static str,
    },

    /// True scale parameter must be finite and strictly positive.
    InvalidScale {
        value: f64,
        reason: &'static str,
    },

    // ---- Execution ----
    /// Wrapper for estimation failures inside a trial.
    Estimation {
        text: String,
    },

    /// The progress callback requested cancellation between trials.
    Cancelled {
        completed: usize,
    },
}

impl std::error::Error for McError {}

impl std::fmt::Display for McError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            McError::InvalidTrialCount { n_sims, reason } => {
                write!(f, "Invalid trial count {n_sims}: {reason}")
            }
            McError::InvalidSampleSize { n, reason } => {
                write!(f, "Invalid per-trial sample size {n}: {reason}")
            }
            McError::InvalidProgressEvery { every, reason } => {
                write!(f, "Invalid progress cadence {every}: {reason}")
            }
            McError::InvalidLocation { value, reason } => {
                write!(f, "Invalid location parameter {value}: {reason}")
            }
            McError::InvalidScale { value, reason } => {
                write!(f, "Invalid scale parameter {value}: {reason}")
            }
            McError::Estimation { text } => {
                write!(f, "Estimation error during trial: {text}")
            }
            McError::Cancelled { completed } => {
                write!(f, "Cancelled after {completed} completed trials")
            }
        }
    }
}

impl From<DistError> for McError {
    fn from(err: DistError) -> Self {
        match err {
            DistError::InvalidLocation { value, reason } => {
                McError::InvalidLocation { value, reason }
            }
            DistError::InvalidScale { value, reason } => McError::InvalidScale { value, reason },
        }
    }
}

impl From<EstError> for McError {
    fn from(err: EstError) -> Self {
        McError::Estimation { text: err.to_string() }
    }
}
