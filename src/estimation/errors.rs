use crate::optimization::errors::OptError;
use crate::statistics::errors::StatsError;

/// Crate-wide result alias for estimation operations.
pub type EstResult<T> = Result<T, EstError>;

#[derive(Debug, Clone, PartialEq)]
pub enum EstError {
    // ---- Sample errors ----
    /// Estimation on an empty sample has no defensible result.
    EmptySample,

    /// Observations must be finite (no NaN, no ±∞).
    NonFiniteObservation {
        index: usize,
        value: f64,
    },

    // ---- Optimizer ----
    /// Wrapper for optimizer configuration/input failures.
    Optimizer {
        text: String,
    },
}

impl std::error::Error for EstError {}

impl std::fmt::Display for EstError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstError::EmptySample => {
                write!(f, "Cannot estimate from an empty sample")
            }
            EstError::NonFiniteObservation { index, value } => {
                write!(f, "Non-finite observation at index {index}: {value}")
            }
            EstError::Optimizer { text } => {
                write!(f, "Optimizer error: {text}")
            }
        }
    }
}

impl From<StatsError> for EstError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::EmptySample => EstError::EmptySample,
            StatsError::NonFiniteObservation { index, value } => {
                EstError::NonFiniteObservation { index, value }
            }
        }
    }
}

impl From<OptError> for EstError {
    fn from(err: OptError) -> Self {
        EstError::Optimizer { text: err.to_string() }
    }
}
