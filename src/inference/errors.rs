/// Crate-wide result alias for inference operations.
pub type InfResult<T> = Result<T, InfError>;

#[derive(Debug, Clone, PartialEq)]
pub enum InfError {
    /// Sample size must be at least one for asymptotic variances.
    InvalidSampleSize {
        n: usize,
        reason: &'static str,
    },

    /// Scale estimate must be finite and strictly positive.
    InvalidScale {
        value: f64,
        reason: &'static str,
    },

    /// Variance must be finite and strictly positive.
    InvalidVariance {
        value: f64,
        reason: &'static str,
    },

    /// Significance level must lie strictly inside (0, 1).
    InvalidAlpha {
        value: f64,
        reason: &'static str,
    },

    /// Estimates and null values must be finite.
    NonFiniteInput {
        value: f64,
        reason: &'static str,
    },
}

impl std::error::Error for InfError {}

impl std::fmt::Display for InfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfError::InvalidSampleSize { n, reason } => {
                write!(f, "Invalid sample size {n}: {reason}")
            }
            InfError::InvalidScale { value, reason } => {
                write!(f, "Invalid scale {value}: {reason}")
            }
            InfError::InvalidVariance { value, reason } => {
                write!(f, "Invalid variance {value}: {reason}")
            }
            InfError::InvalidAlpha { value, reason } => {
                write!(f, "Invalid significance level {value}: {reason}")
            }
            InfError::NonFiniteInput { value, reason } => {
                write!(f, "Non-finite input {value}: {reason}")
            }
        }
    }
}
