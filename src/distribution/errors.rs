/// Crate-wide result alias for distribution operations.
pub type DistResult<T> = Result<T, DistError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DistError {
    /// Location parameter must be finite.
    InvalidLocation {
        value: f64,
        reason: &'static str,
    },

    /// Scale parameter must be finite and strictly positive.
    InvalidScale {
        value: f64,
        reason: &'static str,
    },
}

impl std::error::Error for DistError {}

impl std::fmt::Display for DistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistError::InvalidLocation { value, reason } => {
                write!(f, "Invalid location parameter {value}: {reason}")
            }
            DistError::InvalidScale { value, reason } => {
                write!(f, "Invalid scale parameter {value}: {reason}")
            }
        }
    }
}
