/// Crate-wide result alias for descriptive-statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// No sentinel is mathematically defensible for an empty sample.
    EmptySample,

    /// Observations must be finite (no NaN, no ±∞).
    NonFiniteObservation {
        index: usize,
        value: f64,
    },
}

impl std::error::Error for StatsError {}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::EmptySample => {
                write!(f, "Sample must not be empty")
            }
            StatsError::NonFiniteObservation { index, value } => {
                write!(f, "Non-finite observation at index {index}: {value}")
            }
        }
    }
}
