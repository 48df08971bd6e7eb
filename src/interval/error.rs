use thiserror::Error;

/// Errors raised when building or parsing an [`Interval`](super::Interval).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Interval bounds are inverted: min {min} is greater than max {max}")]
    Inverted { min: String, max: String },

    #[error("Missing '-' separator in interval text: {0:?}")]
    MissingSeparator(String),

    #[error("Invalid interval bound: {0:?}")]
    Bound(String),
}
