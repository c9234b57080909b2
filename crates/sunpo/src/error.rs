use thiserror::Error;

/// Rejected input to a checked scaling operation.
///
/// The lossy counterparts on [`Metrics`](crate::Metrics) log these and
/// substitute their documented fallback values instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScaleError {
    /// Percentage outside the 0..=100 range, or not a number.
    #[error("percentage out of range: {0}")]
    InvalidPercent(f64),

    /// Negative or non-numeric size.
    #[error("invalid size: {0}")]
    InvalidSize(f64),

    /// Non-positive or non-numeric font size.
    #[error("invalid font size: {0}")]
    InvalidFontSize(f64),
}
