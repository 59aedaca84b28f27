use thiserror::Error;

/// Errors raised by the numeric routines.
///
/// Non-finite results (`inf`, `NaN`) are not errors: they are returned as
/// values so callers can see exactly what the formula produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// Labels and predictions must be paired element by element.
    #[error("length mismatch: {labels} labels vs {predicted} predictions")]
    LengthMismatch { labels: usize, predicted: usize },

    /// Softmax over zero logits has no meaning.
    #[error("input sequence must not be empty")]
    EmptyInput,

    /// Clamp epsilon outside (0, 0.5).
    #[error("clamp epsilon must lie in (0, 0.5), got {0}")]
    InvalidEpsilon(f64),
}

pub type MathResult<T> = Result<T, MathError>;
