use thiserror::Error;

use crate::coords::Axis;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("Latitude solver did not converge within {iterations} iterations")]
    NoConvergence { iterations: usize },
}

/// Rejected caller input. Carries enough structure to match on without
/// parsing the message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("{axis} = {value} km is outside the valid range [{min}, {max}]")]
    OutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("expected 2 or 3 coordinate values (x, y[, h]), got {0}")]
    Arity(usize),

    #[error("coordinate columns differ in length: x={x}, y={y}, h={h:?}")]
    LengthMismatch {
        x: usize,
        y: usize,
        h: Option<usize>,
    },
}

impl TransformError {
    /// The argument failure behind this error, if it is one.
    pub fn as_argument(&self) -> Option<&ArgumentError> {
        match self {
            TransformError::InvalidArgument(e) => Some(e),
            TransformError::NoConvergence { .. } => None,
        }
    }
}
