//! Error type shared by filter construction and stepping.

use thiserror::Error;

use crate::common::DataType;

/// Errors reported by [`LmsFilter`](crate::LmsFilter) and [`MatrixView`](crate::MatrixView).
///
/// None of these are transient. They all signal a caller contract violation,
/// and a failed call never modifies the filter coefficients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LmsError {
    /// The filter configuration is not usable.
    #[error("invalid filter configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The regressor matrix does not have the configured `(channels, taps)` shape.
    #[error("regressor shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Actual `(rows, cols)`.
        got: (usize, usize),
    },

    /// A flat buffer does not hold `rows * cols` elements.
    #[error("matrix data length mismatch: expected {expected:?} elements, got {got}")]
    LengthMismatch {
        /// `rows * cols`, or `None` if that product overflows.
        expected: Option<usize>,
        /// Length of the buffer.
        got: usize,
    },

    /// Only double precision regressors are accepted.
    #[error("unsupported regressor data type {0:?}, only f64 is supported")]
    UnsupportedDataType(DataType),

    /// The regressor matrix has a zero length dimension.
    #[error("empty regressor matrix ({rows} x {cols})")]
    EmptyInput {
        /// Number of rows (channels).
        rows: usize,
        /// Number of columns (taps).
        cols: usize,
    },
}
