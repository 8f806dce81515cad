use thiserror::Error;

/// Result alias used by every fallible matrix operation.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Which dimension an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

/// Errors returned by matrix construction and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The buffer for a `rows x cols` matrix could not be allocated.
    #[error("failed to allocate a {rows}x{cols} matrix")]
    Allocation { rows: usize, cols: usize },

    /// A constructor received a number of values that does not fill the shape.
    #[error("invalid shape ({rows}, {cols}) for {len} values")]
    ValueCount { rows: usize, cols: usize, len: usize },

    /// Operand shapes are incompatible for `op`.
    #[error("shape mismatch in {op}: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// A row or column index is past the end of the matrix.
    #[error("{axis} index {index} out of bounds for length {len}")]
    IndexOutOfBounds { axis: Axis, index: usize, len: usize },
}
