use thiserror::Error;

/// Errors raised before elimination starts when the system is malformed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("matrix must be square (NxN), got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("vector must have {expected} elements (one per matrix row), got {found}")]
    VectorLength { expected: usize, found: usize },
}
