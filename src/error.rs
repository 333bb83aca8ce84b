//! Errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum MathError {
    #[error("Cannot normalize a value with zero or non-finite magnitude (norm = {norm})")]
    DegenerateNorm { norm: f64 },

    #[error("Element ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Element {index} is out of bounds for a vector of length {len}")]
    VectorIndexOutOfBounds { index: usize, len: usize },
}

/// Returns the given norm if it can be divided by, or a
/// [`MathError::DegenerateNorm`] if it is zero or not finite.
pub(crate) fn nondegenerate_norm(norm: f64) -> Result<f64> {
    if norm == 0.0 || !norm.is_finite() {
        log::debug!("Rejecting normalization of value with norm {norm}");
        Err(MathError::DegenerateNorm { norm })
    } else {
        Ok(norm)
    }
}
