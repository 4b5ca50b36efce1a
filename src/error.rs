use crate::rings::fraction::FractionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RrefError {
    /// Anything other than 3 rows of 4 entries.
    #[error("Matrix must be of dimensions 3x4")]
    Shape { rows: usize, widths: Vec<usize> },

    #[error("Invalid matrix entry: {0}")]
    Parse(#[from] FractionError),

    /// Rows (indexed after pivot ordering) whose diagonal entry was zero once
    /// elimination finished. The fixed pipeline never swaps rows after the first
    /// column, so this covers dependent and inconsistent systems as well as
    /// systems that would need a later row exchange.
    #[error("Zero on the diagonal of row(s) {rows:?} after elimination, cannot normalize")]
    ZeroDiagonal { rows: Vec<usize> },

    #[error("Failed to read matrix: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RrefError>;
