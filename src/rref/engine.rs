use crate::error::{Result, RrefError};
use crate::rref::row::{
    check_shape, divide_by_diagonal_coefficient, format_matrix, reduce_pos_to_zero,
    sort_by_leading_magnitude, zero_diagonal_rows, Row,
};
use log::{debug, warn};
use num_traits::Zero;
use std::io::{self, Stdout, Write};

/// Checkpoints at which the engine shows the matrix to its observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Rows sorted by the magnitude of their first entry.
    Pivoted,
    /// Column 0 is zero below the first row.
    FirstColumnCleared,
    /// Column 1 is zero in the last row.
    SecondColumnCleared,
    /// Every row divided by its diagonal entry.
    Normalized,
    /// Off-diagonal coefficients cleared.
    BackSubstituted,
}

/// Receives a snapshot of the matrix after each [`Step`].
///
/// Observers only look, the engine's result does not depend on them.
pub trait StepObserver {
    fn observe(&mut self, step: Step, matrix: &[Row]);
}

impl<F> StepObserver for F
where
    F: FnMut(Step, &[Row]),
{
    fn observe(&mut self, step: Step, matrix: &[Row]) {
        self(step, matrix)
    }
}

/// Writes every snapshot, one row per line, followed by two blank lines.
pub struct WriterObserver<W: Write> {
    writer: W,
}

impl<W: Write> WriterObserver<W> {
    pub fn new(writer: W) -> Self {
        WriterObserver { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterObserver<Stdout> {
    pub fn stdout() -> Self {
        WriterObserver::new(io::stdout())
    }
}

impl<W: Write> StepObserver for WriterObserver<W> {
    fn observe(&mut self, step: Step, matrix: &[Row]) {
        if let Err(error) = write!(self.writer, "{}\n\n\n", format_matrix(matrix)) {
            warn!("Could not write the {:?} snapshot: {}", step, error);
        }
    }
}

fn emit(observer: &mut dyn StepObserver, step: Step, matrix: &[Row]) {
    debug!("{:?}\n{}", step, format_matrix(matrix));
    observer.observe(step, matrix);
}

/// Puts a 3x4 augmented matrix into Reduced Row Echelon Form.
///
/// The pipeline is fixed: order the rows by leading magnitude, clear column 0
/// under the first row and column 1 under the second, normalize the diagonal,
/// then clear the entries above it. Everything stays an exact fraction.
pub fn reduced_row_echelon(
    mut matrix: Vec<Row>,
    observer: &mut dyn StepObserver,
) -> Result<Vec<Row>> {
    check_shape(&matrix)?;

    // A zero on top would make every elimination below it degenerate
    sort_by_leading_magnitude(&mut matrix);
    emit(observer, Step::Pivoted, &matrix);

    matrix[1] = reduce_pos_to_zero(0, &matrix[0], &matrix[1]);
    matrix[2] = reduce_pos_to_zero(0, &matrix[0], &matrix[2]);
    debug_assert!(matrix[1][0].is_zero());
    debug_assert!(matrix[2][0].is_zero());
    emit(observer, Step::FirstColumnCleared, &matrix);

    matrix[2] = reduce_pos_to_zero(1, &matrix[1], &matrix[2]);
    debug_assert!(matrix[2][1].is_zero());
    emit(observer, Step::SecondColumnCleared, &matrix);

    let dropped = zero_diagonal_rows(&matrix);
    let mut matrix = divide_by_diagonal_coefficient(matrix);
    emit(observer, Step::Normalized, &matrix);
    if !dropped.is_empty() {
        warn!("Dropped row(s) {:?} with a zero diagonal entry", dropped);
        return Err(RrefError::ZeroDiagonal { rows: dropped });
    }

    matrix[0] = reduce_pos_to_zero(1, &matrix[0], &matrix[1]);
    matrix[0] = reduce_pos_to_zero(2, &matrix[0], &matrix[2]);
    // Row 2 goes first here: (2, row 1, row 2) yields the negated row
    matrix[1] = reduce_pos_to_zero(2, &matrix[2], &matrix[1]);
    emit(observer, Step::BackSubstituted, &matrix);

    Ok(matrix)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
