use crate::error::{Result, RrefError};
use crate::rings::fraction::Fraction;
use itertools::Itertools;
use num_traits::{One, Zero};

pub type Row = Vec<Fraction>;

/// Equations in the augmented matrix.
pub const ROWS: usize = 3;
/// Three coefficients and the constant.
pub const COLS: usize = 4;

pub fn check_shape(matrix: &[Row]) -> Result<()> {
    if matrix.len() == ROWS && matrix.iter().all(|row| row.len() == COLS) {
        return Ok(());
    }
    Err(RrefError::Shape {
        rows: matrix.len(),
        widths: matrix.iter().map(|row| row.len()).collect(),
    })
}

/// Largest leading magnitude first. The sort is stable, rows with the same
/// magnitude keep their order.
pub fn sort_by_leading_magnitude(matrix: &mut [Row]) {
    matrix.sort_by(|a, b| b[0].abs().cmp(&a[0].abs()));
}

/// Cross multiplies two rows so the term at `pos` cancels:
/// `result[k] = r0[pos] * r1[k] - r1[pos] * r0[k]`.
///
/// No division happens, so the entries stay as simple as the inputs allow and
/// `result[pos]` is exactly zero.
pub fn reduce_pos_to_zero(pos: usize, r0: &[Fraction], r1: &[Fraction]) -> Row {
    let minuend = r1.iter().map(|x| r0[pos].clone() * x.clone());
    let subtrahend = r0.iter().map(|x| r1[pos].clone() * x.clone());
    minuend.zip(subtrahend).map(|(m, s)| m - s).collect()
}

/// Divides the nth row by its coefficient at column n, dropping rows where that
/// coefficient is zero (or missing).
///
/// ```text
/// | A B C D |                | 1   B/A C/A D/A |
/// | 0 E F G |   results in   | 0   1   F/E G/E |
/// | 0 0 H I |                | 0   0   1   I/H |
/// ```
pub fn divide_by_diagonal_coefficient(matrix: Vec<Row>) -> Vec<Row> {
    matrix
        .into_iter()
        .enumerate()
        .filter_map(|(pos, row)| {
            let diagonal = row.get(pos).filter(|x| !x.is_zero())?.clone();
            if diagonal.is_one() {
                return Some(row);
            }
            Some(row.into_iter().map(|x| x / diagonal.clone()).collect())
        })
        .collect()
}

/// Positions whose diagonal coefficient is zero, i.e. the rows
/// [`divide_by_diagonal_coefficient`] would drop.
pub fn zero_diagonal_rows(matrix: &[Row]) -> Vec<usize> {
    matrix
        .iter()
        .enumerate()
        .filter(|(pos, row)| row.get(*pos).map_or(true, |x| x.is_zero()))
        .map(|(pos, _)| pos)
        .collect()
}

/// One row per line, `[1, -1/2, 0, 3]`.
pub fn format_matrix(matrix: &[Row]) -> String {
    matrix
        .iter()
        .map(|row| format!("[{}]", row.iter().join(", ")))
        .join("\n")
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Row {
        values.iter().map(|v| v.parse().unwrap()).collect()
    }

    #[test]
    fn test_check_shape() {
        let good = vec![row(&["1", "2", "3", "4"]); 3];
        assert!(check_shape(&good).is_ok());

        let bad_shapes = vec![
            vec![row(&["1", "2", "3", "4"]); 2],
            vec![row(&["1", "2", "3", "4"]); 4],
            vec![],
            vec![
                row(&["1", "2", "3", "4"]),
                row(&["1", "2", "3"]),
                row(&["1", "2", "3", "4"]),
            ],
            vec![
                row(&["1", "2", "3", "4", "5"]),
                row(&["1", "2", "3", "4"]),
                row(&["1", "2", "3", "4"]),
            ],
        ];
        for matrix in bad_shapes {
            match check_shape(&matrix) {
                Err(RrefError::Shape { rows, widths }) => {
                    assert_eq!(rows, matrix.len());
                    assert_eq!(widths, matrix.iter().map(|r| r.len()).collect::<Vec<_>>());
                }
                other => panic!("expected a shape error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_shape_error_message() {
        let err = check_shape(&[row(&["1"])]).unwrap_err();
        assert_eq!(err.to_string(), "Matrix must be of dimensions 3x4");
    }

    #[test]
    fn test_sort_by_leading_magnitude() {
        let mut matrix = vec![
            row(&["1", "0", "0", "1"]),
            row(&["-3", "0", "0", "2"]),
            row(&["2", "0", "0", "3"]),
        ];
        sort_by_leading_magnitude(&mut matrix);
        assert_eq!(
            matrix,
            vec![
                row(&["-3", "0", "0", "2"]),
                row(&["2", "0", "0", "3"]),
                row(&["1", "0", "0", "1"]),
            ]
        );
    }

    #[test]
    fn test_sort_keeps_ties_in_order() {
        let mut matrix = vec![
            row(&["-2", "1", "0", "0"]),
            row(&["0", "0", "1", "0"]),
            row(&["2", "5", "0", "0"]),
        ];
        sort_by_leading_magnitude(&mut matrix);
        assert_eq!(matrix[0], row(&["-2", "1", "0", "0"]));
        assert_eq!(matrix[1], row(&["2", "5", "0", "0"]));

        let mut matrix = vec![
            row(&["2", "5", "0", "0"]),
            row(&["-2", "1", "0", "0"]),
            row(&["0", "0", "1", "0"]),
        ];
        sort_by_leading_magnitude(&mut matrix);
        assert_eq!(matrix[0], row(&["2", "5", "0", "0"]));
        assert_eq!(matrix[1], row(&["-2", "1", "0", "0"]));
    }

    #[test]
    fn test_reduce_pos_to_zero() {
        let r0 = row(&["2", "-1", "1", "3"]);
        let r1 = row(&["1", "1", "1", "6"]);
        assert_eq!(reduce_pos_to_zero(0, &r0, &r1), row(&["0", "3", "1", "9"]));

        let r0 = row(&["1/2", "1/3", "0", "1"]);
        let r1 = row(&["1/4", "-2/3", "5", "7/2"]);
        let reduced = reduce_pos_to_zero(1, &r0, &r1);
        assert_eq!(reduced[1], 0);
        assert_eq!(reduced, row(&["5/12", "0", "5/3", "11/6"]));
    }

    #[test]
    fn test_divide_by_diagonal_coefficient() {
        let matrix = vec![
            row(&["2", "-1", "1", "3"]),
            row(&["0", "3", "1", "9"]),
            row(&["0", "0", "-14", "-60"]),
        ];
        let normalized = divide_by_diagonal_coefficient(matrix);
        assert_eq!(
            normalized,
            vec![
                row(&["1", "-1/2", "1/2", "3/2"]),
                row(&["0", "1", "1/3", "3"]),
                row(&["0", "0", "1", "30/7"]),
            ]
        );

        // already normalized rows are left alone
        assert_eq!(divide_by_diagonal_coefficient(normalized.clone()), normalized);
    }

    #[test]
    fn test_divide_drops_zero_diagonal() {
        let matrix = vec![
            row(&["2", "4", "6", "8"]),
            row(&["0", "0", "0", "0"]),
            row(&["0", "0", "0", "0"]),
        ];
        assert_eq!(zero_diagonal_rows(&matrix), vec![1, 2]);
        assert_eq!(
            divide_by_diagonal_coefficient(matrix),
            vec![row(&["1", "2", "3", "4"])]
        );
    }

    #[test]
    fn test_format_matrix() {
        let matrix = vec![row(&["1", "-1/2", "0", "6/2"]), row(&["0", "1", "2", "3"])];
        assert_eq!(format_matrix(&matrix), "[1, -1/2, 0, 3]\n[0, 1, 2, 3]");
    }
}
