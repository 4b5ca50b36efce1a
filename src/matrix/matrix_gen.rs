use num_traits::{One, Zero};

use crate::matrix::matrix::Matrix;
use std::ops::{Add, Div, Mul, Sub};

pub trait GenElement:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::cmp::Ord
    + std::fmt::Debug
{
}

impl<T> GenElement for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::cmp::Ord
        + std::fmt::Debug
{
}

#[derive(Debug, Clone)]
pub struct MatrixGen<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: GenElement> MatrixGen<T> {
    fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T: GenElement> Matrix<T> for MatrixGen<T> {
    // Short lines are padded with zeros up to the longest one
    fn from_list(lines: Vec<Vec<T>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        MatrixGen {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let padding = cols - l.len();
                    l.into_iter().chain(std::iter::repeat_n(T::zero(), padding))
                })
                .collect(),
        }
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn is_rref(&self) -> bool {
        let mut lead = None;

        for i in 0..self.rows {
            let pivot_col_opt = self.row(i).iter().position(|x| *x != T::zero());

            match pivot_col_opt {
                None => {
                    // zero rows may only be followed by zero rows
                    if (i + 1..self.rows).any(|r| self.row(r).iter().any(|x| *x != T::zero())) {
                        return false;
                    }
                    break;
                }
                Some(pivot_col) => {
                    if lead.is_some_and(|prev_lead| pivot_col <= prev_lead) {
                        return false;
                    }
                    lead = Some(pivot_col);

                    if self.at(i, pivot_col) != T::one() {
                        return false;
                    }

                    if (0..self.rows).any(|r| r != i && self.at(r, pivot_col) != T::zero()) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Reads the unknowns off the constant column when the coefficient block is
    /// the identity, i.e. the system has exactly one solution.
    fn augmented_solution(&self) -> Option<Vec<T>> {
        let unknowns = self.rows;
        if self.cols != unknowns + 1 || !self.is_rref() {
            return None;
        }

        let identity = (0..unknowns).all(|r| {
            (0..unknowns).all(|c| {
                let expected = if r == c { T::one() } else { T::zero() };
                self.at(r, c) == expected
            })
        });

        identity.then(|| (0..unknowns).map(|r| self.at(r, unknowns)).collect())
    }

    fn is_solved_by(&self, solution: &[T]) -> bool {
        if solution.len() + 1 != self.cols {
            return false;
        }

        (0..self.rows).all(|r| {
            let lhs: T = solution
                .iter()
                .enumerate()
                .map(|(c, x)| self.at(r, c) * x.clone())
                .sum();
            lhs == self.at(r, solution.len())
        })
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
