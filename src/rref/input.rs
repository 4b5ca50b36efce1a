use crate::error::{Result, RrefError};
use crate::rings::fraction::Fraction;
use crate::rref::engine::{reduced_row_echelon, WriterObserver};
use crate::rref::row::Row;
use std::io::{self, BufRead, Write};

/// The ways a matrix can be handed to [`display_rre_steps`].
#[derive(Debug, Clone)]
pub enum MatrixInput {
    /// Ask for the matrix on stdin.
    Prompt,
    /// `"a,b,c,d;e,f,g,h;i,j,k,l"`
    Text(String),
    Rows(Vec<Row>),
}

impl From<&str> for MatrixInput {
    fn from(text: &str) -> Self {
        MatrixInput::Text(text.to_string())
    }
}

impl From<String> for MatrixInput {
    fn from(text: String) -> Self {
        MatrixInput::Text(text)
    }
}

impl From<Vec<Row>> for MatrixInput {
    fn from(rows: Vec<Row>) -> Self {
        MatrixInput::Rows(rows)
    }
}

impl From<Vec<Vec<i64>>> for MatrixInput {
    fn from(rows: Vec<Vec<i64>>) -> Self {
        MatrixInput::Rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Fraction::from).collect())
                .collect(),
        )
    }
}

/// Rows are separated by `;` and entries by `,`. The shape is not checked here.
pub fn parse_matrix(text: &str) -> Result<Vec<Row>> {
    text.split(';')
        .map(|row| {
            row.split(',')
                .map(|entry| entry.parse::<Fraction>().map_err(RrefError::from))
                .collect::<Result<Row>>()
        })
        .collect()
}

/// Prints `Matrix?` and reads back one line, without its line ending.
pub fn prompt_matrix<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<String> {
    write!(writer, "Matrix?")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Reduces the matrix while printing every step to stdout. Empty input falls
/// back to the prompt.
pub fn display_rre_steps(input: MatrixInput) -> Result<Vec<Row>> {
    let matrix = match input {
        MatrixInput::Text(text) if !text.is_empty() => parse_matrix(&text)?,
        MatrixInput::Rows(rows) if !rows.is_empty() => rows,
        _ => parse_matrix(&prompt_matrix(io::stdin().lock(), io::stdout())?)?,
    };
    reduced_row_echelon(matrix, &mut WriterObserver::stdout())
}

/// Short name for [`display_rre_steps`].
pub fn rre(input: impl Into<MatrixInput>) -> Result<Vec<Row>> {
    display_rre_steps(input.into())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
