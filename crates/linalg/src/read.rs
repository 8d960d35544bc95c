//! Parsing of free-form matrix and vector text.
//!
//! Tokens are separated by whitespace or commas. A matrix has one row per
//! non-empty line; a vector ignores line structure entirely.

use thiserror::Error;

use crate::{Matrix, Vector};

/// Errors that can occur when reading matrix or vector text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormatError {
    #[error("invalid number {token:?} on line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("all rows must have the same number of columns: line {line} has {found}, expected {expected}")]
    RaggedRows {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix must be square (NxN), got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("line {line} is missing the `|` separator")]
    MissingSeparator { line: usize },

    #[error("line {line} must have exactly one right-hand side value, found {found}")]
    RightHandSide { line: usize, found: usize },
}

/// Parses a square matrix, one row per non-empty line.
///
/// Empty or blank input yields a 0×0 matrix.
///
/// # Errors
///
/// Returns an error if a token is not a number, if rows differ in length,
/// or if the row count differs from the column count.
pub fn parse_matrix(text: &str) -> Result<Matrix, FormatError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (line, content) in numbered_lines(text) {
        let row = parse_tokens(content, line)?;
        check_row_length(&rows, &row, line)?;
        rows.push(row);
    }

    square(rows)
}

/// Parses a vector from all tokens in the input, regardless of line breaks.
///
/// Empty or blank input yields an empty vector.
///
/// # Errors
///
/// Returns an error if a token is not a number.
pub fn parse_vector(text: &str) -> Result<Vector, FormatError> {
    let mut values = Vec::new();
    for (line, content) in numbered_lines(text) {
        values.extend(parse_tokens(content, line)?);
    }
    Ok(Vector::from(values))
}

/// Parses the `[ a11 a12 | b1 ]` layout produced by
/// [`format_augmented`](crate::format_augmented).
///
/// Surrounding brackets are optional. Each line must hold exactly one value
/// to the right of the `|`.
///
/// # Errors
///
/// Returns an error if a line lacks the separator, has a malformed right-hand
/// side, or if the left-hand sides do not form a square matrix.
pub fn parse_augmented(text: &str) -> Result<(Matrix, Vector), FormatError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut rhs = Vec::new();

    for (line, content) in numbered_lines(text) {
        let content = content
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']');
        let (left, right) = content
            .split_once('|')
            .ok_or(FormatError::MissingSeparator { line })?;

        let row = parse_tokens(left, line)?;
        check_row_length(&rows, &row, line)?;

        let right = parse_tokens(right, line)?;
        let &[value] = right.as_slice() else {
            return Err(FormatError::RightHandSide {
                line,
                found: right.len(),
            });
        };

        rows.push(row);
        rhs.push(value);
    }

    Ok((square(rows)?, Vector::from(rhs)))
}

/// Yields non-blank lines with their 1-based line numbers.
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
}

fn parse_tokens(content: &str, line: usize) -> Result<Vec<f64>, FormatError> {
    content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| FormatError::InvalidNumber {
                line,
                token: token.to_owned(),
            })
        })
        .collect()
}

fn check_row_length(rows: &[Vec<f64>], row: &[f64], line: usize) -> Result<(), FormatError> {
    match rows.first() {
        Some(first) if first.len() != row.len() => Err(FormatError::RaggedRows {
            line,
            expected: first.len(),
            found: row.len(),
        }),
        _ => Ok(()),
    }
}

/// Assembles equal-length rows into a square matrix.
fn square(rows: Vec<Vec<f64>>) -> Result<Matrix, FormatError> {
    let n = rows.len();
    let cols = rows.first().map_or(0, Vec::len);
    if cols != n {
        return Err(FormatError::NotSquare { rows: n, cols });
    }
    Ok(Matrix::from_shape_fn((n, n), |(i, j)| rows[i][j]))
}
