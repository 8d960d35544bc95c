//! Gaussian elimination with partial pivoting.
//!
//! # Algorithm
//!
//! For each pivot column `k` the row with the largest magnitude in that
//! column (among rows `k..N`) is swapped onto the diagonal, then every row
//! below is reduced by a multiple of the pivot row. Back-substitution solves
//! the resulting upper-triangular system from the last row upward.
//!
//! # Trace
//!
//! Every operation is recorded as a [`Step`] holding an owned snapshot of the
//! matrix and right-hand side *after* the operation. Steps are appended in
//! order and never touched again.
//!
//! # Singular systems
//!
//! A pivot or diagonal entry whose magnitude is below
//! [`Config::pivot_tol`] ends the run with `success == false` and no
//! solution. This is a normal outcome, returned as data, while mismatched
//! dimensions are rejected up front with a [`DimensionError`].

mod config;
mod elimination;
mod error;
mod step;


pub use config::{Config, ConfigError};
pub use elimination::Elimination;
pub use error::DimensionError;
pub use step::{Step, StepKind};

use crate::{Matrix, Vector};

/// Solves `a · x = b` by Gaussian elimination with partial pivoting.
///
/// The inputs are copied; the returned [`Elimination`] carries the full step
/// trace, the triangularized system, and the solution when one exists.
///
/// # Errors
///
/// Returns a [`DimensionError`] if `a` is not square or `b` does not have one
/// element per row of `a`.
pub fn eliminate(a: &Matrix, b: &Vector, config: &Config) -> Result<Elimination, DimensionError> {
    let n = check_dimensions(a, b)?;
    let tol = config.pivot_tol();

    let mut a = a.clone();
    let mut b = b.clone();
    let mut steps = Vec::new();
    let mut swaps = 0;

    for k in 0..n.saturating_sub(1) {
        let pivot_row = select_pivot(&a, k);
        let pivot = a[[pivot_row, k]];

        if pivot.abs() < tol {
            record(&mut steps, StepKind::NullPivot { column: k }, &a, &b);
            log::debug!("gaussian: null pivot in column {k}, |pivot| = {:e}", pivot.abs());
            return Ok(Elimination {
                steps,
                matrix: None,
                vector: None,
                solution: None,
                swaps,
                success: false,
            });
        }

        if pivot_row == k {
            record(&mut steps, StepKind::PivotInPlace { column: k, pivot }, &a, &b);
        } else {
            swap_rows(&mut a, &mut b, k, pivot_row);
            swaps += 1;
            let kind = StepKind::RowSwap {
                column: k,
                row: k,
                pivot_row,
                pivot,
            };
            record(&mut steps, kind, &a, &b);
        }

        for i in k + 1..n {
            let multiplier = a[[i, k]] / a[[k, k]];

            if multiplier.abs() > tol {
                for j in k..n {
                    let delta = multiplier * a[[k, j]];
                    a[[i, j]] -= delta;
                }
                let delta = multiplier * b[k];
                b[i] -= delta;

                let kind = StepKind::RowElimination {
                    row: i,
                    pivot_row: k,
                    multiplier,
                };
                record(&mut steps, kind, &a, &b);
            } else {
                let kind = StepKind::NegligibleEntry {
                    row: i,
                    column: k,
                    multiplier,
                };
                record(&mut steps, kind, &a, &b);
            }
        }
    }

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let diagonal = a[[i, i]];

        if diagonal.abs() < tol {
            record(&mut steps, StepKind::SingularDiagonal { row: i }, &a, &b);
            log::debug!("gaussian: singular diagonal in row {i}");
            return Ok(Elimination {
                steps,
                matrix: Some(a),
                vector: Some(b),
                solution: None,
                swaps,
                success: false,
            });
        }

        let known: f64 = (i + 1..n).map(|j| a[[i, j]] * x[j]).sum();
        x[i] = (b[i] - known) / diagonal;
        record(
            &mut steps,
            StepKind::BackSubstitution { row: i, value: x[i] },
            &a,
            &b,
        );
    }

    log::debug!("gaussian: solved {n}x{n} system with {swaps} row swap(s)");
    Ok(Elimination {
        steps,
        matrix: Some(a),
        vector: Some(b),
        solution: Some(x),
        swaps,
        success: true,
    })
}

/// Returns `a · x − b`, the residual used to verify a solution.
///
/// Floating-point round-off makes small nonzero residuals normal.
///
/// # Errors
///
/// Returns a [`DimensionError`] if the shapes of `a`, `x`, and `b` disagree.
pub fn residual(a: &Matrix, x: &Vector, b: &Vector) -> Result<Vector, DimensionError> {
    let n = check_dimensions(a, b)?;
    if x.len() != n {
        return Err(DimensionError::VectorLength {
            expected: n,
            found: x.len(),
        });
    }
    Ok(a.dot(x) - b)
}

/// Validates that `a` is square and `b` matches, returning N.
fn check_dimensions(a: &Matrix, b: &Vector) -> Result<usize, DimensionError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(DimensionError::NotSquare { rows, cols });
    }
    if b.len() != rows {
        return Err(DimensionError::VectorLength {
            expected: rows,
            found: b.len(),
        });
    }
    Ok(rows)
}

/// Returns the row in `k..N` with the largest magnitude in column `k`.
///
/// Ties keep the topmost row.
fn select_pivot(a: &Matrix, k: usize) -> usize {
    let mut best = k;
    for i in k + 1..a.nrows() {
        if a[[i, k]].abs() > a[[best, k]].abs() {
            best = i;
        }
    }
    best
}

fn swap_rows(a: &mut Matrix, b: &mut Vector, r1: usize, r2: usize) {
    for j in 0..a.ncols() {
        a.swap([r1, j], [r2, j]);
    }
    b.swap(r1, r2);
}

fn record(steps: &mut Vec<Step>, kind: StepKind, a: &Matrix, b: &Vector) {
    log::trace!("gaussian: {}", kind.title());
    steps.push(Step::record(kind, a, b));
}
