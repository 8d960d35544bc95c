use crate::{Matrix, Vector, format::general};

/// What a recorded elimination step did.
///
/// Indices are 0-based; the generated titles and descriptions display them
/// 1-based, the way the rows and columns are written by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum StepKind {
    /// The largest candidate pivot in `column` is below tolerance.
    NullPivot { column: usize },

    /// Rows `row` and `pivot_row` were exchanged to bring `pivot` onto the
    /// diagonal of `column`.
    RowSwap {
        column: usize,
        row: usize,
        pivot_row: usize,
        pivot: f64,
    },

    /// The diagonal entry already had the largest magnitude in `column`.
    PivotInPlace { column: usize, pivot: f64 },

    /// `row` was updated as `row - multiplier * pivot_row`.
    RowElimination {
        row: usize,
        pivot_row: usize,
        multiplier: f64,
    },

    /// The entry below the pivot was already negligible; `row` is unchanged.
    NegligibleEntry {
        row: usize,
        column: usize,
        multiplier: f64,
    },

    /// The diagonal entry of `row` is below tolerance during back-substitution.
    SingularDiagonal { row: usize },

    /// `x[row]` was solved during back-substitution.
    BackSubstitution { row: usize, value: f64 },
}

impl StepKind {
    /// Short heading for the step.
    #[must_use]
    pub fn title(&self) -> String {
        match *self {
            Self::NullPivot { column } => format!("Column {}: numerically null pivot", column + 1),
            Self::RowSwap { row, pivot_row, .. } => format!(
                "Swap rows R{} \u{2194} R{} (partial pivoting)",
                row + 1,
                pivot_row + 1
            ),
            Self::PivotInPlace { column, pivot } => format!(
                "Column {c}: pivot a[{c},{c}] = {} (already the largest)",
                general(pivot, 6),
                c = column + 1
            ),
            Self::RowElimination {
                row,
                pivot_row,
                multiplier,
            } => format!(
                "R{r} \u{2190} R{r} \u{2212} ({})\u{b7}R{}",
                general(multiplier, 6),
                pivot_row + 1,
                r = row + 1
            ),
            Self::NegligibleEntry {
                row,
                column,
                multiplier,
            } => format!(
                "Entry a[{},{}] is already \u{2248} 0 (m = {multiplier:.2e})",
                row + 1,
                column + 1
            ),
            Self::SingularDiagonal { row } => {
                format!("Back substitution: pivot in row {} is \u{2248} 0", row + 1)
            }
            Self::BackSubstitution { row, .. } => {
                format!("Back substitution in row {}", row + 1)
            }
        }
    }

    /// Longer explanation of the step.
    #[must_use]
    pub fn description(&self) -> String {
        match *self {
            Self::NullPivot { .. } => "Pivot \u{2248} 0. The system may be singular or \
                                       ill-conditioned; elimination was stopped."
                .to_owned(),
            Self::RowSwap {
                column,
                pivot_row,
                pivot,
                ..
            } => format!(
                "Chosen pivot: |a[{},{}]| = {}.",
                pivot_row + 1,
                column + 1,
                general(pivot.abs(), 6)
            ),
            Self::PivotInPlace { .. } => "No swap needed.".to_owned(),
            Self::RowElimination { .. } => "Zeroing the entries below the pivot.".to_owned(),
            Self::NegligibleEntry { .. } => "No change needed in this row.".to_owned(),
            Self::SingularDiagonal { .. } => "Singular or indeterminate system.".to_owned(),
            Self::BackSubstitution { row, value } => format!(
                "x[{i}] = (b[{i}] \u{2212} \u{3a3} a[{i},j]\u{b7}x[j]) / a[{i},{i}] = {}",
                general(value, 6),
                i = row + 1
            ),
        }
    }
}

/// A single entry of the elimination trace.
///
/// The matrix and vector are owned copies of the working system taken right
/// after the operation, so later steps never alter earlier entries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    pub kind: StepKind,
    pub title: String,
    pub description: String,
    pub matrix: Matrix,
    pub vector: Vector,
}

impl Step {
    /// Records `kind` together with a snapshot of the working system.
    pub(super) fn record(kind: StepKind, matrix: &Matrix, vector: &Vector) -> Self {
        Self {
            kind,
            title: kind.title(),
            description: kind.description(),
            matrix: matrix.clone(),
            vector: vector.clone(),
        }
    }
}
