use crate::{Matrix, Vector};

use super::{Step, StepKind};

/// The outcome of a Gaussian elimination run.
///
/// A singular or ill-conditioned system is not an error: it is reported with
/// `success == false` and no solution, while the trace up to the failing
/// pivot is kept for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Elimination {
    /// Every recorded operation, in the order it happened.
    pub steps: Vec<Step>,

    /// Triangularized matrix, or `None` if elimination stopped on a null pivot.
    pub matrix: Option<Matrix>,

    /// Right-hand side matching [`Elimination::matrix`].
    pub vector: Option<Vector>,

    /// Solution vector, present only when `success` is true.
    pub solution: Option<Vector>,

    /// Number of row swaps performed by partial pivoting.
    pub swaps: usize,

    /// Whether a unique solution was found.
    pub success: bool,
}

impl Elimination {
    /// Returns the row-swap steps in trace order.
    pub fn swap_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps
            .iter()
            .filter(|step| matches!(step.kind, StepKind::RowSwap { .. }))
    }

    /// Returns true if the run stopped because of a (near-)zero pivot.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        !self.success
    }
}
