/// Indicates whether the solver converged, ran out of iterations, or was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns a human-readable explanation for statuses other than `Converged`.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Converged => None,
            Self::MaxIters => Some("max iterations reached without convergence"),
            Self::StoppedByObserver => Some("stopped early by observer"),
        }
    }
}

/// The result of a root finder, with one step per iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution<S> {
    /// Final solver status.
    pub status: Status,

    /// The root, or the last estimate if the solver did not converge.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Iteration trace, ordered by iteration number.
    pub steps: Vec<S>,
}

impl<S> Solution<S> {
    /// Returns a solution found at a starting point, before any iteration.
    pub(crate) fn at_start(x: f64, fx: f64) -> Self {
        Self {
            status: Status::Converged,
            x,
            fx,
            iters: 0,
            steps: Vec::new(),
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the failure message, if the solver did not converge.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.status.message()
    }
}
