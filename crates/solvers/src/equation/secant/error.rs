use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalFailure;

/// Errors that can occur during secant solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("starting point is not finite: {value}")]
    NonFiniteStart { value: f64 },

    #[error("division by zero at iteration {iter}: f({x1}) - f({x0}) is effectively zero")]
    Degenerate { iter: usize, x0: f64, x1: f64 },

    #[error("f({x}) is not finite: {value}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<EvalFailure> for Error {
    fn from(err: EvalFailure) -> Self {
        match err {
            EvalFailure::Function(e) => Self::Function(e),
            EvalFailure::NonFinite { x, value } => Self::NonFiniteValue { x, value },
        }
    }
}
