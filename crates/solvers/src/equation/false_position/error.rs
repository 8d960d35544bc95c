use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalFailure;

/// Errors that can occur during false position solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bracket endpoint is not finite: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("interval has no sign change: f({a}) = {fa}, f({b}) = {fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

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
