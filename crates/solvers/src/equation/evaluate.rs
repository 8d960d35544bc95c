use std::error::Error as StdError;

use thiserror::Error;

use stepwise_core::Function;

/// Errors that can occur when evaluating `f(x)`.
#[derive(Debug, Error)]
pub enum EvalFailure {
    /// The function itself failed.
    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    /// The function returned NaN or an infinity.
    #[error("f({x}) is not finite: {value}")]
    NonFinite { x: f64, value: f64 },
}

/// Evaluates `f` at `x`, rejecting non-finite results.
///
/// # Errors
///
/// Returns an error if the function fails or its value is NaN or infinite.
pub fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, EvalFailure> {
    let value = f
        .call(x)
        .map_err(|err| EvalFailure::Function(Box::new(err)))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalFailure::NonFinite { x, value })
    }
}
