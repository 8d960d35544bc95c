use std::convert::Infallible;

/// A scalar function `f(x)` evaluated by the root finders.
///
/// Evaluation may fail, which lets compiled user expressions report problems
/// (such as a non-numeric result) instead of silently producing garbage.
///
/// Plain closures `Fn(f64) -> f64` implement this trait with an
/// [`Infallible`] error.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
