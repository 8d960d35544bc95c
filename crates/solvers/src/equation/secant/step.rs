/// One secant iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// The older of the two points the secant was drawn through.
    pub x_prev: f64,

    /// The newer of the two points the secant was drawn through.
    pub x_cur: f64,

    /// The new estimate.
    pub x_next: f64,

    /// `f(x_next)`.
    pub fx: f64,

    /// `min(|f(x_next)|, |x_next − x_cur|)`.
    pub error: f64,
}
