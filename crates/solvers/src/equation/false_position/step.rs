/// One false position iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// The bracket `[a, b]` the estimate was drawn from.
    pub bracket: [f64; 2],

    /// The new estimate.
    pub x: f64,

    /// `f(x)` at the new estimate.
    pub fx: f64,

    /// `|f(x)|`, or `min(|f(x)|, |x − x_prev|)` after the first iteration.
    pub error: f64,
}
