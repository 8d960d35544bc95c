//! Iterative root finders for scalar equations `f(x) = 0`.
//!
//! Every solver records one step per iteration so callers can display how
//! the estimate moved toward the root, not just where it ended up.
//!
//! - [`equation::false_position`] — bracketed, keeps a sign change
//! - [`equation::secant`] — open, two starting points, no bracket required

pub mod equation;
