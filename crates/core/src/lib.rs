//! Core traits shared by the stepwise solvers.
//!
//! - [`Function`] — a scalar callable `f(x)` that may fail
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
