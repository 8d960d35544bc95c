//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! A [`Function`] supplies `f(x)`. Both solvers stop when `|f(x)|` or the
//! distance between consecutive estimates falls below the configured
//! tolerance, and report the full iteration trace in their [`Solution`].
//!
//! # Solvers
//!
//! - [`false_position`] — regula falsi on a bracket with a sign change
//! - [`secant`] — secant iteration from two starting points
//!
//! [`Function`]: stepwise_core::Function

mod action;
mod config;
mod evaluate;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use evaluate::{EvalFailure, evaluate};
pub use solution::{Solution, Status};

pub mod false_position;
pub mod secant;
