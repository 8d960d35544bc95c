//! Secant iteration from two starting points.
//!
//! # Algorithm
//!
//! Given estimates `x0` and `x1`, each iteration replaces the derivative in
//! Newton's method with the slope through the two most recent points:
//!
//! ```text
//! x2 = x1 − f(x1)·(x1 − x0) / (f(x1) − f(x0))
//! ```
//!
//! and then shifts the window so `(x0, x1) ← (x1, x2)`.
//!
//! The solver converges when `|f(x2)| < tol` or `|x2 − x1| < tol`. An exact
//! zero or an unchanged estimate also counts, so `tol = 0` stops on exact roots. The error
//! recorded in each [`Step`] is `min(|f(x2)|, |x2 − x1|)`.
//!
//! # When to Use
//!
//! The secant method is appropriate when:
//! - A good initial guess is available
//! - No bracket with a sign change is known
//! - Fast (superlinear) convergence matters more than guaranteed containment
//!
//! # Limitations
//!
//! - **No containment**: Estimates can leave the region of interest or diverge
//! - **Flat secants**: Fails with [`Error::Degenerate`] when `f(x1) − f(x0)`
//!   is effectively zero
//!
//! # Observer Events
//!
//! The solver emits one [`Step`] per iteration, after the step is recorded.
//! Observers can return [`Action::StopEarly`] to halt with the current
//! estimate.

mod error;
mod step;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use step::Step;

use stepwise_core::{Function, Observer};

use crate::equation::{Action, Config, Solution, Status, evaluate};

/// Secant slopes with a rise smaller than this are treated as flat.
pub const DEGENERATE_DENOMINATOR: f64 = 1e-30;

/// Finds a root of `f` by secant iteration from the two points in `start`.
///
/// The observer receives each [`Step`] as it is recorded.
/// See the [module docs](self) for the iteration and stopping rules.
///
/// # Errors
///
/// Returns an error if a starting point is not finite, if the secant becomes
/// flat, or if evaluating `f` fails or yields a non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    start: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Step>, Error>
where
    F: Function,
    Obs: Observer<Step, Action>,
{
    if let Some(&value) = start.iter().find(|value| !value.is_finite()) {
        return Err(Error::NonFiniteStart { value });
    }

    let [mut x0, mut x1] = start;

    let mut f0 = evaluate(f, x0)?;
    if config.is_root(f0) {
        log::debug!("secant: starting point x0 = {x0} is already a root");
        return Ok(Solution::at_start(x0, f0));
    }

    let mut f1 = evaluate(f, x1)?;
    if config.is_root(f1) {
        log::debug!("secant: starting point x1 = {x1} is already a root");
        return Ok(Solution::at_start(x1, f1));
    }

    let (mut x, mut fx) = (x1, f1);
    let mut steps = Vec::new();

    for iter in 1..=config.max_iters() {
        let denom = f1 - f0;
        if denom.abs() < DEGENERATE_DENOMINATOR {
            log::debug!("secant is flat at iter {iter}: f({x1}) - f({x0}) = {denom}");
            return Err(Error::Degenerate { iter, x0, x1 });
        }

        let x2 = x1 - f1 * (x1 - x0) / denom;
        let f2 = evaluate(f, x2)?;
        (x, fx) = (x2, f2);

        let shift = (x2 - x1).abs();
        let step = Step {
            iter,
            x_prev: x0,
            x_cur: x1,
            x_next: x2,
            fx: f2,
            error: f2.abs().min(shift),
        };
        log::trace!(
            "secant iter {iter}: x = {x2}, f(x) = {f2}, error = {}",
            step.error
        );

        let action = observer.observe(&step);
        steps.push(step);

        if action == Some(Action::StopEarly) {
            log::debug!("secant stopped by observer at iter {iter}");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                fx,
                iters: iter,
                steps,
            });
        }

        if config.is_root(f2) || config.is_settled(shift) {
            log::debug!("secant converged to x = {x2} after {iter} iterations");
            return Ok(Solution {
                status: Status::Converged,
                x,
                fx,
                iters: iter,
                steps,
            });
        }

        (x0, f0) = (x1, f1);
        (x1, f1) = (x2, f2);
    }

    log::debug!(
        "secant reached {} iterations without converging",
        config.max_iters()
    );
    Ok(Solution {
        status: Status::MaxIters,
        x,
        fx,
        iters: config.max_iters(),
        steps,
    })
}

/// Finds a root of `f` by secant iteration without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    start: [f64; 2],
    config: &Config,
) -> Result<Solution<Step>, Error> {
    solve(f, start, config, ())
}
