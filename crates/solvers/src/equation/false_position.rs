//! False position (regula falsi) for bracketed roots.
//!
//! # Algorithm
//!
//! Starting from a bracket `[a, b]` with `f(a)·f(b) < 0`, each iteration
//! draws the chord between `(a, f(a))` and `(b, f(b))` and takes its zero
//! crossing as the new estimate:
//!
//! ```text
//! x = b − f(b)·(b − a) / (f(b) − f(a))
//! ```
//!
//! The endpoint whose value has the same sign as `f(x)` is replaced by `x`,
//! so the bracket always keeps a sign change.
//!
//! The solver converges when `|f(x)| < tol` or when the estimate moved less
//! than `tol` since the previous iteration. An exact zero or an unchanged
//! estimate also counts, so `tol = 0` stops on exact roots. The error recorded in each
//! [`Step`] is `|f(x)|`, or `min(|f(x)|, |x − x_prev|)` once a previous
//! estimate exists.
//!
//! # When to Use
//!
//! False position is appropriate when:
//! - A bracket with a sign change is known
//! - Guaranteed containment of the root matters more than speed
//!
//! # Limitations
//!
//! - **Needs a sign change**: Fails with [`Error::NoSignChange`] otherwise
//! - **One-sided convergence**: A convex or concave `f` keeps one endpoint
//!   fixed, which slows convergence toward linear
//!
//! # Observer Events
//!
//! The solver emits one [`Step`] per iteration, after the step is recorded.
//! Observers can return [`Action::StopEarly`] to halt with the current
//! estimate.

mod bracket;
mod error;
mod step;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use step::Step;

use stepwise_core::{Function, Observer};

use crate::equation::{Action, Config, Solution, Status, evaluate};

use bracket::Bracket;

/// Finds a root of `f` inside `bracket` using false position.
///
/// The observer receives each [`Step`] as it is recorded.
/// See the [module docs](self) for the iteration and stopping rules.
///
/// # Errors
///
/// Returns an error if an endpoint is not finite, if `f(a)` and `f(b)` have
/// the same sign, or if evaluating `f` fails or yields a non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Step>, Error>
where
    F: Function,
    Obs: Observer<Step, Action>,
{
    let [a, b] = bracket;
    if let Some(&value) = bracket.iter().find(|value| !value.is_finite()) {
        return Err(Error::NonFiniteBracket { value });
    }

    let fa = evaluate(f, a)?;
    let fb = evaluate(f, b)?;

    if config.is_root(fa) {
        log::debug!("false position: endpoint a = {a} is already a root");
        return Ok(Solution::at_start(a, fa));
    }
    if config.is_root(fb) {
        log::debug!("false position: endpoint b = {b} is already a root");
        return Ok(Solution::at_start(b, fb));
    }

    let mut bracket = Bracket::new(a, fa, b, fb)?;
    let (mut x, mut fx) = bracket.best_endpoint();
    let mut previous: Option<f64> = None;
    let mut steps = Vec::new();

    for iter in 1..=config.max_iters() {
        x = bracket.estimate();
        fx = evaluate(f, x)?;

        let shift = previous.map(|prev| (x - prev).abs());
        let step = Step {
            iter,
            bracket: bracket.endpoints(),
            x,
            fx,
            error: shift.map_or(fx.abs(), |shift| fx.abs().min(shift)),
        };
        log::trace!(
            "false position iter {iter}: x = {x}, f(x) = {fx}, error = {}",
            step.error
        );

        let action = observer.observe(&step);
        steps.push(step);

        if action == Some(Action::StopEarly) {
            log::debug!("false position stopped by observer at iter {iter}");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                fx,
                iters: iter,
                steps,
            });
        }

        if config.is_root(fx) || shift.is_some_and(|shift| config.is_settled(shift)) {
            log::debug!("false position converged to x = {x} after {iter} iterations");
            return Ok(Solution {
                status: Status::Converged,
                x,
                fx,
                iters: iter,
                steps,
            });
        }

        bracket.shrink(x, fx);
        previous = Some(x);
    }

    log::debug!(
        "false position reached {} iterations without converging",
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

/// Finds a root of `f` inside `bracket` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<Step>, Error> {
    solve(f, bracket, config, ())
}
