use approx::assert_relative_eq;
use thiserror::Error;

use stepwise_core::Function;

use crate::equation::{Action, Config, Status};

use super::{Error, Step, solve, solve_unobserved};

/// f(x) = x³ − x − 2, with a single real root near 1.5213797.
fn cubic(x: f64) -> f64 {
    x.powi(3) - x - 2.0
}

const CUBIC_ROOT: f64 = 1.521_379_706_804_567_4;

#[test]
fn converges_on_cubic() {
    let solution =
        solve_unobserved(&cubic, [1.0, 2.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.succeeded());
    assert_eq!(solution.message(), None);
    assert_relative_eq!(solution.x, CUBIC_ROOT, epsilon = 1e-6);
    assert!(solution.fx.abs() < 1e-6);
    assert_eq!(solution.iters, 12);
    assert_eq!(solution.steps.len(), 12);
}

#[test]
fn first_iterations_follow_the_chord() {
    let solution =
        solve_unobserved(&cubic, [1.0, 2.0], &Config::default()).expect("should converge");

    let first = solution.steps[0];
    assert_eq!(first.iter, 1);
    assert_eq!(first.bracket, [1.0, 2.0]);
    assert_relative_eq!(first.x, 4.0 / 3.0);
    assert_relative_eq!(first.fx, -26.0 / 27.0, epsilon = 1e-12);
    assert_relative_eq!(first.error, first.fx.abs());

    // f(4/3) < 0, so `a` moves and `b` stays.
    let second = solution.steps[1];
    assert_eq!(second.iter, 2);
    assert_eq!(second.bracket, [first.x, 2.0]);
    assert_relative_eq!(second.x, 1.462_686_567_164_179, epsilon = 1e-12);
}

#[test]
fn every_bracket_keeps_a_sign_change() {
    let solution =
        solve_unobserved(&cubic, [1.0, 2.0], &Config::default()).expect("should converge");

    for step in &solution.steps {
        let [a, b] = step.bracket;
        assert!(cubic(a) * cubic(b) <= 0.0, "lost sign change at {step:?}");
    }
}

#[test]
fn error_is_smaller_of_residual_and_shift() {
    let solution =
        solve_unobserved(&cubic, [1.0, 2.0], &Config::default()).expect("should converge");

    for pair in solution.steps.windows(2) {
        let [prev, step] = pair else { unreachable!() };
        let expected = step.fx.abs().min((step.x - prev.x).abs());
        assert_relative_eq!(step.error, expected);
    }
}

#[test]
fn reversed_bracket_finds_the_same_root() {
    let solution =
        solve_unobserved(&cubic, [2.0, 1.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, CUBIC_ROOT, epsilon = 1e-6);
}

#[test]
fn linear_function_converges_in_one_step() {
    let solution = solve_unobserved(&|x: f64| x - 1.0, [0.0, 3.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 1.0);
}

#[test]
fn root_at_endpoint_needs_no_iterations() {
    let f = |x: f64| x * x - 4.0;

    let solution = solve_unobserved(&f, [0.0, 2.0], &Config::default()).expect("root at b");
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert!(solution.steps.is_empty());
    assert_relative_eq!(solution.x, 2.0);

    let solution = solve_unobserved(&f, [-2.0, 5.0], &Config::default()).expect("root at a");
    assert_relative_eq!(solution.x, -2.0);
}

#[test]
fn same_sign_endpoints_are_rejected() {
    let err = solve_unobserved(&|x: f64| x * x, [1.0, 2.0], &Config::default())
        .expect_err("no sign change");

    let Error::NoSignChange { a, b, fa, fb } = err else {
        panic!("expected NoSignChange, got {err:?}");
    };
    assert_relative_eq!(a, 1.0);
    assert_relative_eq!(b, 2.0);
    assert_relative_eq!(fa, 1.0);
    assert_relative_eq!(fb, 4.0);
}

#[test]
fn non_finite_endpoints_are_rejected() {
    let err = solve_unobserved(&cubic, [f64::NAN, 2.0], &Config::default())
        .expect_err("nan endpoint");
    assert!(matches!(err, Error::NonFiniteBracket { value } if value.is_nan()));

    let err = solve_unobserved(&cubic, [1.0, f64::INFINITY], &Config::default())
        .expect_err("infinite endpoint");
    assert!(matches!(err, Error::NonFiniteBracket { .. }));
}

#[test]
fn non_finite_value_stops_the_solver() {
    // The first chord through (-1, -1) and (1, 1) lands exactly on the pole.
    let err = solve_unobserved(&|x: f64| 1.0 / x, [-1.0, 1.0], &Config::default())
        .expect_err("pole at zero");

    assert!(matches!(err, Error::NonFiniteValue { x, .. } if x == 0.0));
}

#[derive(Debug, Error)]
#[error("negative input")]
struct NegativeInput;

/// f(x) = √x − 1, failing for negative x.
struct ShiftedSqrt;

impl Function for ShiftedSqrt {
    type Error = NegativeInput;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        if x < 0.0 {
            Err(NegativeInput)
        } else {
            Ok(x.sqrt() - 1.0)
        }
    }
}

#[test]
fn function_errors_are_propagated() {
    let err = solve_unobserved(&ShiftedSqrt, [-1.0, 4.0], &Config::default())
        .expect_err("negative endpoint");

    let Error::Function(source) = err else {
        panic!("expected a function error, got {err:?}");
    };
    assert_eq!(source.to_string(), "negative input");

    let solution = solve_unobserved(&ShiftedSqrt, [0.0, 4.0], &Config::default())
        .expect("should converge");
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-5);
}

#[test]
fn max_iters_reports_last_estimate() {
    let config = Config::new(5, 1e-6).expect("valid config");

    let solution = solve_unobserved(&cubic, [1.0, 2.0], &config).expect("should finish");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.succeeded());
    assert_eq!(
        solution.message(),
        Some("max iterations reached without convergence")
    );
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.steps.len(), 5);

    let last = solution.steps.last().expect("five steps");
    assert_eq!(solution.x, last.x);
    assert_eq!(solution.fx, last.fx);
    assert_relative_eq!(solution.x, 1.519_918_550_023_356, epsilon = 1e-12);
}

#[test]
fn zero_iterations_reports_best_endpoint() {
    let config = Config::new(0, 1e-6).expect("valid config");

    let solution = solve_unobserved(&cubic, [1.0, 2.0], &config).expect("should finish");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert!(solution.steps.is_empty());
    // |f(1)| = 2 < |f(2)| = 4
    assert_relative_eq!(solution.x, 1.0);
    assert_relative_eq!(solution.fx, -2.0);
}

#[test]
fn observer_sees_every_step() {
    let mut seen = Vec::new();
    let observer = |step: &Step| {
        seen.push(step.iter);
        None::<Action>
    };

    let solution = solve(&cubic, [1.0, 2.0], &Config::default(), observer).expect("converges");

    assert_eq!(seen, (1..=solution.iters).collect::<Vec<_>>());
}

#[test]
fn observer_can_stop_early() {
    let observer = |step: &Step| (step.iter == 3).then_some(Action::StopEarly);

    let solution = solve(&cubic, [1.0, 2.0], &Config::default(), observer).expect("stops");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.message(), Some("stopped early by observer"));
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.steps.len(), 3);
    assert_eq!(solution.x, solution.steps[2].x);
}

#[test]
fn identical_inputs_give_identical_traces() {
    let first = solve_unobserved(&cubic, [1.0, 2.0], &Config::default()).expect("converges");
    let second = solve_unobserved(&cubic, [1.0, 2.0], &Config::default()).expect("converges");

    assert_eq!(first, second);
}

#[test]
fn zero_tolerance_stops_on_exact_root() {
    let config = Config::new(50, 0.0).expect("zero tol is valid");

    let solution =
        solve_unobserved(&|x: f64| x - 1.0, [0.0, 3.0], &config).expect("should converge");
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.x, 1.0);
    assert_eq!(solution.fx, 0.0);

    let solution =
        solve_unobserved(&|x: f64| x * x - 4.0, [0.0, 3.0], &config).expect("should converge");
    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0);

    let solution =
        solve_unobserved(&|x: f64| x - 1.0, [1.0, 3.0], &config).expect("root at a");
    assert_eq!(solution.iters, 0);
}
