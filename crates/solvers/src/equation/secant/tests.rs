use approx::assert_relative_eq;

use crate::equation::{Action, Config, Status, false_position};

use super::{Error, Step, solve, solve_unobserved};

fn cubic(x: f64) -> f64 {
    x.powi(3) - x - 2.0
}

const CUBIC_ROOT: f64 = 1.521_379_706_804_567_4;

#[test]
fn converges_on_cubic() {
    let solution =
        solve_unobserved(&cubic, [1.0, 1.5], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, CUBIC_ROOT, epsilon = 1e-6);
    assert_eq!(solution.iters, 4);
    assert_eq!(solution.steps.len(), 4);
}

#[test]
fn needs_fewer_iterations_than_false_position() {
    let config = Config::default();

    let secant = solve_unobserved(&cubic, [1.0, 1.5], &config).expect("secant converges");
    let regula = false_position::solve_unobserved(&cubic, [1.0, 2.0], &config)
        .expect("false position converges");

    assert!(secant.iters < regula.iters);
    assert_relative_eq!(secant.x, regula.x, epsilon = 1e-6);
}

#[test]
fn window_shifts_each_iteration() {
    let solution =
        solve_unobserved(&cubic, [1.0, 1.5], &Config::default()).expect("should converge");

    let first = solution.steps[0];
    assert_eq!((first.x_prev, first.x_cur), (1.0, 1.5));
    // Secant through (1, -2) and (1.5, -0.125).
    assert_relative_eq!(first.x_next, 1.5 + 0.125 * 0.5 / 1.875);

    for pair in solution.steps.windows(2) {
        let [prev, step] = pair else { unreachable!() };
        assert_eq!(step.x_prev, prev.x_cur);
        assert_eq!(step.x_cur, prev.x_next);
        assert_relative_eq!(
            step.error,
            step.fx.abs().min((step.x_next - step.x_cur).abs())
        );
    }
}

#[test]
fn no_sign_change_is_required() {
    let solution = solve_unobserved(&|x: f64| x * x - 4.0, [3.0, 4.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
}

#[test]
fn root_at_start_needs_no_iterations() {
    let f = |x: f64| x * x - 4.0;

    let solution = solve_unobserved(&f, [2.0, 5.0], &Config::default()).expect("root at x0");
    assert_eq!(solution.iters, 0);
    assert!(solution.steps.is_empty());
    assert_relative_eq!(solution.x, 2.0);

    let solution = solve_unobserved(&f, [5.0, -2.0], &Config::default()).expect("root at x1");
    assert_relative_eq!(solution.x, -2.0);
}

#[test]
fn flat_secant_is_degenerate() {
    // f(-1) == f(1), so the first secant is horizontal.
    let err = solve_unobserved(&|x: f64| x * x + 1.0, [-1.0, 1.0], &Config::default())
        .expect_err("flat secant");

    assert!(matches!(
        err,
        Error::Degenerate {
            iter: 1,
            x0,
            x1
        } if x0 == -1.0 && x1 == 1.0
    ));
    assert!(err.to_string().starts_with("division by zero"));
}

#[test]
fn non_finite_start_is_rejected() {
    let err = solve_unobserved(&cubic, [1.0, f64::NAN], &Config::default())
        .expect_err("nan start");
    assert!(matches!(err, Error::NonFiniteStart { value } if value.is_nan()));
}

#[test]
fn non_finite_value_stops_the_solver() {
    let err = solve_unobserved(&|x: f64| (x - 2.0).sqrt() - 1.0, [1.0, 3.0], &Config::default())
        .expect_err("sqrt of a negative");
    assert!(matches!(err, Error::NonFiniteValue { x, .. } if x == 1.0));
}

#[test]
fn max_iters_reports_last_estimate() {
    let config = Config::new(2, 1e-6).expect("valid config");

    let solution = solve_unobserved(&cubic, [1.0, 1.5], &config).expect("should finish");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(
        solution.message(),
        Some("max iterations reached without convergence")
    );
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.x, solution.steps[1].x_next);
    assert_relative_eq!(solution.x, 1.521_182_451_515_722_2, epsilon = 1e-12);
}

#[test]
fn observer_can_stop_early() {
    let observer = |step: &Step| (step.iter == 2).then_some(Action::StopEarly);

    let solution = solve(&cubic, [1.0, 1.5], &Config::default(), observer).expect("stops");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.x, solution.steps[1].x_next);
    assert_eq!(solution.fx, solution.steps[1].fx);
}

#[test]
fn identical_inputs_give_identical_traces() {
    let first = solve_unobserved(&cubic, [1.0, 1.5], &Config::default()).expect("converges");
    let second = solve_unobserved(&cubic, [1.0, 1.5], &Config::default()).expect("converges");

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

    let solution =
        solve_unobserved(&|x: f64| x * x - 4.0, [0.0, 3.0], &config).expect("should converge");
    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0);

    let solution =
        solve_unobserved(&|x: f64| x - 1.0, [3.0, 1.0], &config).expect("root at x1");
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, 1.0);
}
