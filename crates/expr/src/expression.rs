use std::{fmt, str::FromStr};

use stepwise_core::Function;

use crate::{EvalError, ExpressionError, ast::Node, parse::parse, token::tokenize};

/// A compiled expression in the single free variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

/// Compiles expression text into an [`Expression`].
///
/// # Errors
///
/// Returns an error if the input is blank, is not valid syntax, or uses a
/// name outside the allow-list (see [`names`](crate::names)).
pub fn compile(source: &str) -> Result<Expression, ExpressionError> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let tokens = tokenize(source)?;
    let root = parse(&tokens)?;
    log::debug!("compiled expression {trimmed:?}");

    Ok(Expression {
        source: trimmed.to_owned(),
        root,
    })
}

impl Expression {
    /// Returns the source text the expression was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is NaN or infinite, as happens for
    /// `1/x` at zero or `sqrt(x)` for negative `x`.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let value = self.root.eval(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite { x, value })
        }
    }
}

impl Function for Expression {
    type Error = EvalError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval(x)
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    fn eval(src: &str, x: f64) -> f64 {
        compile(src).expect("valid expression").eval(x).expect("finite")
    }

    #[test]
    fn evaluates_cubic() {
        assert_relative_eq!(eval("x**3 - x - 2", 1.5), -0.125);
        assert_relative_eq!(eval("x^3 - x - 2", 2.0), 4.0);
    }

    #[test]
    fn evaluates_builtins() {
        assert_relative_eq!(eval("sin(pi/2) + cos(0)", 0.0), 2.0);
        assert_relative_eq!(eval("np.exp(x) - math.e", 1.0), 0.0, epsilon = 1e-15);
        assert_relative_eq!(eval("sqrt(x) * log(e)", 16.0), 4.0, epsilon = 1e-12);
        assert_relative_eq!(eval("atan2(1, 1)", 0.0), PI / 4.0);
        assert_relative_eq!(eval("max(x, 2, -1) - min(x, 2)", 5.0), 3.0);
        assert_relative_eq!(eval("-x**2", 3.0), -9.0);
        assert_relative_eq!(eval("x % 3", -7.0), 2.0);
        assert_relative_eq!(eval("2**-1", 0.0), 0.5);
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(compile(""), Err(ExpressionError::Empty));
        assert_eq!(compile("   \t"), Err(ExpressionError::Empty));
        assert_eq!(
            ExpressionError::Empty.to_string(),
            "enter an expression for f(x)"
        );
    }

    #[test]
    fn non_finite_results_are_errors() {
        let f = compile("1 / x").expect("valid expression");
        assert_eq!(
            f.eval(0.0),
            Err(EvalError::NonFinite {
                x: 0.0,
                value: f64::INFINITY
            })
        );

        let g = compile("sqrt(x)").expect("valid expression");
        assert!(matches!(g.eval(-1.0), Err(EvalError::NonFinite { .. })));
    }

    #[test]
    fn sandbox_rejects_unknown_identifiers() {
        for src in ["open(x)", "exit()", "x + y", "np.linalg(x)", "sys.path"] {
            assert!(
                matches!(compile(src), Err(ExpressionError::UnknownName { .. })),
                "{src} must be rejected"
            );
        }
    }

    #[test]
    fn very_long_input_is_rejected_not_evaluated() {
        let long = format!("x{}", "+x".repeat(100_000));
        assert!(matches!(
            compile(&long),
            Err(ExpressionError::TooDeep { .. })
        ));

        let accepted = format!("x{}", "+x".repeat(150));
        assert_relative_eq!(eval(&accepted, 1.0), 151.0);
    }

    #[test]
    fn works_as_a_function() {
        let f: Expression = "x**2 - 4".parse().expect("valid expression");
        assert_relative_eq!(f.call(2.0).expect("finite"), 0.0);
        assert_eq!(f.to_string(), "x**2 - 4");
        assert_eq!(f.source(), "x**2 - 4");
    }

    #[test]
    fn identical_input_gives_identical_results() {
        let a = compile("exp(-x) * cos(3*x)").expect("valid expression");
        let b = compile("exp(-x) * cos(3*x)").expect("valid expression");
        assert_eq!(a, b);
        assert_eq!(
            a.eval(0.7).expect("finite").to_bits(),
            b.eval(0.7).expect("finite").to_bits()
        );
    }
}
