use crate::builtin::{Binary, Unary, Variadic};

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl Op {
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Rem => floored_rem(a, b),
            Self::Pow => a.powf(b),
        }
    }
}

/// Syntax tree of a compiled expression with every name already resolved.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Const(f64),
    Var,
    Neg(Box<Node>),
    Op(Op, Box<Node>, Box<Node>),
    Unary(Unary, Box<Node>),
    Binary(Binary, Box<Node>, Box<Node>),
    Variadic(Variadic, Vec<Node>),
}

impl Node {
    pub(crate) fn op(op: Op, lhs: Node, rhs: Node) -> Self {
        Self::Op(op, Box::new(lhs), Box::new(rhs))
    }

    /// Evaluates the tree with `x` bound to the given value.
    pub(crate) fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Const(value) => *value,
            Self::Var => x,
            Self::Neg(inner) => -inner.eval(x),
            Self::Op(op, lhs, rhs) => op.apply(lhs.eval(x), rhs.eval(x)),
            Self::Unary(func, arg) => func.apply(arg.eval(x)),
            Self::Binary(func, a, b) => func.apply(a.eval(x), b.eval(x)),
            Self::Variadic(func, args) => func.apply(args.iter().map(|arg| arg.eval(x))),
        }
    }
}

/// Remainder with the sign of the divisor, as in `-7 % 3 == 2`.
fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}
