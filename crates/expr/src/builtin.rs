//! The closed allow-list of names an expression may use.

use std::f64::consts;

/// Namespace prefixes accepted in front of built-in names.
pub(crate) const NAMESPACES: [&str; 3] = ["math", "np", "numpy"];

/// A resolved name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Builtin {
    Variable,
    Constant(f64),
    Unary(Unary),
    Binary(Binary),
    Variadic(Variadic),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unary {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Exp,
    Exp2,
    Expm1,
    Ln,
    Log10,
    Log2,
    Log1p,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Trunc,
    Round,
    Sign,
    Degrees,
    Radians,
}

impl Unary {
    pub(crate) fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Asinh => x.asinh(),
            Self::Acosh => x.acosh(),
            Self::Atanh => x.atanh(),
            Self::Exp => x.exp(),
            Self::Exp2 => x.exp2(),
            Self::Expm1 => x.exp_m1(),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Log2 => x.log2(),
            Self::Log1p => x.ln_1p(),
            Self::Sqrt => x.sqrt(),
            Self::Cbrt => x.cbrt(),
            Self::Abs => x.abs(),
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
            Self::Trunc => x.trunc(),
            Self::Round => x.round_ties_even(),
            // Zero keeps its value, unlike `f64::signum`.
            Self::Sign => {
                if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    x
                }
            }
            Self::Degrees => x.to_degrees(),
            Self::Radians => x.to_radians(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Binary {
    Atan2,
    Pow,
    Hypot,
}

impl Binary {
    pub(crate) fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Atan2 => a.atan2(b),
            Self::Pow => a.powf(b),
            Self::Hypot => a.hypot(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Variadic {
    Min,
    Max,
}

impl Variadic {
    pub(crate) fn apply(self, values: impl Iterator<Item = f64>) -> f64 {
        match self {
            Self::Min => values.fold(f64::INFINITY, f64::min),
            Self::Max => values.fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

const TABLE: &[(&str, Builtin)] = &[
    ("x", Builtin::Variable),
    ("pi", Builtin::Constant(consts::PI)),
    ("e", Builtin::Constant(consts::E)),
    ("tau", Builtin::Constant(consts::TAU)),
    ("sin", Builtin::Unary(Unary::Sin)),
    ("cos", Builtin::Unary(Unary::Cos)),
    ("tan", Builtin::Unary(Unary::Tan)),
    ("asin", Builtin::Unary(Unary::Asin)),
    ("arcsin", Builtin::Unary(Unary::Asin)),
    ("acos", Builtin::Unary(Unary::Acos)),
    ("arccos", Builtin::Unary(Unary::Acos)),
    ("atan", Builtin::Unary(Unary::Atan)),
    ("arctan", Builtin::Unary(Unary::Atan)),
    ("sinh", Builtin::Unary(Unary::Sinh)),
    ("cosh", Builtin::Unary(Unary::Cosh)),
    ("tanh", Builtin::Unary(Unary::Tanh)),
    ("asinh", Builtin::Unary(Unary::Asinh)),
    ("arcsinh", Builtin::Unary(Unary::Asinh)),
    ("acosh", Builtin::Unary(Unary::Acosh)),
    ("arccosh", Builtin::Unary(Unary::Acosh)),
    ("atanh", Builtin::Unary(Unary::Atanh)),
    ("arctanh", Builtin::Unary(Unary::Atanh)),
    ("exp", Builtin::Unary(Unary::Exp)),
    ("exp2", Builtin::Unary(Unary::Exp2)),
    ("expm1", Builtin::Unary(Unary::Expm1)),
    ("log", Builtin::Unary(Unary::Ln)),
    ("ln", Builtin::Unary(Unary::Ln)),
    ("log10", Builtin::Unary(Unary::Log10)),
    ("log2", Builtin::Unary(Unary::Log2)),
    ("log1p", Builtin::Unary(Unary::Log1p)),
    ("sqrt", Builtin::Unary(Unary::Sqrt)),
    ("cbrt", Builtin::Unary(Unary::Cbrt)),
    ("abs", Builtin::Unary(Unary::Abs)),
    ("fabs", Builtin::Unary(Unary::Abs)),
    ("floor", Builtin::Unary(Unary::Floor)),
    ("ceil", Builtin::Unary(Unary::Ceil)),
    ("trunc", Builtin::Unary(Unary::Trunc)),
    ("round", Builtin::Unary(Unary::Round)),
    ("sign", Builtin::Unary(Unary::Sign)),
    ("degrees", Builtin::Unary(Unary::Degrees)),
    ("radians", Builtin::Unary(Unary::Radians)),
    ("atan2", Builtin::Binary(Binary::Atan2)),
    ("arctan2", Builtin::Binary(Binary::Atan2)),
    ("pow", Builtin::Binary(Binary::Pow)),
    ("power", Builtin::Binary(Binary::Pow)),
    ("hypot", Builtin::Binary(Binary::Hypot)),
    ("min", Builtin::Variadic(Variadic::Min)),
    ("max", Builtin::Variadic(Variadic::Max)),
];

/// Looks up a name in the allow-list.
pub(crate) fn resolve(name: &str) -> Option<Builtin> {
    TABLE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, builtin)| builtin)
}

/// Returns every name an expression may use, in a stable order.
///
/// Useful for showing users what is available.
pub fn names() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|&(name, _)| name)
}
