//! Compiles user-typed math expressions into a scalar function `f(x)`.
//!
//! The input is tokenized and parsed into a syntax tree whose names are
//! resolved at compile time against a closed allow-list of constants and
//! elementary functions. Nothing outside that list can be reached: an unknown
//! identifier is a compile error, and evaluation only walks the tree.
//!
//! ```
//! use stepwise_expr::compile;
//!
//! let f = compile("x**3 - x - 2").unwrap();
//! assert_eq!(f.eval(2.0).unwrap(), 4.0);
//! ```
//!
//! # Grammar
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/" | "%") unary)*
//! unary   := ("+" | "-") unary | power
//! power   := primary (("**" | "^") unary)?
//! primary := NUMBER | name | name "(" args ")" | "(" expr ")"
//! name    := IDENT ("." IDENT)?
//! ```
//!
//! Exponentiation is right-associative and binds tighter than unary minus,
//! so `-x**2` is `-(x**2)`. The `math.`, `np.` and `numpy.` prefixes are
//! accepted on built-in names and otherwise ignored.

mod ast;
mod builtin;
mod error;
mod expression;
mod parse;
mod token;

pub use builtin::names;
pub use error::{EvalError, ExpressionError};
pub use expression::{Expression, compile};
