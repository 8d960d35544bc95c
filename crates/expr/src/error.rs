use thiserror::Error;

/// Errors that can occur when compiling an expression.
///
/// Columns are 1-based character positions in the source text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("enter an expression for f(x)")]
    Empty,

    #[error("unexpected character {ch:?} at column {column}")]
    UnexpectedChar { column: usize, ch: char },

    #[error("invalid number {text:?} at column {column}")]
    InvalidNumber { column: usize, text: String },

    #[error("expected {expected} at column {column}, found {found}")]
    UnexpectedToken {
        column: usize,
        found: String,
        expected: &'static str,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown name `{name}` at column {column}")]
    UnknownName { column: usize, name: String },

    #[error("`{name}` at column {column} is not a function")]
    NotCallable { column: usize, name: String },

    #[error("function `{name}` at column {column} must be called with arguments")]
    MissingCall { column: usize, name: String },

    #[error("`{name}` takes {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: &'static str,
        found: usize,
    },

    #[error("expression is too long or nested too deeply (limit {limit} levels)")]
    TooDeep { limit: usize },
}

/// Errors that can occur when evaluating a compiled expression.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("expression evaluated to {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}
