use thiserror::Error;

/// Configuration shared by the root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating a root finder config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            tol: 1e-6,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// A tolerance of zero is allowed; the solver then only stops on an exact
    /// root, a repeated estimate, or the iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self { max_iters, tol })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance applied to both `|f(x)|` and the step size.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns true if `fx` is an exact zero or `|fx| < tol`.
    pub(crate) fn is_root(&self, fx: f64) -> bool {
        fx == 0.0 || fx.abs() < self.tol
    }

    /// Returns true if an estimate moved by `shift` has stopped moving.
    pub(crate) fn is_settled(&self, shift: f64) -> bool {
        shift == 0.0 || shift < self.tol
    }
}
