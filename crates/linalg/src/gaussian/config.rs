use thiserror::Error;

/// Configuration for Gaussian elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pivot_tol: f64,
}

/// Errors that can occur when validating an elimination config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pivot_tol must be finite and non-negative")]
    PivotTol,
}

impl Default for Config {
    fn default() -> Self {
        Self { pivot_tol: 1e-12 }
    }
}

impl Config {
    /// Creates a new config with a validated pivot tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn new(pivot_tol: f64) -> Result<Self, ConfigError> {
        if !pivot_tol.is_finite() || pivot_tol < 0.0 {
            return Err(ConfigError::PivotTol);
        }
        Ok(Self { pivot_tol })
    }

    /// Returns the absolute magnitude below which a pivot counts as zero.
    #[must_use]
    pub fn pivot_tol(&self) -> f64 {
        self.pivot_tol
    }
}
