use thiserror::Error;

/// Tolerances and iteration caps shared by the solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Convergence tolerance.
    ///
    /// Each solver compares a different quantity against it: the residual for
    /// root finding, the change between successive estimates for derivatives
    /// and quadrature, and the local error estimate for adaptive ODE steps.
    pub tol: f64,

    /// Upper bound on iterations for loops without a natural limit.
    pub max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-3,
            max_iters: 10_000,
        }
    }
}

impl Config {
    /// Returns the default config with a different tolerance.
    #[must_use]
    pub fn with_tol(tol: f64) -> Self {
        Self {
            tol,
            ..Self::default()
        }
    }

    /// Validates the tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(())
    }
}
