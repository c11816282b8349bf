use thiserror::Error;

use crate::ConfigError;

/// Errors that can occur while running a solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no root in bracket: f({left})={f_left}, f({right})={f_right}")]
    InvalidBracket {
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },

    /// Newton's method used all of its iterations without meeting the tolerance.
    #[error("iteration limit of {iters} exceeded")]
    IterationLimitExceeded { iters: usize },

    #[error("failed to converge after {iters} iterations")]
    NonConvergence { iters: usize },

    /// The function was evaluated at, or returned, a non-finite value.
    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },

    #[error("invalid step size {step}: must be finite and non-zero")]
    InvalidStep { step: f64 },
}
