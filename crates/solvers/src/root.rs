//! Root finding: a bracketing secant method and a derivative-free Newton method.

use tracing::{debug, trace};

use crate::{Config, Error, evaluate::evaluate};

/// Iteration cap for [`newton`].
pub const NEWTON_MAX_ITERS: usize = 50;

/// Initial finite-difference step for [`newton`].
const NEWTON_INITIAL_STEP: f64 = 0.1;

/// Per-iteration shrink factor for the finite-difference step.
const NEWTON_STEP_DECAY: f64 = 0.618;

/// Finds a root of `f` inside `bracket` with the secant method.
///
/// # Algorithm
///
/// 1. Evaluate both endpoints. An endpoint where `f` is exactly zero is
///    returned immediately; otherwise the values must differ in sign.
/// 2. Replace `b` with the x-intercept of the secant through `(a, f(a))` and
///    `(b, f(b))`. When `f` changes sign between the old and new `b`, the old
///    `b` becomes `a`, so `[a, b]` always brackets the root.
/// 3. Stop once `|f(b)| < config.tol` and return `b`.
///
/// # Errors
///
/// - [`Error::InvalidBracket`] if `f(a)` and `f(b)` have the same sign.
/// - [`Error::NonConvergence`] after `config.max_iters` secant steps.
/// - [`Error::NonFinite`] if `f` produces a non-finite value.
/// - [`Error::InvalidConfig`] if `config` fails validation.
pub fn solve<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let [mut a, mut b] = bracket;
    let mut f_a = evaluate(&f, a)?;
    let mut f_b = evaluate(&f, b)?;

    #[allow(clippy::float_cmp)]
    if f_a == 0.0 {
        return Ok(a);
    }
    #[allow(clippy::float_cmp)]
    if f_b == 0.0 {
        return Ok(b);
    }

    #[allow(clippy::float_cmp)]
    if f_a.signum() == f_b.signum() {
        return Err(Error::InvalidBracket {
            left: a,
            right: b,
            f_left: f_a,
            f_right: f_b,
        });
    }

    let mut iters = 0;
    while f_b.abs() >= config.tol {
        if iters == config.max_iters {
            return Err(Error::NonConvergence { iters });
        }
        iters += 1;

        let next = b - f_b * (b - a) / (f_b - f_a);
        let f_next = evaluate(&f, next)?;
        trace!(iter = iters, x = next, residual = f_next, "secant step");

        #[allow(clippy::float_cmp)]
        if f_next.signum() != f_b.signum() {
            a = b;
            f_a = f_b;
        }
        b = next;
        f_b = f_next;
    }

    debug!(iters, root = b, residual = f_b, "secant solve converged");
    Ok(b)
}

/// Finds a root of `f` near `x0` with Newton's method.
///
/// The derivative is estimated by the forward difference
/// `(f(x + h) - f(x)) / h`, where `h` starts at `0.1` and shrinks by a factor
/// of `0.618` every iteration. Iteration stops when the function values at
/// two consecutive iterates differ by less than `config.tol`.
///
/// # Errors
///
/// - [`Error::IterationLimitExceeded`] after [`NEWTON_MAX_ITERS`] iterations.
/// - [`Error::NonFinite`] if an iterate or function value is non-finite,
///   which includes a vanishing slope estimate.
/// - [`Error::InvalidConfig`] if `config` fails validation.
pub fn newton<F>(f: F, x0: f64, config: &Config) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let mut x = x0;
    let mut f_x = evaluate(&f, x)?;
    let mut h = NEWTON_INITIAL_STEP;

    for iter in 1..=NEWTON_MAX_ITERS {
        let slope = (evaluate(&f, x + h)? - f_x) / h;
        let next = x - f_x / slope;
        let f_next = evaluate(&f, next)?;
        trace!(iter, x = next, residual = f_next, slope, "newton step");

        if (f_next - f_x).abs() < config.tol {
            debug!(iters = iter, root = next, residual = f_next, "newton converged");
            return Ok(next);
        }

        x = next;
        f_x = f_next;
        h *= NEWTON_STEP_DECAY;
    }

    Err(Error::IterationLimitExceeded {
        iters: NEWTON_MAX_ITERS,
    })
}
