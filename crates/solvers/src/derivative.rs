use tracing::debug;

use crate::{Config, Error, evaluate::evaluate};

/// Initial half-width of the central difference.
const INITIAL_DX: f64 = 0.02;

/// Estimates `f'(x)` by successively refined central differences.
///
/// Starting from `dx = 0.02`, the estimate `(f(x + dx) - f(x - dx)) / (2 dx)`
/// is recomputed with `dx` halved each round until two consecutive estimates
/// differ by less than `config.tol`. The latest estimate is returned.
///
/// # Errors
///
/// - [`Error::NonConvergence`] after `config.max_iters` refinements.
/// - [`Error::NonFinite`] if `f` produces a non-finite value.
/// - [`Error::InvalidConfig`] if `config` fails validation.
pub fn derivative<F>(f: F, x: f64, config: &Config) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let central = |dx: f64| -> Result<f64, Error> {
        Ok((evaluate(&f, x + dx)? - evaluate(&f, x - dx)?) / (2.0 * dx))
    };

    let mut dx = INITIAL_DX;
    let mut estimate = central(dx)?;
    for round in 1..=config.max_iters {
        dx *= 0.5;
        let refined = central(dx)?;
        if (refined - estimate).abs() < config.tol {
            debug!(x, rounds = round, dx, derivative = refined, "derivative converged");
            return Ok(refined);
        }
        estimate = refined;
    }

    Err(Error::NonConvergence {
        iters: config.max_iters,
    })
}
