use tracing::debug;

use crate::{Config, Error, evaluate::evaluate};

/// Number of intervals in the first trapezoid estimate.
const INITIAL_INTERVALS: usize = 10;

/// Refinement rounds allowed before giving up (10 * 2^24 intervals).
pub const MAX_REFINEMENTS: usize = 24;

/// Integrates `f` over `[a, b]` with the adaptive composite trapezoid rule.
///
/// The first estimate uses 10 intervals. Each refinement halves the step and
/// evaluates `f` only at the new midpoints, reusing the previous estimate:
///
/// ```text
/// T(h / 2) = T(h) / 2 + (h / 2) * sum(f(midpoints))
/// ```
///
/// Refinement stops when two consecutive estimates differ by less than
/// `config.tol`. An empty interval integrates to zero and `a > b` yields the
/// negated integral.
///
/// # Errors
///
/// - [`Error::NonConvergence`] after [`MAX_REFINEMENTS`] rounds (or
///   `config.max_iters`, if smaller).
/// - [`Error::NonFinite`] if `f` produces a non-finite value.
/// - [`Error::InvalidConfig`] if `config` fails validation.
#[allow(clippy::cast_precision_loss)]
pub fn integrate<F>(f: F, a: f64, b: f64, config: &Config) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    #[allow(clippy::float_cmp)]
    if a == b {
        return Ok(0.0);
    }

    let mut intervals = INITIAL_INTERVALS;
    let mut h = (b - a) / intervals as f64;

    let ends = 0.5 * (evaluate(&f, a)? + evaluate(&f, b)?);
    let interior = (1..intervals).try_fold(0.0, |sum, i| {
        Ok::<_, Error>(sum + evaluate(&f, a + i as f64 * h)?)
    })?;
    let mut estimate = h * (ends + interior);

    let rounds = MAX_REFINEMENTS.min(config.max_iters);
    for round in 1..=rounds {
        h *= 0.5;
        let midpoints = (0..intervals).try_fold(0.0, |sum, k| {
            Ok::<_, Error>(sum + evaluate(&f, a + (2 * k + 1) as f64 * h)?)
        })?;
        let refined = 0.5 * estimate + h * midpoints;
        intervals *= 2;

        if (refined - estimate).abs() < config.tol {
            debug!(rounds = round, intervals, integral = refined, "trapezoid converged");
            return Ok(refined);
        }
        estimate = refined;
    }

    Err(Error::NonConvergence { iters: rounds })
}
