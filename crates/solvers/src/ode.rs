//! Fourth-order Runge–Kutta integration of `y' = f(t, y)`.
//!
//! The integrator runs either with a fixed step or adaptively. In adaptive
//! mode every attempt takes one full RK4 step and two half steps; the norm of
//! their difference is the local error estimate used to accept, reject, or
//! grow the step.
//!
//! # Example
//!
//! ```
//! use tally_solvers::{Config, solve_ode_unobserved};
//!
//! // y' = y from (0, 1) to t = 1.
//! let solution = solve_ode_unobserved(|_t, y: &f64| *y, (0.0, 1.0), 1.0, None, &Config::default())?;
//!
//! let last = solution.last().expect("initial sample is always present");
//! assert_eq!(last.t, 1.0);
//! assert!((last.y - std::f64::consts::E).abs() < 1e-2);
//! # Ok::<(), tally_solvers::Error>(())
//! ```

mod action;
mod event;
mod rk4;
mod solution;
mod stop;

pub use action::Action;
pub use event::Event;
pub use solution::{Sample, Solution, Status};
pub use stop::{StopCondition, Until};

use tally_core::{Observer, Vector};
use tracing::{debug, trace};

use crate::{Config, Error};

/// An adaptive step whose error estimate exceeds `REJECT_FACTOR * tol` is retried.
const REJECT_FACTOR: f64 = 15.0;

/// An accepted step whose error estimate is below `GROW_FACTOR * tol` doubles the next step.
const GROW_FACTOR: f64 = 0.1;

/// Relative slack for landing on a numeric target in one final step.
const LANDING_SLACK: f64 = 1e-9;

/// Integrates `y' = f(t, y)` from `initial` until `stop` is satisfied.
///
/// # Algorithm
///
/// 1. Validate `config` and a fixed `step`, then record the initial sample.
/// 2. Pick the direction of integration: toward a numeric target, or along
///    the sign of `step` when `stop` is a predicate (forward by default).
/// 3. With `Some(h)`, take RK4 steps of size `|h|`. With `None`, start from a
///    step of `config.tol` and adapt it:
///    - error > `15 * tol`: reject, halve the step, and retry;
///    - error < `0.1 * tol`: accept the two-half-step result and double the step;
///    - otherwise: accept the two-half-step result.
/// 4. Clamp the final step so a numeric target is hit exactly.
/// 5. After each accepted step, stop once `stop` is satisfied.
///
/// A run toward a numeric target takes as many steps as the interval needs.
/// `config.max_iters` bounds consecutive rejected attempts, and the total
/// number of attempts when `stop` is a predicate.
///
/// # Observer
///
/// The observer receives an [`Event::Accepted`] for the initial sample and
/// every accepted step, and an [`Event::Rejected`] for every rejected
/// adaptive attempt. Returning [`Action::StopEarly`] ends the run with
/// [`Status::StoppedByObserver`].
///
/// # Errors
///
/// - [`Error::InvalidConfig`] if `config` fails validation.
/// - [`Error::InvalidStep`] if a fixed step is zero or non-finite.
/// - [`Error::NonConvergence`] if `config.max_iters` adaptive attempts in a row
///   are rejected, if a predicate `stop` is still unsatisfied after
///   `config.max_iters` attempts, or if an adaptive step shrinks below the
///   resolution of `t`.
/// - [`Error::NonFinite`] if the state or its error estimate becomes non-finite.
pub fn solve_ode<Y, F, S, Obs>(
    f: F,
    initial: (f64, Y),
    mut stop: S,
    step: Option<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Y>, Error>
where
    Y: Vector,
    F: Fn(f64, &Y) -> Y,
    S: StopCondition<Y>,
    Obs: Observer<Event<Y>, Action>,
{
    config.validate()?;

    #[allow(clippy::float_cmp)]
    if let Some(h) = step.filter(|h| !h.is_finite() || *h == 0.0) {
        return Err(Error::InvalidStep { step: h });
    }

    let (mut t, mut y) = initial;
    let target = stop.target();
    let direction = match (target, step) {
        (Some(end), _) if end < t => -1.0,
        (Some(_), _) => 1.0,
        (None, Some(h)) => h.signum(),
        (None, None) => 1.0,
    };
    let mut h = step.map_or(config.tol, f64::abs) * direction;

    let mut samples = vec![Sample { t, y: y.clone() }];
    let mut rejected = 0;

    let event = Event::Accepted {
        step: 0,
        t,
        y: y.clone(),
        h: 0.0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            samples,
            rejected,
        });
    }

    #[allow(clippy::float_cmp)]
    if target == Some(t) {
        return Ok(Solution {
            status: Status::Complete,
            samples,
            rejected,
        });
    }

    // A numeric target bounds the run on its own; a predicate may never fire.
    let capped = target.is_none();
    let mut attempts = 0;
    let mut rejected_in_row = 0;
    loop {
        if capped && attempts == config.max_iters {
            return Err(Error::NonConvergence { iters: attempts });
        }
        attempts += 1;

        let landing = target.filter(|end| (end - t).abs() <= h.abs() * (1.0 + LANDING_SLACK));
        let h_try = landing.map_or(h, |end| end - t);

        #[allow(clippy::float_cmp)]
        if t + h_try == t {
            return Err(Error::NonConvergence { iters: attempts });
        }

        let next = if step.is_some() {
            rk4::step(&f, t, &y, h_try)
        } else {
            let full = rk4::step(&f, t, &y, h_try);
            let half = 0.5 * h_try;
            let mid = rk4::step(&f, t, &y, half);
            let fine = rk4::step(&f, t + half, &mid, half);
            let error = fine.sub(&full).norm();

            if !error.is_finite() {
                return Err(Error::NonFinite { x: t, value: error });
            }

            if error > REJECT_FACTOR * config.tol {
                rejected += 1;
                rejected_in_row += 1;
                trace!(t, h = h_try, error, "rejected ode step");

                let event = Event::Rejected { t, h: h_try, error };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        samples,
                        rejected,
                    });
                }

                if rejected_in_row == config.max_iters {
                    return Err(Error::NonConvergence {
                        iters: rejected_in_row,
                    });
                }
                h = 0.5 * h_try;
                continue;
            }
            rejected_in_row = 0;

            if error < GROW_FACTOR * config.tol {
                h = 2.0 * h_try;
            }
            fine
        };

        let norm = next.norm();
        if !norm.is_finite() {
            return Err(Error::NonFinite {
                x: t + h_try,
                value: norm,
            });
        }

        let previous = std::mem::replace(&mut y, next);
        t = landing.unwrap_or(t + h_try);
        samples.push(Sample { t, y: y.clone() });
        trace!(t, h = h_try, "accepted ode step");

        let event = Event::Accepted {
            step: samples.len() - 1,
            t,
            y: y.clone(),
            h: h_try,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                samples,
                rejected,
            });
        }

        if stop.should_stop(t, &y, &previous) {
            debug!(
                t,
                steps = samples.len() - 1,
                rejected,
                "ode integration complete"
            );
            return Ok(Solution {
                status: Status::Complete,
                samples,
                rejected,
            });
        }
    }
}

/// Integrates `y' = f(t, y)` without observation.
///
/// This is a convenience wrapper around [`solve_ode`] that discards events.
///
/// # Errors
///
/// Returns the same errors as [`solve_ode`].
pub fn solve_ode_unobserved<Y, F, S>(
    f: F,
    initial: (f64, Y),
    stop: S,
    step: Option<f64>,
    config: &Config,
) -> Result<Solution<Y>, Error>
where
    Y: Vector,
    F: Fn(f64, &Y) -> Y,
    S: StopCondition<Y>,
{
    solve_ode(f, initial, stop, step, config, ())
}
