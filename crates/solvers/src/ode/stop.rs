/// Decides when the ODE integrator should stop.
///
/// An `f64` is a fixed endpoint: the integrator clamps its final step to land
/// on it exactly. [`Until`] wraps a predicate evaluated after every accepted
/// step.
pub trait StopCondition<Y> {
    /// Returns the fixed endpoint of the integration, if there is one.
    fn target(&self) -> Option<f64> {
        None
    }

    /// Returns `true` when integration should stop after an accepted step.
    fn should_stop(&mut self, t: f64, current: &Y, previous: &Y) -> bool;
}

impl<Y> StopCondition<Y> for f64 {
    fn target(&self) -> Option<f64> {
        Some(*self)
    }

    #[allow(clippy::float_cmp)]
    fn should_stop(&mut self, t: f64, _current: &Y, _previous: &Y) -> bool {
        t == *self
    }
}

/// Stops integration once the wrapped predicate `(t, current, previous)`
/// returns `true`.
///
/// ```
/// use tally_solvers::{Until, ode::StopCondition};
///
/// let mut below_half = Until(|_t: f64, y: &f64, _prev: &f64| *y < 0.5);
/// assert!(below_half.should_stop(1.0, &0.4, &0.6));
/// assert!(StopCondition::<f64>::target(&below_half).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Until<P>(pub P);

impl<Y, P> StopCondition<Y> for Until<P>
where
    P: FnMut(f64, &Y, &Y) -> bool,
{
    fn should_stop(&mut self, t: f64, current: &Y, previous: &Y) -> bool {
        (self.0)(t, current, previous)
    }
}
