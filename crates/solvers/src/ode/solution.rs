/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the target or satisfied the stop condition.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// A single accepted `(t, y)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<Y> {
    pub t: f64,
    pub y: Y,
}

/// The result of an ODE integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<Y> {
    /// How the integrator terminated.
    pub status: Status,

    /// Accepted samples in order, starting with the initial condition.
    pub samples: Vec<Sample<Y>>,

    /// Number of adaptive steps that were rejected and retried.
    pub rejected: usize,
}

impl<Y> Solution<Y> {
    /// Returns the final accepted sample.
    #[must_use]
    pub fn last(&self) -> Option<&Sample<Y>> {
        self.samples.last()
    }

    /// Number of accepted integration steps (excluding the initial sample).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }
}
