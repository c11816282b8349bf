/// Event emitted by the ODE integrator.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<Y> {
    /// A sample was accepted.
    ///
    /// Step 0 is the initial condition; steps 1..N follow each accepted
    /// integration step.
    Accepted {
        step: usize,
        t: f64,
        y: Y,
        /// Size of the step that produced this sample (0 for the initial sample).
        h: f64,
    },

    /// An adaptive step was rejected and will be retried at half size.
    Rejected {
        t: f64,
        /// The rejected step size.
        h: f64,
        /// Local error estimate of the rejected step.
        error: f64,
    },
}
