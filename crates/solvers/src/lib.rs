//! Numeric solvers over caller-supplied functions.
//!
//! - [`solve`] and [`newton`] — root finding by bracketing secant and by
//!   Newton's method with a finite-difference slope
//! - [`derivative`] — central-difference derivative with step refinement
//! - [`integrate`] — composite trapezoid quadrature with interval doubling
//! - [`solve_ode`] — fixed-step or adaptive RK4 for scalar and vector states
//!
//! Every solver takes a [`Config`] carrying its tolerance and iteration cap.

mod config;
mod derivative;
mod error;
mod evaluate;
mod quadrature;
mod root;

pub mod ode;

pub use config::{Config, ConfigError};
pub use derivative::derivative;
pub use error::Error;
pub use ode::{Until, solve_ode, solve_ode_unobserved};
pub use quadrature::{MAX_REFINEMENTS, integrate};
pub use root::{NEWTON_MAX_ITERS, newton, solve};

pub use tally_core::{Observer, Vector};
