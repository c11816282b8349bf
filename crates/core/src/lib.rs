//! Core traits shared by the tally numeric crates.
//!
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Vector`] — the arithmetic capability an ODE state needs (add, subtract,
//!   scale, norm), implemented for `f64`, `[f64; N]` and `Vec<f64>`

mod observer;
mod vector;

pub use observer::Observer;
pub use vector::Vector;
