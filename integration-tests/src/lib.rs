//! Shared fixtures for the cross-crate scenarios in `tests/`.

/// `y'' - 2y' + 2y = 1` written as a first-order system over `[y, y']`.
#[must_use]
pub fn forced_oscillator(_t: f64, state: &[f64; 2]) -> [f64; 2] {
    let [y, dy] = *state;
    [dy, 1.0 - 2.0 * y + 2.0 * dy]
}

/// Closed-form solution of [`forced_oscillator`] for `y(0) = 3`, `y'(0) = 2`.
#[must_use]
pub fn forced_oscillator_exact(t: f64) -> f64 {
    0.5 + t.exp() * (2.5 * t.cos() - 0.5 * t.sin())
}

/// `n!` computed natively, for cross-checking small factorials.
#[must_use]
pub fn native_factorial(n: u32) -> u128 {
    (1..=u128::from(n)).product()
}
