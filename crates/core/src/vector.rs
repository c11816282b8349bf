/// The arithmetic an ODE state must support to be stepped by Runge–Kutta.
///
/// Implementing this trait lets the integrators in `tally-solvers` work with a
/// state by forming linear combinations `y + k * h` and by measuring the size
/// of the difference between two candidate states.
///
/// Scalars use the absolute value as their norm; vectors use the Euclidean
/// norm. Vector implementations assume both operands have the same length.
pub trait Vector: Clone {
    /// Returns `self + other`.
    #[must_use]
    fn add(&self, other: &Self) -> Self;

    /// Returns `self - other`.
    #[must_use]
    fn sub(&self, other: &Self) -> Self;

    /// Returns `self * factor`.
    #[must_use]
    fn scale(&self, factor: f64) -> Self;

    /// Returns the magnitude used for local error estimates.
    fn norm(&self) -> f64;

    /// Returns `self + other * factor`.
    ///
    /// The default implementation composes [`Vector::add`] and
    /// [`Vector::scale`]; override it when a fused form is cheaper.
    #[must_use]
    fn add_scaled(&self, other: &Self, factor: f64) -> Self {
        self.add(&other.scale(factor))
    }
}

impl Vector for f64 {
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn scale(&self, factor: f64) -> Self {
        self * factor
    }

    fn norm(&self) -> f64 {
        self.abs()
    }

    fn add_scaled(&self, other: &Self, factor: f64) -> Self {
        other.mul_add(factor, *self)
    }
}

impl<const N: usize> Vector for [f64; N] {
    fn add(&self, other: &Self) -> Self {
        std::array::from_fn(|i| self[i] + other[i])
    }

    fn sub(&self, other: &Self) -> Self {
        std::array::from_fn(|i| self[i] - other[i])
    }

    fn scale(&self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    fn norm(&self) -> f64 {
        euclidean(self)
    }

    fn add_scaled(&self, other: &Self, factor: f64) -> Self {
        std::array::from_fn(|i| other[i].mul_add(factor, self[i]))
    }
}

impl Vector for Vec<f64> {
    fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.len(), other.len(), "vector length mismatch");
        self.iter().zip(other).map(|(a, b)| a + b).collect()
    }

    fn sub(&self, other: &Self) -> Self {
        debug_assert_eq!(self.len(), other.len(), "vector length mismatch");
        self.iter().zip(other).map(|(a, b)| a - b).collect()
    }

    fn scale(&self, factor: f64) -> Self {
        self.iter().map(|v| v * factor).collect()
    }

    fn norm(&self) -> f64 {
        euclidean(self)
    }

    fn add_scaled(&self, other: &Self, factor: f64) -> Self {
        debug_assert_eq!(self.len(), other.len(), "vector length mismatch");
        self.iter()
            .zip(other)
            .map(|(a, b)| b.mul_add(factor, *a))
            .collect()
    }
}

fn euclidean(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}
