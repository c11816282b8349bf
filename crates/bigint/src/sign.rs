/// The sign of a [`BigInt`](crate::BigInt).
///
/// Zero is always [`Sign::Positive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Returns the opposite sign.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Returns the sign of a product or quotient of values with these signs.
    #[must_use]
    pub fn product(self, other: Self) -> Self {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}
