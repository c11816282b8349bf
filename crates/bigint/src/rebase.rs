use tracing::trace;

use crate::{BigInt, Error, bigint::validate_base, magnitude};

impl BigInt {
    /// Returns the same value expressed in `new_base`.
    ///
    /// The digit sequence is divided by `new_base` repeatedly; the remainders
    /// are the new digits, least-significant first. This works the same way
    /// whether the target base is smaller or larger than the current one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBase`] if `new_base < 2`.
    pub fn rebase(&self, new_base: u32) -> Result<Self, Error> {
        validate_base(new_base)?;
        Ok(self.rebased(new_base))
    }

    /// Converts to a base already known to be valid.
    pub(crate) fn rebased(&self, new_base: u32) -> Self {
        if new_base == self.base() {
            return self.clone();
        }

        let mut remaining = self.digits().to_vec();
        let mut digits = Vec::new();
        loop {
            let (quotient, remainder) = magnitude::div_small(&remaining, self.base(), new_base);
            digits.push(remainder);
            if magnitude::is_zero(&quotient) {
                break;
            }
            remaining = quotient;
        }

        trace!(
            from = self.base(),
            to = new_base,
            digits = digits.len(),
            "rebased integer"
        );
        Self::from_parts(self.sign(), new_base, digits)
    }
}
