use std::str::FromStr;

use crate::{BigInt, Error, Sign};

impl BigInt {
    /// Parses a decimal literal of the form `[+-]?[0-9]+`.
    ///
    /// Leading zeros are accepted and stripped; `-0` parses as zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] for any other input, including empty strings,
    /// whitespace and digit separators.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let (sign, body) = match input.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, input.strip_prefix('+').unwrap_or(input)),
        };

        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Format {
                input: input.to_owned(),
            });
        }

        let digits = body.bytes().rev().map(|b| u32::from(b - b'0')).collect();
        Ok(Self::from_parts(sign, Self::DEFAULT_BASE, digits))
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
