use std::{borrow::Cow, cmp::Ordering};

use crate::{Error, Sign, magnitude};

/// An arbitrary-precision signed integer.
///
/// A `BigInt` is a sign plus a sequence of digits in a configurable base
/// (default 10), least-significant digit first. Values are immutable: every
/// operation returns a new `BigInt`.
///
/// Operands in different bases are combined by first converting the operand
/// with the smaller base to the larger one, so the result carries the larger
/// base. Equal values compare equal regardless of base.
#[derive(Debug, Clone)]
pub struct BigInt {
    sign: Sign,
    base: u32,
    digits: Vec<u32>,
}

impl BigInt {
    /// The base used by [`From`] conversions and string parsing.
    pub const DEFAULT_BASE: u32 = 10;

    /// Builds a normalized value from raw parts.
    ///
    /// Leading zeros are stripped and zero is forced positive.
    pub(crate) fn from_parts(sign: Sign, base: u32, digits: Vec<u32>) -> Self {
        let digits = magnitude::trim(digits);
        let sign = if magnitude::is_zero(&digits) {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, base, digits }
    }

    /// Decomposes a native magnitude into digits of `base`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_magnitude(sign: Sign, mut magnitude: u128, base: u32) -> Self {
        let wide_base = u128::from(base);
        let mut digits = Vec::new();
        loop {
            digits.push((magnitude % wide_base) as u32);
            magnitude /= wide_base;
            if magnitude == 0 {
                break;
            }
        }
        Self::from_parts(sign, base, digits)
    }

    /// Creates a `BigInt` from explicit digits (least-significant first).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBase`] if `base < 2`, or
    /// [`Error::InvalidDigit`] if any digit is not below `base`.
    pub fn from_digits(digits: Vec<u32>, sign: Sign, base: u32) -> Result<Self, Error> {
        validate_base(base)?;
        if let Some(&digit) = digits.iter().find(|&&d| d >= base) {
            return Err(Error::InvalidDigit { digit, base });
        }
        Ok(Self::from_parts(sign, base, digits))
    }

    /// Creates a `BigInt` from a native integer using the given base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBase`] if `base < 2`.
    pub fn from_i64_in_base(value: i64, base: u32) -> Result<Self, Error> {
        validate_base(base)?;
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Ok(Self::from_magnitude(
            sign,
            u128::from(value.unsigned_abs()),
            base,
        ))
    }

    /// Returns zero in the given base.
    pub(crate) fn zero_in(base: u32) -> Self {
        Self {
            sign: Sign::Positive,
            base,
            digits: vec![0],
        }
    }

    /// Returns one in the given base.
    pub(crate) fn one_in(base: u32) -> Self {
        Self {
            sign: Sign::Positive,
            base,
            digits: vec![1],
        }
    }

    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[must_use]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Returns the digits, least-significant first.
    #[must_use]
    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        magnitude::is_zero(&self.digits)
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (a, b) = aligned(self, other);
        signed_sum(a.base, (a.sign, &a.digits), (b.sign, &b.digits))
    }

    /// Returns `self - other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let (a, b) = aligned(self, other);
        signed_sum(a.base, (a.sign, &a.digits), (b.sign.flip(), &b.digits))
    }

    /// Returns `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let (a, b) = aligned(self, other);
        Self::from_parts(
            a.sign.product(b.sign),
            a.base,
            magnitude::mul(&a.digits, &b.digits, a.base),
        )
    }

    /// Returns the truncated quotient and the remainder of `self / other`.
    ///
    /// The quotient is rounded toward zero and the remainder takes the sign of
    /// the dividend, so `self == quotient * other + remainder`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `other` is zero.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (a, b) = aligned(self, other);
        let (quotient, remainder) = magnitude::div_rem(&a.digits, &b.digits, a.base);
        Ok((
            Self::from_parts(a.sign.product(b.sign), a.base, quotient),
            Self::from_parts(a.sign, a.base, remainder),
        ))
    }

    /// Returns `self / other`, rounded toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self, Error> {
        self.div_rem(other).map(|(quotient, _)| quotient)
    }

    /// Returns `self % other`, with the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `other` is zero.
    pub fn modulo(&self, other: &Self) -> Result<Self, Error> {
        self.div_rem(other).map(|(_, remainder)| remainder)
    }

    /// Raises `self` to a non-negative integer power by repeated squaring.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExponent`] if `exponent` is negative or if both
    /// `self` and `exponent` are zero.
    pub fn power(&self, exponent: &Self) -> Result<Self, Error> {
        if exponent.is_negative() {
            return Err(Error::InvalidExponent {
                reason: "exponent must be non-negative",
            });
        }
        if self.is_zero() && exponent.is_zero() {
            return Err(Error::InvalidExponent {
                reason: "zero to the power of zero is undefined",
            });
        }

        let mut result = Self::one_in(self.base);
        let mut square = self.clone();
        let mut remaining = exponent.digits.clone();
        while !magnitude::is_zero(&remaining) {
            let (half, bit) = magnitude::div_small(&remaining, exponent.base, 2);
            if bit == 1 {
                result = result.multiply(&square);
            }
            remaining = half;
            if !magnitude::is_zero(&remaining) {
                square = square.multiply(&square);
            }
        }
        Ok(result)
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_parts(self.sign.flip(), self.base, self.digits.clone())
    }

    /// Returns the magnitude of `self`.
    #[must_use]
    pub fn absolute(&self) -> Self {
        Self::from_parts(Sign::Positive, self.base, self.digits.clone())
    }

    /// Returns `self!`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `self` is negative.
    pub fn factorial(&self) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::InvalidArgument {
                reason: "factorial is undefined for negative values",
            });
        }

        let one = Self::one_in(self.base);
        let mut counter = one.clone();
        let mut result = one.clone();
        while counter.less_than(self) {
            counter = counter.add(&one);
            result = result.multiply(&counter);
        }
        Ok(result)
    }

    /// Compares two values, normalizing their bases first.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let (a, b) = aligned(self, other);
        match (a.sign, b.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => magnitude::cmp(&a.digits, &b.digits),
            (Sign::Negative, Sign::Negative) => magnitude::cmp(&b.digits, &a.digits),
        }
    }

    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    #[must_use]
    pub fn less_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Converts to an `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the value is outside the `i64` range.
    pub fn to_i64(&self) -> Result<i64, Error> {
        let magnitude = self
            .digits
            .iter()
            .rev()
            .try_fold(0_u128, |acc, &d| {
                acc.checked_mul(u128::from(self.base))?
                    .checked_add(u128::from(d))
            })
            .ok_or(Error::Overflow)?;

        let value = i128::try_from(magnitude).map_err(|_| Error::Overflow)?;
        let value = match self.sign {
            Sign::Positive => value,
            Sign::Negative => -value,
        };
        i64::try_from(value).map_err(|_| Error::Overflow)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero_in(Self::DEFAULT_BASE)
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        value.to_i64()
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                Self::from_magnitude(sign, value.unsigned_abs() as u128, Self::DEFAULT_BASE)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from_magnitude(Sign::Positive, value as u128, Self::DEFAULT_BASE)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

pub(crate) fn validate_base(base: u32) -> Result<(), Error> {
    if base < 2 {
        Err(Error::InvalidBase { base })
    } else {
        Ok(())
    }
}

/// Brings two operands to a common base, converting the one with the smaller base.
fn aligned<'a>(a: &'a BigInt, b: &'a BigInt) -> (Cow<'a, BigInt>, Cow<'a, BigInt>) {
    match a.base.cmp(&b.base) {
        Ordering::Equal => (Cow::Borrowed(a), Cow::Borrowed(b)),
        Ordering::Less => (Cow::Owned(a.rebased(b.base)), Cow::Borrowed(b)),
        Ordering::Greater => (Cow::Borrowed(a), Cow::Owned(b.rebased(a.base))),
    }
}

/// Adds two sign-magnitude pairs that share `base`.
fn signed_sum(base: u32, (a_sign, a): (Sign, &[u32]), (b_sign, b): (Sign, &[u32])) -> BigInt {
    if a_sign == b_sign {
        return BigInt::from_parts(a_sign, base, magnitude::add(a, b, base));
    }

    match magnitude::cmp(a, b) {
        Ordering::Less => BigInt::from_parts(b_sign, base, magnitude::sub(b, a, base)),
        Ordering::Equal | Ordering::Greater => {
            BigInt::from_parts(a_sign, base, magnitude::sub(a, b, base))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: i64) -> BigInt {
        BigInt::from(value)
    }

    #[test]
    fn from_native_decomposes_digits() {
        let n = big(-1203);
        assert_eq!(n.sign(), Sign::Negative);
        assert_eq!(n.base(), 10);
        assert_eq!(n.digits(), &[3, 0, 2, 1]);
    }

    #[test]
    fn zero_is_canonical() {
        let zero = big(0);
        assert_eq!(zero.digits(), &[0]);
        assert_eq!(zero.sign(), Sign::Positive);

        let negative_zero = BigInt::from_digits(vec![0, 0], Sign::Negative, 10).unwrap();
        assert_eq!(negative_zero.digits(), &[0]);
        assert_eq!(negative_zero.sign(), Sign::Positive);
    }

    #[test]
    fn from_native_extremes() {
        assert_eq!(BigInt::from(i64::MIN).to_i64(), Ok(i64::MIN));
        assert_eq!(BigInt::from(i64::MAX).to_i64(), Ok(i64::MAX));
        assert_eq!(BigInt::from(u64::MAX).to_i64(), Err(Error::Overflow));
        assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
    }

    #[test]
    fn from_digits_validates() {
        assert_eq!(
            BigInt::from_digits(vec![1], Sign::Positive, 1),
            Err(Error::InvalidBase { base: 1 })
        );
        assert_eq!(
            BigInt::from_digits(vec![1, 8], Sign::Positive, 8),
            Err(Error::InvalidDigit { digit: 8, base: 8 })
        );

        let n = BigInt::from_digits(vec![1, 7, 0, 0], Sign::Positive, 8).unwrap();
        assert_eq!(n.digits(), &[1, 7]);
        assert_eq!(n.to_i64(), Ok(57));
    }

    #[test]
    fn from_i64_in_base_uses_requested_base() {
        let n = BigInt::from_i64_in_base(-10, 2).unwrap();
        assert_eq!(n.digits(), &[0, 1, 0, 1]);
        assert!(n.is_negative());
        assert!(matches!(
            BigInt::from_i64_in_base(10, 0),
            Err(Error::InvalidBase { base: 0 })
        ));
    }

    #[test]
    fn add_handles_every_sign_combination() {
        assert_eq!(big(999).add(&big(1)), big(1000));
        assert_eq!(big(-999).add(&big(-1)), big(-1000));
        assert_eq!(big(5).add(&big(-8)), big(-3));
        assert_eq!(big(-5).add(&big(8)), big(3));
        assert_eq!(big(7).add(&big(-7)), big(0));
    }

    #[test]
    fn subtract_handles_every_sign_combination() {
        assert_eq!(big(1000).subtract(&big(1)), big(999));
        assert_eq!(big(1).subtract(&big(1000)), big(-999));
        assert_eq!(big(-4).subtract(&big(-10)), big(6));
        assert_eq!(big(-4).subtract(&big(10)), big(-14));

        let difference = big(42).subtract(&big(42));
        assert!(difference.is_zero());
        assert_eq!(difference.sign(), Sign::Positive);
    }

    #[test]
    fn multiply_applies_sign_product() {
        assert_eq!(big(-12).multiply(&big(12)), big(-144));
        assert_eq!(big(-12).multiply(&big(-12)), big(144));
        assert_eq!(big(-12).multiply(&big(0)), big(0));
        assert_eq!(
            big(123_456_789).multiply(&big(987_654_321)),
            big(121_932_631_112_635_269)
        );
    }

    #[test]
    fn division_truncates_toward_zero() {
        let cases = [(7, 2), (-7, 2), (7, -2), (-7, -2), (6, 3), (1, 5), (-1, 5)];
        for (a, b) in cases {
            let (q, r) = big(a).div_rem(&big(b)).unwrap();
            assert_eq!(q.to_i64(), Ok(a / b), "{a} / {b}");
            assert_eq!(r.to_i64(), Ok(a % b), "{a} % {b}");
        }
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(big(5).divide(&big(0)), Err(Error::DivisionByZero));
        assert_eq!(big(5).modulo(&big(0)), Err(Error::DivisionByZero));
    }

    #[test]
    fn long_division_of_large_values() {
        let a: BigInt = "98765432109876543210987654321".parse().unwrap();
        let b: BigInt = "1234567890123".parse().unwrap();
        let (q, r) = a.div_rem(&b).unwrap();

        assert_eq!(q.to_string(), "80000000729029606");
        assert_eq!(r.to_string(), "694365672783");
        assert_eq!(q.multiply(&b).add(&r), a);
    }

    #[test]
    fn power_boundaries() {
        assert_eq!(big(2).power(&big(10)).unwrap().to_i64(), Ok(1024));
        assert_eq!(big(5).power(&big(0)).unwrap().to_i64(), Ok(1));
        assert_eq!(big(0).power(&big(3)).unwrap(), big(0));
        assert_eq!(big(-3).power(&big(3)).unwrap(), big(-27));
        assert!(matches!(
            big(0).power(&big(0)),
            Err(Error::InvalidExponent { .. })
        ));
        assert!(matches!(
            big(2).power(&big(-1)),
            Err(Error::InvalidExponent { .. })
        ));
    }

    #[test]
    fn power_of_large_exponent() {
        let value = big(2).power(&big(100)).unwrap();
        assert_eq!(value.to_string(), "1267650600228229401496703205376");
    }

    #[test]
    fn factorial_boundaries() {
        assert_eq!(big(0).factorial().unwrap(), big(1));
        assert_eq!(big(1).factorial().unwrap(), big(1));
        assert_eq!(big(10).factorial().unwrap().to_i64(), Ok(3_628_800));
        assert!(matches!(
            big(-1).factorial(),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn factorial_beyond_native_range() {
        let value = big(25).factorial().unwrap();
        assert_eq!(value.to_string(), "15511210043330985984000000");
    }

    #[test]
    fn negate_and_absolute() {
        assert_eq!(big(5).negate(), big(-5));
        assert_eq!(big(-5).absolute(), big(5));
        assert_eq!(big(0).negate().sign(), Sign::Positive);
    }

    #[test]
    fn comparison_is_sign_then_length_then_digits() {
        assert!(big(-100).less_than(&big(1)));
        assert!(big(-100).less_than(&big(-99)));
        assert!(big(99).less_than(&big(100)));
        assert!(big(120).greater_than(&big(119)));
        assert!(big(7).less_or_equal(&big(7)));
        assert!(big(7).equals(&big(7)));
        assert!(!big(7).equals(&big(-7)));
    }

    #[test]
    fn mixed_bases_rebase_to_the_larger_base() {
        let binary = BigInt::from_i64_in_base(300, 2).unwrap();
        let hex = BigInt::from_i64_in_base(20, 16).unwrap();

        let sum = binary.add(&hex);
        assert_eq!(sum.base(), 16);
        assert_eq!(sum.to_i64(), Ok(320));

        let decimal = big(300);
        assert_eq!(binary, decimal);
        assert!(hex < decimal);
    }

    #[test]
    fn to_i64_overflow() {
        let huge: BigInt = "9223372036854775808".parse().unwrap();
        assert_eq!(huge.to_i64(), Err(Error::Overflow));
        assert_eq!(huge.negate().to_i64(), Ok(i64::MIN));
        assert_eq!(i64::try_from(&big(-77)), Ok(-77));
    }
}
