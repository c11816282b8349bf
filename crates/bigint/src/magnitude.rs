//! Unsigned arithmetic on digit sequences in an arbitrary base.
//!
//! Digits are stored least-significant first. Every function expects
//! normalized input (no most-significant zeros, `[0]` for zero) and returns
//! normalized output.

use std::cmp::Ordering;

/// Number of leading digits used to estimate a long-division quotient digit.
const ESTIMATE_DIGITS: usize = 4;

/// Strips most-significant zeros, keeping a single `0` for zero.
pub(crate) fn trim(mut digits: Vec<u32>) -> Vec<u32> {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
    digits
}

pub(crate) fn is_zero(digits: &[u32]) -> bool {
    digits.iter().all(|&d| d == 0)
}

/// Compares magnitudes by length, then from the most significant digit.
pub(crate) fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn add(a: &[u32], b: &[u32], base: u32) -> Vec<u32> {
    let base = u64::from(base);
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &d) in long.iter().enumerate() {
        let sum = u64::from(d) + u64::from(short.get(i).copied().unwrap_or(0)) + carry;
        out.push((sum % base) as u32);
        carry = sum / base;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    trim(out)
}

/// Returns `a - b`. The caller guarantees `a >= b`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn sub(a: &[u32], b: &[u32], base: u32) -> Vec<u32> {
    debug_assert_ne!(cmp(a, b), Ordering::Less, "magnitude subtraction underflow");

    let base = i64::from(base);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for (i, &d) in a.iter().enumerate() {
        let mut diff = i64::from(d) - i64::from(b.get(i).copied().unwrap_or(0)) - borrow;
        if diff < 0 {
            diff += base;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u32);
    }
    trim(out)
}

/// Schoolbook multiplication: convolve into wide accumulators, then carry once.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mul(a: &[u32], b: &[u32], base: u32) -> Vec<u32> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }

    let mut columns = vec![0_u128; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            columns[i + j] += u128::from(x) * u128::from(y);
        }
    }

    let base = u128::from(base);
    let mut out = Vec::with_capacity(columns.len() + 1);
    let mut carry = 0;
    for column in columns {
        let total = column + carry;
        out.push((total % base) as u32);
        carry = total / base;
    }
    while carry > 0 {
        out.push((carry % base) as u32);
        carry /= base;
    }
    trim(out)
}

/// Multiplies a magnitude by a single digit.
#[allow(clippy::cast_possible_truncation)]
fn mul_digit(a: &[u32], digit: u32, base: u32) -> Vec<u32> {
    if digit == 0 {
        return vec![0];
    }

    let base = u64::from(base);
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0;
    for &d in a {
        let product = u64::from(d) * u64::from(digit) + carry;
        out.push((product % base) as u32);
        carry = product / base;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    trim(out)
}

/// Divides a magnitude by a small divisor, returning `(quotient, remainder)`.
///
/// The quotient stays in `base`; `divisor` may be any non-zero `u32`, which
/// is what lets base conversion move to both smaller and larger bases.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn div_small(a: &[u32], base: u32, divisor: u32) -> (Vec<u32>, u32) {
    debug_assert_ne!(divisor, 0, "division by zero");

    let base = u64::from(base);
    let divisor = u64::from(divisor);
    let mut quotient = vec![0; a.len()];
    let mut remainder = 0;
    for (i, &d) in a.iter().enumerate().rev() {
        let current = remainder * base + u64::from(d);
        quotient[i] = (current / divisor) as u32;
        remainder = current % divisor;
    }
    (trim(quotient), remainder as u32)
}

/// Long division, returning `(quotient, remainder)`. The divisor must be non-zero.
///
/// Each quotient digit is estimated from the leading digits of the running
/// remainder and the divisor in floating point, then corrected so that
/// `0 <= remainder - q * divisor < divisor`.
pub(crate) fn div_rem(a: &[u32], b: &[u32], base: u32) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!is_zero(b), "division by zero");

    if cmp(a, b) == Ordering::Less {
        return (vec![0], a.to_vec());
    }

    let mut quotient = vec![0; a.len()];
    let mut remainder = vec![0];
    for (i, &d) in a.iter().enumerate().rev() {
        remainder.insert(0, d);
        remainder = trim(remainder);

        let mut q = estimate_digit(&remainder, b, base);
        let mut product = mul_digit(b, q, base);
        while cmp(&product, &remainder) == Ordering::Greater {
            q -= 1;
            product = sub(&product, b, base);
        }
        let mut rest = sub(&remainder, &product, base);
        while cmp(&rest, b) != Ordering::Less {
            q += 1;
            rest = sub(&rest, b, base);
        }

        quotient[i] = q;
        remainder = rest;
    }
    (trim(quotient), remainder)
}

/// Estimates `remainder / divisor` for a remainder below `base * divisor`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn estimate_digit(remainder: &[u32], divisor: &[u32], base: u32) -> u32 {
    if cmp(remainder, divisor) == Ordering::Less {
        return 0;
    }

    // Both values are scaled by the same power of the base, so the divisor's
    // leading digit always survives the truncation.
    let low = remainder.len().saturating_sub(ESTIMATE_DIGITS);
    let approx = |digits: &[u32]| {
        digits
            .iter()
            .skip(low)
            .rev()
            .fold(0.0, |acc, &d| acc * f64::from(base) + f64::from(d))
    };

    let estimate = (approx(remainder) / approx(divisor)).floor();
    estimate.clamp(0.0, f64::from(base - 1)) as u32
}
