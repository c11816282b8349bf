//! Operator overloads and `num-traits` identities for [`BigInt`].
//!
//! `+`, `-` and `*` are infallible. `/` and `%` panic on a zero divisor, like
//! the primitive integer types; use [`BigInt::divide`], [`BigInt::modulo`] or
//! [`BigInt::div_rem`] to handle that case as an error.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_traits::{One, Zero};

use crate::BigInt;

fn divide_or_panic(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match lhs.divide(rhs) {
        Ok(quotient) => quotient,
        Err(err) => panic!("{err}"),
    }
}

fn modulo_or_panic(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match lhs.modulo(rhs) {
        Ok(remainder) => remainder,
        Err(err) => panic!("{err}"),
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident => $op:path) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $op(self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $op(self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $op(&self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $op(&self, &rhs)
            }
        }

        impl $imp<i64> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: i64) -> BigInt {
                $op(self, &BigInt::from(rhs))
            }
        }

        impl $imp<i64> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: i64) -> BigInt {
                $op(&self, &BigInt::from(rhs))
            }
        }
    };
}

forward_binop!(impl Add, add => BigInt::add);
forward_binop!(impl Sub, sub => BigInt::subtract);
forward_binop!(impl Mul, mul => BigInt::multiply);
forward_binop!(impl Div, div => divide_or_panic);
forward_binop!(impl Rem, rem => modulo_or_panic);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self::one_in(Self::DEFAULT_BASE)
    }
}
