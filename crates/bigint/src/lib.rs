//! Arbitrary-precision signed integers in a configurable base.
//!
//! A [`BigInt`] stores a [`Sign`] and a digit sequence in any base from 2 to
//! `u32::MAX` (decimal by default). It supports the usual arithmetic, exact
//! truncating division, exponentiation, factorial and conversion between
//! bases. Values are immutable; operations return new values.
//!
//! ```
//! use tally_bigint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse()?;
//! let b = BigInt::from(987_654_321);
//!
//! let (q, r) = a.div_rem(&b)?;
//! assert_eq!(&q * &b + &r, a);
//!
//! let binary = BigInt::from(10).rebase(2)?;
//! assert_eq!(binary.to_string(), "1010");
//! assert_eq!(BigInt::from(1_234_567).pretty(), "1,234,567");
//! # Ok::<(), tally_bigint::Error>(())
//! ```

mod bigint;
mod error;
mod fmt;
mod magnitude;
mod ops;
mod parse;
mod rebase;
mod sign;

pub use bigint::BigInt;
pub use error::Error;
pub use fmt::DIGIT_DELIMITER;
pub use sign::Sign;
