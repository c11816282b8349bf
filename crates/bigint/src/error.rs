use thiserror::Error;

/// Errors produced by [`BigInt`](crate::BigInt) construction and arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input string is not an optional sign followed by decimal digits.
    #[error("invalid integer literal `{input}`: expected an optional sign followed by decimal digits")]
    Format { input: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid exponent: {reason}")]
    InvalidExponent { reason: &'static str },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    #[error("invalid base {base}: base must be at least 2")]
    InvalidBase { base: u32 },

    #[error("digit {digit} is out of range for base {base}")]
    InvalidDigit { digit: u32, base: u32 },

    /// The value does not fit in the requested native integer type.
    #[error("value out of range for the target integer type")]
    Overflow,
}
