/*
    Errors
*/

use thiserror::Error;

/// Errors raised by checked `Decimal` arithmetic and construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// Division by an exact zero
    #[error("division by zero")]
    DivisionByZero,

    /// An exponent whose value cannot be represented
    #[error("exponent out of range: {0}")]
    ExponentOutOfRange(i64),
}

/// Errors raised when parsing a `Decimal` from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseDecimalError {
    /// No digits were supplied
    #[error("cannot parse decimal from empty string")]
    Empty,

    /// A character that is not part of a decimal literal
    #[error("invalid digit found in decimal literal: {0:?}")]
    InvalidDigit(char),

    /// The exponent following `e`/`E` is missing or out of range
    #[error("invalid exponent in decimal literal: {0:?}")]
    InvalidExponent(String),
}

/// Errors raised when comparing exact and approximate sequences.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The two sequences do not cover the same indices
    #[error("sequence lengths differ: {exact} exact values, {approximate} approximate values")]
    LengthMismatch { exact: usize, approximate: usize },
}
