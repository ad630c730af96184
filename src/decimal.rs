/*
    Arbitrary-precision decimal numbers
*/

use num_bigint::BigUint;

mod arithmetic;
mod convert;
mod number;
mod round;
mod util;

pub(crate) use util::*;

/// Rounding modes for `Decimal` arithmetic.
///
/// Every arithmetic operation first computes its result exactly and
/// then rounds it to the number of significant digits configured in
/// a `DecimalContext`. The rounding mode picks the neighbor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round to nearest, ties to the even last digit.
    #[default]
    NearestEven,
    /// Round to nearest, ties away from zero.
    NearestAway,
    /// Round towards +infinity.
    ToPositive,
    /// Round towards -infinity.
    ToNegative,
    /// Truncate.
    ToZero,
    /// Round away from zero whenever the result is inexact.
    AwayZero,
    /// Round to the neighbor with an odd last digit whenever the result is inexact.
    ToOdd,
}

/// Directed rounding, independent of sign.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundingDirection {
    ToZero,
    AwayZero,
    ToEven,
    ToOdd,
}

/// Rounding context for `Decimal` numbers.
///
/// This is the explicit replacement for a process-wide precision setting:
/// every `Decimal` operation takes one, so two computations running side by
/// side can never observe each other's precision.
///
/// Precision is a caller responsibility. Recurrences whose intermediate
/// magnitudes grow with the index (Bernoulli numbers are the main example)
/// lose significant digits to cancellation, so higher indices require a
/// proportionally higher precision for the same accuracy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecimalContext {
    prec: usize,
    rm: RoundingMode,
}

/// An arbitrary-precision decimal number.
///
/// Encodes `(-1)^sign * significand * 10^exponent`. Values are kept
/// canonical: the significand has no trailing zero digits and zero is
/// always unsigned with a zero exponent. Two `Decimal`s are therefore
/// equal exactly when they encode the same real number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Decimal {
    sign: bool,   // true if negative
    exp: i64,     // exponent
    c: BigUint,   // significand
}
