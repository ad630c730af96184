/*
    Defines a number
*/

use std::fmt::{Debug, Display};

use rug::Integer;

use crate::Context;

/// The number type.
///
/// The central type of this library.
/// A `Number` is the capability set every generic algorithm in this crate
/// is written against: constants, exact construction from integers, and
/// the four field operations. Each operation rounds its result according
/// to a context passed by the caller, so the precision of a computation
/// is never hidden state.
pub trait Number: Clone + PartialEq + Debug + Display {
    /// The rounding context associated with this `Number`.
    type Ctx: Context;

    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns the multiplicative identity.
    fn one() -> Self;

    /// Converts an integer into this `Number` without rounding.
    fn from_integer(i: &Integer) -> Self;

    /// Returns true if this `Number` encodes a zero.
    fn is_zero(&self) -> bool;

    /// Negates this `Number`, rounding the result according
    /// to the provided context.
    fn neg(&self, ctx: &Self::Ctx) -> Self;

    /// Adds this `Number` and another, rounding the result
    /// according to the provided context.
    fn add(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Subtracts another `Number` from this one, rounding the result
    /// according to the provided context.
    fn sub(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Multiplies this `Number` and another, rounding the result
    /// according to the provided context.
    fn mul(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Divides this `Number` by another, rounding the result
    /// according to the provided context.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn div(&self, other: &Self, ctx: &Self::Ctx) -> Self;
}
