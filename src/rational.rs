/*
    Exact rationals
*/

use std::cmp::Ordering;

use rug::{Integer, Rational};

use crate::{Context, Number};

/// The rounding context for `Rational`.
///
/// Rational arithmetic is exact, so there is nothing to configure:
/// every operation returns the reduced result unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RationalContext;

impl Context for RationalContext {}

impl Number for Rational {
    type Ctx = RationalContext;

    fn zero() -> Self {
        Rational::new()
    }

    fn one() -> Self {
        Rational::from(1)
    }

    fn from_integer(i: &Integer) -> Self {
        Rational::from(i.clone())
    }

    fn is_zero(&self) -> bool {
        self.cmp0() == Ordering::Equal
    }

    fn neg(&self, _: &Self::Ctx) -> Self {
        Rational::from(-self)
    }

    fn add(&self, other: &Self, _: &Self::Ctx) -> Self {
        Rational::from(self + other)
    }

    fn sub(&self, other: &Self, _: &Self::Ctx) -> Self {
        Rational::from(self - other)
    }

    fn mul(&self, other: &Self, _: &Self::Ctx) -> Self {
        Rational::from(self * other)
    }

    fn div(&self, other: &Self, _: &Self::Ctx) -> Self {
        assert!(!Number::is_zero(other), "division by zero");
        Rational::from(self / other)
    }
}
