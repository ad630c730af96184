/*
    Definition of `Decimal` struct
*/

use num_bigint::BigUint;
use num_traits::Zero;
use rug::Integer;

use super::*;
use crate::{DecimalError, Number};

// Exponent range
impl Decimal {
    /// Returns the largest adjusted exponent a nonzero `Decimal` may have.
    /// Rounded results above it saturate to the largest finite value.
    #[inline(always)]
    pub const fn emax() -> i64 {
        999_999_999_999_999_999
    }

    /// Returns the smallest adjusted exponent a nonzero `Decimal` may have.
    /// This will always be `-Self::emax()`. Rounded results below it flush to zero.
    #[inline(always)]
    pub const fn emin() -> i64 {
        -Self::emax()
    }

    // Builds a canonical `Decimal` from an exponent given in `i128`,
    // or `None` if its adjusted exponent leaves `[emin, emax]`.
    pub(crate) fn bounded(sign: bool, exp: i128, mut c: BigUint) -> Option<Self> {
        if c.is_zero() {
            return Some(Self::zero());
        }

        let exp = exp + strip_trailing_zeros(&mut c) as i128;
        let adjusted = exp + num_digits(&c) as i128 - 1;
        if adjusted > i128::from(Self::emax()) || adjusted < i128::from(Self::emin()) {
            return None;
        }

        let exp = i64::try_from(exp).ok()?;
        Some(Self { sign, exp, c })
    }
}

// Constructors and getters
impl Decimal {
    /// Creates a new `Decimal` initialized to 0.
    pub fn new() -> Self {
        Self::zero()
    }

    /// Returns an (unsigned) zero.
    pub fn zero() -> Self {
        Self {
            sign: false,
            exp: 0,
            c: BigUint::zero(),
        }
    }

    /// Returns the `Decimal` encoding `(-1)^sign * c * 10^exp`
    /// exactly, without rounding, or `DecimalError::ExponentOutOfRange`
    /// if its adjusted exponent lies outside `[emin(), emax()]`.
    pub fn from_parts(sign: bool, exp: i64, c: BigUint) -> Result<Self, DecimalError> {
        Self::bounded(sign, i128::from(exp), c).ok_or(DecimalError::ExponentOutOfRange(exp))
    }

    // Puts a triple into canonical form. Exponents reaching here stay
    // within a few digit counts of `[emin, emax]`, far from `i64` limits.
    pub(crate) fn canonical(sign: bool, mut exp: i64, mut c: BigUint) -> Self {
        if c.is_zero() {
            return Self::zero();
        }

        exp += strip_trailing_zeros(&mut c) as i64;
        Self { sign, exp, c }
    }

    /// Returns the sign of this `Decimal`, true if negative.
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Returns the exponent of the least significant digit.
    pub fn exponent(&self) -> i64 {
        self.exp
    }

    /// Returns the (integer) significand of this `Decimal`.
    pub fn significand(&self) -> &BigUint {
        &self.c
    }

    /// Returns the number of significant digits, zero for zero.
    pub fn digits(&self) -> usize {
        num_digits(&self.c)
    }

    /// Returns the exponent of the most significant digit
    /// when written in scientific notation. Zero for zero.
    pub fn adjusted_exponent(&self) -> i64 {
        if self.c.is_zero() {
            0
        } else {
            self.exp + self.digits() as i64 - 1
        }
    }

    /// Returns true if this `Decimal` encodes a zero.
    pub fn is_zero(&self) -> bool {
        self.c.is_zero()
    }

    /// Returns true if this `Decimal` is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign && !self.is_zero()
    }

    /// Returns true if this `Decimal` encodes an integer.
    pub fn is_integer(&self) -> bool {
        self.exp >= 0
    }

    // Position just above the most significant digit.
    pub(crate) fn msd(&self) -> i64 {
        self.exp + self.digits() as i64
    }
}

impl Number for Decimal {
    type Ctx = DecimalContext;

    fn zero() -> Self {
        Decimal::zero()
    }

    fn one() -> Self {
        Decimal::from(1)
    }

    fn from_integer(i: &Integer) -> Self {
        Decimal::from(i)
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }

    fn neg(&self, ctx: &Self::Ctx) -> Self {
        Decimal::neg(self, ctx)
    }

    fn add(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Decimal::add(self, other, ctx)
    }

    fn sub(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Decimal::sub(self, other, ctx)
    }

    fn mul(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Decimal::mul(self, other, ctx)
    }

    fn div(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Decimal::div(self, other, ctx)
    }
}
