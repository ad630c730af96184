/*
    Arithmetic
*/

use std::borrow::Cow;
use std::cmp::Ordering;

use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::{One, Zero};

use super::*;
use crate::{DecimalError, Round};

// Every operation computes the exact result and rounds it once.
impl Decimal {
    /// Negates this `Decimal`, rounding the result according
    /// to the provided context.
    pub fn neg(&self, ctx: &DecimalContext) -> Self {
        Self::round_finite(!self.sign, self.exp, self.c.clone(), ctx)
    }

    /// Takes the absolute value of this `Decimal`, rounding the
    /// result according to the provided context.
    pub fn abs(&self, ctx: &DecimalContext) -> Self {
        Self::round_finite(false, self.exp, self.c.clone(), ctx)
    }

    /// Adds this `Decimal` and another, rounding the result
    /// according to the provided context.
    pub fn add(&self, other: &Self, ctx: &DecimalContext) -> Self {
        if self.is_zero() {
            return other.round(ctx);
        } else if other.is_zero() {
            return self.round(ctx);
        }

        // `a` has the leading digit furthest to the left
        let (a, b) = if self.msd() >= other.msd() {
            (self, other)
        } else {
            (other, self)
        };

        // If `b` lies entirely below every digit that can influence the
        // rounded sum, replace it with a single digit at the same side.
        // Keeps alignment from scaling `a` by huge powers of ten.
        let floor = i64::min(a.exp, a.msd() - ctx.prec as i64 - 2);
        let b = if b.msd() < floor {
            Cow::Owned(Self {
                sign: b.sign,
                exp: floor - 1,
                c: BigUint::one(),
            })
        } else {
            Cow::Borrowed(b)
        };

        // align both significands to the smaller exponent
        let exp = i64::min(a.exp, b.exp);
        let ca = &a.c * pow10((a.exp - exp) as usize);
        let cb = &b.c * pow10((b.exp - exp) as usize);

        let (s, c) = if a.sign == b.sign {
            (a.sign, ca + cb)
        } else {
            match ca.cmp(&cb) {
                Ordering::Greater => (a.sign, ca - cb),
                Ordering::Less => (b.sign, cb - ca),
                Ordering::Equal => (false, BigUint::zero()),
            }
        };

        Self::round_finite(s, exp, c, ctx)
    }

    /// Subtracts another `Decimal` from this one, rounding the result
    /// according to the provided context.
    pub fn sub(&self, other: &Self, ctx: &DecimalContext) -> Self {
        let negated = Self {
            sign: !other.sign,
            exp: other.exp,
            c: other.c.clone(),
        };
        self.add(&negated, ctx)
    }

    /// Multiplies this `Decimal` and another, rounding the result
    /// according to the provided context.
    pub fn mul(&self, other: &Self, ctx: &DecimalContext) -> Self {
        let s = self.sign != other.sign;
        // both exponents lie near `[emin, emax]`, so the sum fits in an `i64`
        let exp = self.exp + other.exp;
        Self::round_finite(s, exp, &self.c * &other.c, ctx)
    }

    /// Divides this `Decimal` by another, rounding the result
    /// according to the provided context.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero. See `checked_div`.
    pub fn div(&self, other: &Self, ctx: &DecimalContext) -> Self {
        match self.checked_div(other, ctx) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }

    /// Divides this `Decimal` by another, rounding the result
    /// according to the provided context. Returns an error
    /// rather than panicking on a zero divisor.
    pub fn checked_div(&self, other: &Self, ctx: &DecimalContext) -> Result<Self, DecimalError> {
        if other.is_zero() {
            return Err(DecimalError::DivisionByZero);
        } else if self.is_zero() {
            return Ok(Self::zero());
        }

        // Scale the dividend so that the integer quotient has
        // at least `prec + 1` digits
        let d1 = self.digits() as i64;
        let d2 = other.digits() as i64;
        let shift = usize::try_from(ctx.prec as i64 + 1 + d2 - d1).unwrap_or(0);

        let (mut q, r) = (&self.c * pow10(shift)).div_rem(&other.c);
        let mut exp = self.exp - other.exp - shift as i64;

        // A nonzero remainder becomes a sticky digit below
        // every digit that survives rounding
        if !r.is_zero() {
            q = q * 10_u32 + 1_u32;
            exp -= 1;
        }

        let s = self.sign != other.sign;
        Ok(Self::round_finite(s, exp, q, ctx))
    }

    /// Compares the absolute values of two `Decimal`s.
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        match self.msd().cmp(&other.msd()) {
            Ordering::Equal => {
                let exp = i64::min(self.exp, other.exp);
                let c1 = &self.c * pow10((self.exp - exp) as usize);
                let c2 = &other.c * pow10((other.exp - exp) as usize);
                c1.cmp(&c2)
            }
            ord => ord,
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => self.cmp_abs(other),
            (true, true) => other.cmp_abs(self),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}
