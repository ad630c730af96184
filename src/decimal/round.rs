/*
    Rounding
*/

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::Zero;

use super::*;
use crate::{Context, Round};

impl RoundingMode {
    /// Translates a `RoundingMode` and sign bit to a `RoundingDirection`
    /// and a boolean indicating if the direction only specifies tie-breaking behavior.
    pub fn direction(&self, sign: bool) -> (bool, RoundingDirection) {
        match (self, sign) {
            (RoundingMode::NearestEven, _) => (true, RoundingDirection::ToEven),
            (RoundingMode::NearestAway, _) => (true, RoundingDirection::AwayZero),
            (RoundingMode::ToPositive, false) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToPositive, true) => (false, RoundingDirection::ToZero),
            (RoundingMode::ToNegative, false) => (false, RoundingDirection::ToZero),
            (RoundingMode::ToNegative, true) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToZero, _) => (false, RoundingDirection::ToZero),
            (RoundingMode::AwayZero, _) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToOdd, _) => (false, RoundingDirection::ToOdd),
        }
    }
}

// Implementing DecimalContext
impl DecimalContext {
    /// Default number of significant digits.
    pub const DEFAULT_PRECISION: usize = 28;

    /// Creates a new rounding context for `Decimal`s with
    /// `prec` set to `DecimalContext::DEFAULT_PRECISION`
    /// and `rm` set to `RoundingMode::NearestEven`.
    pub fn new() -> Self {
        Self {
            prec: Self::DEFAULT_PRECISION,
            rm: RoundingMode::NearestEven,
        }
    }

    /// Sets the number of significant digits.
    ///
    /// # Panics
    ///
    /// Panics if `prec` is zero.
    pub fn precision(mut self, prec: usize) -> Self {
        assert!(prec >= 1, "invalid precision, must be at least 1: {}", prec);
        self.prec = prec;
        self
    }

    /// Sets the rounding mode.
    pub fn rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.rm = rm;
        self
    }

    /// Returns the number of significant digits.
    pub fn prec(&self) -> usize {
        self.prec
    }

    /// Returns the rounding mode.
    pub fn rm(&self) -> RoundingMode {
        self.rm
    }
}

impl Context for DecimalContext {}

impl Default for DecimalContext {
    fn default() -> Self {
        Self::new()
    }
}

// Rounding utilities
impl Decimal {
    // Rounds the exact value `(-1)^s * c * 10^exp` to
    // the precision and rounding mode of `ctx`.
    pub(crate) fn round_finite(s: bool, exp: i64, c: BigUint, ctx: &DecimalContext) -> Self {
        let digits = num_digits(&c);
        if digits <= ctx.prec {
            // already representable (this includes zero)
            return Self::clamp_exponent(Self::canonical(s, exp, c), ctx);
        }

        // split off the digits that do not fit
        let drop = digits - ctx.prec;
        let (mut high, low) = c.div_rem(&pow10(drop));
        let half = cmp_half(&low, drop);
        let inexact = !low.is_zero();

        if Self::round_requires_increment(s, high.is_odd(), half, inexact, ctx.rm) {
            // a carry out of the top digit is absorbed by `canonical`
            high += 1_u32;
        }

        Self::clamp_exponent(Self::canonical(s, exp + drop as i64, high), ctx)
    }

    // Keeps a rounded result inside `[emin, emax]`: overflow saturates
    // to the largest finite value of `ctx.prec` digits, underflow
    // flushes to zero.
    fn clamp_exponent(x: Self, ctx: &DecimalContext) -> Self {
        if x.is_zero() {
            return x;
        }

        let adjusted = x.adjusted_exponent();
        if adjusted > Self::emax() {
            let c = pow10(ctx.prec) - 1_u32;
            Self::canonical(x.sign, Self::emax() - ctx.prec as i64 + 1, c)
        } else if adjusted < Self::emin() {
            Self::zero()
        } else {
            x
        }
    }

    // Returns true if the rounding information implies the significand
    // should be incremented by 1. `half` compares the dropped digits
    // with one half of the last kept digit.
    fn round_requires_increment(
        sign: bool,
        odd: bool,
        half: Ordering,
        inexact: bool,
        rm: RoundingMode,
    ) -> bool {
        match (rm.direction(sign), half) {
            // nearest: only a tie consults the direction
            ((true, _), Ordering::Greater) => true,
            ((true, _), Ordering::Less) => false,
            ((true, dir), Ordering::Equal) => match dir {
                RoundingDirection::ToEven => odd,
                RoundingDirection::ToOdd => !odd,
                RoundingDirection::AwayZero => true,
                RoundingDirection::ToZero => false,
            },
            // directed: any discarded digit counts
            ((false, RoundingDirection::ToZero), _) => false,
            ((false, RoundingDirection::AwayZero), _) => inexact,
            ((false, RoundingDirection::ToEven), _) => inexact && odd,
            ((false, RoundingDirection::ToOdd), _) => inexact && !odd,
        }
    }
}

// Implementing `Round<Decimal>` for `Decimal`
impl Round<Decimal> for Decimal {
    fn round(&self, ctx: &DecimalContext) -> Decimal {
        Self::round_finite(self.sign, self.exp, self.c.clone(), ctx)
    }
}
