/*
    Conversions to and from `Decimal`
*/

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use rug::{Integer, Rational};

use super::*;
use crate::{ParseDecimalError, Round};

// Adjusted exponents in this range are printed without an exponent
const PLAIN_MIN_ADJUSTED: i128 = -6;
const PLAIN_MAX_ADJUSTED: i128 = 21;

impl Decimal {
    /// Converts a rational into a `Decimal` by dividing its
    /// numerator by its denominator under `ctx`.
    pub fn from_rational(q: &Rational, ctx: &DecimalContext) -> Self {
        let n = Decimal::from(q.numer());
        let d = Decimal::from(q.denom());
        // the denominator of a `Rational` is never zero
        n.div(&d, ctx)
    }
}

// Implementing `Round<Decimal>` for `Rational`
impl Round<Decimal> for Rational {
    fn round(&self, ctx: &DecimalContext) -> Decimal {
        Decimal::from_rational(self, ctx)
    }
}

// Implementing `From<&Integer>` for `Decimal`
impl From<&Integer> for Decimal {
    fn from(i: &Integer) -> Self {
        let (sign, c) = integer_to_parts(i);
        Self::canonical(sign, 0, c)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(i: $t) -> Self {
                    Self::canonical(i < 0, 0, BigUint::from(i.unsigned_abs()))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(i: $t) -> Self {
                    Self::canonical(false, 0, BigUint::from(i))
                }
            }
        )*
    };
}

// Implementing `From<T>` for `Decimal` for primitive integers
impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]` exactly. The
    /// adjusted exponent must lie in `[Decimal::emin(), Decimal::emax()]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sign, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        // split off the exponent
        let (mantissa, exp_text) = match body.find(&['e', 'E'][..]) {
            Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
            None => (body, None),
        };
        let invalid_exponent =
            || ParseDecimalError::InvalidExponent(exp_text.unwrap_or_default().to_string());
        let exp = match exp_text {
            Some(text) => text.parse::<i64>().map_err(|_| invalid_exponent())?,
            None => 0,
        };

        // collect the digits, counting those after the point
        let mut digits = String::with_capacity(mantissa.len());
        let mut scale: i128 = 0;
        let mut seen_point = false;
        for ch in mantissa.chars() {
            match ch {
                '0'..='9' => {
                    digits.push(ch);
                    if seen_point {
                        scale += 1;
                    }
                }
                '.' if !seen_point => seen_point = true,
                _ => return Err(ParseDecimalError::InvalidDigit(ch)),
            }
        }

        if digits.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        let c = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(ParseDecimalError::Empty)?;
        Self::bounded(sign, i128::from(exp) - scale, c).ok_or_else(invalid_exponent)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.c.is_zero() {
            return write!(f, "0");
        }

        let sign = if self.sign { "-" } else { "" };
        let digits = self.c.to_str_radix(10);
        let n = digits.len() as i128;
        let exp = i128::from(self.exp);
        let adjusted = exp + n - 1;

        if (PLAIN_MIN_ADJUSTED..PLAIN_MAX_ADJUSTED).contains(&adjusted) {
            if exp >= 0 {
                // integer: pad with zeros
                let zeros = "0".repeat(exp as usize);
                write!(f, "{}{}{}", sign, digits, zeros)
            } else if n > -exp {
                // point falls inside the digits
                let (int, frac) = digits.split_at((n + exp) as usize);
                write!(f, "{}{}.{}", sign, int, frac)
            } else {
                // leading zeros after the point
                let zeros = "0".repeat((-exp - n) as usize);
                write!(f, "{}0.{}{}", sign, zeros, digits)
            }
        } else {
            let (lead, rest) = digits.split_at(1);
            let exp_sign = if adjusted < 0 { "-" } else { "+" };
            if rest.is_empty() {
                write!(f, "{}{}E{}{}", sign, lead, exp_sign, adjusted.abs())
            } else {
                write!(f, "{}{}.{}E{}{}", sign, lead, rest, exp_sign, adjusted.abs())
            }
        }
    }
}
