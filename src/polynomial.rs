/*
    Polynomial evaluation
*/

use std::fmt;

use rug::Rational;

use crate::decimal::{Decimal, DecimalContext};
use crate::rational::RationalContext;
use crate::Number;

/// Evaluates the linear polynomial `c1 * x + c0`.
///
/// This is the single step of Horner's scheme.
pub fn lin<N: Number>(c1: &N, c0: &N, x: &N, ctx: &N::Ctx) -> N {
    c1.mul(x, ctx).add(c0, ctx)
}

/// Evaluates `c[0] + c[1] x + ... + c[d] x^d` at `x` with Horner's scheme.
///
/// Coefficients are given in ascending order of degree. A polynomial of
/// degree `d` takes exactly `d` multiplications and `d` additions, zero
/// coefficients included. Returns `None` if `coefficients` is empty,
/// since there is no polynomial to evaluate.
pub fn evaluate_polynomial<N: Number>(coefficients: &[N], x: &N, ctx: &N::Ctx) -> Option<N> {
    let (leading, rest) = coefficients.split_last()?;
    let value = rest
        .iter()
        .rev()
        .fold(leading.clone(), |acc, c| lin(&acc, c, x, ctx));
    Some(value)
}

/// Evaluates a polynomial with rational coefficients exactly.
pub fn evaluate_exact(coefficients: &[Rational], x: &Rational) -> Option<Rational> {
    evaluate_polynomial(coefficients, x, &RationalContext)
}

/// Evaluates a polynomial with decimal coefficients, rounding
/// every step according to `ctx`.
pub fn evaluate_approximate(
    coefficients: &[Decimal],
    x: &Decimal,
    ctx: &DecimalContext,
) -> Option<Decimal> {
    evaluate_polynomial(coefficients, x, ctx)
}

/// A single-variable polynomial with coefficients in ascending order of degree.
///
/// The leading coefficient may be zero; the formal degree is always
/// one less than the number of coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<N: Number> {
    coefficients: Vec<N>,
}

impl<N: Number> Polynomial<N> {
    /// Creates a polynomial from its coefficients, `c[i]` multiplying `X^i`.
    pub fn new(coefficients: Vec<N>) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients in ascending order of degree.
    pub fn coefficients(&self) -> &[N] {
        &self.coefficients
    }

    /// Returns the formal degree, or `None` for the empty polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Evaluates this polynomial at `x`. See `evaluate_polynomial`.
    pub fn evaluate(&self, x: &N, ctx: &N::Ctx) -> Option<N> {
        evaluate_polynomial(&self.coefficients, x, ctx)
    }
}

impl<N: Number> From<Vec<N>> for Polynomial<N> {
    fn from(coefficients: Vec<N>) -> Self {
        Self::new(coefficients)
    }
}

impl<N: Number> fmt::Display for Polynomial<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "<empty>");
        }

        // highest degree first, as usually written
        for (i, c) in self.coefficients.iter().enumerate().rev() {
            if i != self.coefficients.len() - 1 {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "({})", c)?,
                1 => write!(f, "({})*X", c)?,
                _ => write!(f, "({})*X^{}", c, i)?,
            }
        }
        Ok(())
    }
}
