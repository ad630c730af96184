/*
    Bernoulli numbers
*/

use std::ops::Deref;

use rug::{Integer, Rational};
use tracing::{debug, trace};

use crate::binomial::binomial_row;
use crate::decimal::{Decimal, DecimalContext};
use crate::rational::RationalContext;
use crate::Number;

/// The Bernoulli numbers `B_0, ..., B_n`.
///
/// Built once for a fixed upper index and read-only afterwards.
/// Dereferences to a slice indexed by `k`.
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliSequence<N: Number> {
    values: Box<[N]>,
}

impl<N: Number> BernoulliSequence<N> {
    /// Returns the largest index `n` held by this sequence.
    pub fn upper_index(&self) -> usize {
        self.values.len() - 1
    }

    /// Returns the values as a vector.
    pub fn into_vec(self) -> Vec<N> {
        self.values.into_vec()
    }
}

impl<N: Number> Deref for BernoulliSequence<N> {
    type Target = [N];

    fn deref(&self) -> &[N] {
        &self.values
    }
}

/// Computes `B_0, ..., B_n` in the number type `N`, rounding every
/// intermediate operation according to `ctx`.
///
/// Uses the convention `B_1 = -1/2`. The first three terms are seeded,
/// odd terms past `B_1` are zero, and each remaining even term is
///
/// ```text
/// B_k = -sum_{l=0}^{k-1} C(k+1, l) / (k+1) * B_l
/// ```
///
/// in ascending order, since `B_k` depends on every earlier term.
pub fn bernoulli<N: Number>(n: usize, ctx: &N::Ctx) -> BernoulliSequence<N> {
    let mut values: Vec<N> = Vec::with_capacity(n + 1);
    for k in 0..=n {
        let b = match k {
            0 => N::one(),
            1 => N::one().neg(ctx).div(&N::from_integer(&Integer::from(2)), ctx),
            2 => N::one().div(&N::from_integer(&Integer::from(6)), ctx),
            k if k % 2 == 1 => N::zero(),
            k => recurrence_term(k, &values, ctx),
        };

        trace!(k, value = %b, "computed Bernoulli number");
        values.push(b);
    }

    BernoulliSequence {
        values: values.into_boxed_slice(),
    }
}

// Evaluates the recurrence for an even index `k >= 4`
// given `prev = [B_0, ..., B_{k-1}]`.
fn recurrence_term<N: Number>(k: usize, prev: &[N], ctx: &N::Ctx) -> N {
    let row = binomial_row(k as u64 + 1);
    let denom = N::from_integer(&Integer::from(k + 1));

    let mut sum = N::zero();
    for (binom, b) in row.iter().zip(prev) {
        let coeff = N::from_integer(binom).div(&denom, ctx);
        sum = sum.add(&coeff.mul(b, ctx), ctx);
    }
    sum.neg(ctx)
}

/// Computes `B_0, ..., B_n` as exact rationals.
pub fn bernoulli_exact(n: usize) -> BernoulliSequence<Rational> {
    debug!(n, "computing exact Bernoulli numbers");
    bernoulli(n, &RationalContext)
}

/// Computes `B_0, ..., B_n` as decimals rounded under `ctx`.
///
/// No precision management is done here: the cancellation in the
/// recurrence grows with `n`, so callers should pick a context whose
/// precision leaves enough digits for the largest index they need.
pub fn bernoulli_approximate(n: usize, ctx: &DecimalContext) -> BernoulliSequence<Decimal> {
    debug!(n, prec = ctx.prec(), rm = ?ctx.rm(), "computing approximate Bernoulli numbers");
    bernoulli(n, ctx)
}
