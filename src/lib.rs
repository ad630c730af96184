/*
    Top-level
*/

mod errors;
mod number;
mod round;

pub mod bernoulli;
pub mod binomial;
pub mod compare;
pub mod decimal;
pub mod polynomial;
pub mod rational;

pub use errors::*;
pub use number::*;
pub use round::*;

pub use bernoulli::{bernoulli, bernoulli_approximate, bernoulli_exact, BernoulliSequence};
pub use binomial::{binomial, binomial_row};
pub use decimal::{Decimal, DecimalContext, RoundingMode};
pub use polynomial::{evaluate_approximate, evaluate_exact, evaluate_polynomial, Polynomial};
pub use rational::RationalContext;

pub use rug::{Integer, Rational};
