/*
    Traits relevant to rounding
*/

use crate::Number;

/// A specification for rounding behavior.
///
/// For any computer number system, most mathematical operators
/// can be decomposed into two operations:
///  - a real number operation: `R^n -> R`, and
///  - a rounding operation: `R -> R`.
/// A `Context` describes the second operation, the rounding behavior that
/// should be used to apply a "fit-to-representation" on a real number output.
pub trait Context: Sized {}

/// Conversion into the number type `N` through a rounding operation.
/// The context is the one of the output type.
pub trait Round<N: Number> {
    /// Performs a rounding operation returning the result.
    fn round(&self, ctx: &N::Ctx) -> N;
}
