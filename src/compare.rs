/*
    Comparing exact and approximate values
*/

use rug::Rational;
use tracing::debug;

use crate::decimal::{Decimal, DecimalContext};
use crate::{CompareError, Number};

/// The disagreement between an exact value and its approximation.
#[derive(Clone, Debug, PartialEq)]
pub struct Discrepancy {
    /// Index of the compared pair
    pub index: usize,
    /// The exact value rendered under the comparison context
    pub exact: Decimal,
    /// The approximate value as given
    pub approximate: Decimal,
    /// `|exact - approximate|`
    pub absolute: Decimal,
    /// `|exact - approximate| / |exact|`
    pub relative: Decimal,
}

/// Compares exact rationals with their decimal approximations, index by index.
///
/// Indices whose exact value is zero are skipped, as the relative
/// difference is undefined there. The exact values are rendered and
/// all differences computed under `ctx`, which should be at least as
/// precise as the context the approximations were computed with.
pub fn compare(
    exact: &[Rational],
    approximate: &[Decimal],
    ctx: &DecimalContext,
) -> Result<Vec<Discrepancy>, CompareError> {
    if exact.len() != approximate.len() {
        return Err(CompareError::LengthMismatch {
            exact: exact.len(),
            approximate: approximate.len(),
        });
    }

    let discrepancies: Vec<Discrepancy> = exact
        .iter()
        .zip(approximate)
        .enumerate()
        .filter(|(_, (q, _))| !Number::is_zero(*q))
        .map(|(index, (q, approx))| {
            let exact = Decimal::from_rational(q, ctx);
            let absolute = exact.sub(approx, ctx).abs(ctx);
            let relative = absolute.div(&exact, ctx).abs(ctx);
            Discrepancy {
                index,
                exact,
                approximate: approx.clone(),
                absolute,
                relative,
            }
        })
        .collect();

    debug!(
        compared = discrepancies.len(),
        prec = ctx.prec(),
        "compared exact and approximate values"
    );
    Ok(discrepancies)
}
