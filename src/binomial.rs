/*
    Binomial coefficients
*/

use rug::Integer;

/// Computes the binomial coefficient `C(n, k)` exactly.
///
/// Out-of-range arguments (`n < 0`, `k < 0` or `k > n`) are not an error:
/// there are no such subsets, so the result is zero.
///
/// The small cases `k <= 4` (and their complements `n - k <= 4`) use
/// closed forms. Everything else unrolls `C(n, k) = n * C(n-1, k-1) / k`
/// bottom-up from `C(n-k+4, 4)`, multiplying before dividing so every
/// intermediate value is an exact integer.
pub fn binomial(n: i64, k: i64) -> Integer {
    if n < 0 || k < 0 || k > n {
        return Integer::new();
    }

    // C(n, k) == C(n, n-k)
    let k = i64::min(k, n - k);
    match k {
        0 => Integer::from(1),
        1 => Integer::from(n),
        2 => Integer::from(n) * (n - 1) / 2,
        3 => Integer::from(n) * (n - 1) * (n - 2) / 6,
        4 => Integer::from(n) * (n - 1) * (n - 2) * (n - 3) / 24,
        _ => {
            let offset = n - k;
            let mut c = binomial(offset + 4, 4);
            for j in 5..=k {
                c *= offset + j;
                c /= j;
            }
            c
        }
    }
}

/// Computes row `n` of Pascal's triangle, `[C(n, 0), ..., C(n, n)]`.
/// This is the row form of [`binomial`]: entry `l` equals `binomial(n, l)`.
///
/// Each entry is derived from its left neighbor with
/// `C(n, l+1) = C(n, l) * (n - l) / (l + 1)`.
pub fn binomial_row(n: u64) -> Vec<Integer> {
    let mut row = Vec::with_capacity(n as usize + 1);
    let mut c = Integer::from(1);
    for l in 0..n {
        let next = Integer::from(&c * (n - l)) / (l + 1);
        row.push(c);
        c = next;
    }
    row.push(c);
    row
}
