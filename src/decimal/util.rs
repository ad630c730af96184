use std::cmp::Ordering;

use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::Zero;
use rug::integer::Order;
use rug::Integer;

// Returns `10^n`
pub(crate) fn pow10(n: usize) -> BigUint {
    // exponents here are bounded by digit counts, which fit in a u32
    BigUint::from(10_u8).pow(n as u32)
}

// Number of decimal digits in `c`, zero for zero
pub(crate) fn num_digits(c: &BigUint) -> usize {
    if c.is_zero() {
        0
    } else {
        c.to_str_radix(10).len()
    }
}

// Removes trailing zero digits from `c`, returning the
// number of digits removed
pub(crate) fn strip_trailing_zeros(c: &mut BigUint) -> usize {
    if c.is_zero() {
        return 0;
    }

    let ten = BigUint::from(10_u8);
    let mut count = 0;
    loop {
        let (q, r) = c.div_rem(&ten);
        if !r.is_zero() {
            return count;
        }
        *c = q;
        count += 1;
    }
}

// Splits a GMP integer into a sign (true if negative) and magnitude
pub(crate) fn integer_to_parts(i: &Integer) -> (bool, BigUint) {
    let digits = i.to_digits::<u32>(Order::Lsf);
    (i.cmp0() == Ordering::Less, BigUint::new(digits))
}

// Compares the remainder `r` of a division by `10^n` with
// half of `10^n`, where `n >= 1`
pub(crate) fn cmp_half(r: &BigUint, n: usize) -> Ordering {
    (r * 2_u32).cmp(&pow10(n))
}
