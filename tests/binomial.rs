use bernoulli_num::*;
use proptest::prelude::*;

#[test]
fn small_values() {
    assert_eq!(binomial(0, 0), 1);
    assert_eq!(binomial(5, 1), 5);
    assert_eq!(binomial(5, 2), 10);
    assert_eq!(binomial(6, 3), 20);
    assert_eq!(binomial(8, 4), 70);
    assert_eq!(binomial(10, 5), 252);
    assert_eq!(binomial(20, 10), 184756);
    assert_eq!(binomial(30, 7), 2035800);
}

#[test]
fn complements_take_the_fast_path() {
    assert_eq!(binomial(9, 8), 9);
    assert_eq!(binomial(9, 7), 36);
    assert_eq!(binomial(9, 6), 84);
    assert_eq!(binomial(9, 5), 126);
}

#[test]
fn degenerate_arguments() {
    assert_eq!(binomial(3, 4), 0);
    assert_eq!(binomial(3, -1), 0);
    assert_eq!(binomial(-3, 1), 0);
    assert_eq!(binomial(-3, -3), 0);
}

#[test]
fn large_central_coefficient() {
    let expected: Integer = "100891344545564193334812497256".parse().unwrap();
    assert_eq!(binomial(100, 50), expected);
}

#[test]
fn row_matches_binomial() {
    for n in 0..40_u64 {
        let row = binomial_row(n);
        assert_eq!(row.len(), n as usize + 1);
        for (k, c) in row.iter().enumerate() {
            assert_eq!(*c, binomial(n as i64, k as i64), "C({}, {})", n, k);
        }
    }
}

proptest! {
    #[test]
    fn symmetric((n, k) in (0_i64..120).prop_flat_map(|n| (Just(n), 0..=n))) {
        prop_assert_eq!(binomial(n, k), binomial(n, n - k));
    }

    #[test]
    fn edges_are_one(n in 0_i64..500) {
        prop_assert_eq!(binomial(n, 0), 1);
        prop_assert_eq!(binomial(n, n), 1);
    }

    #[test]
    fn out_of_range_is_zero(n in 0_i64..200, excess in 1_i64..50) {
        prop_assert_eq!(binomial(n, n + excess), 0);
        prop_assert_eq!(binomial(n, -excess), 0);
    }

    #[test]
    fn row_sums_to_power_of_two(n in 0_u32..150) {
        let sum = (0..=n as i64).fold(Integer::new(), |acc, k| acc + binomial(n as i64, k));
        prop_assert_eq!(sum, Integer::from(1) << n);
    }

    #[test]
    fn pascal_rule((n, k) in (1_i64..100).prop_flat_map(|n| (Just(n), 1..=n))) {
        let lhs = binomial(n, k);
        let rhs = binomial(n - 1, k - 1) + binomial(n - 1, k);
        prop_assert_eq!(lhs, rhs);
    }
}
