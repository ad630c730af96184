use bernoulli_num::polynomial::lin;
use bernoulli_num::*;
use proptest::prelude::*;

fn d(coeffs: &[i64]) -> Vec<Decimal> {
    coeffs.iter().map(|c| Decimal::from(*c)).collect()
}

fn q(coeffs: &[i64]) -> Vec<Rational> {
    coeffs.iter().map(|c| Rational::from(*c)).collect()
}

fn eval_d(coeffs: &[i64], x: i64) -> Option<Decimal> {
    evaluate_approximate(&d(coeffs), &Decimal::from(x), &DecimalContext::new())
}

#[test]
fn linear_step() {
    let ctx = DecimalContext::new();
    let (c1, c0, x) = (Decimal::from(3), Decimal::from(2), Decimal::from(4));
    assert_eq!(lin(&c1, &c0, &x, &ctx), Decimal::from(14));
}

#[test]
fn empty_polynomial() {
    assert_eq!(eval_d(&[], 2), None);
    assert_eq!(evaluate_exact(&[], &Rational::from(7)), None);
    assert_eq!(Polynomial::<Rational>::new(vec![]).degree(), None);
}

#[test]
fn constant_polynomial() {
    assert_eq!(eval_d(&[5], 2), Some(Decimal::from(5)));
    assert_eq!(eval_d(&[-3], -1), Some(Decimal::from(-3)));
    assert_eq!(eval_d(&[0], 100), Some(Decimal::zero()));
}

#[test]
fn linear_polynomial() {
    // 3x + 2 at x = 1
    assert_eq!(eval_d(&[2, 3], 1), Some(Decimal::from(5)));
    // 2x - 1 at x = 0
    assert_eq!(eval_d(&[-1, 2], 0), Some(Decimal::from(-1)));
    // -x + 1 at x = -2
    assert_eq!(eval_d(&[1, -1], -2), Some(Decimal::from(3)));
}

#[test]
fn quadratic_polynomial() {
    // x^2 + 2x + 1 at x = 2
    assert_eq!(eval_d(&[1, 2, 1], 2), Some(Decimal::from(9)));
    // x^2 at x = 3
    assert_eq!(eval_d(&[0, 0, 1], 3), Some(Decimal::from(9)));
    // -x^2 + x - 1 at x = 1
    assert_eq!(eval_d(&[-1, 1, -1], 1), Some(Decimal::from(-1)));
}

#[test]
fn cubic_polynomial() {
    assert_eq!(eval_d(&[1, 0, 0, 1], 1), Some(Decimal::from(2)));
    assert_eq!(eval_d(&[0, 0, 0, 2], -1), Some(Decimal::from(-2)));
    assert_eq!(eval_d(&[1, 1, 1, 1], 0), Some(Decimal::from(1)));
}

#[test]
fn higher_degree_polynomial() {
    // 3x^4 - x^3 + 2x + 1
    assert_eq!(eval_d(&[1, 2, 0, -1, 3], 1), Some(Decimal::from(5)));
    assert_eq!(eval_d(&[1, -2, 3, -4, 5, -6], 1), Some(Decimal::from(-3)));
}

#[test]
fn rational_polynomial() {
    // x^2/2 - x/3 + 1/4 at x = 3/5
    let coeffs = vec![
        Rational::from((1, 4)),
        Rational::from((-1, 3)),
        Rational::from((1, 2)),
    ];
    let x = Rational::from((3, 5));
    assert_eq!(evaluate_exact(&coeffs, &x), Some(Rational::from((23, 100))));
}

#[test]
fn rounding_follows_context() {
    // 1/3 + x at x = 1e-10, with too few digits to hold the sum
    let ctx = DecimalContext::new().precision(8);
    let third = Decimal::from(1).div(&Decimal::from(3), &ctx);
    let coeffs = vec![third.clone(), Decimal::from(1)];
    let x: Decimal = "1e-10".parse().unwrap();
    assert_eq!(evaluate_approximate(&coeffs, &x, &ctx), Some(third));
}

#[test]
fn polynomial_wrapper() {
    let p = Polynomial::from(q(&[1, 2, 1]));
    assert_eq!(p.degree(), Some(2));
    assert_eq!(p.coefficients(), q(&[1, 2, 1]).as_slice());
    assert_eq!(p.evaluate(&Rational::from(2), &RationalContext), Some(Rational::from(9)));
    assert_eq!(Polynomial::from(d(&[1, -2, 1])).to_string(), "(1)*X^2 + (-2)*X + (1)");

    // a zero leading coefficient keeps the formal degree
    let p = Polynomial::new(d(&[4, 0, 0]));
    assert_eq!(p.degree(), Some(2));
    assert_eq!(
        p.evaluate(&Decimal::from(9), &DecimalContext::new()),
        Some(Decimal::from(4))
    );
}

// Sum of c_i * x^i, term by term
fn direct_sum<N: Number>(coeffs: &[N], x: &N, ctx: &N::Ctx) -> N {
    let mut sum = N::zero();
    let mut power = N::one();
    for c in coeffs {
        sum = sum.add(&c.mul(&power, ctx), ctx);
        power = power.mul(x, ctx);
    }
    sum
}

fn arb_rational() -> impl Strategy<Value = Rational> {
    (-50_i64..=50, 1_i64..=12).prop_map(|(n, d)| Rational::from((n, d)))
}

proptest! {
    #[test]
    fn horner_matches_direct_sum_exact(
        coeffs in prop::collection::vec(arb_rational(), 1..=14),
        x in arb_rational(),
    ) {
        let expected = direct_sum(&coeffs, &x, &RationalContext);
        prop_assert_eq!(evaluate_exact(&coeffs, &x), Some(expected));
    }

    #[test]
    fn horner_matches_direct_sum_integers(
        coeffs in prop::collection::vec(-10_i64..=10, 1..=14),
        x in -5_i64..=5,
    ) {
        // every intermediate fits in 28 digits, so nothing is rounded
        let ctx = DecimalContext::new();
        let coeffs = d(&coeffs);
        let x = Decimal::from(x);
        let expected = direct_sum(&coeffs, &x, &ctx);
        prop_assert_eq!(evaluate_approximate(&coeffs, &x, &ctx), Some(expected));
    }

    #[test]
    fn horner_matches_direct_sum_within_tolerance(
        coeffs in prop::collection::vec(arb_rational(), 1..=14),
        x in arb_rational(),
    ) {
        let ctx = DecimalContext::new().precision(40);
        let coeffs_d: Vec<Decimal> = coeffs.iter().map(|c| Decimal::from_rational(c, &ctx)).collect();
        let x_d = Decimal::from_rational(&x, &ctx);

        let exact = evaluate_exact(&coeffs, &x).unwrap();
        let approx = evaluate_approximate(&coeffs_d, &x_d, &ctx).unwrap();

        // relative to the magnitude sum of |c_i| * |x|^i
        let abs_coeffs: Vec<Rational> = coeffs.iter().map(|c| Rational::from(c.abs_ref())).collect();
        let magnitude = direct_sum(&abs_coeffs, &Rational::from(x.abs_ref()), &RationalContext);
        let tolerance = Decimal::from_rational(&magnitude, &ctx)
            .mul(&"1e-30".parse::<Decimal>().unwrap(), &ctx);

        let err = Decimal::from_rational(&exact, &ctx).sub(&approx, &ctx).abs(&ctx);
        prop_assert!(err <= tolerance, "error {} exceeds {}", err, tolerance);
    }
}
