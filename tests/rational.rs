//! Rational arithmetic and canonical form.

use astro_bignum::{BigFloat, BigInt, Error, Radix, Rational};
use rand::random;

fn q(n: i64, d: i64) -> Rational {
    Rational::new(BigInt::from(n), BigInt::from(d)).unwrap()
}

fn is_canonical(v: &Rational) -> bool {
    v.denom().is_positive() && v.numer().gcd(&v.denom()) == 1
}

#[test]
fn test_canonical_form() {
    let v = q(4, 8);
    assert_eq!(v.to_string(), "1/2");
    assert_eq!(q(6, -4).to_string(), "-3/2");
    assert_eq!(q(0, -7).to_string(), "0");
    assert_eq!(q(0, -7).denom(), 1);

    let mut raw = Rational::new_raw(BigInt::from(-10), BigInt::from(-15)).unwrap();
    assert_eq!(raw.numer(), -10);
    raw.canonicalize();
    assert_eq!(raw, q(2, 3));

    assert!(matches!(
        Rational::new(BigInt::from(1), BigInt::new()),
        Err(Error::Domain(_))
    ));
}

#[test]
fn test_arith_keeps_canonical() {
    for _ in 0..500 {
        let a = q(random::<i32>() as i64, (random::<u16>() as i64) + 1);
        let b = q(random::<i32>() as i64, -(random::<u16>() as i64) - 1);

        let s = &a + &b;
        let d = &a - &b;
        let m = &a * &b;
        for v in [&s, &d, &m] {
            assert!(is_canonical(v));
        }
        assert_eq!(&s - &b, a);
        assert_eq!(&d + &b, a);

        if !b.is_zero() {
            let r = &m / &b;
            assert!(is_canonical(&r));
            assert_eq!(r, a);
        }
    }
}

#[test]
fn test_rounding_to_int() {
    let v = q(-7, 2);
    assert_eq!(v.floor(), -4);
    assert_eq!(v.ceil(), -3);
    assert_eq!(v.trunc(), -3);
    assert_eq!(v.fract(), q(-1, 2));
    assert_eq!(BigInt::from(&v), -3);

    let w = q(9, 4);
    assert_eq!(w.floor(), 2);
    assert_eq!(w.ceil(), 3);
    assert_eq!(w.fract(), q(1, 4));
}

#[test]
fn test_powers_and_shifts() {
    assert_eq!(q(2, 3).pow(3).unwrap(), q(8, 27));
    assert_eq!(q(-2, 3).pow(-2).unwrap(), q(9, 4));
    assert!(matches!(Rational::default().pow(-1), Err(Error::DivisionByZero)));
    assert!(matches!(Rational::default().recip(), Err(Error::DivisionByZero)));

    assert_eq!(q(3, 8).mul_2exp(4), q(6, 1));
    assert_eq!(q(12, 5).div_2exp(3), q(3, 10));
    assert_eq!(q(3, 8) << 1, q(3, 4));
}

#[test]
fn test_conversions() {
    assert_eq!(Rational::try_from(0.375).unwrap(), q(3, 8));
    assert_eq!(Rational::try_from(-1e20).unwrap(), Rational::from(-100000000000000000000i128));
    assert!(Rational::try_from(f64::NAN).is_err());
    assert_eq!(q(1, 3).to_f64(), 1.0 / 3.0);

    let x = BigFloat::from_f64(-2.625, 64).unwrap();
    assert_eq!(Rational::try_from(&x).unwrap(), q(-21, 8));

    assert_eq!("-12/18".parse::<Rational>().unwrap(), q(-2, 3));
    assert_eq!(Rational::from_str_radix("ff/10", 16).unwrap(), q(255, 16));
    assert_eq!(q(255, 16).to_string_radix(Radix::Hex), "ff/10");
    assert!("1/-2".parse::<Rational>().is_err());
    assert!(matches!("1/0".parse::<Rational>(), Err(Error::Domain(_))));

    assert!(q(1, 3) < q(1, 2));
    assert!(q(7, 2) > BigInt::from(3));
    assert!(q(1, 3) < 0.34);
}
