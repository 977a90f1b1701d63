//! Algebraic properties of the number types on generated values.

use astro_bignum::{BigFloat, BigInt, Context, Radix, Rational, RoundingMode};
use proptest::prelude::*;

fn arb_int() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(any::<u64>(), 0..6)).prop_map(|(neg, words)| {
        let v = words
            .into_iter()
            .fold(BigInt::new(), |acc, w| (acc << 64) + BigInt::from(w));
        if neg {
            -v
        } else {
            v
        }
    })
}

fn arb_nonzero_int() -> impl Strategy<Value = BigInt> {
    arb_int().prop_filter("nonzero", |v| !v.is_zero())
}

fn arb_rational() -> impl Strategy<Value = Rational> {
    (arb_int(), arb_nonzero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn arb_float() -> impl Strategy<Value = BigFloat> {
    (arb_int(), -300i64..300, 2usize..400).prop_map(|(n, sh, p)| {
        let v = BigFloat::from_int(&n, p, RoundingMode::ToEven);
        if sh >= 0 {
            v.mul_2exp(sh as usize).unwrap()
        } else {
            v.div_2exp(sh.unsigned_abs() as usize)
        }
    })
}

fn arb_rm() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
        Just(RoundingMode::ToZero),
        Just(RoundingMode::FromZero),
        Just(RoundingMode::ToEven),
        Just(RoundingMode::ToOdd),
    ]
}

fn exact(v: &BigFloat) -> Rational {
    Rational::try_from(v).unwrap()
}

proptest! {
    #[test]
    fn int_division_law(a in arb_int(), b in arb_nonzero_int()) {
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&q * &b + &r, a.clone());
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());

        let (qf, rf) = a.div_mod_floor(&b).unwrap();
        prop_assert_eq!(&qf * &b + &rf, a);
        prop_assert!(rf.is_zero() || rf.is_negative() == b.is_negative());
    }

    #[test]
    fn int_bitwise_identities(a in arb_int(), b in arb_int(), n in 0usize..200) {
        prop_assert_eq!(&a ^ &b, (&a | &b) - (&a & &b));
        prop_assert_eq!(!!a.clone(), a.clone());
        prop_assert!((&a & !&a).is_zero());
        prop_assert_eq!((&a << n) >> n, a.clone());
        prop_assert_eq!(&a >> n, a.div_floor(&(BigInt::from(1) << n)).unwrap());
    }

    #[test]
    fn int_string_round_trip(a in arb_int()) {
        for (rdx, r) in [(Radix::Bin, 2), (Radix::Oct, 8), (Radix::Dec, 10), (Radix::Hex, 16)] {
            let s = a.to_string_radix(rdx);
            prop_assert_eq!(BigInt::from_str_radix(&s, r).unwrap(), a.clone());
        }
    }

    #[test]
    fn rational_field_ops(a in arb_rational(), b in arb_rational()) {
        let s = &a + &b;
        prop_assert!(s.denom().is_positive());
        prop_assert!(s.numer().gcd(&s.denom()) == 1);
        prop_assert_eq!(&s - &b, a.clone());
        if !b.is_zero() {
            prop_assert_eq!(&(&a * &b) / &b, a.clone());
        }
        prop_assert!(Rational::from(a.floor()) <= a && a < Rational::from(a.floor() + BigInt::from(1)));
    }

    #[test]
    fn float_ops_are_correctly_rounded(
        a in arb_float(),
        b in arb_float(),
        p in 2usize..300,
        rm in arb_rm(),
    ) {
        let (x, y) = (exact(&a), exact(&b));

        prop_assert_eq!(a.add(&b, p, rm).unwrap(), BigFloat::from_rational(&(&x + &y), p, rm));
        prop_assert_eq!(a.sub(&b, p, rm).unwrap(), BigFloat::from_rational(&(&x - &y), p, rm));
        prop_assert_eq!(a.mul(&b, p, rm).unwrap(), BigFloat::from_rational(&(&x * &y), p, rm));
        if !b.is_zero() {
            prop_assert_eq!(a.div(&b, p, rm).unwrap(), BigFloat::from_rational(&(&x / &y), p, rm));
        }
    }

    #[test]
    fn float_sqrt_brackets(a in arb_float(), p in 2usize..300) {
        let a = a.abs();
        let lo = a.sqrt(p, RoundingMode::Down).unwrap();
        let hi = a.sqrt(p, RoundingMode::Up).unwrap();
        prop_assert!(exact(&lo) * exact(&lo) <= exact(&a));
        prop_assert!(exact(&hi) * exact(&hi) >= exact(&a));
        prop_assert!(lo <= hi);
    }

    #[test]
    fn float_display_round_trip(a in arb_float()) {
        let mut ctx = Context::new();
        ctx.precision(a.precision());
        let s = a.to_string();
        prop_assert_eq!(ctx.float_from_str(&s).unwrap(), a);
    }
}
