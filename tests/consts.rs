//! Values of the constants and the behavior of the cache.

use astro_bignum::{consts, Constant, Consts, Context, Radix, RoundingMode};

const PI: &str = "314159265358979323846264338327950288419716939937510582097494";
const LN10: &str = "2302585092994045684017991454684364207601";
const E: &str = "2718281828459045235360287471352662497757";
const LN2: &str = "6931471805599453094172321214581765680755";

#[test]
fn test_values() {
    let rm = RoundingMode::ToEven;

    let (s, x) = consts::pi(256, rm).unwrap().to_string_radix(Radix::Dec, 60);
    assert_eq!((s.as_str(), x), (PI, 1));

    let (s, x) = consts::ln_10(160, rm).unwrap().to_string_radix(Radix::Dec, 40);
    assert_eq!((s.as_str(), x), (LN10, 1));

    let (s, x) = consts::e(160, rm).unwrap().to_string_radix(Radix::Dec, 40);
    assert_eq!((s.as_str(), x), (E, 1));

    let (s, x) = consts::ln_2(160, rm).unwrap().to_string_radix(Radix::Dec, 40);
    assert_eq!((s.as_str(), x), (LN2, 0));
}

#[test]
fn test_directed_rounding() {
    for p in [2, 17, 64, 333, 1000] {
        let lo = consts::pi(p, RoundingMode::Down).unwrap();
        let hi = consts::pi(p, RoundingMode::Up).unwrap();
        assert!(lo < hi);
        assert_eq!(lo.precision(), p);

        // pi is irrational, the two roundings are adjacent
        let ulp = hi.sub(&lo, p + 8, RoundingMode::None).unwrap();
        assert_eq!(ulp.exponent(), lo.exponent() - p as i64 + 1);
    }
}

#[test]
fn test_cache() {
    let mut cc = Consts::new();
    let rm = RoundingMode::ToEven;

    let a = cc.pi(500, rm).unwrap();
    let b = cc.pi(500, rm).unwrap();
    assert_eq!(a, b);
    assert_eq!(cc.compute_count(Constant::Pi), 1);
    assert_eq!(cc.cached_precision(Constant::Pi), Some(500));

    // another rounding mode is a different value
    cc.pi(500, RoundingMode::Up).unwrap();
    assert_eq!(cc.compute_count(Constant::Pi), 2);

    let c = cc.pi(100, rm).unwrap();
    assert_eq!(c.precision(), 100);
    assert_eq!(c, a.round_to(100, rm).unwrap());
    assert_eq!(cc.cached_precision(Constant::Pi), Some(100));

    cc.reset();
    assert_eq!(cc.cached_precision(Constant::Pi), None);
    assert_eq!(cc.cached_precision(Constant::E), None);
}

#[test]
fn test_context_cache() {
    let mut ctx = Context::new();
    ctx.precision(128);

    let a = ctx.const_log2().unwrap();
    let b = ctx.const_log2().unwrap();
    assert_eq!(a, b);
    assert_eq!(ctx.consts().compute_count(Constant::Ln2), 1);

    ctx.reset_log2();
    assert_eq!(ctx.consts().cached_precision(Constant::Ln2), None);
    ctx.const_log2().unwrap();
    assert_eq!(ctx.consts().compute_count(Constant::Ln2), 2);

    // a cloned context carries its own cache
    let mut other = ctx.clone();
    other.precision(64);
    other.const_log2().unwrap();
    assert_eq!(ctx.consts().cached_precision(Constant::Ln2), Some(128));
    assert_eq!(other.consts().cached_precision(Constant::Ln2), Some(64));

    let pi = ctx.const_pi().unwrap();
    let ten = ctx.const_log10().unwrap();
    let e = ctx.const_e().unwrap();
    assert!(pi > e && e > ten && ten > a);
}
