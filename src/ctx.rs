//! Numeric context: default precision, radix, rounding mode, precision policy and the constants cache.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Radix;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;
use crate::float::clamp_precision;
use crate::float::BigFloat;
use crate::int::BigInt;
use crate::ops::consts::Consts;
use crate::ratio::Rational;

/// Precision of the results of context arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrecisionPolicy {
    /// The result has the largest precision of the operands.
    #[default]
    Max,

    /// The result has the precision of the context.
    Fixed,
}

/// Context holds default parameters of numeric operations and caches the values of constants.
///
/// Settings affect only values created after the change. Constants are recomputed when
/// the precision or the rounding mode of the context differs from the cached ones.
///
/// ```
/// use astro_bignum::{Context, PrecisionPolicy};
///
/// let mut ctx = Context::new();
/// ctx.precision(128).policy(PrecisionPolicy::Fixed);
///
/// let a = ctx.float_from_str("1.5").unwrap();
/// let b = ctx.float_from_str("2.25").unwrap();
/// assert_eq!(ctx.add(&a, &b).unwrap().precision(), 128);
///
/// let pi = ctx.const_pi().unwrap();
/// assert!(pi > 3 && pi < 4);
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    p: usize,
    radix: Radix,
    rm: RoundingMode,
    policy: PrecisionPolicy,
    cc: Consts,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Context with precision 512 bits, decimal radix, rounding to nearest even,
    /// and the largest operand precision for arithmetic results.
    pub fn new() -> Self {
        Context {
            p: DEFAULT_P,
            radix: Radix::Dec,
            rm: DEFAULT_RM,
            policy: PrecisionPolicy::Max,
            cc: Consts::new(),
        }
    }

    /// Sets the precision in bits. Values outside of the supported range are clamped.
    pub fn precision(&mut self, p: usize) -> &mut Self {
        self.p = clamp_precision(p);
        self
    }

    /// Sets the radix used for parsing and printing.
    pub fn radix(&mut self, radix: Radix) -> &mut Self {
        self.radix = radix;
        self
    }

    /// Sets the rounding mode.
    pub fn rounding_mode(&mut self, rm: RoundingMode) -> &mut Self {
        self.rm = rm;
        self
    }

    /// Sets the precision policy of arithmetic.
    pub fn policy(&mut self, policy: PrecisionPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Returns the precision in bits.
    pub fn get_precision(&self) -> usize {
        self.p
    }

    /// Returns the radix.
    pub fn get_radix(&self) -> Radix {
        self.radix
    }

    /// Returns the rounding mode.
    pub fn get_rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Returns the precision policy.
    pub fn get_policy(&self) -> PrecisionPolicy {
        self.policy
    }

    /// Returns the constants cache.
    pub fn consts(&self) -> &Consts {
        &self.cc
    }

    /// Returns the constants cache for use with functions of [`BigFloat`].
    pub fn consts_mut(&mut self) -> &mut Consts {
        &mut self.cc
    }

    fn binary_precision(&self, a: &BigFloat, b: &BigFloat) -> usize {
        match self.policy {
            PrecisionPolicy::Max => a.precision().max(b.precision()),
            PrecisionPolicy::Fixed => self.p,
        }
    }

    fn unary_precision(&self, a: &BigFloat) -> usize {
        match self.policy {
            PrecisionPolicy::Max => a.precision(),
            PrecisionPolicy::Fixed => self.p,
        }
    }
}

/// Construction and printing.
impl Context {
    /// Zero with the precision of the context.
    pub fn float(&self) -> BigFloat {
        BigFloat::new(self.p)
    }

    /// Converts `f` exactly and rounds it to the precision of the context.
    ///
    /// ## Errors
    ///
    ///  - Domain: `f` is not finite.
    pub fn float_from_f64(&self, f: f64) -> Result<BigFloat, Error> {
        BigFloat::from_f64(f, 64)?.round_to(self.p, self.rm)
    }

    /// Converts `v` with the precision of the context.
    pub fn float_from_int(&self, v: &BigInt) -> BigFloat {
        BigFloat::from_int(v, self.p, self.rm)
    }

    /// Converts `v` with the precision of the context.
    pub fn float_from_rational(&self, v: &Rational) -> BigFloat {
        BigFloat::from_rational(v, self.p, self.rm)
    }

    /// Parses a floating point number in the radix of the context.
    ///
    /// ## Errors
    ///
    ///  - Parse: the string is not a valid number.
    ///  - ExponentOverflow: the value is too large.
    pub fn float_from_str(&self, s: &str) -> Result<BigFloat, Error> {
        BigFloat::from_str_radix(s, self.radix.value(), self.p, self.rm)
    }

    /// Parses an integer in the radix of the context.
    ///
    /// ## Errors
    ///
    ///  - Parse: the string is not a valid integer.
    pub fn int_from_str(&self, s: &str) -> Result<BigInt, Error> {
        BigInt::from_str_radix(s, self.radix.value())
    }

    /// Parses a rational number `n/d` or `n` in the radix of the context.
    ///
    /// ## Errors
    ///
    ///  - Parse: the string is not a valid rational number.
    ///  - Domain: the denominator is zero.
    pub fn rational_from_str(&self, s: &str) -> Result<Rational, Error> {
        Rational::from_str_radix(s, self.radix.value())
    }

    /// Digits of `x` in the radix of the context and the exponent, see [`BigFloat::to_string_radix`].
    pub fn to_string_radix(&self, x: &BigFloat, n: usize) -> (String, Exponent) {
        x.to_string_radix(self.radix, n)
    }
}

/// Arithmetic following the precision policy and the rounding mode of the context.
impl Context {
    /// Adds `b` to `a`.
    pub fn add(&self, a: &BigFloat, b: &BigFloat) -> Result<BigFloat, Error> {
        a.add(b, self.binary_precision(a, b), self.rm)
    }

    /// Subtracts `b` from `a`.
    pub fn sub(&self, a: &BigFloat, b: &BigFloat) -> Result<BigFloat, Error> {
        a.sub(b, self.binary_precision(a, b), self.rm)
    }

    /// Multiplies `a` by `b`.
    pub fn mul(&self, a: &BigFloat, b: &BigFloat) -> Result<BigFloat, Error> {
        a.mul(b, self.binary_precision(a, b), self.rm)
    }

    /// Divides `a` by `b`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `b` is zero.
    pub fn div(&self, a: &BigFloat, b: &BigFloat) -> Result<BigFloat, Error> {
        a.div(b, self.binary_precision(a, b), self.rm)
    }

    /// Square root of `a`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `a` is negative.
    pub fn sqrt(&self, a: &BigFloat) -> Result<BigFloat, Error> {
        a.sqrt(self.unary_precision(a), self.rm)
    }

    /// `sqrt(a^2 + b^2)`.
    pub fn hypot(&self, a: &BigFloat, b: &BigFloat) -> Result<BigFloat, Error> {
        a.hypot(b, self.binary_precision(a, b), self.rm)
    }

    /// `a` to the integer power `n`.
    pub fn powi(&self, a: &BigFloat, n: i64) -> Result<BigFloat, Error> {
        a.powi(n, self.unary_precision(a), self.rm)
    }
}

/// Constants and elementary functions, computed with the precision of the context.
impl Context {
    /// Returns pi. The cached value is reused if it has the precision and the rounding mode of the context.
    pub fn const_pi(&mut self) -> Result<BigFloat, Error> {
        self.cc.pi(self.p, self.rm)
    }

    /// Returns Euler's number.
    pub fn const_e(&mut self) -> Result<BigFloat, Error> {
        self.cc.e(self.p, self.rm)
    }

    /// Returns the natural logarithm of 2.
    pub fn const_log2(&mut self) -> Result<BigFloat, Error> {
        self.cc.ln_2(self.p, self.rm)
    }

    /// Returns the natural logarithm of 10.
    pub fn const_log10(&mut self) -> Result<BigFloat, Error> {
        self.cc.ln_10(self.p, self.rm)
    }

    /// Drops the cached value of pi.
    pub fn reset_pi(&mut self) {
        self.cc.reset_pi();
    }

    /// Drops the cached value of Euler's number.
    pub fn reset_e(&mut self) {
        self.cc.reset_e();
    }

    /// Drops the cached value of ln(2).
    pub fn reset_log2(&mut self) {
        self.cc.reset_ln_2();
    }

    /// Drops the cached value of ln(10).
    pub fn reset_log10(&mut self) {
        self.cc.reset_ln_10();
    }

    /// Drops all cached values.
    pub fn reset_consts(&mut self) {
        self.cc.reset();
    }

    /// Natural logarithm of `x`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `x` is zero or negative.
    pub fn log(&mut self, x: &BigFloat) -> Result<BigFloat, Error> {
        x.ln(self.p, self.rm, &mut self.cc)
    }

    /// Logarithm base 2 of `x`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `x` is zero or negative.
    pub fn log2(&mut self, x: &BigFloat) -> Result<BigFloat, Error> {
        x.log2(self.p, self.rm, &mut self.cc)
    }

    /// Logarithm base 10 of `x`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `x` is zero or negative.
    pub fn log10(&mut self, x: &BigFloat) -> Result<BigFloat, Error> {
        x.log10(self.p, self.rm, &mut self.cc)
    }

    /// `e` to the power of `x`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    pub fn exp(&self, x: &BigFloat) -> Result<BigFloat, Error> {
        x.exp(self.p, self.rm)
    }

    /// `x` to the power of `y`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `x` is negative and `y` is not an integer.
    ///  - DivisionByZero: `x` is zero and `y` is negative.
    pub fn pow(&mut self, x: &BigFloat, y: &BigFloat) -> Result<BigFloat, Error> {
        x.pow(y, self.p, self.rm, &mut self.cc)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ops::consts::Constant;

    #[test]
    fn test_policy() {
        let mut ctx = Context::new();
        let a = BigFloat::from_f64(1.5, 64).unwrap();
        let b = BigFloat::from_f64(2.25, 128).unwrap();

        let s = ctx.add(&a, &b).unwrap();
        assert_eq!(s.precision(), 128);
        assert_eq!(s, 3.75);
        assert_eq!(ctx.sqrt(&a).unwrap().precision(), 64);

        ctx.policy(PrecisionPolicy::Fixed).precision(96);
        assert_eq!(ctx.get_policy(), PrecisionPolicy::Fixed);
        assert_eq!(ctx.mul(&a, &b).unwrap().precision(), 96);
        assert_eq!(ctx.sub(&a, &b).unwrap(), -0.75);
        assert_eq!(ctx.div(&b, &a).unwrap(), 1.5);
        assert_eq!(ctx.powi(&a, 2).unwrap(), 2.25);
        assert_eq!(ctx.sqrt(&b).unwrap().precision(), 96);
        assert_eq!(ctx.hypot(&BigFloat::from(3), &BigFloat::from(4)).unwrap(), 5);
        assert_eq!(ctx.div(&a, &ctx.float()), Err(Error::DivisionByZero));

        // hypot rounds once to the context precision
        ctx.precision(5);
        let x = BigFloat::from_f64(1.0 + 1.0 / 32.0, 64).unwrap();
        let y = BigFloat::from_f64(2f64.powi(-100), 64).unwrap();
        assert_eq!(ctx.hypot(&x, &y).unwrap(), 1.0625);
    }

    #[test]
    fn test_settings() {
        let mut ctx = Context::new();
        assert_eq!(ctx.get_precision(), DEFAULT_P);
        assert_eq!(ctx.get_radix(), Radix::Dec);
        assert_eq!(ctx.get_rounding_mode(), DEFAULT_RM);

        let before = ctx.float();
        ctx.precision(1).radix(Radix::Hex).rounding_mode(RoundingMode::Down);
        assert_eq!(ctx.get_precision(), 2);
        assert_eq!(before.precision(), DEFAULT_P);

        ctx.precision(100);
        let v = ctx.float_from_str("ff.8").unwrap();
        assert_eq!(v, 255.5);
        assert_eq!(v.precision(), 100);
        assert_eq!(ctx.int_from_str("-ff").unwrap(), BigInt::from(-255));
        assert_eq!(ctx.rational_from_str("1/10").unwrap(), Rational::from(1) / Rational::from(16));
        assert_eq!(ctx.to_string_radix(&v, 3), ("ff8".to_owned(), 2));

        // rounded down to the precision of the context
        ctx.precision(8);
        assert_eq!(ctx.float_from_f64(257.0).unwrap(), 256);
        assert_eq!(ctx.float_from_int(&BigInt::from(-257)), -258);
        assert_eq!(ctx.float_from_rational(&Rational::from(3)), 3);
    }

    #[test]
    fn test_const_cache() {
        let mut ctx = Context::new();
        ctx.precision(128);

        let p1 = ctx.const_pi().unwrap();
        let p2 = ctx.const_pi().unwrap();
        assert_eq!(p1, p2);
        assert_eq!(ctx.consts().compute_count(Constant::Pi), 1);
        assert_eq!(ctx.consts().cached_precision(Constant::Pi), Some(128));

        ctx.precision(256);
        let p3 = ctx.const_pi().unwrap();
        assert_eq!(p3.precision(), 256);
        assert_eq!(ctx.consts().compute_count(Constant::Pi), 2);
        assert_eq!(p3.round_to(128, DEFAULT_RM).unwrap(), p1);

        ctx.reset_pi();
        assert_eq!(ctx.consts().cached_precision(Constant::Pi), None);
        ctx.const_pi().unwrap();
        assert_eq!(ctx.consts().compute_count(Constant::Pi), 3);

        ctx.const_e().unwrap();
        ctx.const_log2().unwrap();
        ctx.const_log10().unwrap();
        ctx.reset_e();
        ctx.reset_log2();
        assert_eq!(ctx.consts().cached_precision(Constant::E), None);
        assert_eq!(ctx.consts().cached_precision(Constant::Ln2), None);
        assert_eq!(ctx.consts().cached_precision(Constant::Ln10), Some(256));
        ctx.reset_log10();
        assert_eq!(ctx.consts().cached_precision(Constant::Ln10), None);

        ctx.const_pi().unwrap();
        ctx.reset_consts();
        assert_eq!(ctx.consts().cached_precision(Constant::Pi), None);
    }

    #[test]
    fn test_functions() {
        let mut ctx = Context::new();
        ctx.precision(53);

        let two = ctx.float_from_f64(2.0).unwrap();
        assert_eq!(ctx.log(&two).unwrap().to_f64(), core::f64::consts::LN_2);
        assert_eq!(ctx.log2(&two).unwrap(), 1);
        assert_eq!(ctx.log10(&BigFloat::from(100)).unwrap(), 2);
        assert_eq!(ctx.exp(&ctx.float()).unwrap(), 1);
        assert_eq!(ctx.pow(&two, &BigFloat::from(10)).unwrap(), 1024);
        assert!(ctx.log(&ctx.float()).is_err());

        let x = ctx.exp(&two).unwrap();
        assert_eq!(x.precision(), 53);
        assert_eq!(x.to_f64(), 7.38905609893065);

        let v = ctx.consts_mut().ln_2(53, DEFAULT_RM).unwrap();
        assert_eq!(v.to_f64(), core::f64::consts::LN_2);
    }
}
