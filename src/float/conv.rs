//! Conversions of floating point numbers from and to other types and strings.

use crate::common::util::compose_f64;
use crate::common::util::decompose_f64;
use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::defs::PRECISION_MAX;
use crate::float::num::clamp_precision;
use crate::float::BigFloat;
use crate::int::BigInt;
use crate::mag::Magnitude;
use crate::parser::parse_float;
use crate::ratio::Rational;
use core::str::FromStr;

impl BigFloat {
    /// Converts `f` to a number with precision `p`. The conversion is exact when `p` is at least 53.
    ///
    /// ## Errors
    ///
    ///  - Domain: `f` is NaN or infinite.
    pub fn from_f64(f: f64, p: usize) -> Result<Self, Error> {
        if !f.is_finite() {
            return Err(Error::Domain("NaN or infinity can not be represented"));
        }

        let (s, m, e) = decompose_f64(f);
        Ok(Self::round_exact(s, Magnitude::from_word(m), e, false, p, DEFAULT_RM))
    }

    /// Converts to the nearest `f64`, ties to even. Values exceeding the range become infinite.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let sign = if self.is_negative() { -1.0 } else { 1.0 };
        if self.e > 1024 {
            return sign * f64::INFINITY;
        }

        // subnormal values have fewer bits
        let p = if self.e < -1021 { self.e + 1074 } else { 53 };
        if p <= 0 {
            return sign * 0.0;
        }

        let r = Self::round_exact(self.s, self.m.clone(), self.lsb(), false, p as usize, DEFAULT_RM);
        if r.e > 1024 {
            return sign * f64::INFINITY;
        }

        sign * compose_f64(r.m.low_u64(), r.lsb())
    }

    /// Converts `v` to a number with precision `p` using rounding mode `rm`.
    pub fn from_int(v: &BigInt, p: usize, rm: RoundingMode) -> Self {
        let (s, m) = (v.sign(), v.magnitude().clone());
        Self::round_exact(s, m, 0, false, p, rm)
    }

    /// Converts `v` to a number with precision `p` using rounding mode `rm`.
    /// The result is correctly rounded.
    pub fn from_rational(v: &Rational, p: usize, rm: RoundingMode) -> Self {
        let (n, d) = v.parts();
        if n.is_zero() {
            return Self::new(p);
        }
        Self::div_magnitudes(n.sign(), n.magnitude(), 0, d.magnitude(), 0, p, rm)
    }

    /// Integer part and a flag indicating a nonzero fractional part.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the integer part has more than `PRECISION_MAX` bits.
    pub(crate) fn int_part(&self) -> Result<(BigInt, bool), Error> {
        if self.is_zero() {
            return Ok((BigInt::new(), false));
        }

        if self.e <= 0 {
            return Ok((BigInt::new(), true));
        }

        if self.e > PRECISION_MAX as Exponent {
            return Err(Error::Overflow("integer part is too large"));
        }

        let p = self.p as Exponent;
        let (m, frac) = if self.e >= p {
            (self.m.shl((self.e - p) as usize), false)
        } else {
            let sh = (p - self.e) as usize;
            (self.m.shr(sh), self.m.low_bits_nonzero(sh))
        };

        Ok((BigInt::from_parts(self.s, m), frac))
    }

    /// Parses a number in radix `rdx` and rounds it to `p` bits with rounding mode `rm`.
    /// Radix 0 detects `0x` and `0b` prefixes, otherwise the radix is 10.
    /// The exponent is introduced by `@`, or by `e` or `E` when the radix does not exceed 10;
    /// it is a decimal power of the radix.
    ///
    /// ## Errors
    ///
    ///  - Parse: the string is not a valid number in the radix.
    ///  - InvalidArgument: the radix is not 0 and not in the range 2..=36.
    ///  - ExponentOverflow: the value is too large.
    pub fn from_str_radix(s: &str, rdx: u32, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        let ps = parse_float(s, rdx)?;
        let p = clamp_precision(p);

        if ps.is_zero() {
            return Ok(Self::new(p));
        }

        let sign = ps.sign;
        let radix = ps.radix;
        let scale = ps.scale();
        let m = Magnitude::from_radix_digits(&ps.digits, radix)?;

        if radix.is_power_of_two() {
            let bits = radix.trailing_zeros() as Exponent;
            return match scale.checked_mul(bits) {
                Some(lsb) if lsb > EXPONENT_MAX => Err(Error::ExponentOverflow(sign)),
                Some(lsb) if lsb < EXPONENT_MIN - m.bit_len() as Exponent => Ok(Self::new(p)),
                Some(lsb) => Self::from_exact(sign, m, lsb, false, p, rm),
                None if scale > 0 => Err(Error::ExponentOverflow(sign)),
                None => Ok(Self::new(p)),
            };
        }

        // exact scaling while the power of the radix stays small
        let scale_bits = scale.unsigned_abs().saturating_mul(log2_ceil(radix as usize) as u64);
        let exact_bits = 4 * (p + m.bit_len()) as u64 + 4096;
        if scale_bits <= exact_bits {
            let pw = Magnitude::from_word(radix as u64).pow(scale.unsigned_abs());
            return if scale >= 0 {
                Self::from_exact(sign, m.mul(&pw), 0, false, p, rm)
            } else {
                Self::div_magnitudes(sign, &m, 0, &pw, 0, p, rm).checked()
            };
        }

        let wp = p + 64 + log2_ceil(scale.unsigned_abs() as usize);
        let mf = Self::round_exact(sign, m, 0, false, wp, RoundingMode::None);
        let rf = Self::from_int(&BigInt::from(radix), wp, RoundingMode::None);
        match rf.powi(scale, wp, RoundingMode::None) {
            Ok(pw) => mf.mul(&pw, p, rm),
            Err(Error::ExponentOverflow(_)) if scale < 0 => Ok(Self::new(p)),
            Err(e) => Err(e),
        }
    }

    /// Replaces the value with the number parsed from `s` keeping the precision.
    /// The value is left unchanged on error.
    ///
    /// ## Errors
    ///
    ///  - Parse: the string is not a valid number in the radix.
    ///  - InvalidArgument: the radix is not 0 and not in the range 2..=36.
    ///  - ExponentOverflow: the value is too large.
    pub fn set_str(&mut self, s: &str, rdx: u32, rm: RoundingMode) -> Result<(), Error> {
        *self = Self::from_str_radix(s, rdx, self.p, rm)?;
        Ok(())
    }
}

macro_rules! impl_from_native {
    ($($t:ty)*) => {
        $(
            impl From<$t> for BigFloat {
                fn from(v: $t) -> Self {
                    Self::from_int(&BigInt::from(v), DEFAULT_P, DEFAULT_RM)
                }
            }
        )*
    };
}

impl_from_native!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

macro_rules! impl_fits {
    ($($t:ty, $fits:ident;)*) => {
        impl BigFloat {
            $(
                #[doc = concat!("Returns true if the integer part fits in `", stringify!($t), "`.")]
                pub fn $fits(&self) -> bool {
                    self.e <= 128 && matches!(self.int_part(), Ok((i, _)) if i.$fits())
                }
            )*
        }
    };
}

impl_fits!(
    i8, fits_i8;
    i16, fits_i16;
    i32, fits_i32;
    i64, fits_i64;
    u8, fits_u8;
    u16, fits_u16;
    u32, fits_u32;
    u64, fits_u64;
);

impl TryFrom<f64> for BigFloat {
    type Error = Error;

    /// Exact conversion with the default precision.
    fn try_from(f: f64) -> Result<Self, Self::Error> {
        Self::from_f64(f, DEFAULT_P)
    }
}

impl From<&BigInt> for BigFloat {
    /// Conversion with the default precision.
    fn from(v: &BigInt) -> Self {
        Self::from_int(v, DEFAULT_P, DEFAULT_RM)
    }
}

impl From<BigInt> for BigFloat {
    fn from(v: BigInt) -> Self {
        Self::from(&v)
    }
}

impl From<&Rational> for BigFloat {
    /// Conversion with the default precision.
    fn from(v: &Rational) -> Self {
        Self::from_rational(v, DEFAULT_P, DEFAULT_RM)
    }
}

impl From<Rational> for BigFloat {
    fn from(v: Rational) -> Self {
        Self::from(&v)
    }
}

impl TryFrom<&BigFloat> for BigInt {
    type Error = Error;

    /// Conversion truncates toward zero.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the integer part is too large.
    fn try_from(v: &BigFloat) -> Result<Self, Self::Error> {
        v.int_part().map(|(i, _)| i)
    }
}

impl TryFrom<BigFloat> for BigInt {
    type Error = Error;

    fn try_from(v: BigFloat) -> Result<Self, Self::Error> {
        BigInt::try_from(&v)
    }
}

impl FromStr for BigFloat {
    type Err = Error;

    /// Parses a decimal number with the default precision.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10, DEFAULT_P, DEFAULT_RM)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Sign;
    use rand::random;

    #[test]
    fn test_f64() {
        for _ in 0..1000 {
            let f = f64::from_bits(random::<u64>());
            if f.is_finite() {
                let b = BigFloat::from_f64(f, 64).unwrap();
                assert_eq!(b.to_f64(), f);
            }
        }

        for f in [0.0, -0.0, 1.0, -2.5, f64::MIN_POSITIVE, 5e-324, f64::MAX, -1e-310] {
            assert_eq!(BigFloat::from_f64(f, 53).unwrap().to_f64(), f);
        }

        assert!(matches!(BigFloat::from_f64(f64::NAN, 64), Err(Error::Domain(_))));
        assert!(BigFloat::try_from(f64::NEG_INFINITY).is_err());

        // rounding on conversion to f64
        let third = BigFloat::from(1).div(&BigFloat::from(3), 200, DEFAULT_RM).unwrap();
        assert_eq!(third.to_f64(), 1.0 / 3.0);
        let big = BigFloat::from(1).mul_2exp(1100).unwrap();
        assert_eq!(big.to_f64(), f64::INFINITY);
        let tiny = BigFloat::from(1).div_2exp(1100);
        assert_eq!(tiny.to_f64(), 0.0);

        // 0.1 rounded to 3 bits is 0.09375
        assert_eq!(BigFloat::from_f64(0.1, 3).unwrap().to_f64(), 0.09375);
    }

    #[test]
    fn test_int_conv() {
        let b = BigFloat::from_f64(-123.75, 64).unwrap();
        let (i, frac) = b.int_part().unwrap();
        assert_eq!(i, BigInt::from(-123));
        assert!(frac);
        assert_eq!(BigInt::try_from(&b).unwrap(), BigInt::from(-123));
        assert_eq!(BigInt::try_from(BigFloat::from_f64(0.5, 64).unwrap()).unwrap(), BigInt::new());
        assert_eq!(BigInt::try_from(BigFloat::from(u128::MAX)).unwrap(), BigInt::from(u128::MAX));

        let huge = BigFloat::from(1).mul_2exp(PRECISION_MAX + 1).unwrap();
        assert!(matches!(BigInt::try_from(&huge), Err(Error::Overflow(_))));

        // rounding of wide integers
        let v = BigInt::from(u128::MAX);
        let f = BigFloat::from_int(&v, 64, RoundingMode::ToZero);
        assert_eq!(f.precision(), 64);
        assert_eq!(BigInt::try_from(&f).unwrap(), BigInt::from(u64::MAX as u128) << 64);

        let f = BigFloat::from_f64(300.7, 64).unwrap();
        assert!(!f.fits_u8());
        assert!(f.fits_i16());
        assert!(BigFloat::from_f64(-0.5, 64).unwrap().fits_u8());
        assert!(!BigFloat::from_f64(-1.5, 64).unwrap().fits_u64());
        assert!(!huge.fits_i64());
    }

    #[test]
    fn test_rational_conv() {
        let r = Rational::new(BigInt::from(1), BigInt::from(3)).unwrap();
        let f = BigFloat::from_rational(&r, 53, DEFAULT_RM);
        assert_eq!(f.to_f64(), 1.0 / 3.0);
        let r = Rational::new(BigInt::from(-7), BigInt::from(4)).unwrap();
        assert_eq!(BigFloat::from(&r).to_f64(), -1.75);
        assert!(BigFloat::from(Rational::from(0)).is_zero());
    }

    #[test]
    fn test_parse() {
        let f = BigFloat::from_str("-12.345e-2").unwrap();
        assert_eq!(f.to_f64(), -0.12345);
        assert_eq!(BigFloat::from_str("1e3").unwrap(), BigFloat::from(1000));
        assert_eq!(BigFloat::from_str_radix("ff.8", 16, 64, DEFAULT_RM).unwrap().to_f64(), 255.5);
        assert_eq!(BigFloat::from_str_radix("1@-2", 16, 64, DEFAULT_RM).unwrap().to_f64(), 1.0 / 256.0);
        assert_eq!(BigFloat::from_str_radix("0b101.1", 0, 64, DEFAULT_RM).unwrap().to_f64(), 5.5);
        assert_eq!(BigFloat::from_str_radix("7.4", 8, 64, DEFAULT_RM).unwrap().to_f64(), 7.5);
        assert!(BigFloat::from_str("0e999999999999").unwrap().is_zero());

        // correctly rounded decimal conversion
        for s in ["0.1", "3.14159", "2.5e-300", "1.7976931348623157e308", "123456789e-20"] {
            let f = BigFloat::from_str_radix(s, 10, 53, DEFAULT_RM).unwrap();
            assert_eq!(f.to_f64(), s.parse::<f64>().unwrap(), "{}", s);
        }

        // the approximate path for huge exponents
        let f = BigFloat::from_str_radix("1e100000", 10, 64, DEFAULT_RM).unwrap();
        assert!(f.exponent() > 332_000);
        assert!(BigFloat::from_str_radix("1e-400000000000000000", 10, 64, DEFAULT_RM)
            .unwrap()
            .is_zero());
        assert_eq!(
            BigFloat::from_str_radix("1e400000000000000000", 10, 64, DEFAULT_RM),
            Err(Error::ExponentOverflow(Sign::Pos))
        );
        assert_eq!(
            BigFloat::from_str_radix("-1@999999999999999999", 16, 64, DEFAULT_RM),
            Err(Error::ExponentOverflow(Sign::Neg))
        );

        assert!(matches!(BigFloat::from_str("1.2.3"), Err(Error::Parse { .. })));
        assert!(matches!(BigFloat::from_str(""), Err(Error::Parse { .. })));

        let mut g = BigFloat::new(100);
        g.set_str("0.5", 10, DEFAULT_RM).unwrap();
        assert_eq!(g.precision(), 100);
        assert!(g.set_str("x", 10, DEFAULT_RM).is_err());
        assert_eq!(g.to_f64(), 0.5);
    }
}
