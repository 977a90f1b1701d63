//! Conversions of rational numbers.

use crate::common::util::decompose_f64;
use crate::defs::Error;
use crate::defs::Radix;
use crate::defs::DEFAULT_RM;
use crate::defs::PRECISION_MAX;
use crate::float::BigFloat;
use crate::int::BigInt;
use crate::ratio::Rational;
use core::str::FromStr;

macro_rules! impl_from_native {
    ($($t:ty)*) => {
        $(
            impl From<$t> for Rational {
                fn from(v: $t) -> Self {
                    Rational::from_int(BigInt::from(v))
                }
            }
        )*
    };
}

impl_from_native!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl From<BigInt> for Rational {
    fn from(v: BigInt) -> Self {
        Rational::from_int(v)
    }
}

impl From<&BigInt> for Rational {
    fn from(v: &BigInt) -> Self {
        Rational::from_int(v.clone())
    }
}

impl TryFrom<f64> for Rational {
    type Error = Error;

    /// The conversion is exact.
    fn try_from(f: f64) -> Result<Self, Self::Error> {
        if !f.is_finite() {
            return Err(Error::Domain("NaN or infinity can not be represented"));
        }

        let (s, m, e) = decompose_f64(f);
        let mut n = BigInt::from(m);
        if s.is_negative() {
            n.inv_sign();
        }

        Ok(if e >= 0 {
            Rational::from_int(n.shl_bits(e as usize))
        } else {
            Rational::from_int(n).div_2exp(e.unsigned_abs() as usize)
        })
    }
}

impl Rational {
    /// Converts a floating point number to the exactly equal rational number.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the magnitude of the exponent of `x` exceeds `PRECISION_MAX`,
    ///    so the numerator or the denominator would be too large.
    pub fn from_float(x: &BigFloat) -> Result<Self, Error> {
        if x.is_zero() {
            return Ok(Rational::default());
        }

        let (s, m, lsb) = x.parts();
        if lsb.unsigned_abs() > PRECISION_MAX as u64 {
            return Err(Error::Overflow("exponent is too large for exact conversion"));
        }

        let n = BigInt::from_parts(s, m.clone());
        Ok(if lsb >= 0 {
            Rational::from_int(n.shl_bits(lsb as usize))
        } else {
            Rational::from_int(n).div_2exp(lsb.unsigned_abs() as usize)
        })
    }

    /// Converts to the nearest `f64`. Values in the subnormal range may be rounded twice.
    pub fn to_f64(&self) -> f64 {
        BigFloat::from_rational(self, 53, DEFAULT_RM).to_f64()
    }

    /// Parses a string of the form `n` or `n/d` where `n` and `d` are integers in radix `rdx`.
    /// Radix 0 detects the radix of each part from its prefix.
    ///
    /// ## Errors
    ///
    ///  - Parse: the string is not a valid rational number.
    ///  - InvalidArgument: the radix is not supported.
    ///  - Domain: the denominator is zero.
    pub fn from_str_radix(s: &str, rdx: u32) -> Result<Self, Error> {
        let whole = |e: Error| match e {
            Error::Parse { .. } => Error::Parse {
                input: s.to_owned(),
                radix: rdx,
            },
            e => e,
        };

        match s.split_once('/') {
            None => Ok(Rational::from_int(BigInt::from_str_radix(s, rdx).map_err(whole)?)),
            Some((n, d)) => {
                if d.starts_with(['+', '-']) {
                    return Err(whole(Error::Parse {
                        input: String::new(),
                        radix: rdx,
                    }));
                }
                let n = BigInt::from_str_radix(n, rdx).map_err(whole)?;
                let d = BigInt::from_str_radix(d, rdx).map_err(whole)?;
                Rational::new(n, d)
            }
        }
    }

    /// String representation `n/d` in radix `rdx`, or `n` when the denominator is 1.
    pub fn to_string_radix(&self, rdx: Radix) -> String {
        if self.is_int() {
            self.n.to_string_radix(rdx)
        } else {
            format!("{}/{}", self.n.to_string_radix(rdx), self.d.to_string_radix(rdx))
        }
    }
}

impl FromStr for Rational {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl TryFrom<&BigFloat> for Rational {
    type Error = Error;

    fn try_from(x: &BigFloat) -> Result<Self, Self::Error> {
        Rational::from_float(x)
    }
}

impl TryFrom<BigFloat> for Rational {
    type Error = Error;

    fn try_from(x: BigFloat) -> Result<Self, Self::Error> {
        Rational::from_float(&x)
    }
}

impl From<&Rational> for BigInt {
    /// Truncates toward zero.
    fn from(v: &Rational) -> Self {
        v.trunc()
    }
}

impl From<Rational> for BigInt {
    fn from(v: Rational) -> Self {
        v.trunc()
    }
}
