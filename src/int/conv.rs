//! Conversions of integers from and to native types and strings.

use crate::common::util::compose_f64;
use crate::common::util::decompose_f64;
use crate::common::util::digit_char;
use crate::defs::Error;
use crate::defs::Radix;
use crate::defs::Sign;
use crate::int::BigInt;
use crate::mag::Magnitude;
use crate::parser::parse_int;
use core::cmp::Ordering;
use core::str::FromStr;

macro_rules! impl_from_unsigned {
    ($($t:ty)*) => {
        $(
            impl From<$t> for BigInt {
                fn from(v: $t) -> Self {
                    BigInt::from_parts(Sign::Pos, Magnitude::from_u128(v as u128))
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty)*) => {
        $(
            impl From<$t> for BigInt {
                fn from(v: $t) -> Self {
                    let s = if v < 0 { Sign::Neg } else { Sign::Pos };
                    BigInt::from_parts(s, Magnitude::from_u128((v as i128).unsigned_abs()))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8 u16 u32 u64 u128 usize);
impl_from_signed!(i8 i16 i32 i64 i128 isize);

macro_rules! impl_try_into_native {
    ($($t:ty, $fits:ident;)*) => {
        $(
            impl BigInt {
                #[doc = concat!("Returns true if the value fits in `", stringify!($t), "`.")]
                pub fn $fits(&self) -> bool {
                    *self >= <$t>::MIN && *self <= <$t>::MAX
                }
            }

            impl TryFrom<&BigInt> for $t {
                type Error = Error;

                fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
                    if v.$fits() {
                        Ok(v.to_i128_wrapping() as $t)
                    } else {
                        Err(Error::Overflow("the value does not fit in the native type"))
                    }
                }
            }

            impl TryFrom<BigInt> for $t {
                type Error = Error;

                fn try_from(v: BigInt) -> Result<Self, Self::Error> {
                    <$t>::try_from(&v)
                }
            }
        )*
    };
}

impl_try_into_native!(
    i8, fits_i8;
    i16, fits_i16;
    i32, fits_i32;
    i64, fits_i64;
    isize, fits_isize;
    u8, fits_u8;
    u16, fits_u16;
    u32, fits_u32;
    u64, fits_u64;
    usize, fits_usize;
);

impl TryFrom<&BigInt> for i128 {
    type Error = Error;

    fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
        if *v >= i128::MIN && *v <= i128::MAX {
            Ok(v.to_i128_wrapping())
        } else {
            Err(Error::Overflow("the value does not fit in the native type"))
        }
    }
}

impl TryFrom<&BigInt> for u128 {
    type Error = Error;

    fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
        match v.m.to_u128() {
            Some(u) if !v.is_negative() => Ok(u),
            _ => Err(Error::Overflow("the value does not fit in the native type")),
        }
    }
}

impl_cmp_native!(BigInt; i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl TryFrom<f64> for BigInt {
    type Error = Error;

    /// Conversion truncates toward zero.
    ///
    /// ## Errors
    ///
    ///  - Domain: `f` is NaN or infinite.
    fn try_from(f: f64) -> Result<Self, Self::Error> {
        if !f.is_finite() {
            return Err(Error::Domain("NaN or infinity can not be converted to an integer"));
        }

        let (s, m, e) = decompose_f64(f);
        let m = Magnitude::from_word(m);
        let m = if e >= 0 {
            m.shl(e as usize)
        } else {
            m.shr(e.unsigned_abs() as usize)
        };

        Ok(BigInt::from_parts(s, m))
    }
}

impl PartialEq<f64> for BigInt {
    fn eq(&self, other: &f64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f64> for BigInt {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if other.is_nan() {
            return None;
        }
        if other.is_infinite() {
            return Some(if *other > 0.0 { Ordering::Less } else { Ordering::Greater });
        }

        let t = BigInt::try_from(*other).ok()?;
        let frac = other - other.trunc();
        Some(self.cmp(&t).then(if frac > 0.0 {
            Ordering::Less
        } else if frac < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }))
    }
}

impl BigInt {
    /// Converts to `f64` truncating toward zero. Values exceeding the range of `f64`
    /// become infinite.
    pub fn to_f64(&self) -> f64 {
        let b = self.m.bit_len();
        let f = if b > 1024 {
            f64::INFINITY
        } else if b <= 53 {
            self.m.low_u64() as f64
        } else {
            let top = self.m.shr(b - 53).low_u64();
            compose_f64(top, (b - 53) as i64)
        };

        if self.is_negative() {
            -f
        } else {
            f
        }
    }

    /// The least significant 64 bits of the two's complement representation, like `as` casts.
    pub fn to_i64_wrapping(&self) -> i64 {
        self.to_u64_wrapping() as i64
    }

    /// The least significant 64 bits of the two's complement representation, like `as` casts.
    pub fn to_u64_wrapping(&self) -> u64 {
        let v = self.m.low_u64();
        if self.is_negative() {
            v.wrapping_neg()
        } else {
            v
        }
    }

    pub(crate) fn to_i128_wrapping(&self) -> i128 {
        let v = self.m.low_u128();
        if self.is_negative() {
            v.wrapping_neg() as i128
        } else {
            v as i128
        }
    }

    /// Parses a string in radix `rdx`. Radix 0 detects the radix from the prefix:
    /// `0x` is hexadecimal, `0b` is binary, a leading `0` is octal, otherwise decimal.
    ///
    /// ## Errors
    ///
    ///  - Parse: the string is not a valid integer in the radix.
    ///  - InvalidArgument: the radix is not 0 and not in the range 2..=36.
    pub fn from_str_radix(s: &str, rdx: u32) -> Result<Self, Error> {
        let ps = parse_int(s, rdx)?;
        let m = Magnitude::from_radix_digits(&ps.digits, ps.radix)?;
        Ok(BigInt::from_parts(ps.sign, m))
    }

    /// Replaces the value with the number parsed from `s`.
    /// The value is left unchanged on error.
    ///
    /// ## Errors
    ///
    ///  - Parse: the string is not a valid integer in the radix.
    ///  - InvalidArgument: the radix is not 0 and not in the range 2..=36.
    pub fn set_str(&mut self, s: &str, rdx: u32) -> Result<(), Error> {
        *self = Self::from_str_radix(s, rdx)?;
        Ok(())
    }

    /// Digits of the absolute value in radix `rdx` without sign and prefix.
    pub(crate) fn abs_digits(&self, rdx: u32, upper: bool) -> String {
        let d = self.m.to_radix_digits(rdx);
        if d.is_empty() {
            return "0".to_owned();
        }
        d.into_iter().map(|d| digit_char(d, upper)).collect()
    }

    /// String representation in radix `rdx` with lower case digits.
    pub fn to_string_radix(&self, rdx: Radix) -> String {
        let digits = self.abs_digits(rdx.value(), false);
        if self.is_negative() {
            format!("-{digits}")
        } else {
            digits
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}
