//! Deserialization of numbers from strings and numbers.

use core::fmt::Formatter;
use core::str::FromStr;

use crate::defs::DEFAULT_P;
use crate::float::BigFloat;
use crate::int::BigInt;
use crate::ratio::Rational;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct BigIntVisitor {}

pub struct RationalVisitor {}

pub struct BigFloatVisitor {}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigIntVisitor {})
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RationalVisitor {})
    }
}

impl<'de> Deserialize<'de> for BigFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigFloatVisitor {})
    }
}

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "an integer or a string containing an integer")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigInt::from(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigInt::from(v))
    }

    fn visit_i128<E: Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(BigInt::from(v))
    }

    fn visit_u128<E: Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(BigInt::from(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.fract() != 0.0 {
            return Err(Error::custom(format!("{v} is not an integer")));
        }
        BigInt::try_from(v).map_err(Error::custom)
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        BigInt::from_str(v).map_err(Error::custom)
    }
}

impl<'de> Visitor<'de> for RationalVisitor {
    type Value = Rational;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a number or a string containing a fraction")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Rational::from(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Rational::from(v))
    }

    // exact binary value of the number
    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Rational::try_from(v).map_err(Error::custom)
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Rational::from_str(v).map_err(Error::custom)
    }
}

impl<'de> Visitor<'de> for BigFloatVisitor {
    type Value = BigFloat;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a number or a string containing a number")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigFloat::from(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigFloat::from(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        BigFloat::from_f64(v, DEFAULT_P).map_err(Error::custom)
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        BigFloat::from_str(v).map_err(Error::custom)
    }
}
