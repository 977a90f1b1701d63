//! Arbitrary precision integers, rational numbers, and binary floating point numbers implemented purely in Rust.
//!
//! ## Introduction
//!
//! **Numbers**
//!
//! `BigInt` is an integer of unlimited size. Division and remainder truncate toward zero,
//! bitwise operations use infinite two's complement representation.
//!
//! `Rational` is a fraction of two `BigInt` values which is always kept in canonical form:
//! the numerator and the denominator are coprime, and the denominator is positive.
//!
//! `BigFloat` is a binary floating point number with the value `0.m * 2^e`, where the mantissa `m`
//! has the precision of the number in bits. Operations take the precision of the result and
//! the rounding mode as arguments and round the result correctly. Operators use the largest precision
//! of the operands and round to the nearest, ties to even.
//!
//! **Context**
//!
//! `Context` holds the default precision, radix, rounding mode, and precision policy, and caches
//! the values of pi, e, ln(2) and ln(10). Elementary functions (logarithms, exponent, power) computed
//! through a context use its cache.
//!
//! ## Examples
//!
//! ```
//! use astro_bignum::{BigInt, BigFloat, Context, Rational, RoundingMode};
//!
//! let a = BigInt::from(123456789012345678901234567890u128);
//! assert_eq!((&a * BigInt::from(2)).to_string(), "246913578024691357802469135780");
//!
//! let q = Rational::new(BigInt::from(4), BigInt::from(8)).unwrap();
//! assert_eq!(q.to_string(), "1/2");
//!
//! let third = BigFloat::from_f64(1.0, 512).unwrap()
//!     .div(&BigFloat::from_f64(3.0, 512).unwrap(), 512, RoundingMode::ToEven)
//!     .unwrap();
//! assert_eq!(format!("{:.10}", third), "0.3333333333");
//!
//! let mut ctx = Context::new();
//! ctx.precision(128);
//! let e = ctx.const_e().unwrap();
//! let x = ctx.log(&e).unwrap();
//! assert_eq!(format!("{:.20}", x), "1.00000000000000000000");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

#[macro_use]
mod common;

mod ctx;
mod defs;
mod float;
mod for_3rd;
mod format;
mod int;
mod mag;
mod ops;
mod parser;
mod ratio;
mod stream;
mod strop;

pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Radix;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::defs::Word;
pub use crate::defs::COMBINATORIAL_MAX_BITS;
pub use crate::defs::DEFAULT_P;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::defs::PRECISION_MAX;
pub use crate::defs::PRECISION_MIN;

pub use crate::ctx::Context;
pub use crate::ctx::PrecisionPolicy;
pub use crate::float::BigFloat;
pub use crate::format::Adjust;
pub use crate::format::FormatSpec;
pub use crate::format::Notation;
pub use crate::format::ToFormatted;
pub use crate::int::BigInt;
pub use crate::ops::consts;
pub use crate::ops::consts::Constant;
pub use crate::ops::consts::Consts;
pub use crate::ratio::Rational;
pub use crate::stream::Scanner;
