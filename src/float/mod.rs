//! Arbitrary precision binary floating point numbers.

mod arith;
mod conv;
mod func;
mod num;
mod ops;

pub use num::BigFloat;

pub(crate) use num::clamp_precision;
