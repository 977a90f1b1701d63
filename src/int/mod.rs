//! Arbitrary precision integers.

mod conv;
mod func;
#[allow(clippy::module_inception)]
mod int;
mod ops;

pub use int::BigInt;
