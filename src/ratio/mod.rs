//! Exact rational numbers.

mod conv;
mod ops;
#[allow(clippy::module_inception)]
mod ratio;

pub use ratio::Rational;
