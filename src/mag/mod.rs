//! Arbitrary size non-negative integers and the algorithms operating on them.

mod bits;
mod conv;
mod div;
#[allow(clippy::module_inception)]
mod mag;
mod mul;
mod sqrt;
mod toom2;

pub use bits::BitOp;
pub use mag::Magnitude;
