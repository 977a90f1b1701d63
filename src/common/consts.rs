//! Static constants.

use crate::defs::Sign;
use crate::float::BigFloat;
use crate::int::BigInt;
use crate::mag::Magnitude;
use lazy_static::lazy_static;

lazy_static! {
    /// Exact 1.
    pub static ref ONE: BigFloat = BigFloat::from_magnitude(Sign::Pos, Magnitude::from_word(1), 0);

    pub static ref TEN: Magnitude = Magnitude::from_word(10);

    pub static ref TEN_INT: BigInt = BigInt::from(10);
}
