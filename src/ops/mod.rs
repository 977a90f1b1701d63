//! Elementary functions and mathematical constants.

pub mod consts;
mod exp;
mod log;
mod pow;
mod util;
