//! Euler's number.

use crate::common::util::log2_ceil;
use crate::common::util::log2_floor;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::float::BigFloat;
use crate::int::BigInt;
use crate::ops::util::ziv;

// Binary splitting of the series 1/(a+1) + 1/((a+1)(a+2)) + ... + 1/((a+1)...b) = p/q.
fn pq(a: u64, b: u64) -> (BigInt, BigInt) {
    if a + 1 == b {
        (BigInt::from(1), BigInt::from(b))
    } else {
        let m = (a + b) / 2;

        let (pa, qa) = pq(a, m);
        let (pb, qb) = pq(m, b);

        (pa * &qb + pb, qa * qb)
    }
}

// Number of terms n of the series 1 + 1/1! + 1/2! + ... such that 1/n! < 2^-wp.
fn terms(wp: usize) -> u64 {
    let mut n = 1;
    let mut bits = 0;
    while bits <= wp + 1 {
        n += 1;
        bits += log2_floor(n);
    }
    n as u64
}

/// Approximation of e computed with precision `wp` and the number of its correct bits.
pub(crate) fn e_approx(wp: usize) -> Result<(BigFloat, usize), Error> {
    let rm = RoundingMode::ToEven;
    let (p, q) = pq(0, terms(wp));

    // e = 1 + p/q
    let ret = BigFloat::from_int(&(p + &q), wp, rm).div(&BigFloat::from_int(&q, wp, rm), wp, rm)?;

    Ok((ret, wp - 4))
}

/// Returns Euler's number with precision `p` rounded using the rounding mode `rm`.
/// The value is computed anew on each call.
///
/// ## Errors
///
///  - Convergence: the computation did not converge.
pub fn e(p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
    let p = crate::float::clamp_precision(p);
    ziv(p, rm, p + log2_ceil(p) + 32, e_approx)
}
