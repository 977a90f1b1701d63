//! Exponent.

use crate::common::consts::ONE;
use crate::common::util::log2_ceil;
use crate::common::util::log2_floor;
use crate::common::util::sqrt_int;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::float::clamp_precision;
use crate::float::BigFloat;
use crate::ops::util::pow2;
use crate::ops::util::ziv;

/// Arguments with an exponent above this value overflow or underflow the result.
const EXP_ARG_MAX_EXPONENT: Exponent = 61;

/// Approximation of `e^x` computed with precision `wp` and the number of its correct bits.
///
/// The argument is reduced as r = |x| / 2^k, then e^r is computed with the Taylor series
/// 1 + r(1 + r/2(1 + r/3(...))) and squared k times.
pub(crate) fn exp_approx(x: &BigFloat, wp: usize) -> Result<(BigFloat, usize), Error> {
    let rm = RoundingMode::ToEven;

    let t = sqrt_int(wp) / 2 + 1;
    let k = (x.exponent() + t as Exponent).max(0) as usize;
    let w = wp + k + log2_ceil(wp) + 8;

    let r = x.abs().div_2exp(k);

    // |r| < 2^-rb
    let rb = if r.is_zero() { w } else { r.exponent().unsigned_abs() as usize };
    let mut n = 1;
    let mut bits = rb;
    while bits <= w {
        n += 1;
        bits += rb + log2_floor(n);
    }

    let mut s = ONE.clone();
    for i in (1..=n).rev() {
        s = r.mul(&s, w, rm)?.div(&BigFloat::from(i), w, rm)?.add(&ONE, w, rm)?;
    }

    for _ in 0..k {
        s = s.mul(&s, w, rm)?;
    }

    if x.is_negative() {
        s = s.reciprocal(w, rm)?;
    }

    let lost = k + log2_ceil(n) + 8;
    Ok((s, w - lost))
}

impl BigFloat {
    /// Computes `e` to the power of the value with precision `p` rounded using the rounding mode `rm`.
    /// Values too small to be represented become zero.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    ///  - Convergence: the computation did not converge.
    pub fn exp(&self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        let p = clamp_precision(p);

        if self.is_zero() {
            return ONE.round_to(p, rm);
        }

        if self.exponent() > EXP_ARG_MAX_EXPONENT {
            return if self.is_negative() {
                Ok(Self::new(p))
            } else {
                Err(Error::ExponentOverflow(Sign::Pos))
            };
        }

        let wp = p + log2_ceil(p) + 32;
        match ziv(p, rm, wp, |wp| exp_approx(self, wp)) {
            Err(Error::ExponentOverflow(_)) if self.is_negative() => Ok(Self::new(p)),
            r => r,
        }
    }
}
