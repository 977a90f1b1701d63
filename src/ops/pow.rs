//! Power function.

use crate::common::consts::ONE;
use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::float::clamp_precision;
use crate::float::BigFloat;
use crate::ops::consts::Consts;
use crate::ops::exp::exp_approx;
use crate::ops::log::ln_approx;
use crate::ops::util::ziv;

/// Maximum k for which x^(n/2^k) is checked for an exact result. A binary number other
/// than 1 has an odd mantissa part shorter than 2^64 bits and a binary exponent below 2^63,
/// so it is never an exact 2^k-th power for a larger k.
const DYADIC_ROOT_MAX_DEPTH: i64 = 64;

impl BigFloat {
    /// Computes the value to the power of `y` with precision `p` rounded using the rounding mode `rm`.
    /// Integral powers use repeated squaring, other powers are computed as e^(y * ln(x)).
    ///
    /// ## Errors
    ///
    ///  - Domain: the value is negative and `y` is not an integer.
    ///  - DivisionByZero: the value is zero and `y` is negative.
    ///  - ExponentOverflow: the result is too large.
    ///  - Convergence: the computation did not converge.
    pub fn pow(&self, y: &Self, p: usize, rm: RoundingMode, cc: &mut Consts) -> Result<Self, Error> {
        let p = clamp_precision(p);

        if y.is_zero() || *self == 1 {
            return ONE.round_to(p, rm);
        }

        if self.is_zero() {
            return if y.is_negative() {
                Err(Error::DivisionByZero)
            } else {
                Ok(Self::new(p))
            };
        }

        if y.is_int() {
            if y.fits_i64() {
                let (n, _) = y.int_part()?;
                return self.powi(n.to_i64_wrapping(), p, rm);
            }

            let (n, _) = y.int_part()?;
            let ret = self.abs().pow_positive(y, p, rm, cc)?;
            return Ok(if self.is_negative() && n.is_odd() { ret.neg() } else { ret });
        }

        if self.is_negative() {
            return Err(Error::Domain("non-integer power of a negative number"));
        }

        if let Some(ret) = self.exact_dyadic_pow(y, p, rm)? {
            return Ok(ret);
        }

        self.pow_positive(y, p, rm, cc)
    }

    // x^(n/2^k) is computed with square roots when x has an exact 2^k-th root. Such a result
    // is exact, and the rounding loop could not settle on it in the directed rounding modes.
    fn exact_dyadic_pow(&self, y: &Self, p: usize, rm: RoundingMode) -> Result<Option<Self>, Error> {
        let (_, ym, lsb) = y.parts();
        let k = -(lsb + ym.trailing_zeros().unwrap_or(0) as i64);
        if !(1..=DYADIC_ROOT_MAX_DEPTH).contains(&k) || !y.fits_i64() {
            return Ok(None);
        }

        let mut r = self.clone();
        for _ in 0..k {
            let q = r.precision();
            let s = r.sqrt(q, RoundingMode::None)?;
            if s.mul(&s, 2 * q + 2, RoundingMode::None)? != r {
                return Ok(None);
            }
            r = s;
        }

        let (n, _) = y.mul_2exp(k as usize)?.int_part()?;
        if !n.fits_i64() {
            return Ok(None);
        }

        r.powi(n.to_i64_wrapping(), p, rm).map(Some)
    }

    // x^y = e^(y * ln(x)) for positive x.
    fn pow_positive(&self, y: &Self, p: usize, rm: RoundingMode, cc: &mut Consts) -> Result<Self, Error> {
        // the absolute error of y * ln(x) becomes the relative error of the result
        let mag = (y.exponent() + log2_ceil(self.exponent().unsigned_abs() as usize + 1) as i64).max(0) as usize;
        let wp = p + log2_ceil(p) + 32 + mag;

        let res = ziv(p, rm, wp, |wp| {
            let (l, lb) = ln_approx(self, wp, cc)?;
            let w = y.mul(&l, wp, RoundingMode::ToEven)?;
            let (ret, eb) = exp_approx(&w, wp)?;
            let lost = w.exponent().max(0) as usize + 2;
            Ok((ret, eb.min(lb.saturating_sub(lost))))
        });

        match res {
            // the power is too small to be represented
            Err(Error::ExponentOverflow(_)) if (self.exponent() > 0) != y.is_positive() => Ok(Self::new(p)),
            r => r,
        }
    }
}
