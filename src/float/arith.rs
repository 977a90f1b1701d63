//! Correctly rounded arithmetic.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::float::BigFloat;
use crate::mag::Magnitude;
use core::cmp::Ordering;

impl BigFloat {
    /// Returns `self + other` rounded to `p` bits with rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    pub fn add(&self, other: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        self.add_signed(other, other.s, p, rm)
    }

    /// Returns `self - other` rounded to `p` bits with rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    pub fn sub(&self, other: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        self.add_signed(other, other.s.invert(), p, rm)
    }

    fn add_signed(&self, other: &Self, s2: Sign, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if other.is_zero() {
            return self.round_to(p, rm);
        }

        if self.is_zero() {
            let mut ret = other.round_to(p, rm)?;
            if s2 != other.s {
                ret.inv_sign();
            }
            return Ok(ret);
        }

        let (x, sx, y, sy) = if self.e >= other.e {
            (self, self.s, other, s2)
        } else {
            (other, s2, self, self.s)
        };

        // Bits of x and of the result that affect rounding lie above position l.
        // A smaller operand entirely below l is replaced by a value of the same sign which
        // falls into the same rounding interval.
        let l = (x.e - x.p as Exponent).min(x.e - p as Exponent - 4);
        let (my, ly) = if y.e < l {
            (Magnitude::from_word(1), l - 2)
        } else {
            (y.m.clone(), y.lsb())
        };

        let lx = x.lsb();
        let lsb = lx.min(ly);
        let mx = x.m.shl((lx - lsb) as usize);
        let my = my.shl((ly - lsb) as usize);

        let (s, m) = if sx == sy {
            (sx, mx.add(&my))
        } else {
            let (d, o) = mx.abs_diff(&my);
            match o {
                Ordering::Less => (sy, d),
                _ => (sx, d),
            }
        };

        Self::from_exact(s, m, lsb, false, p, rm)
    }

    /// Returns `self * other` rounded to `p` bits with rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    pub fn mul(&self, other: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::new(p));
        }

        let m = self.m.mul(&other.m);
        Self::from_exact(self.s.mul(other.s), m, self.lsb() + other.lsb(), false, p, rm)
    }

    /// Returns `self / other` rounded to `p` bits with rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `other` is zero.
    ///  - ExponentOverflow: the result is too large.
    pub fn div(&self, other: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.is_zero() {
            return Ok(Self::new(p));
        }

        Self::div_magnitudes(
            self.s.mul(other.s),
            &self.m,
            self.lsb(),
            &other.m,
            other.lsb(),
            p,
            rm,
        )
        .checked()
    }

    /// Correctly rounded quotient `(-1)^s * (m1 * 2^l1) / (m2 * 2^l2)`. `m2` must not be zero.
    /// The exponent of the result is not checked against the exponent range.
    pub(crate) fn div_magnitudes(
        s: Sign,
        m1: &Magnitude,
        l1: Exponent,
        m2: &Magnitude,
        l2: Exponent,
        p: usize,
        rm: RoundingMode,
    ) -> Self {
        // the quotient must have at least p + 2 bits
        let k = (p + 3 + m2.bit_len()).saturating_sub(m1.bit_len());
        let (q, r) = m1.shl(k).div_rem(m2);
        Self::round_exact(s, q, l1 - k as Exponent - l2, !r.is_zero(), p, rm)
    }

    /// Returns `1 / self` rounded to `p` bits with rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the value is zero.
    ///  - ExponentOverflow: the result is too large.
    pub fn reciprocal(&self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Self::div_magnitudes(self.s, &Magnitude::from_word(1), 0, &self.m, self.lsb(), p, rm)
            .checked()
    }

    /// Returns the square root rounded to `p` bits with rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the value is negative.
    pub fn sqrt(&self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::Domain("square root of a negative number"));
        }

        if self.is_zero() {
            return Ok(Self::new(p));
        }

        // the root must have at least p + 2 bits and the exponent of the shifted value must be even
        let lsb = self.lsb();
        let mut k = (2 * (p + 2)).saturating_sub(self.m.bit_len());
        if (lsb - k as Exponent) & 1 != 0 {
            k += 1;
        }

        let (s, r) = self.m.shl(k).sqrt_rem();
        Self::from_exact(Sign::Pos, s, (lsb - k as Exponent) / 2, !r.is_zero(), p, rm)
    }

    /// Returns `sqrt(self^2 + other^2)` rounded to `p` bits with rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    pub fn hypot(&self, other: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        // squares are exact, the sum is exact unless one square is negligible,
        // in which case it is rounded away from zero to keep the result inexact
        let x2 = self.mul(self, 2 * self.p, RoundingMode::None)?;
        let y2 = other.mul(other, 2 * other.p, RoundingMode::None)?;
        let gap = (x2.e.abs_diff(y2.e) as usize).min(2 * p + 8);
        let wp = x2.p.max(y2.p) + gap + 1;
        let sum = x2.add(&y2, wp, RoundingMode::FromZero)?;
        sum.sqrt(p, rm)
    }

    /// Returns `self` to the integer power `n` rounded to `p` bits.
    /// Negative powers are computed as reciprocals of positive powers.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the value is zero and `n` is negative.
    ///  - ExponentOverflow: the result is too large.
    pub fn powi(&self, n: i64, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        let e = n.unsigned_abs();
        if e == 0 {
            return Self::from_exact(Sign::Pos, Magnitude::from_word(1), 0, false, p, rm);
        }

        // each multiplication adds at most one ulp of relative error
        let wp = p + 2 * (64 - e.leading_zeros() as usize) + 8;
        let mut ret = self.round_to(wp, RoundingMode::None)?;
        let mut acc: Option<Self> = None;
        let mut e = e;
        loop {
            if e & 1 == 1 {
                acc = Some(match acc {
                    Some(a) => a.mul(&ret, wp, RoundingMode::None)?,
                    None => ret.clone(),
                });
            }
            e >>= 1;
            if e == 0 {
                break;
            }
            ret = ret.mul(&ret, wp, RoundingMode::None)?;
        }

        let ret = acc.unwrap_or_else(|| Self::new(wp));
        if n < 0 {
            ret.reciprocal(p, rm)
        } else {
            ret.round_to(p, rm)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::DEFAULT_RM;
    use crate::defs::WORD_BIT_SIZE;
    use rand::random;

    fn bf(f: f64, p: usize) -> BigFloat {
        BigFloat::from_f64(f, p).unwrap()
    }

    #[test]
    fn test_add_sub() {
        let p = 64;
        assert_eq!(bf(1.5, p).add(&bf(2.25, p), p, DEFAULT_RM).unwrap(), bf(3.75, p));
        assert_eq!(bf(1.5, p).sub(&bf(2.25, p), p, DEFAULT_RM).unwrap(), bf(-0.75, p));
        assert!(bf(1.5, p).sub(&bf(1.5, p), p, DEFAULT_RM).unwrap().is_zero());
        assert_eq!(BigFloat::new(p).sub(&bf(2.0, p), p, DEFAULT_RM).unwrap(), bf(-2.0, p));

        // the tiny operand is absorbed but still steers directed rounding
        let one = bf(1.0, p);
        let tiny = bf(1.0, p).div_2exp(1000);
        assert_eq!(one.add(&tiny, p, RoundingMode::ToEven).unwrap(), one);
        let up = one.add(&tiny, p, RoundingMode::Up).unwrap();
        assert!(up > one);
        assert_eq!(up.sub(&one, p, RoundingMode::None).unwrap(), bf(1.0, p).div_2exp(63));
        let down = one.sub(&tiny, p, RoundingMode::Down).unwrap();
        assert!(down < one);
        assert_eq!(one.sub(&tiny, p, RoundingMode::ToEven).unwrap(), one);

        // cancellation
        let a = bf(1.0, 200).add(&bf(1.0, 200).div_2exp(150), 200, DEFAULT_RM).unwrap();
        let d = a.sub(&bf(1.0, 200), 10, DEFAULT_RM).unwrap();
        assert_eq!(d, bf(1.0, 10).div_2exp(150));
    }

    #[test]
    fn test_arith_random() {
        for _ in 0..1000 {
            let f1 = random::<f64>() * 1000.0 - 500.0;
            let f2 = random::<f64>() * 10.0 - 5.0;
            let a = bf(f1, 53);
            let b = bf(f2, 53);
            assert_eq!(a.add(&b, 53, DEFAULT_RM).unwrap().to_f64(), f1 + f2);
            assert_eq!(a.sub(&b, 53, DEFAULT_RM).unwrap().to_f64(), f1 - f2);
            assert_eq!(a.mul(&b, 53, DEFAULT_RM).unwrap().to_f64(), f1 * f2);
            if f2 != 0.0 {
                assert_eq!(a.div(&b, 53, DEFAULT_RM).unwrap().to_f64(), f1 / f2);
            }
            assert_eq!(a.abs().sqrt(53, DEFAULT_RM).unwrap().to_f64(), f1.abs().sqrt());
        }
    }

    #[test]
    fn test_div() {
        let p = WORD_BIT_SIZE * 3;
        let one = bf(1.0, p);
        let three = bf(3.0, p);
        let q = one.div(&three, p, DEFAULT_RM).unwrap();
        let r = q.mul(&three, p, DEFAULT_RM).unwrap();
        assert_eq!(r, one);
        assert_eq!(one.div(&BigFloat::new(p), p, DEFAULT_RM), Err(Error::DivisionByZero));
        assert_eq!(BigFloat::new(p).reciprocal(p, DEFAULT_RM), Err(Error::DivisionByZero));
        assert_eq!(bf(4.0, p).reciprocal(p, DEFAULT_RM).unwrap(), bf(0.25, p));

        let lo = one.div(&three, p, RoundingMode::Down).unwrap();
        let hi = one.div(&three, p, RoundingMode::Up).unwrap();
        assert!(lo < hi);
        assert_eq!(hi.sub(&lo, p, RoundingMode::None).unwrap(), bf(1.0, p).div_2exp(p + 1));
    }

    #[test]
    fn test_sqrt_hypot() {
        assert_eq!(bf(2.25, 64).sqrt(64, DEFAULT_RM).unwrap(), bf(1.5, 64));
        assert_eq!(bf(0.5, 64).sqrt(64, DEFAULT_RM).unwrap().to_f64(), 0.5f64.sqrt());
        assert!(matches!(bf(-1.0, 64).sqrt(64, DEFAULT_RM), Err(Error::Domain(_))));
        assert!(BigFloat::new(64).sqrt(64, DEFAULT_RM).unwrap().is_zero());

        let h = bf(3.0, 64).hypot(&bf(4.0, 128), 128, DEFAULT_RM).unwrap();
        assert_eq!(h, bf(5.0, 64));
        assert_eq!(h.precision(), 128);

        // hypot(1 + 2^-5, 2^-100) is just above 1 + 2^-5, the midpoint of 1 and 1 + 2^-4 at 5 bits
        let a = bf(1.0 + 1.0 / 32.0, 8);
        let b = bf(2f64.powi(-100), 8);
        let h = a.hypot(&b, 5, RoundingMode::ToEven).unwrap();
        assert_eq!(h, bf(1.0 + 1.0 / 16.0, 5));
        assert_eq!(a.hypot(&b, 5, RoundingMode::Down).unwrap(), 1);
        assert_eq!(a.hypot(&b, 8, RoundingMode::Down).unwrap(), a);
    }

    #[test]
    fn test_powi() {
        assert_eq!(bf(3.0, 64).powi(5, 64, DEFAULT_RM).unwrap(), bf(243.0, 64));
        assert_eq!(bf(2.0, 64).powi(-3, 64, DEFAULT_RM).unwrap(), bf(0.125, 64));
        assert_eq!(bf(7.0, 64).powi(0, 64, DEFAULT_RM).unwrap(), bf(1.0, 64));
        assert_eq!(BigFloat::new(64).powi(-1, 64, DEFAULT_RM), Err(Error::DivisionByZero));
        assert_eq!(bf(1.5, 53).powi(7, 53, DEFAULT_RM).unwrap().to_f64(), 17.0859375);
    }
}
