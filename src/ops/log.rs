//! Logarithms.

use crate::common::consts::ONE;
use crate::common::consts::TEN_INT;
use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::float::clamp_precision;
use crate::float::BigFloat;
use crate::int::BigInt;
use crate::ops::consts::Consts;
use crate::ops::util::agm;
use crate::ops::util::pow2;
use crate::ops::util::ziv;

/// Approximation of the natural logarithm of positive `x` computed with precision `wp`
/// and the number of its correct bits.
///
/// With s = x * 2^k > 2^(wp/2): ln(x) = pi / (2 * AGM(1, 4/s)) - k * ln(2).
pub(crate) fn ln_approx(x: &BigFloat, wp: usize, cc: &mut Consts) -> Result<(BigFloat, usize), Error> {
    let rm = RoundingMode::ToEven;

    let k = (wp / 2 + 4) as Exponent - x.exponent();
    let (sign, m, lsb) = x.parts();
    let s = BigFloat::from_magnitude(sign, m.clone(), lsb + k);

    let q = pow2(2).div(&s, wp, rm)?;
    let g = agm(&ONE, &q, wp)?;
    let (pi, _) = cc.pi_approx(wp)?;
    let ls = pi.div(&g.mul_2exp(1)?, wp, rm)?;

    let kb = log2_ceil(k.unsigned_abs() as usize + 1);
    let (ln2, _) = cc.ln2_approx(wp + kb)?;
    let kl = ln2.mul(&BigFloat::from(k), wp, rm)?;

    let ret = ls.sub(&kl, wp, rm)?;
    if ret.is_zero() {
        return Ok((ret, 0));
    }

    // cancellation of the terms
    let t = ls.exponent().max(kl.exponent());
    let lost = (t - ret.exponent()).max(0) as usize;
    let bits = (wp - log2_ceil(wp) - 8).saturating_sub(lost);

    Ok((ret, bits))
}

// Extra precision for arguments close to 1.
fn near_one_guard(x: &BigFloat) -> usize {
    if x.exponent() == 0 || x.exponent() == 1 {
        if let Ok(d) = x.sub(&ONE, x.precision() + 2, RoundingMode::None) {
            if !d.is_zero() && d.exponent() < 0 {
                return d.exponent().unsigned_abs() as usize;
            }
        }
    }
    0
}

impl BigFloat {
    fn check_log_arg(&self) -> Result<(), Error> {
        if self.is_zero() || self.is_negative() {
            Err(Error::Domain("logarithm of a non-positive number"))
        } else {
            Ok(())
        }
    }

    /// Computes the natural logarithm with precision `p` rounded using the rounding mode `rm`.
    /// The constants cache `cc` provides pi and ln(2).
    ///
    /// ## Errors
    ///
    ///  - Domain: the value is zero or negative.
    ///  - Convergence: the computation did not converge.
    pub fn ln(&self, p: usize, rm: RoundingMode, cc: &mut Consts) -> Result<Self, Error> {
        self.check_log_arg()?;

        let p = clamp_precision(p);
        if *self == 1 {
            return Ok(Self::new(p));
        }

        let wp = p + log2_ceil(p) + 32 + near_one_guard(self);
        ziv(p, rm, wp, |wp| ln_approx(self, wp, cc))
    }

    /// Computes the logarithm base 2 with precision `p` rounded using the rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the value is zero or negative.
    ///  - Convergence: the computation did not converge.
    pub fn log2(&self, p: usize, rm: RoundingMode, cc: &mut Consts) -> Result<Self, Error> {
        self.check_log_arg()?;

        let p = clamp_precision(p);
        let (_, m, _) = self.parts();
        if m.trailing_zeros() == Some(m.bit_len() - 1) {
            return Self::from_exact_int(self.exponent() - 1, p, rm);
        }

        let wp = p + log2_ceil(p) + 32 + near_one_guard(self);
        ziv(p, rm, wp, |wp| {
            let (l, lb) = ln_approx(self, wp, cc)?;
            let (c, cb) = cc.ln2_approx(wp)?;
            let ret = l.div(&c, wp, RoundingMode::ToEven)?;
            Ok((ret, lb.min(cb).saturating_sub(2)))
        })
    }

    /// Computes the logarithm base 10 with precision `p` rounded using the rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the value is zero or negative.
    ///  - Convergence: the computation did not converge.
    pub fn log10(&self, p: usize, rm: RoundingMode, cc: &mut Consts) -> Result<Self, Error> {
        self.check_log_arg()?;

        let p = clamp_precision(p);
        if let Some(n) = self.power_of_ten() {
            return Self::from_exact_int(n, p, rm);
        }

        let wp = p + log2_ceil(p) + 32 + near_one_guard(self);
        ziv(p, rm, wp, |wp| {
            let (l, lb) = ln_approx(self, wp, cc)?;
            let (c, cb) = cc.ln10_approx(wp)?;
            let ret = l.div(&c, wp, RoundingMode::ToEven)?;
            Ok((ret, lb.min(cb).saturating_sub(2)))
        })
    }

    fn from_exact_int(n: Exponent, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        Ok(Self::from_int(&BigInt::from(n), p, rm))
    }

    // Returns n if the value is exactly 10^n for a nonnegative integer n.
    fn power_of_ten(&self) -> Option<Exponent> {
        if !self.is_int() || self.exponent() > 64 * 1024 {
            return None;
        }

        let (mut v, _) = self.int_part().ok()?;
        let mut n = 0;
        while v != 1 {
            let (q, r) = v.div_rem(&TEN_INT).ok()?;
            if !r.is_zero() {
                return None;
            }
            v = q;
            n += 1;
        }
        Some(n)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Radix;

    fn bf(f: f64) -> BigFloat {
        BigFloat::from_f64(f, 64).unwrap()
    }

    #[test]
    fn test_ln() {
        let mut cc = Consts::new();
        let rm = RoundingMode::ToEven;

        assert!(bf(1.0).ln(128, rm, &mut cc).unwrap().is_zero());
        assert_eq!(bf(2.0).ln(53, rm, &mut cc).unwrap().to_f64(), core::f64::consts::LN_2);
        assert_eq!(bf(10.0).ln(53, rm, &mut cc).unwrap().to_f64(), core::f64::consts::LN_10);

        for (x, l) in [
            (0.5, -0.6931471805599453),
            (3.0, 1.0986122886681098),
            (1e-300, -690.7755278982137),
            (1e300, 690.7755278982137),
            (1.0000001, 9.999999505838704e-8),
        ] {
            assert_eq!(bf(x).ln(53, rm, &mut cc).unwrap().to_f64(), l, "ln {}", x);
        }

        assert_eq!(
            bf(0.0).ln(64, rm, &mut cc),
            Err(Error::Domain("logarithm of a non-positive number"))
        );
        assert!(bf(-1.0).ln(64, rm, &mut cc).is_err());
    }

    #[test]
    fn test_ln_near_one() {
        let mut cc = Consts::new();
        // 1 + 2^-200
        let x = pow2(0).add(&pow2(-200), 256, RoundingMode::ToEven).unwrap();
        let l = x.ln(64, RoundingMode::ToEven, &mut cc).unwrap();
        // ln(1 + t) = t - t^2/2 + ...
        assert_eq!(l.exponent(), -199);
        let (s, _) = l.to_string_radix(Radix::Bin, 64);
        assert_eq!(s, format!("1{}", "0".repeat(63)));
    }

    #[test]
    fn test_ln_huge_exponent() {
        let mut cc = Consts::new();
        let x = pow2(1 << 50);
        let l = x.ln(64, RoundingMode::ToEven, &mut cc).unwrap();
        // 2^50 * ln(2)
        assert_eq!(l.to_f64(), 1125899906842624.0 * core::f64::consts::LN_2);
    }

    #[test]
    fn test_log2_log10() {
        let mut cc = Consts::new();
        let rm = RoundingMode::ToEven;

        assert_eq!(bf(1024.0).log2(64, RoundingMode::Up, &mut cc).unwrap(), 10);
        assert_eq!(bf(0.125).log2(64, RoundingMode::Down, &mut cc).unwrap(), -3);
        assert!(bf(1.0).log2(64, RoundingMode::Down, &mut cc).unwrap().is_zero());
        assert_eq!(bf(3.0).log2(53, rm, &mut cc).unwrap().to_f64(), 1.584962500721156);

        assert_eq!(bf(1000.0).log10(64, RoundingMode::Down, &mut cc).unwrap(), 3);
        assert!(bf(1.0).log10(64, RoundingMode::Up, &mut cc).unwrap().is_zero());
        assert_eq!(bf(2.0).log10(53, rm, &mut cc).unwrap().to_f64(), 0.3010299956639812);
        assert_eq!(bf(0.001).log10(53, rm, &mut cc).unwrap().to_f64(), -3.0);
        assert!(bf(-3.0).log10(64, rm, &mut cc).is_err());
    }
}
