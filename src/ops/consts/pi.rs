//! Pi number computed with the Gauss-Legendre iteration.

use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::float::BigFloat;
use crate::ops::util::pow2;
use crate::ops::util::ziv;
use tracing::trace;
use tracing::warn;

/// Approximation of pi computed with precision `wp` and the number of its correct bits.
///
/// ## Errors
///
///  - Convergence: the iteration bound is reached.
pub(crate) fn pi_approx(wp: usize) -> Result<(BigFloat, usize), Error> {
    let rm = RoundingMode::ToEven;

    // every iteration doubles the number of correct digits
    let bound = log2_ceil(wp) + 8;
    let guard = log2_ceil(bound) + 4;
    let eps = -(wp as Exponent) + guard as Exponent;

    let mut a = pow2(0);
    let mut b = pow2(-1).sqrt(wp, rm)?;
    let mut t = pow2(-2);
    let mut k = 0;
    let mut prev: Option<BigFloat> = None;

    for i in 0..bound {
        let an = a.add(&b, wp, rm)?.div_2exp(1);
        b = a.mul(&b, wp, rm)?.sqrt(wp, rm)?;

        let d = a.sub(&an, wp, rm)?;
        t = t.sub(&d.mul(&d, wp, rm)?.mul_2exp(k)?, wp, rm)?;
        a = an;
        k += 1;

        // pi = (a + b)^2 / 4t
        let s = a.add(&b, wp, rm)?;
        let pi = s.mul(&s, wp, rm)?.div(&t.mul_2exp(2)?, wp, rm)?;

        if let Some(prev) = prev {
            let delta = pi.sub(&prev, wp, rm)?;
            if delta.is_zero() || delta.exponent() < eps {
                trace!(iterations = i + 1, wp, "pi converged");
                return Ok((pi, wp - guard - 4));
            }
        }

        prev = Some(pi);
    }

    warn!(bound, wp, "pi iteration bound reached");

    Err(Error::Convergence { iterations: bound })
}

/// Returns pi with precision `p` rounded using the rounding mode `rm`.
/// The value is computed anew on each call.
///
/// ## Errors
///
///  - Convergence: the computation did not converge.
pub fn pi(p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
    let p = crate::float::clamp_precision(p);
    ziv(p, rm, p + log2_ceil(p) + 32, pi_approx)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Radix;

    #[test]
    fn test_pi() {
        assert_eq!(pi(53, RoundingMode::ToEven).unwrap().to_f64(), core::f64::consts::PI);
        assert_eq!(pi(53, RoundingMode::Down).unwrap().to_f64(), core::f64::consts::PI);
        assert!(pi(53, RoundingMode::Up).unwrap() > core::f64::consts::PI);

        let p = pi(320, RoundingMode::ToEven).unwrap();
        assert_eq!(p.precision(), 320);
        let (s, e) = p.to_string_radix(Radix::Dec, 60);
        assert_eq!(s, "314159265358979323846264338327950288419716939937510582097494");
        assert_eq!(e, 1);
    }

    #[test]
    fn test_pi_directed() {
        for p in [2, 10, 64, 100, 1000] {
            let lo = pi(p, RoundingMode::Down).unwrap();
            let hi = pi(p, RoundingMode::Up).unwrap();
            assert!(lo < hi);
            let ulp = hi.sub(&lo, p + 2, RoundingMode::None).unwrap();
            assert_eq!(ulp.exponent(), 2 - p as Exponent + 1);
        }
    }
}
