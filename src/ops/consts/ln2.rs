//! Natural logarithm of 2.

use crate::common::consts::ONE;
use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::float::BigFloat;
use crate::ops::consts::pi::pi_approx;
use crate::ops::util::agm;
use crate::ops::util::pow2;
use crate::ops::util::ziv;

/// Approximation of ln(2) with precision `wp` given pi with at least `wp` correct bits.
///
/// ln(2) = pi / (2m * AGM(1, 2^(2-m))), where m > wp/2.
pub(crate) fn ln2_from_pi(pi: &BigFloat, wp: usize) -> Result<(BigFloat, usize), Error> {
    let rm = RoundingMode::ToEven;
    let m = wp / 2 + 8;

    let g = agm(&ONE, &pow2(2 - m as Exponent), wp)?;
    let d = g.mul(&BigFloat::from(m), wp, rm)?.mul_2exp(1)?;
    let ret = pi.div(&d, wp, rm)?;

    Ok((ret, wp - log2_ceil(wp) - 6))
}

/// Approximation of ln(2) computed with precision `wp` and the number of its correct bits.
pub(crate) fn ln2_approx(wp: usize) -> Result<(BigFloat, usize), Error> {
    let (pi, pb) = pi_approx(wp + 16)?;
    let (ret, b) = ln2_from_pi(&pi, wp)?;
    Ok((ret, b.min(pb)))
}

/// Returns the natural logarithm of 2 with precision `p` rounded using the rounding mode `rm`.
/// The value is computed anew on each call.
///
/// ## Errors
///
///  - Convergence: the computation did not converge.
pub fn ln_2(p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
    let p = crate::float::clamp_precision(p);
    ziv(p, rm, p + log2_ceil(p) + 32, ln2_approx)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Radix;

    #[test]
    fn test_ln2() {
        assert_eq!(ln_2(53, RoundingMode::ToEven).unwrap().to_f64(), core::f64::consts::LN_2);

        let v = ln_2(256, RoundingMode::ToEven).unwrap();
        let (s, e) = v.to_string_radix(Radix::Dec, 50);
        assert_eq!(s, "69314718055994530941723212145817656807550013436026");
        assert_eq!(e, 0);
    }
}
