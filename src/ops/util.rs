//! Auxiliary functions of the elementary functions: correctly rounded approximation and AGM.

use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::float::BigFloat;
use crate::mag::Magnitude;
use tracing::trace;
use tracing::warn;

/// Maximum number of working precision increases before giving up.
pub(crate) const ZIV_MAX_ATTEMPTS: usize = 12;

/// Exact `2^n`.
pub(crate) fn pow2(n: Exponent) -> BigFloat {
    BigFloat::from_magnitude(Sign::Pos, Magnitude::from_word(1), n)
}

/// Rounds `x` to `p` bits when all values within `2^(e - s)` of `x`, where `e` is the exponent of `x`,
/// round to the same number. Returns `None` if the error bound is too wide to decide.
pub(crate) fn try_round(
    x: &BigFloat,
    s: usize,
    p: usize,
    rm: RoundingMode,
) -> Result<Option<BigFloat>, Error> {
    if x.is_zero() || s <= p {
        return Ok(None);
    }

    let err = pow2(x.exponent().saturating_sub(s as Exponent));
    let wp = x.precision().max(s) + 2;

    let lo = x.sub(&err, wp, RoundingMode::None)?.round_to(p, rm)?;
    let hi = x.add(&err, wp, RoundingMode::None)?.round_to(p, rm)?;

    Ok(if lo == hi { Some(lo) } else { None })
}

/// Computes a value rounded to `p` bits using `approx`, which returns an approximation computed
/// with working precision `wp` together with the number of its correct bits. The working precision
/// starts at `wp` and grows until the approximation can be rounded.
///
/// ## Errors
///
///  - Convergence: the approximation could not be rounded after the maximum number of attempts.
///  - Errors returned by `approx`.
pub(crate) fn ziv<F>(p: usize, rm: RoundingMode, mut wp: usize, mut approx: F) -> Result<BigFloat, Error>
where
    F: FnMut(usize) -> Result<(BigFloat, usize), Error>,
{
    for attempt in 0..ZIV_MAX_ATTEMPTS {
        let (x, s) = approx(wp)?;

        if let Some(ret) = try_round(&x, s, p, rm)? {
            trace!(p, wp, attempt, "approximation rounded");
            return Ok(ret);
        }

        wp += wp / 2 + 32;
    }

    warn!(p, wp, "approximation can not be rounded");

    Err(Error::Convergence {
        iterations: ZIV_MAX_ATTEMPTS,
    })
}

/// Arithmetic-geometric mean of positive `a` and `b` computed with precision `wp`.
///
/// ## Errors
///
///  - Convergence: the iteration bound is reached.
pub(crate) fn agm(a: &BigFloat, b: &BigFloat, wp: usize) -> Result<BigFloat, Error> {
    let rm = RoundingMode::ToEven;

    // the ratio of the arguments approaches 1 in about log2|log2(a/b)| steps,
    // then the number of correct bits doubles at each step
    let gap = a.exponent().abs_diff(b.exponent()) as usize;
    let bound = log2_ceil(wp) + log2_ceil(gap + 1) + 16;

    let mut a = a.round_to(wp, rm)?;
    let mut b = b.round_to(wp, rm)?;

    for i in 0..bound {
        let d = a.sub(&b, wp, rm)?;
        if d.is_zero() || d.exponent() <= a.exponent() - wp as Exponent + 2 {
            trace!(iterations = i, wp, "agm converged");
            return Ok(a);
        }

        let an = a.add(&b, wp, rm)?.div_2exp(1);
        b = a.mul(&b, wp, rm)?.sqrt(wp, rm)?;
        a = an;
    }

    warn!(bound, wp, "agm iteration bound reached");

    Err(Error::Convergence { iterations: bound })
}
