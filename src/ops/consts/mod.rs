//! Mathematical constants and the cache holding them.

mod e;
mod ln10;
mod ln2;
mod pi;

pub use e::e;
pub use ln10::ln_10;
pub use ln2::ln_2;
pub use pi::pi;

use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::float::clamp_precision;
use crate::float::BigFloat;
use crate::ops::log::ln_approx;
use crate::ops::util::ziv;
use tracing::debug;

/// Constant held by [`Consts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// Pi number.
    Pi,

    /// Euler's number.
    E,

    /// Natural logarithm of 2.
    Ln2,

    /// Natural logarithm of 10.
    Ln10,
}

#[derive(Debug, Clone, Default)]
struct Entry {
    val: Option<(BigFloat, RoundingMode)>,
    computed: usize,
}

impl Entry {
    fn lookup(&self, p: usize, rm: RoundingMode) -> Option<BigFloat> {
        match &self.val {
            Some((v, vrm)) if v.precision() == p && *vrm == rm => Some(v.clone()),
            _ => None,
        }
    }

    fn store(&mut self, c: Constant, v: &BigFloat, rm: RoundingMode) {
        debug!(constant = ?c, p = v.precision(), "constant computed");
        self.val = Some((v.clone(), rm));
        self.computed += 1;
    }

    fn reset(&mut self, c: Constant) {
        if self.val.take().is_some() {
            debug!(constant = ?c, "constant reset");
        }
    }
}

/// Cache of the mathematical constants.
///
/// A constant requested with the same precision and rounding mode as the cached value is returned
/// from the cache, otherwise it is computed and replaces the cached value.
/// Besides, the cache keeps the most precise approximations of pi, ln(2) and ln(10)
/// used by logarithms, so that a sequence of calls does not recompute them.
#[derive(Debug, Clone, Default)]
pub struct Consts {
    pi: Entry,
    e: Entry,
    ln2: Entry,
    ln10: Entry,
    work_pi: Option<(BigFloat, usize)>,
    work_ln2: Option<(BigFloat, usize)>,
    work_ln10: Option<(BigFloat, usize)>,
}

impl Consts {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of pi with precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - Convergence: the computation did not converge.
    pub fn pi(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        let p = clamp_precision(p);
        if let Some(v) = self.pi.lookup(p, rm) {
            return Ok(v);
        }

        let v = ziv(p, rm, p + log2_ceil(p) + 32, |wp| self.pi_approx(wp))?;
        self.pi.store(Constant::Pi, &v, rm);
        Ok(v)
    }

    /// Returns the value of Euler's number with precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - Convergence: the computation did not converge.
    pub fn e(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        let p = clamp_precision(p);
        if let Some(v) = self.e.lookup(p, rm) {
            return Ok(v);
        }

        let v = e(p, rm)?;
        self.e.store(Constant::E, &v, rm);
        Ok(v)
    }

    /// Returns the value of the natural logarithm of 2 with precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - Convergence: the computation did not converge.
    pub fn ln_2(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        let p = clamp_precision(p);
        if let Some(v) = self.ln2.lookup(p, rm) {
            return Ok(v);
        }

        let v = ziv(p, rm, p + log2_ceil(p) + 32, |wp| self.ln2_approx(wp))?;
        self.ln2.store(Constant::Ln2, &v, rm);
        Ok(v)
    }

    /// Returns the value of the natural logarithm of 10 with precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - Convergence: the computation did not converge.
    pub fn ln_10(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        let p = clamp_precision(p);
        if let Some(v) = self.ln10.lookup(p, rm) {
            return Ok(v);
        }

        let v = ziv(p, rm, p + log2_ceil(p) + 32, |wp| self.ln10_approx(wp))?;
        self.ln10.store(Constant::Ln10, &v, rm);
        Ok(v)
    }

    /// Drops the cached value of pi.
    pub fn reset_pi(&mut self) {
        self.pi.reset(Constant::Pi);
    }

    /// Drops the cached value of Euler's number.
    pub fn reset_e(&mut self) {
        self.e.reset(Constant::E);
    }

    /// Drops the cached value of ln(2).
    pub fn reset_ln_2(&mut self) {
        self.ln2.reset(Constant::Ln2);
    }

    /// Drops the cached value of ln(10).
    pub fn reset_ln_10(&mut self) {
        self.ln10.reset(Constant::Ln10);
    }

    /// Drops all cached values including the approximations used by logarithms.
    pub fn reset(&mut self) {
        self.reset_pi();
        self.reset_e();
        self.reset_ln_2();
        self.reset_ln_10();
        self.work_pi = None;
        self.work_ln2 = None;
        self.work_ln10 = None;
    }

    /// Precision of the cached value of the constant `c`, if it is cached.
    pub fn cached_precision(&self, c: Constant) -> Option<usize> {
        self.entry(c).val.as_ref().map(|(v, _)| v.precision())
    }

    /// Number of times the constant `c` was computed and stored in the cache.
    pub fn compute_count(&self, c: Constant) -> usize {
        self.entry(c).computed
    }

    fn entry(&self, c: Constant) -> &Entry {
        match c {
            Constant::Pi => &self.pi,
            Constant::E => &self.e,
            Constant::Ln2 => &self.ln2,
            Constant::Ln10 => &self.ln10,
        }
    }

    // Returns the stored approximation if it has at least `wp` correct bits, rounded to `wp + 8` bits.
    fn reuse(work: &Option<(BigFloat, usize)>, wp: usize) -> Result<Option<(BigFloat, usize)>, Error> {
        match work {
            Some((v, b)) if *b >= wp => {
                let v = v.round_to(wp + 8, RoundingMode::ToEven)?;
                Ok(Some((v, (*b).min(wp + 6))))
            }
            _ => Ok(None),
        }
    }

    /// Approximation of pi with at least `wp` correct bits.
    pub(crate) fn pi_approx(&mut self, wp: usize) -> Result<(BigFloat, usize), Error> {
        if let Some(ret) = Self::reuse(&self.work_pi, wp)? {
            return Ok(ret);
        }

        let (v, b) = pi::pi_approx(wp + log2_ceil(wp) + 16)?;
        debug!(p = v.precision(), "pi approximation computed");
        self.work_pi = Some((v.clone(), b));
        Ok((v, b))
    }

    /// Approximation of ln(2) with at least `wp` correct bits.
    pub(crate) fn ln2_approx(&mut self, wp: usize) -> Result<(BigFloat, usize), Error> {
        if let Some(ret) = Self::reuse(&self.work_ln2, wp)? {
            return Ok(ret);
        }

        let wpe = wp + log2_ceil(wp) + 16;
        let (pi, pb) = self.pi_approx(wpe)?;
        let (v, b) = ln2::ln2_from_pi(&pi, wpe)?;
        let b = b.min(pb);
        debug!(p = v.precision(), "ln(2) approximation computed");
        self.work_ln2 = Some((v.clone(), b));
        Ok((v, b))
    }

    /// Approximation of ln(10) with at least `wp` correct bits.
    pub(crate) fn ln10_approx(&mut self, wp: usize) -> Result<(BigFloat, usize), Error> {
        if let Some(ret) = Self::reuse(&self.work_ln10, wp)? {
            return Ok(ret);
        }

        let ten = BigFloat::from(10);
        let mut wpe = wp + 16;
        let (v, b) = loop {
            let (v, b) = ln_approx(&ten, wpe, self)?;
            if b >= wp {
                break (v, b);
            }
            wpe += wp - b + 16;
        };
        debug!(p = v.precision(), "ln(10) approximation computed");
        self.work_ln10 = Some((v.clone(), b));
        Ok((v, b))
    }
}
