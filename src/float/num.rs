//! Arbitrary precision binary floating point number.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::DEFAULT_P;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::defs::PRECISION_MAX;
use crate::defs::PRECISION_MIN;
use crate::mag::Magnitude;
use core::cmp::Ordering;

/// Binary floating point number with a per-value precision.
///
/// A nonzero value is `(-1)^s * 0.m * 2^e` where the mantissa `m` has exactly `p` bits and
/// its most significant bit is set. Zero has an empty mantissa, the exponent 0 and the
/// positive sign. Precision does not take part in comparisons: numbers are compared by value.
#[derive(Clone, Debug)]
pub struct BigFloat {
    pub(super) s: Sign,
    pub(super) m: Magnitude,
    pub(super) e: Exponent,
    pub(super) p: usize,
}

/// Clamps the precision to the supported range.
pub(crate) fn clamp_precision(p: usize) -> usize {
    p.clamp(PRECISION_MIN, PRECISION_MAX)
}

impl BigFloat {
    /// Zero with precision `p` bits.
    pub fn new(p: usize) -> Self {
        BigFloat {
            s: Sign::Pos,
            m: Magnitude::zero(),
            e: 0,
            p: clamp_precision(p),
        }
    }

    /// Rounds the exact value `(-1)^s * m * 2^lsb` to `p` bits.
    /// If `sticky` is set, the value has a nonzero tail below the least significant bit of `m`.
    /// The exponent of the result is not checked against the exponent range.
    pub(crate) fn round_exact(
        s: Sign,
        mut m: Magnitude,
        mut lsb: Exponent,
        sticky: bool,
        p: usize,
        rm: RoundingMode,
    ) -> Self {
        let p = clamp_precision(p);

        if m.is_zero() {
            return Self::new(p);
        }

        // the tail must stay below the rounding bit
        let b = m.bit_len();
        if sticky && b < p + 2 {
            let sh = p + 2 - b;
            m = m.shl(sh);
            lsb -= sh as Exponent;
        }

        let b = m.bit_len();
        let mut e = lsb + b as Exponent;

        let m = if b <= p {
            m.shl(p - b)
        } else {
            let sh = b - p;
            let q = m.shr(sh);
            let half = m.test_bit(sh - 1);
            let lower = sticky || m.low_bits_nonzero(sh - 1);
            let inexact = half || lower;

            let inc = match rm {
                RoundingMode::None | RoundingMode::ToZero => false,
                RoundingMode::Up => inexact && s.is_positive(),
                RoundingMode::Down => inexact && s.is_negative(),
                RoundingMode::FromZero => inexact,
                RoundingMode::ToEven => half && (lower || q.is_odd()),
                RoundingMode::ToOdd => half && (lower || !q.is_odd()),
            };

            if inc {
                let q = q.add_word(1);
                if q.bit_len() > p {
                    e += 1;
                    q.shr(1)
                } else {
                    q
                }
            } else {
                q
            }
        };

        BigFloat { s, m, e, p }
    }

    /// Checks the exponent range. Values below the range become zero.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent is greater than the maximum.
    pub(crate) fn checked(self) -> Result<Self, Error> {
        if self.m.is_zero() {
            Ok(self)
        } else if self.e > EXPONENT_MAX {
            Err(Error::ExponentOverflow(self.s))
        } else if self.e < EXPONENT_MIN {
            Ok(Self::new(self.p))
        } else {
            Ok(self)
        }
    }

    /// Rounds the exact value `(-1)^s * m * 2^lsb` to `p` bits and checks the exponent range.
    pub(crate) fn from_exact(
        s: Sign,
        m: Magnitude,
        lsb: Exponent,
        sticky: bool,
        p: usize,
        rm: RoundingMode,
    ) -> Result<Self, Error> {
        Self::round_exact(s, m, lsb, sticky, p, rm).checked()
    }

    /// Exponent of the least significant bit of the mantissa.
    pub(crate) fn lsb(&self) -> Exponent {
        self.e - self.p as Exponent
    }

    /// Exact value at a precision equal to the number of significant bits of `m`.
    pub(crate) fn from_magnitude(s: Sign, m: Magnitude, lsb: Exponent) -> Self {
        let p = m.bit_len();
        Self::round_exact(s, m, lsb, false, p, RoundingMode::None)
    }

    /// Sign, mantissa and the exponent of the least significant bit of the mantissa.
    pub(crate) fn parts(&self) -> (Sign, &Magnitude, Exponent) {
        (self.s, &self.m, self.lsb())
    }

    /// Returns the precision in bits.
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the binary exponent: a nonzero value lies in `[2^(e-1), 2^e)` by absolute value.
    /// Zero has exponent 0.
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns the sign. Zero is positive.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Mantissa as an integer with `precision()` bits, or zero.
    pub fn mantissa(&self) -> crate::int::BigInt {
        crate::int::BigInt::from_magnitude(self.m.clone())
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if the value is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.s.is_positive() && !self.m.is_zero()
    }

    /// Returns true if the value is less than zero.
    pub fn is_negative(&self) -> bool {
        self.s.is_negative()
    }

    /// Returns -1, 0 or 1 depending on the sign of the value.
    pub fn signum(&self) -> i32 {
        if self.m.is_zero() {
            0
        } else {
            self.s.to_int() as i32
        }
    }

    /// Returns true if the value is an integer.
    pub fn is_int(&self) -> bool {
        self.m.is_zero() || self.e >= self.p as Exponent || {
            self.e > 0 && !self.m.low_bits_nonzero((self.p as Exponent - self.e) as usize)
        }
    }

    /// Changes the sign in place.
    pub fn inv_sign(&mut self) {
        if !self.m.is_zero() {
            self.s = self.s.invert();
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        let mut ret = self.clone();
        ret.s = Sign::Pos;
        ret
    }

    /// Returns the value with the opposite sign.
    pub fn neg(&self) -> Self {
        let mut ret = self.clone();
        ret.inv_sign();
        ret
    }

    /// Exchanges the values of `self` and `other` without copying their mantissas.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Rounds the value to precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: rounding made the exponent exceed the maximum.
    pub fn round_to(&self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        Self::from_exact(self.s, self.m.clone(), self.lsb(), false, p, rm)
    }

    /// Sets the precision to `p` bits rounding the value with `rm` if the precision decreases.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: rounding made the exponent exceed the maximum.
    pub fn set_precision(&mut self, p: usize, rm: RoundingMode) -> Result<(), Error> {
        *self = self.round_to(p, rm)?;
        Ok(())
    }

    /// Sets the precision to `p` bits without rounding: excess mantissa bits are dropped,
    /// and zero bits are appended when the precision increases.
    pub fn set_precision_raw(&mut self, p: usize) {
        let p = clamp_precision(p);
        if !self.m.is_zero() {
            self.m = if p >= self.p {
                self.m.shl(p - self.p)
            } else {
                self.m.shr(self.p - p)
            };
        }
        self.p = p;
    }

    /// Replaces the value with `other` rounded to the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: rounding made the exponent exceed the maximum.
    pub fn assign(&mut self, other: &Self, rm: RoundingMode) -> Result<(), Error> {
        *self = other.round_to(self.p, rm)?;
        Ok(())
    }

    /// Returns `self * 2^n`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent exceeds the maximum.
    pub fn mul_2exp(&self, n: usize) -> Result<Self, Error> {
        let mut ret = self.clone();
        if !ret.m.is_zero() {
            ret.e = Exponent::try_from(n)
                .ok()
                .and_then(|n| n.checked_add(ret.e))
                .filter(|e| *e <= EXPONENT_MAX)
                .ok_or(Error::ExponentOverflow(ret.s))?;
        }
        Ok(ret)
    }

    /// Returns `self / 2^n`. Values below the exponent range become zero.
    pub fn div_2exp(&self, n: usize) -> Self {
        let mut ret = self.clone();
        if !ret.m.is_zero() {
            match Exponent::try_from(n)
                .ok()
                .and_then(|n| ret.e.checked_sub(n))
            {
                Some(e) if e >= EXPONENT_MIN => ret.e = e,
                _ => ret = Self::new(ret.p),
            }
        }
        ret
    }

    /// Compares absolute values of `self` and `other`.
    pub fn abs_cmp(&self, other: &Self) -> Ordering {
        match (self.m.is_zero(), other.m.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        self.e.cmp(&other.e).then_with(|| {
            // align mantissas of different precision
            if self.p >= other.p {
                self.m.cmp(&other.m.shl(self.p - other.p))
            } else {
                self.m.shl(other.p - self.p).cmp(&other.m)
            }
        })
    }
}

impl Default for BigFloat {
    fn default() -> Self {
        Self::new(DEFAULT_P)
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigFloat {}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.signum(), other.signum()) {
            (a, b) if a != b => a.cmp(&b),
            (0, _) => Ordering::Equal,
            (1, _) => self.abs_cmp(other),
            _ => other.abs_cmp(self),
        }
    }
}
