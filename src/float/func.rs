//! Rounding to integers and related functions.

use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::float::BigFloat;

impl BigFloat {
    /// Rounds the value to an integer using rounding mode `rm`. The precision is kept.
    pub fn round_int(&self, rm: RoundingMode) -> Self {
        self.integral(|half, lower, odd| match rm {
            RoundingMode::None | RoundingMode::ToZero => false,
            RoundingMode::Up => self.is_positive(),
            RoundingMode::Down => self.is_negative(),
            RoundingMode::FromZero => true,
            RoundingMode::ToEven => half && (lower || odd),
            RoundingMode::ToOdd => half && (lower || !odd),
        })
    }

    /// Largest integer not greater than the value.
    pub fn floor(&self) -> Self {
        self.round_int(RoundingMode::Down)
    }

    /// Smallest integer not less than the value.
    pub fn ceil(&self) -> Self {
        self.round_int(RoundingMode::Up)
    }

    /// Integer part of the value.
    pub fn trunc(&self) -> Self {
        self.round_int(RoundingMode::ToZero)
    }

    /// Nearest integer, halfway cases are rounded away from zero.
    pub fn round(&self) -> Self {
        self.integral(|half, _, _| half)
    }

    /// Fractional part of the value: `self - self.trunc()`. It has the sign of the value.
    pub fn frac(&self) -> Self {
        if self.is_int() {
            return Self::new(self.p);
        }

        let sh = (self.p as Exponent - self.e).min(self.p as Exponent) as usize;
        let m = self.m.low_bits(sh);
        Self::round_exact(self.s, m, self.lsb(), false, self.p, RoundingMode::None)
            .checked()
            .unwrap_or_else(|_| Self::new(self.p))
    }

    // `inc(half, lower, odd)` decides if the truncated absolute value is incremented, where `half` is
    // the first dropped bit, `lower` indicates nonzero bits after it, and `odd` is the parity
    // of the truncated value. It is only called for non-integer values.
    fn integral(&self, inc: impl Fn(bool, bool, bool) -> bool) -> Self {
        if self.is_int() {
            return self.clone();
        }

        // the value is not an integer, so e < p and the shift is positive
        let sh = (self.p as Exponent - self.e) as usize;
        let q = self.m.shr(sh);
        let half = self.m.test_bit(sh - 1);
        let lower = self.m.low_bits_nonzero(sh - 1);
        let q = if inc(half, lower, q.is_odd()) {
            q.add_word(1)
        } else {
            q
        };

        Self::round_exact(self.s, q, 0, false, self.p, RoundingMode::None)
    }

    /// Random number uniformly distributed in `[0, 1)` with precision `p`.
    #[cfg(feature = "random")]
    pub fn random(p: usize) -> Self {
        let p = crate::float::clamp_precision(p);
        let m = crate::int::BigInt::random_bits(p);
        Self::round_exact(m.sign(), m.magnitude().clone(), -(p as Exponent), false, p, RoundingMode::None)
    }
}
