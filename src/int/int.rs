//! Arbitrary precision signed integer.

use crate::defs::Sign;
use crate::mag::Magnitude;
use core::cmp::Ordering;

/// Arbitrary precision signed integer.
///
/// The value is stored as a sign and a magnitude. Zero always has the positive sign,
/// so [`BigInt::signum`] reports 0 for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(super) s: Sign,
    pub(super) m: Magnitude,
}

impl BigInt {
    /// Returns zero.
    pub fn new() -> Self {
        BigInt {
            s: Sign::Pos,
            m: Magnitude::zero(),
        }
    }

    pub(crate) fn from_parts(s: Sign, m: Magnitude) -> Self {
        let s = if m.is_zero() { Sign::Pos } else { s };
        BigInt { s, m }
    }

    pub(crate) fn into_parts(self) -> (Sign, Magnitude) {
        (self.s, self.m)
    }

    pub(crate) fn magnitude(&self) -> &Magnitude {
        &self.m
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

    /// Returns the sign of the value. Zero is positive.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns -1, 0 or 1 depending on the sign of the value.
    pub fn signum(&self) -> i32 {
        if self.m.is_zero() {
            0
        } else {
            self.s.to_int() as i32
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        BigInt {
            s: Sign::Pos,
            m: self.m.clone(),
        }
    }

    /// Changes the sign in place.
    pub fn inv_sign(&mut self) {
        if !self.m.is_zero() {
            self.s = self.s.invert();
        }
    }

    /// Exchanges the values of `self` and `other` without copying their digits.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Number of significant bits of the absolute value. Zero has no significant bits.
    pub fn bit_len(&self) -> usize {
        self.m.bit_len()
    }

    /// Returns true if bit `i` of the absolute value is set.
    pub fn test_bit(&self, i: usize) -> bool {
        self.m.test_bit(i)
    }

    /// Number of trailing zero bits, or None for zero.
    pub fn trailing_zeros(&self) -> Option<usize> {
        self.m.trailing_zeros()
    }

    /// Returns true if the value is even.
    pub fn is_even(&self) -> bool {
        !self.m.is_odd()
    }

    /// Returns true if the value is odd.
    pub fn is_odd(&self) -> bool {
        self.m.is_odd()
    }

    /// Compares absolute values of `self` and `other`.
    pub fn abs_cmp(&self, other: &Self) -> Ordering {
        self.m.cmp(&other.m)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.s, other.s) {
            (Sign::Pos, Sign::Neg) => Ordering::Greater,
            (Sign::Neg, Sign::Pos) => Ordering::Less,
            (Sign::Pos, Sign::Pos) => self.m.cmp(&other.m),
            (Sign::Neg, Sign::Neg) => other.m.cmp(&self.m),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_sign() {
        let z = BigInt::new();
        assert_eq!(z.signum(), 0);
        assert!(!z.is_negative());
        assert!(!z.is_positive());

        let mut a = BigInt::from(-5);
        assert_eq!(a.signum(), -1);
        a.inv_sign();
        assert_eq!(a, BigInt::from(5));
        assert_eq!(BigInt::from(-5).abs(), a);

        let mut z = BigInt::new();
        z.inv_sign();
        assert_eq!(z.sign(), Sign::Pos);
    }

    #[test]
    fn test_ordering() {
        let vals: Vec<BigInt> = [-100i64, -3, 0, 2, 77].iter().map(|&v| BigInt::from(v)).collect();
        for (i, a) in vals.iter().enumerate() {
            for (j, b) in vals.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j));
            }
        }
        assert_eq!(BigInt::from(-7).abs_cmp(&BigInt::from(3)), Ordering::Greater);
    }

    #[test]
    fn test_swap() {
        let mut a = BigInt::from(1);
        let mut b = BigInt::from(u128::MAX);
        a.swap(&mut b);
        assert_eq!(a, BigInt::from(u128::MAX));
        assert_eq!(b, BigInt::from(1));

        let c = core::mem::take(&mut a);
        assert!(a.is_zero());
        assert_eq!(c, BigInt::from(u128::MAX));
    }
}
