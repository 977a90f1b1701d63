//! Arithmetic and bitwise operations on integers.

use crate::defs::Error;
use crate::defs::Sign;
use crate::int::BigInt;
use crate::mag::BitOp;
use crate::mag::Magnitude;
use core::cmp::Ordering;
use core::ops::Neg;
use core::ops::Not;
use core::ops::Shl;
use core::ops::ShlAssign;
use core::ops::Shr;
use core::ops::ShrAssign;

impl BigInt {
    fn add_signed(&self, other: &Self, s2: Sign) -> Self {
        if other.is_zero() {
            return self.clone();
        }

        if self.s == s2 {
            BigInt::from_parts(self.s, self.m.add(&other.m))
        } else {
            let (d, o) = self.m.abs_diff(&other.m);
            match o {
                Ordering::Less => BigInt::from_parts(s2, d),
                _ => BigInt::from_parts(self.s, d),
            }
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        self.add_signed(other, other.s)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add_signed(other, other.s.invert())
    }

    /// Returns `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        BigInt::from_parts(self.s.mul(other.s), self.m.mul(&other.m))
    }

    /// Divides `self` by `other` and returns the quotient truncated toward zero and
    /// the remainder, which has the sign of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `other` is zero.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (q, r) = self.m.div_rem(&other.m);
        Ok((
            BigInt::from_parts(self.s.mul(other.s), q),
            BigInt::from_parts(self.s, r),
        ))
    }

    /// Quotient of `self` and `other` truncated toward zero.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, Error> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// Remainder of the division truncated toward zero. The remainder has the sign of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `other` is zero.
    pub fn checked_rem(&self, other: &Self) -> Result<Self, Error> {
        self.div_rem(other).map(|(_, r)| r)
    }

    /// Divides `self` by `other` and returns the quotient rounded toward negative infinity and
    /// the remainder, which has the sign of `other`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `other` is zero.
    pub fn div_mod_floor(&self, other: &Self) -> Result<(Self, Self), Error> {
        let (q, r) = self.div_rem(other)?;
        if !r.is_zero() && self.s != other.s {
            Ok((q.sub(&BigInt::from(1)), r.add(other)))
        } else {
            Ok((q, r))
        }
    }

    /// Quotient rounded toward negative infinity.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `other` is zero.
    pub fn div_floor(&self, other: &Self) -> Result<Self, Error> {
        self.div_mod_floor(other).map(|(q, _)| q)
    }

    /// Remainder of the division rounded toward negative infinity. The remainder has the sign of `other`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `other` is zero.
    pub fn mod_floor(&self, other: &Self) -> Result<Self, Error> {
        self.div_mod_floor(other).map(|(_, r)| r)
    }

    fn div_op(&self, other: &Self) -> Self {
        match self.div_rem(other) {
            Ok((q, _)) => q,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }

    fn rem_op(&self, other: &Self) -> Self {
        match self.div_rem(other) {
            Ok((_, r)) => r,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }

    fn bitwise(&self, other: &Self, op: BitOp) -> Self {
        let (neg, m) = self.m.bitwise(self.is_negative(), &other.m, other.is_negative(), op);
        BigInt::from_parts(if neg { Sign::Neg } else { Sign::Pos }, m)
    }

    fn bitand_op(&self, other: &Self) -> Self {
        self.bitwise(other, BitOp::And)
    }

    fn bitor_op(&self, other: &Self) -> Self {
        self.bitwise(other, BitOp::Or)
    }

    fn bitxor_op(&self, other: &Self) -> Self {
        self.bitwise(other, BitOp::Xor)
    }

    /// Returns `self * 2^n`.
    pub fn shl_bits(&self, n: usize) -> Self {
        BigInt::from_parts(self.s, self.m.shl(n))
    }

    /// Returns `self / 2^n` rounded toward negative infinity, i.e. arithmetic right shift.
    pub fn shr_bits(&self, n: usize) -> Self {
        let q = self.m.shr(n);
        if self.is_negative() && self.m.low_bits_nonzero(n) {
            BigInt::from_parts(Sign::Neg, q.add_word(1))
        } else {
            BigInt::from_parts(self.s, q)
        }
    }

    fn add_assign_op(&mut self, other: &Self) {
        *self = BigInt::add(self, other);
    }

    fn sub_assign_op(&mut self, other: &Self) {
        *self = BigInt::sub(self, other);
    }

    fn mul_assign_op(&mut self, other: &Self) {
        *self = BigInt::mul(self, other);
    }

    fn div_assign_op(&mut self, other: &Self) {
        *self = self.div_op(other);
    }

    fn rem_assign_op(&mut self, other: &Self) {
        *self = self.rem_op(other);
    }

    fn bitand_assign_op(&mut self, other: &Self) {
        *self = self.bitand_op(other);
    }

    fn bitor_assign_op(&mut self, other: &Self) {
        *self = self.bitor_op(other);
    }

    fn bitxor_assign_op(&mut self, other: &Self) {
        *self = self.bitxor_op(other);
    }

    /// Returns `self` to the power of `e`.
    pub fn pow(&self, e: u32) -> Self {
        let s = if e & 1 == 0 { Sign::Pos } else { self.s };
        BigInt::from_parts(s, self.m.pow(e as u64))
    }
}

impl_binop!(BigInt, BigInt, BigInt, Add, add, add);
impl_binop!(BigInt, BigInt, BigInt, Sub, sub, sub);
impl_binop!(BigInt, BigInt, BigInt, Mul, mul, mul);
impl_binop!(BigInt, BigInt, BigInt, Div, div, div_op);
impl_binop!(BigInt, BigInt, BigInt, Rem, rem, rem_op);
impl_binop!(BigInt, BigInt, BigInt, BitAnd, bitand, bitand_op);
impl_binop!(BigInt, BigInt, BigInt, BitOr, bitor, bitor_op);
impl_binop!(BigInt, BigInt, BigInt, BitXor, bitxor, bitxor_op);

impl_assignop!(BigInt, BigInt, AddAssign, add_assign, add_assign_op);
impl_assignop!(BigInt, BigInt, SubAssign, sub_assign, sub_assign_op);
impl_assignop!(BigInt, BigInt, MulAssign, mul_assign, mul_assign_op);
impl_assignop!(BigInt, BigInt, DivAssign, div_assign, div_assign_op);
impl_assignop!(BigInt, BigInt, RemAssign, rem_assign, rem_assign_op);
impl_assignop!(BigInt, BigInt, BitAndAssign, bitand_assign, bitand_assign_op);
impl_assignop!(BigInt, BigInt, BitOrAssign, bitor_assign, bitor_assign_op);
impl_assignop!(BigInt, BigInt, BitXorAssign, bitxor_assign, bitxor_assign_op);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.inv_sign();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    /// Bitwise complement: `-self - 1`.
    fn not(self) -> BigInt {
        !&self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        let s = self.s.invert();
        let m = if self.is_negative() {
            self.m.sub_word(1)
        } else {
            self.m.add_word(1)
        };
        BigInt::from_parts(s, m)
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(self, n: usize) -> BigInt {
        self.shl_bits(n)
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: usize) -> BigInt {
        self.shl_bits(n)
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(self, n: usize) -> BigInt {
        self.shr_bits(n)
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: usize) -> BigInt {
        self.shr_bits(n)
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, n: usize) {
        *self = self.shl_bits(n);
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, n: usize) {
        *self = self.shr_bits(n);
    }
}

impl core::iter::Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::new(), |acc, x| acc + x)
    }
}

impl core::iter::Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::from(1), |acc, x| acc * x)
    }
}

// Magnitude helpers used by the rational and float modules.
impl BigInt {
    pub(crate) fn from_magnitude(m: Magnitude) -> Self {
        BigInt::from_parts(Sign::Pos, m)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn bi(v: i128) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_add_sub() {
        let vals = [0i128, 1, -1, 17, -17, i64::MAX as i128, i64::MIN as i128, 1 << 100, -(1 << 100)];
        for &a in &vals {
            for &b in &vals {
                assert_eq!(bi(a) + bi(b), bi(a + b));
                assert_eq!(bi(a) - bi(b), bi(a - b));
                assert_eq!(&bi(a) * &bi(b % (1 << 20)), bi(a * (b % (1 << 20))));
            }
        }
    }

    #[test]
    fn test_truncating_division() {
        let cases = [(7, 2, 3, 1), (-7, 2, -3, -1), (7, -2, -3, 1), (-7, -2, 3, -1), (0, 5, 0, 0)];
        for (a, b, q, r) in cases {
            assert_eq!(bi(a) / bi(b), bi(q));
            assert_eq!(bi(a) % bi(b), bi(r));
        }

        assert_eq!(bi(7).checked_div(&bi(0)), Err(Error::DivisionByZero));
        assert_eq!(bi(7).checked_rem(&BigInt::new()), Err(Error::DivisionByZero));

        let (q, r) = bi(-7).div_mod_floor(&bi(2)).unwrap();
        assert_eq!((q, r), (bi(-4), bi(1)));
        let (q, r) = bi(7).div_mod_floor(&bi(-2)).unwrap();
        assert_eq!((q, r), (bi(-4), bi(-1)));
        assert_eq!(bi(-9).div_floor(&bi(4)).unwrap(), bi(-3));
        assert_eq!(bi(-9).mod_floor(&bi(4)).unwrap(), bi(3));
        assert!(bi(1).mod_floor(&bi(0)).is_err());
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_panics() {
        let _ = bi(1) / bi(0);
    }

    #[test]
    fn test_shifts() {
        assert_eq!(bi(5) << 100, bi(5 << 100));
        assert_eq!(bi(-5) >> 1, bi(-3));
        assert_eq!(bi(-4) >> 1, bi(-2));
        assert_eq!(bi(5) >> 1, bi(2));
        assert_eq!(bi(-1) >> 200, bi(-1));

        let mut a = bi(3);
        a <<= 2;
        a >>= 1;
        assert_eq!(a, bi(6));
    }

    #[test]
    fn test_bit_ops() {
        for a in [-9i128, -1, 0, 6, 1 << 80] {
            for b in [-3i128, 0, 5, -(1 << 70)] {
                assert_eq!(bi(a) & bi(b), bi(a & b));
                assert_eq!(bi(a) | bi(b), bi(a | b));
                assert_eq!(bi(a) ^ bi(b), bi(a ^ b));
            }
            assert_eq!(!bi(a), bi(!a));
        }
    }

    #[test]
    fn test_assign_ops() {
        let mut a = bi(10);
        a += bi(5);
        a -= &bi(3);
        a *= bi(-2);
        a /= bi(5);
        assert_eq!(a, bi(-4));
        a %= bi(3);
        assert_eq!(a, bi(-1));
        a |= bi(6);
        a &= bi(3);
        a ^= bi(1);
        assert_eq!(a, bi(2));
    }

    #[test]
    fn test_pow_sum_product() {
        assert_eq!(bi(-3).pow(3), bi(-27));
        assert_eq!(bi(-3).pow(0), bi(1));
        assert_eq!(bi(10).pow(30), bi(10i128.pow(30)));
        let s: BigInt = (1..=10i32).map(BigInt::from).sum();
        assert_eq!(s, bi(55));
        let p: BigInt = (1..=10i32).map(BigInt::from).product();
        assert_eq!(p, bi(3628800));
    }
}
