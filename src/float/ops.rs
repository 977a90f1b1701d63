//! Operators and comparisons of floating point numbers.
//!
//! Binary operators round to the larger of the operands' precisions; compound assignment keeps
//! the precision of the receiver. Operands of other numeric types take the precision of
//! the floating point operand. Rounding is always to nearest, ties to even.
//!
//! # Panics
//!
//! Operators panic on division by zero and when the exponent of the result overflows.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::DEFAULT_RM;
use crate::float::BigFloat;
use crate::int::BigInt;
use crate::mag::Magnitude;
use crate::ratio::Rational;
use core::cmp::Ordering;
use core::ops::Neg;

fn unwrap_op(r: Result<BigFloat, Error>) -> BigFloat {
    match r {
        Ok(v) => v,
        Err(Error::DivisionByZero) => panic!("attempt to divide by zero"),
        Err(e) => panic!("{e}"),
    }
}

impl BigFloat {
    /// Exact floating point representation of an integer.
    pub(crate) fn exact_int(v: &BigInt) -> Self {
        Self::from_int(v, v.bit_len(), RoundingMode::None)
    }

    fn add_op(&self, other: &Self) -> Self {
        unwrap_op(BigFloat::add(self, other, self.p.max(other.p), DEFAULT_RM))
    }

    fn sub_op(&self, other: &Self) -> Self {
        unwrap_op(BigFloat::sub(self, other, self.p.max(other.p), DEFAULT_RM))
    }

    fn mul_op(&self, other: &Self) -> Self {
        unwrap_op(BigFloat::mul(self, other, self.p.max(other.p), DEFAULT_RM))
    }

    fn div_op(&self, other: &Self) -> Self {
        unwrap_op(BigFloat::div(self, other, self.p.max(other.p), DEFAULT_RM))
    }

    fn add_assign_op(&mut self, other: &Self) {
        *self = unwrap_op(BigFloat::add(self, other, self.p, DEFAULT_RM));
    }

    fn sub_assign_op(&mut self, other: &Self) {
        *self = unwrap_op(BigFloat::sub(self, other, self.p, DEFAULT_RM));
    }

    fn mul_assign_op(&mut self, other: &Self) {
        *self = unwrap_op(BigFloat::mul(self, other, self.p, DEFAULT_RM));
    }

    fn div_assign_op(&mut self, other: &Self) {
        *self = unwrap_op(BigFloat::div(self, other, self.p, DEFAULT_RM));
    }

    /// Returns `self / other` rounded to `p` bits with rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `other` is zero.
    ///  - ExponentOverflow: the result is too large.
    pub fn checked_div(&self, other: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        BigFloat::div(self, other, p, rm)
    }

    // Operations with integers. The integer is converted exactly.

    fn add_int_op(&self, other: &BigInt) -> Self {
        unwrap_op(BigFloat::add(self, &Self::exact_int(other), self.p, DEFAULT_RM))
    }

    fn sub_int_op(&self, other: &BigInt) -> Self {
        unwrap_op(BigFloat::sub(self, &Self::exact_int(other), self.p, DEFAULT_RM))
    }

    fn mul_int_op(&self, other: &BigInt) -> Self {
        unwrap_op(BigFloat::mul(self, &Self::exact_int(other), self.p, DEFAULT_RM))
    }

    fn div_int_op(&self, other: &BigInt) -> Self {
        unwrap_op(BigFloat::div(self, &Self::exact_int(other), self.p, DEFAULT_RM))
    }

    fn add_int_assign_op(&mut self, other: &BigInt) {
        *self = self.add_int_op(other);
    }

    fn sub_int_assign_op(&mut self, other: &BigInt) {
        *self = self.sub_int_op(other);
    }

    fn mul_int_assign_op(&mut self, other: &BigInt) {
        *self = self.mul_int_op(other);
    }

    fn div_int_assign_op(&mut self, other: &BigInt) {
        *self = self.div_int_op(other);
    }

    // Operations with rationals. All of them are rounded once: `x * n/d` and `x / (n/d)`
    // divide an exact product, `x + n/d` divides the exact numerator `x*d + n` by `d`.

    fn mul_ratio_op(&self, other: &Rational) -> Self {
        let (n, d) = other.parts();
        let xn = unwrap_op(BigFloat::mul(
            self,
            &Self::exact_int(n),
            self.p + n.bit_len(),
            RoundingMode::None,
        ));
        unwrap_op(BigFloat::div(&xn, &Self::exact_int(d), self.p, DEFAULT_RM))
    }

    fn div_ratio_op(&self, other: &Rational) -> Self {
        let (n, d) = other.parts();
        let xd = unwrap_op(BigFloat::mul(
            self,
            &Self::exact_int(d),
            self.p + d.bit_len(),
            RoundingMode::None,
        ));
        unwrap_op(BigFloat::div(&xd, &Self::exact_int(n), self.p, DEFAULT_RM))
    }

    fn add_ratio_signed(&self, other: &Rational, neg: bool) -> Self {
        let (n, d) = other.parts();
        if self.is_zero() {
            let ret = Self::from_rational(other, self.p, DEFAULT_RM);
            return if neg { ret.neg() } else { ret };
        }
        if n.is_zero() {
            return unwrap_op(self.round_to(self.p, DEFAULT_RM));
        }

        let sn = if neg { n.sign().invert() } else { n.sign() };
        let xd = (self.s, self.m.mul(d.magnitude()), self.lsb());
        let n = (sn, n.magnitude().clone(), 0);
        let top = |t: &(Sign, Magnitude, Exponent)| t.2 + t.1.bit_len() as Exponent;
        let (x, y) = if top(&xd) >= top(&n) { (xd, n) } else { (n, xd) };

        // Rounding boundaries of the quotient are multiples of 2^l divided by d. A smaller
        // term entirely below 2^l is replaced by a value of the same sign which keeps the
        // quotient between the same boundaries.
        let l = (top(&x) - d.bit_len() as Exponent - self.p as Exponent - 3).min(x.2);
        let y = if top(&y) < l { (y.0, Magnitude::from_word(1), l - 2) } else { y };

        let lsb = x.2.min(y.2);
        let mx = x.1.shl((x.2 - lsb) as usize);
        let my = y.1.shl((y.2 - lsb) as usize);
        let (s, m) = if x.0 == y.0 {
            (x.0, mx.add(&my))
        } else {
            let (m, o) = mx.abs_diff(&my);
            (if o == Ordering::Less { y.0 } else { x.0 }, m)
        };

        if m.is_zero() {
            return Self::new(self.p);
        }

        unwrap_op(Self::div_magnitudes(s, &m, lsb, d.magnitude(), 0, self.p, DEFAULT_RM).checked())
    }

    fn add_ratio_op(&self, other: &Rational) -> Self {
        self.add_ratio_signed(other, false)
    }

    fn sub_ratio_op(&self, other: &Rational) -> Self {
        self.add_ratio_signed(other, true)
    }

    fn add_ratio_assign_op(&mut self, other: &Rational) {
        *self = self.add_ratio_op(other);
    }

    fn sub_ratio_assign_op(&mut self, other: &Rational) {
        *self = self.sub_ratio_op(other);
    }

    fn mul_ratio_assign_op(&mut self, other: &Rational) {
        *self = self.mul_ratio_op(other);
    }

    fn div_ratio_assign_op(&mut self, other: &Rational) {
        *self = self.div_ratio_op(other);
    }

    /// Exact comparison with an integer.
    pub fn cmp_int(&self, other: &BigInt) -> Ordering {
        self.cmp(&Self::exact_int(other))
    }

    /// Exact comparison with a rational number.
    pub fn cmp_rational(&self, other: &Rational) -> Ordering {
        // d > 0, so x <=> n/d is x*d <=> n
        let (n, d) = other.parts();
        let xd = Self::exact_int(d);
        match BigFloat::mul(self, &xd, self.p + xd.p, RoundingMode::None) {
            Ok(xd) => xd.cmp_int(n),
            Err(_) => {
                // |x*d| exceeds the exponent range while n is far smaller
                if self.is_negative() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        }
    }
}

impl_binop!(BigFloat, BigFloat, BigFloat, Add, add, add_op);
impl_binop!(BigFloat, BigFloat, BigFloat, Sub, sub, sub_op);
impl_binop!(BigFloat, BigFloat, BigFloat, Mul, mul, mul_op);
impl_binop!(BigFloat, BigFloat, BigFloat, Div, div, div_op);

impl_assignop!(BigFloat, BigFloat, AddAssign, add_assign, add_assign_op);
impl_assignop!(BigFloat, BigFloat, SubAssign, sub_assign, sub_assign_op);
impl_assignop!(BigFloat, BigFloat, MulAssign, mul_assign, mul_assign_op);
impl_assignop!(BigFloat, BigFloat, DivAssign, div_assign, div_assign_op);

impl_binop!(BigFloat, BigInt, BigFloat, Add, add, add_int_op);
impl_binop!(BigFloat, BigInt, BigFloat, Sub, sub, sub_int_op);
impl_binop!(BigFloat, BigInt, BigFloat, Mul, mul, mul_int_op);
impl_binop!(BigFloat, BigInt, BigFloat, Div, div, div_int_op);

impl_assignop!(BigFloat, BigInt, AddAssign, add_assign, add_int_assign_op);
impl_assignop!(BigFloat, BigInt, SubAssign, sub_assign, sub_int_assign_op);
impl_assignop!(BigFloat, BigInt, MulAssign, mul_assign, mul_int_assign_op);
impl_assignop!(BigFloat, BigInt, DivAssign, div_assign, div_int_assign_op);

impl_binop!(BigFloat, Rational, BigFloat, Add, add, add_ratio_op);
impl_binop!(BigFloat, Rational, BigFloat, Sub, sub, sub_ratio_op);
impl_binop!(BigFloat, Rational, BigFloat, Mul, mul, mul_ratio_op);
impl_binop!(BigFloat, Rational, BigFloat, Div, div, div_ratio_op);

impl_assignop!(BigFloat, Rational, AddAssign, add_assign, add_ratio_assign_op);
impl_assignop!(BigFloat, Rational, SubAssign, sub_assign, sub_ratio_assign_op);
impl_assignop!(BigFloat, Rational, MulAssign, mul_assign, mul_ratio_assign_op);
impl_assignop!(BigFloat, Rational, DivAssign, div_assign, div_ratio_assign_op);

// Integer and rational left operands.

impl BigInt {
    fn add_float_op(&self, other: &BigFloat) -> BigFloat {
        other.add_int_op(self)
    }

    fn sub_float_op(&self, other: &BigFloat) -> BigFloat {
        other.sub_int_op(self).neg()
    }

    fn mul_float_op(&self, other: &BigFloat) -> BigFloat {
        other.mul_int_op(self)
    }

    fn div_float_op(&self, other: &BigFloat) -> BigFloat {
        unwrap_op(BigFloat::div(&BigFloat::exact_int(self), other, other.p, DEFAULT_RM))
    }
}

impl_binop!(BigInt, BigFloat, BigFloat, Add, add, add_float_op);
impl_binop!(BigInt, BigFloat, BigFloat, Sub, sub, sub_float_op);
impl_binop!(BigInt, BigFloat, BigFloat, Mul, mul, mul_float_op);
impl_binop!(BigInt, BigFloat, BigFloat, Div, div, div_float_op);

impl Rational {
    fn add_float_op(&self, other: &BigFloat) -> BigFloat {
        other.add_ratio_op(self)
    }

    fn sub_float_op(&self, other: &BigFloat) -> BigFloat {
        other.sub_ratio_op(self).neg()
    }

    fn mul_float_op(&self, other: &BigFloat) -> BigFloat {
        other.mul_ratio_op(self)
    }

    fn div_float_op(&self, other: &BigFloat) -> BigFloat {
        // n/d / x = n / (x*d)
        let (n, d) = self.parts();
        let xd = unwrap_op(BigFloat::mul(
            other,
            &BigFloat::exact_int(d),
            other.p + d.bit_len(),
            RoundingMode::None,
        ));
        unwrap_op(BigFloat::div(&BigFloat::exact_int(n), &xd, other.p, DEFAULT_RM))
    }
}

impl_binop!(Rational, BigFloat, BigFloat, Add, add, add_float_op);
impl_binop!(Rational, BigFloat, BigFloat, Sub, sub, sub_float_op);
impl_binop!(Rational, BigFloat, BigFloat, Mul, mul, mul_float_op);
impl_binop!(Rational, BigFloat, BigFloat, Div, div, div_float_op);

impl Neg for BigFloat {
    type Output = BigFloat;

    fn neg(mut self) -> BigFloat {
        self.inv_sign();
        self
    }
}

impl Neg for &BigFloat {
    type Output = BigFloat;

    fn neg(self) -> BigFloat {
        BigFloat::neg(self)
    }
}

impl PartialEq<BigInt> for BigFloat {
    fn eq(&self, other: &BigInt) -> bool {
        self.cmp_int(other) == Ordering::Equal
    }
}

impl PartialOrd<BigInt> for BigFloat {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp_int(other))
    }
}

impl PartialEq<BigFloat> for BigInt {
    fn eq(&self, other: &BigFloat) -> bool {
        other.cmp_int(self) == Ordering::Equal
    }
}

impl PartialOrd<BigFloat> for BigInt {
    fn partial_cmp(&self, other: &BigFloat) -> Option<Ordering> {
        Some(other.cmp_int(self).reverse())
    }
}

impl PartialEq<Rational> for BigFloat {
    fn eq(&self, other: &Rational) -> bool {
        self.cmp_rational(other) == Ordering::Equal
    }
}

impl PartialOrd<Rational> for BigFloat {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp_rational(other))
    }
}

impl PartialEq<BigFloat> for Rational {
    fn eq(&self, other: &BigFloat) -> bool {
        other.cmp_rational(self) == Ordering::Equal
    }
}

impl PartialOrd<BigFloat> for Rational {
    fn partial_cmp(&self, other: &BigFloat) -> Option<Ordering> {
        Some(other.cmp_rational(self).reverse())
    }
}

impl PartialEq<f64> for BigFloat {
    fn eq(&self, other: &f64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f64> for BigFloat {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if other.is_nan() {
            None
        } else if other.is_infinite() {
            Some(if *other > 0.0 { Ordering::Less } else { Ordering::Greater })
        } else {
            BigFloat::from_f64(*other, 53).ok().map(|f| self.cmp(&f))
        }
    }
}

impl_cmp_native!(BigFloat; i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl core::iter::Sum for BigFloat {
    fn sum<I: Iterator<Item = BigFloat>>(iter: I) -> Self {
        iter.fold(BigFloat::new(2), |acc, x| acc + x)
    }
}

impl core::iter::Product for BigFloat {
    fn product<I: Iterator<Item = BigFloat>>(iter: I) -> Self {
        iter.fold(BigFloat::from_int(&BigInt::from(1), 2, DEFAULT_RM), |acc, x| acc * x)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::DEFAULT_P;

    fn bf(f: f64, p: usize) -> BigFloat {
        BigFloat::from_f64(f, p).unwrap()
    }

    #[test]
    fn test_precision_propagation() {
        let a = bf(1.0, 128);
        let b = bf(3.0, 256);
        assert_eq!((&a + &b).precision(), 256);
        assert_eq!((&a - &b).precision(), 256);
        assert_eq!((&a * &b).precision(), 256);
        assert_eq!((&a / &b).precision(), 256);

        let mut c = a.clone();
        c /= &b;
        assert_eq!(c.precision(), 128);
        assert_eq!(c, BigFloat::div(&a, &b, 128, DEFAULT_RM).unwrap());
    }

    #[test]
    fn test_operators() {
        let one = bf(1.0, DEFAULT_P);
        let three = bf(3.0, DEFAULT_P);
        let q = &one / &three;
        assert_eq!(&q * &three, one);
        assert_eq!(-&one, bf(-1.0, 64));
        assert_eq!(one.clone() + three.clone() - bf(0.5, 8), bf(3.5, 8));

        let mut x = bf(2.0, 64);
        x += bf(1.0, 64);
        x *= &bf(4.0, 64);
        x -= bf(2.0, 64);
        assert_eq!(x, 10);

        let s: BigFloat = (1..=4).map(|v| bf(v as f64, 64)).sum();
        assert_eq!(s, 10);
        let p: BigFloat = (1..=4).map(|v| bf(v as f64, 64)).product();
        assert_eq!(p, 24);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_panics() {
        let _ = bf(1.0, 64) / BigFloat::new(64);
    }

    #[test]
    fn test_mixed() {
        let x = bf(1.5, 64);
        let i = BigInt::from(2);
        assert_eq!(&x + &i, bf(3.5, 64));
        assert_eq!(&i - &x, bf(0.5, 64));
        assert_eq!(&x * &i, 3);
        assert_eq!((&i / &x).precision(), 64);

        let r = Rational::new(BigInt::from(1), BigInt::from(3)).unwrap();
        let y = &x * &r;
        assert_eq!(y, bf(0.5, 64));
        assert_eq!(&x / &r, bf(4.5, 64));
        assert_eq!(&x + &r, BigFloat::from_rational(&Rational::new(BigInt::from(11), BigInt::from(6)).unwrap(), 64, DEFAULT_RM));
        assert_eq!(&r - &x, BigFloat::from_rational(&Rational::new(BigInt::from(-7), BigInt::from(6)).unwrap(), 64, DEFAULT_RM));
        assert_eq!(&r / &x, BigFloat::from_rational(&Rational::new(BigInt::from(2), BigInt::from(9)).unwrap(), 64, DEFAULT_RM));

        // 2^400 + 2^398 + 1/3 is just above the midpoint of 2^400 and 1.5 * 2^400 at 2 bits
        let x = bf(1.0, 2).mul_2exp(400).unwrap();
        let r = Rational::new((BigInt::from(3) << 398) + BigInt::from(1), BigInt::from(3)).unwrap();
        let above = bf(1.5, 2).mul_2exp(400).unwrap();
        assert_eq!(&x + &r, above);
        assert_eq!(&r + &x, above);
        assert_eq!(&x - &(-&r), above);
        assert_eq!(&x - &r, BigFloat::from_rational(&(Rational::try_from(&x).unwrap() - &r), 2, DEFAULT_RM));
        assert!((&x - &Rational::try_from(&x).unwrap()).is_zero());

        // a far smaller rational does not move a value rounded to nearest
        let tiny = Rational::new(BigInt::from(1), BigInt::from(3) << 500).unwrap();
        let y = bf(1.0, 8);
        assert_eq!(&y + &tiny, y);
        assert_eq!(&y - &tiny, y);

        let mut z = bf(1.0, 64);
        z += &i;
        z /= r.clone();
        assert_eq!(z, 9);
    }

    #[test]
    fn test_comparisons() {
        let x = bf(2.5, 64);
        assert!(x > BigInt::from(2));
        assert!(BigInt::from(3) > x);
        assert!(x == 2.5);
        assert!(x < 2.5000001);
        assert!(x > f64::NEG_INFINITY);
        assert!(x.partial_cmp(&f64::NAN).is_none());
        assert!(x > 2u8);
        assert!(-3i64 < x);

        let r = Rational::new(BigInt::from(5), BigInt::from(2)).unwrap();
        assert!(x == r);
        assert!(r == x);
        let third = Rational::new(BigInt::from(1), BigInt::from(3)).unwrap();
        let t = BigFloat::from_rational(&third, 64, DEFAULT_RM);
        assert!(t != third);
        assert!(BigFloat::from_rational(&third, 64, RoundingMode::Down) < third);
        assert!(third < BigFloat::from_rational(&third, 64, RoundingMode::Up));

        let huge = bf(1.0, 64).mul_2exp(crate::defs::EXPONENT_MAX as usize - 10).unwrap();
        let big_den = Rational::new(BigInt::from(1), BigInt::from(1) << 100).unwrap();
        assert!(huge > big_den);
    }
}
