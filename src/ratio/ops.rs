//! Arithmetic operations and comparisons of rational numbers.

use crate::defs::Error;
use crate::int::BigInt;
use crate::ratio::Rational;
use core::cmp::Ordering;
use core::ops::Neg;
use core::ops::Shl;
use core::ops::ShlAssign;
use core::ops::Shr;
use core::ops::ShrAssign;

impl Rational {
    fn from_raw_parts(n: BigInt, d: BigInt) -> Self {
        let mut ret = Rational { n, d };
        ret.canonicalize();
        ret
    }

    fn add_signed(&self, other: &Self, neg: bool) -> Self {
        let n2 = if neg { -&other.n } else { other.n.clone() };

        if self.d == other.d {
            return Self::from_raw_parts(&self.n + &n2, self.d.clone());
        }

        if self.is_int() {
            return Rational {
                n: &self.n * &other.d + n2,
                d: other.d.clone(),
            };
        }

        if other.is_int() {
            return Rational {
                n: &self.n + &n2 * &self.d,
                d: self.d.clone(),
            };
        }

        Self::from_raw_parts(&self.n * &other.d + n2 * &self.d, &self.d * &other.d)
    }

    fn add_op(&self, other: &Self) -> Self {
        self.add_signed(other, false)
    }

    fn sub_op(&self, other: &Self) -> Self {
        self.add_signed(other, true)
    }

    fn mul_op(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Rational::default();
        }

        // cross-reduce before multiplying: both operands are already canonical
        let g1 = self.n.gcd(&other.d);
        let g2 = other.n.gcd(&self.d);
        Rational {
            n: (&self.n / &g1) * (&other.n / &g2),
            d: (&self.d / &g2) * (&other.d / &g1),
        }
    }

    /// Divides `self` by `other`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, Error> {
        Ok(self.mul_op(&other.recip()?))
    }

    fn div_op(&self, other: &Self) -> Self {
        match self.checked_div(other) {
            Ok(v) => v,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }

    fn add_assign_op(&mut self, other: &Self) {
        *self = self.add_op(other);
    }

    fn sub_assign_op(&mut self, other: &Self) {
        *self = self.sub_op(other);
    }

    fn mul_assign_op(&mut self, other: &Self) {
        *self = self.mul_op(other);
    }

    fn div_assign_op(&mut self, other: &Self) {
        *self = self.div_op(other);
    }

    fn add_int_op(&self, other: &BigInt) -> Self {
        Rational {
            n: &self.n + other * &self.d,
            d: self.d.clone(),
        }
    }

    fn sub_int_op(&self, other: &BigInt) -> Self {
        Rational {
            n: &self.n - other * &self.d,
            d: self.d.clone(),
        }
    }

    fn mul_int_op(&self, other: &BigInt) -> Self {
        self.mul_op(&Rational::from_int(other.clone()))
    }

    fn div_int_op(&self, other: &BigInt) -> Self {
        self.div_op(&Rational::from_int(other.clone()))
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

    /// Multiplies the value by `2^n`.
    pub fn mul_2exp(&self, n: usize) -> Self {
        let t = self.d.trailing_zeros().unwrap_or(0).min(n);
        Rational {
            n: self.n.shl_bits(n - t),
            d: self.d.shr_bits(t),
        }
    }

    /// Divides the value by `2^n`.
    pub fn div_2exp(&self, n: usize) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        let t = self.n.abs().trailing_zeros().unwrap_or(0).min(n);
        let mut num = self.n.abs().shr_bits(t);
        if self.is_negative() {
            num.inv_sign();
        }
        Rational {
            n: num,
            d: self.d.shl_bits(n - t),
        }
    }

    /// Raises the value to an integer power.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the value is zero and `e` is negative.
    pub fn pow(&self, e: i32) -> Result<Self, Error> {
        let base = if e < 0 { self.recip()? } else { self.clone() };
        let k = e.unsigned_abs();
        Ok(Rational {
            n: base.n.pow(k),
            d: base.d.pow(k),
        })
    }
}

impl_binop!(Rational, Rational, Rational, Add, add, add_op);
impl_binop!(Rational, Rational, Rational, Sub, sub, sub_op);
impl_binop!(Rational, Rational, Rational, Mul, mul, mul_op);
impl_binop!(Rational, Rational, Rational, Div, div, div_op);

impl_assignop!(Rational, Rational, AddAssign, add_assign, add_assign_op);
impl_assignop!(Rational, Rational, SubAssign, sub_assign, sub_assign_op);
impl_assignop!(Rational, Rational, MulAssign, mul_assign, mul_assign_op);
impl_assignop!(Rational, Rational, DivAssign, div_assign, div_assign_op);

impl_binop!(Rational, BigInt, Rational, Add, add, add_int_op);
impl_binop!(Rational, BigInt, Rational, Sub, sub, sub_int_op);
impl_binop!(Rational, BigInt, Rational, Mul, mul, mul_int_op);
impl_binop!(Rational, BigInt, Rational, Div, div, div_int_op);

impl_assignop!(Rational, BigInt, AddAssign, add_assign, add_int_assign_op);
impl_assignop!(Rational, BigInt, SubAssign, sub_assign, sub_int_assign_op);
impl_assignop!(Rational, BigInt, MulAssign, mul_assign, mul_int_assign_op);
impl_assignop!(Rational, BigInt, DivAssign, div_assign, div_int_assign_op);

impl BigInt {
    fn add_ratio_op(&self, other: &Rational) -> Rational {
        other.add_int_op(self)
    }

    fn sub_ratio_op(&self, other: &Rational) -> Rational {
        -other.sub_int_op(self)
    }

    fn mul_ratio_op(&self, other: &Rational) -> Rational {
        other.mul_int_op(self)
    }

    fn div_ratio_op(&self, other: &Rational) -> Rational {
        Rational::from_int(self.clone()).div_op(other)
    }
}

impl_binop!(BigInt, Rational, Rational, Add, add, add_ratio_op);
impl_binop!(BigInt, Rational, Rational, Sub, sub, sub_ratio_op);
impl_binop!(BigInt, Rational, Rational, Mul, mul, mul_ratio_op);
impl_binop!(BigInt, Rational, Rational, Div, div, div_ratio_op);

impl Neg for Rational {
    type Output = Rational;
    fn neg(mut self) -> Rational {
        self.inv_sign();
        self
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        let mut ret = self.clone();
        ret.inv_sign();
        ret
    }
}

impl Shl<usize> for Rational {
    type Output = Rational;
    fn shl(self, n: usize) -> Rational {
        self.mul_2exp(n)
    }
}

impl Shl<usize> for &Rational {
    type Output = Rational;
    fn shl(self, n: usize) -> Rational {
        self.mul_2exp(n)
    }
}

impl Shr<usize> for Rational {
    type Output = Rational;
    fn shr(self, n: usize) -> Rational {
        self.div_2exp(n)
    }
}

impl Shr<usize> for &Rational {
    type Output = Rational;
    fn shr(self, n: usize) -> Rational {
        self.div_2exp(n)
    }
}

impl ShlAssign<usize> for Rational {
    fn shl_assign(&mut self, n: usize) {
        *self = self.mul_2exp(n);
    }
}

impl ShrAssign<usize> for Rational {
    fn shr_assign(&mut self, n: usize) {
        *self = self.div_2exp(n);
    }
}

impl core::iter::Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::default(), |a, b| a + b)
    }
}

impl core::iter::Product for Rational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::from(1), |a, b| a * b)
    }
}

impl PartialEq<BigInt> for Rational {
    fn eq(&self, other: &BigInt) -> bool {
        self.is_int() && self.n == *other
    }
}

impl PartialEq<Rational> for BigInt {
    fn eq(&self, other: &Rational) -> bool {
        other == self
    }
}

impl PartialOrd<BigInt> for Rational {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp_int(other))
    }
}

impl PartialOrd<Rational> for BigInt {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(other.cmp_int(self).reverse())
    }
}

impl_cmp_native!(Rational; i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl PartialEq<f64> for Rational {
    fn eq(&self, other: &f64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f64> for Rational {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if other.is_nan() {
            None
        } else if other.is_infinite() {
            Some(if *other > 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            })
        } else {
            Rational::try_from(*other).ok().map(|f| self.cmp(&f))
        }
    }
}
