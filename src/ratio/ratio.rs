//! Rational number as a canonical pair of integers.

use crate::defs::Error;
use crate::int::BigInt;
use core::cmp::Ordering;

/// Rational number `n/d`.
///
/// The value is always kept in canonical form: the numerator and the denominator are coprime,
/// and the denominator is positive. Zero is `0/1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    pub(super) n: BigInt,
    pub(super) d: BigInt,
}

impl Rational {
    /// Creates the number `n/d` in canonical form.
    ///
    /// ## Errors
    ///
    ///  - Domain: `d` is zero.
    pub fn new(n: BigInt, d: BigInt) -> Result<Self, Error> {
        let mut ret = Self::new_raw(n, d)?;
        ret.canonicalize();
        Ok(ret)
    }

    /// Creates the number `n/d` without reducing it. Call [`Rational::canonicalize`] before using
    /// a value which may be not in canonical form in arithmetic operations.
    ///
    /// ## Errors
    ///
    ///  - Domain: `d` is zero.
    pub fn new_raw(n: BigInt, d: BigInt) -> Result<Self, Error> {
        if d.is_zero() {
            return Err(Error::Domain("zero denominator"));
        }
        Ok(Rational { n, d })
    }

    /// The number `n/1`.
    pub fn from_int(n: BigInt) -> Self {
        Rational {
            n,
            d: BigInt::from(1),
        }
    }

    /// Creates a number from parts which are known to be canonical.
    pub(crate) fn from_parts(n: BigInt, d: BigInt) -> Self {
        debug_assert!(d.is_positive());
        Rational { n, d }
    }

    pub(crate) fn parts(&self) -> (&BigInt, &BigInt) {
        (&self.n, &self.d)
    }

    /// Removes common factors of the numerator and the denominator and makes the
    /// denominator positive. Canonical values are not changed.
    pub fn canonicalize(&mut self) {
        if self.n.is_zero() {
            self.d = BigInt::from(1);
            return;
        }

        let g = self.n.gcd(&self.d);
        if g != 1 {
            self.n = &self.n / &g;
            self.d = &self.d / &g;
        }

        if self.d.is_negative() {
            self.n.inv_sign();
            self.d.inv_sign();
        }
    }

    /// Returns a copy of the numerator.
    pub fn numer(&self) -> BigInt {
        self.n.clone()
    }

    /// Returns a copy of the denominator.
    pub fn denom(&self) -> BigInt {
        self.d.clone()
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.n.is_zero()
    }

    /// Returns true if the denominator is 1.
    pub fn is_int(&self) -> bool {
        self.d == 1
    }

    /// Returns true if the value is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.n.is_positive()
    }

    /// Returns true if the value is less than zero.
    pub fn is_negative(&self) -> bool {
        self.n.is_negative()
    }

    /// Returns -1, 0 or 1 depending on the sign of the value.
    pub fn signum(&self) -> i32 {
        self.n.signum()
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Rational {
            n: self.n.abs(),
            d: self.d.clone(),
        }
    }

    /// Changes the sign in place.
    pub fn inv_sign(&mut self) {
        self.n.inv_sign();
    }

    /// Returns `1/self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the value is zero.
    pub fn recip(&self) -> Result<Self, Error> {
        if self.n.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (mut n, mut d) = (self.d.clone(), self.n.clone());
        if d.is_negative() {
            n.inv_sign();
            d.inv_sign();
        }
        Ok(Rational { n, d })
    }

    /// Largest integer not greater than the value.
    pub fn floor(&self) -> BigInt {
        match self.n.div_floor(&self.d) {
            Ok(q) => q,
            Err(_) => unreachable!("denominator is never zero"),
        }
    }

    /// Smallest integer not less than the value.
    pub fn ceil(&self) -> BigInt {
        -(-self).floor()
    }

    /// Integer part of the value.
    pub fn trunc(&self) -> BigInt {
        &self.n / &self.d
    }

    /// Fractional part: `self - self.trunc()`.
    pub fn fract(&self) -> Self {
        Rational {
            n: &self.n % &self.d,
            d: self.d.clone(),
        }
        .reduced()
    }

    fn reduced(mut self) -> Self {
        self.canonicalize();
        self
    }

    /// Exchanges the values of `self` and `other` without copying their digits.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Compares the value with an integer.
    pub fn cmp_int(&self, other: &BigInt) -> Ordering {
        self.n.cmp(&(other * &self.d))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::from_int(BigInt::new())
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.d == other.d {
            return self.n.cmp(&other.n);
        }

        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => (&self.n * &other.d).cmp(&(&other.n * &self.d)),
            o => o,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn test_canonical() {
        let a = q(4, 8);
        assert_eq!(a.numer(), BigInt::from(1));
        assert_eq!(a.denom(), BigInt::from(2));

        let b = q(6, -4);
        assert_eq!(b.numer(), BigInt::from(-3));
        assert_eq!(b.denom(), BigInt::from(2));

        let z = q(0, -5);
        assert_eq!(z.denom(), BigInt::from(1));
        assert_eq!(z, Rational::default());

        assert_eq!(
            Rational::new(BigInt::from(1), BigInt::new()),
            Err(Error::Domain("zero denominator"))
        );
        assert!(Rational::new_raw(BigInt::from(1), BigInt::new()).is_err());

        let mut r = Rational::new_raw(BigInt::from(10), BigInt::from(-15)).unwrap();
        assert_eq!(r.denom(), BigInt::from(-15));
        r.canonicalize();
        assert_eq!(r, q(-2, 3));
        let before = r.clone();
        r.canonicalize();
        assert_eq!(r, before);
    }

    #[test]
    fn test_functions() {
        assert_eq!(q(-7, 2).floor(), BigInt::from(-4));
        assert_eq!(q(-7, 2).ceil(), BigInt::from(-3));
        assert_eq!(q(-7, 2).trunc(), BigInt::from(-3));
        assert_eq!(q(7, 2).floor(), BigInt::from(3));
        assert_eq!(q(7, 2).ceil(), BigInt::from(4));
        assert_eq!(q(6, 2).ceil(), BigInt::from(3));
        assert_eq!(q(-7, 2).fract(), q(-1, 2));
        assert_eq!(q(-2, 3).recip().unwrap(), q(-3, 2));
        assert_eq!(Rational::default().recip(), Err(Error::DivisionByZero));
        assert_eq!(q(-2, 3).abs(), q(2, 3));
        assert_eq!(q(-2, 3).signum(), -1);
        assert!(q(4, 2).is_int());
    }

    #[test]
    fn test_ordering() {
        let vals = [q(-3, 2), q(-1, 3), q(0, 1), q(1, 3), q(1, 2), q(5, 3)];
        for (i, a) in vals.iter().enumerate() {
            for (j, b) in vals.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j));
            }
        }
        assert_eq!(q(5, 2).cmp_int(&BigInt::from(2)), Ordering::Greater);
        assert_eq!(q(-5, 2).cmp_int(&BigInt::from(-2)), Ordering::Less);
        assert_eq!(q(4, 2).cmp_int(&BigInt::from(2)), Ordering::Equal);
    }
}
