//! Conversion of floating point numbers to strings of digits.

use crate::common::consts::TEN;
use crate::common::util::digit_char;
use crate::common::util::log2_ceil;
use crate::defs::Exponent;
use crate::defs::Radix;
use crate::float::BigFloat;
use crate::mag::Magnitude;
use core::cmp::Ordering;

/// log10(2) * 2^64 rounded down.
const LOG10_2_FRAC: i128 = 0x4d104d427de7fbcc;

/// Number of attempts to find the exponent of the leading digit.
const EXPONENT_ADJUST_MAX: usize = 4;

/// Number of digits in radix `rdx` sufficient to represent a number with precision `p`.
pub(crate) fn default_digits(p: usize, rdx: Radix) -> usize {
    match rdx {
        Radix::Dec => ((p as u128 * LOG10_2_FRAC as u128) >> 64) as usize + 2,
        _ => {
            let k = rdx.value().trailing_zeros() as usize;
            (p + 2 * k - 2) / k
        }
    }
}

// Rounds m * 2^s to an integer, ties to even.
fn round_shifted(m: &Magnitude, s: Exponent) -> Magnitude {
    if s >= 0 {
        return m.shl(s as usize);
    }

    let t = s.unsigned_abs() as usize;
    let q = m.shr(t);
    let half = m.test_bit(t - 1);
    let lower = m.low_bits_nonzero(t - 1);
    if half && (lower || q.is_odd()) {
        q.add_word(1)
    } else {
        q
    }
}

// Rounds a / b to an integer, ties to even.
fn round_div(a: &Magnitude, b: &Magnitude) -> Magnitude {
    let (q, r) = a.div_rem(b);
    match r.shl(1).cmp(b) {
        Ordering::Greater => q.add_word(1),
        Ordering::Equal if q.is_odd() => q.add_word(1),
        _ => q,
    }
}

impl BigFloat {
    /// Converts the value to `n` significant digits in radix `rdx` rounded to the nearest, ties to even.
    /// Returns the digits, preceded by `-` for negative values, and the exponent `x` such that
    /// the value equals `0.d1d2...dn * rdx^x`. If `n` is 0, the number of digits sufficient
    /// to represent the precision of the value is used. Zero is represented by `n` zeros and exponent 0.
    pub fn to_string_radix(&self, rdx: Radix, n: usize) -> (String, Exponent) {
        let (digits, x) = self.to_digits(rdx, n);
        let mut ret = String::with_capacity(digits.len() + 1);
        if self.is_negative() {
            ret.push('-');
        }
        ret.extend(digits.into_iter().map(|d| digit_char(d, false)));
        (ret, x)
    }

    /// Digits of the absolute value and the exponent, see [`BigFloat::to_string_radix`].
    pub(crate) fn to_digits(&self, rdx: Radix, n: usize) -> (Vec<u8>, Exponent) {
        let n = if n == 0 { default_digits(self.precision(), rdx) } else { n };

        if self.is_zero() {
            return (vec![0; n], 0);
        }

        let (q, x) = match rdx {
            Radix::Dec => self.decimal_digits(n),
            _ => self.binary_digits(rdx, n),
        };

        let mut d = q.to_radix_digits(rdx.value());
        d.resize(n, 0);

        (d, x)
    }

    /// Digits of |self| * rdx^frac rounded to an integer, ties to even. Zero has no digits.
    pub(crate) fn to_fixed_digits(&self, rdx: Radix, frac: usize) -> Vec<u8> {
        if self.is_zero() {
            return Vec::new();
        }

        let (_, m, lsb) = self.parts();
        let q = match rdx {
            Radix::Dec => self.scaled_decimal(m, lsb, frac as Exponent, frac),
            _ => {
                let k = rdx.value().trailing_zeros() as Exponent;
                round_shifted(m, lsb + k * frac as Exponent)
            }
        };

        q.to_radix_digits(rdx.value())
    }

    // Digits in a radix which is a power of 2 are taken directly from the mantissa.
    fn binary_digits(&self, rdx: Radix, n: usize) -> (Magnitude, Exponent) {
        let k = rdx.value().trailing_zeros() as Exponent;
        let (_, m, lsb) = self.parts();
        let mut x = (self.exponent() - 1).div_euclid(k) + 1;

        let mut q = round_shifted(m, lsb + k * (n as Exponent - x));
        if q.bit_len() > k as usize * n {
            // carry to the next digit
            x += 1;
            q = round_shifted(m, lsb + k * (n as Exponent - x));
        }

        (q, x)
    }

    fn decimal_digits(&self, n: usize) -> (Magnitude, Exponent) {
        let (_, m, lsb) = self.parts();
        let mut x = (((self.exponent() - 1) as i128 * LOG10_2_FRAC) >> 64) as Exponent + 1;

        let upper = TEN.pow(n as u64);
        let lower = TEN.pow(n as u64 - 1);

        let mut q = Magnitude::zero();
        for _ in 0..EXPONENT_ADJUST_MAX {
            q = self.scaled_decimal(m, lsb, n as Exponent - x, n);
            if q >= upper {
                x += 1;
            } else if q < lower {
                x -= 1;
            } else {
                break;
            }
        }

        (q, x)
    }

    // Rounds |self| * 10^k to an integer.
    fn scaled_decimal(&self, m: &Magnitude, lsb: Exponent, k: Exponent, n: usize) -> Magnitude {
        let cost = k.unsigned_abs() * 4 + lsb.unsigned_abs();
        let limit = 4 * (self.precision() + 4 * n) as u64 + 4096;

        if cost <= limit {
            let p10 = TEN.pow(k.unsigned_abs());
            let (mut a, mut b) = if k >= 0 {
                (m.mul(&p10), Magnitude::from_word(1))
            } else {
                (m.clone(), p10)
            };

            if lsb >= 0 {
                a = a.shl(lsb as usize);
            } else {
                b = b.shl(lsb.unsigned_abs() as usize);
            }

            round_div(&a, &b)
        } else {
            self.scaled_decimal_approx(k, n)
        }
    }

    // The scaling factor is too large to be computed exactly: 10^k is split into 5^k * 2^k,
    // 5^k is approximated with enough bits to get all n digits, and 2^k goes to the exponent.
    // The last digit may differ from the exact rounding.
    fn scaled_decimal_approx(&self, k: Exponent, n: usize) -> Magnitude {
        let wp = n * 4 + log2_ceil(k.unsigned_abs() as usize + 1) + 64;
        let (_, m, lsb) = self.parts();
        let (f, fs) = pow5_approx(k.unsigned_abs(), wp);

        if k >= 0 {
            round_shifted(&m.mul(&f), lsb + fs + k)
        } else {
            let t = f.bit_len() + wp;
            let (q, _) = m.shl(t).div_rem(&f);
            round_shifted(&q, lsb + k - fs - t as Exponent)
        }
    }
}

// Truncates m * 2^s to at most wp significant bits.
fn truncate(m: Magnitude, s: Exponent, wp: usize) -> (Magnitude, Exponent) {
    let b = m.bit_len();
    if b > wp {
        (m.shr(b - wp), s + (b - wp) as Exponent)
    } else {
        (m, s)
    }
}

// 5^e as f * 2^s with f truncated to wp bits at every step.
fn pow5_approx(mut e: u64, wp: usize) -> (Magnitude, Exponent) {
    let mut acc = (Magnitude::from_word(1), 0);
    let mut base = (Magnitude::from_word(5), 0);
    while e > 0 {
        if e & 1 == 1 {
            acc = truncate(acc.0.mul(&base.0), acc.1 + base.1, wp);
        }
        e >>= 1;
        if e > 0 {
            base = truncate(base.0.mul(&base.0), 2 * base.1, wp);
        }
    }
    acc
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;

    fn bf(f: f64) -> BigFloat {
        BigFloat::from_f64(f, 64).unwrap()
    }

    #[test]
    fn test_decimal() {
        assert_eq!(bf(1234.5).to_string_radix(Radix::Dec, 6), ("123450".to_owned(), 4));
        assert_eq!(bf(1234.5).to_string_radix(Radix::Dec, 4), ("1234".to_owned(), 4));
        assert_eq!(bf(1235.5).to_string_radix(Radix::Dec, 4), ("1236".to_owned(), 4));
        assert_eq!(bf(-0.00125).to_string_radix(Radix::Dec, 3), ("-125".to_owned(), -2));
        assert_eq!(bf(9.99).to_string_radix(Radix::Dec, 2), ("10".to_owned(), 2));
        assert_eq!(bf(1.0).to_string_radix(Radix::Dec, 1), ("1".to_owned(), 1));
        assert_eq!(bf(0.1).to_string_radix(Radix::Dec, 5), ("10000".to_owned(), 0));
        assert_eq!(bf(1e300).to_string_radix(Radix::Dec, 3), ("100".to_owned(), 301));
        assert_eq!(bf(1e-300).to_string_radix(Radix::Dec, 3), ("100".to_owned(), -299));
        assert_eq!(BigFloat::new(64).to_string_radix(Radix::Dec, 3), ("000".to_owned(), 0));

        let third = BigFloat::from(1).div(&BigFloat::from(3), 512, RoundingMode::ToEven).unwrap();
        let (s, e) = third.to_string_radix(Radix::Dec, 0);
        assert_eq!(s.len(), 156);
        assert!(s.starts_with("333333333"));
        assert_eq!(e, 0);
    }

    #[test]
    fn test_binary_radix() {
        assert_eq!(bf(10.0).to_string_radix(Radix::Bin, 0), ("1010".to_owned() + &"0".repeat(60), 4));
        assert_eq!(bf(255.0).to_string_radix(Radix::Hex, 2), ("ff".to_owned(), 2));
        assert_eq!(bf(255.5).to_string_radix(Radix::Hex, 2), ("10".to_owned(), 3));
        assert_eq!(bf(0.5).to_string_radix(Radix::Hex, 1), ("8".to_owned(), 0));
        assert_eq!(bf(1.0 / 64.0).to_string_radix(Radix::Oct, 1), ("1".to_owned(), -1));
        assert_eq!(bf(-8.0).to_string_radix(Radix::Oct, 3), ("-100".to_owned(), 2));
        assert_eq!(default_digits(64, Radix::Hex), 17);
        assert_eq!(default_digits(64, Radix::Bin), 64);
    }

    #[test]
    fn test_huge_exponent() {
        let x = BigFloat::from(1).mul_2exp(1 << 40).unwrap();
        let (s, e) = x.to_string_radix(Radix::Dec, 10);
        assert_eq!(s.len(), 10);
        // 2^(2^40) = 10^(2^40 * log10(2))
        assert_eq!(e, 330_985_980_542);

        let (s, e) = x.to_string_radix(Radix::Hex, 3);
        assert_eq!(s, "100");
        assert_eq!(e, (1 << 38) + 1);
    }

    #[test]
    fn test_exponent_range_ends() {
        let one = BigFloat::from(1);

        // 2^-(2^60-8) = 0.43723852131... * 10^-347063955532709818
        let tiny = one.div_2exp((1 << 60) - 8);
        assert!(!tiny.is_zero());
        let (s, e) = tiny.to_string_radix(Radix::Dec, 10);
        assert_eq!((s.as_str(), e), ("4372385213", -347_063_955_532_709_818));
        let (s, e) = tiny.neg().to_string_radix(Radix::Dec, 4);
        assert_eq!((s.as_str(), e), ("-4372", -347_063_955_532_709_818));

        // 2^(2^60-1) = 0.29274639300... * 10^347063955532709821
        let huge = one.mul_2exp((1 << 60) - 1).unwrap();
        let (s, e) = huge.to_string_radix(Radix::Dec, 10);
        assert_eq!((s.as_str(), e), ("2927463930", 347_063_955_532_709_821));

        let (f, fs) = pow5_approx(3, 8);
        assert_eq!((f.low_u64(), fs), (125, 0));
        let (f, fs) = pow5_approx(4, 8);
        assert_eq!((f.low_u64(), fs), (156, 2));
    }
}
