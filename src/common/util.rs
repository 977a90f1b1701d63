//! Auxiliary functions.

use crate::defs::DoubleWord;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;

/// integer logarithm base 2 of a number.
pub fn log2_ceil(mut n: usize) -> usize {
    let mut ret = 0;
    let mut sticky = 0;
    while n > 1 {
        if n & 1 != 0 {
            sticky = 1;
        }
        ret += 1;
        n >>= 1;
    }
    ret + sticky
}

/// integer logarithm base 2 of a number.
pub fn log2_floor(mut n: usize) -> usize {
    let mut ret = 0;
    while n > 1 {
        ret += 1;
        n >>= 1;
    }
    ret
}

/// square root integer approximation.
pub fn sqrt_int(a: usize) -> usize {
    let a = a as u64;
    let mut x = a;
    for _ in 0..64 {
        if x == 0 {
            break;
        }
        let y = (a / x + x) >> 1;
        if y >= x {
            break;
        }
        x = y;
    }
    x as usize
}

#[inline(always)]
pub fn add_carry(a: Word, b: Word, c: Word, r: &mut Word) -> Word {
    let s = a as DoubleWord + b as DoubleWord + c as DoubleWord;
    *r = s as Word;
    (s >> WORD_BIT_SIZE) as Word
}

#[inline(always)]
pub fn sub_borrow(a: Word, b: Word, c: Word, r: &mut Word) -> Word {
    let (d1, o1) = a.overflowing_sub(b);
    let (d2, o2) = d1.overflowing_sub(c);
    *r = d2;
    (o1 | o2) as Word
}

/// Number of significant words in `m`.
#[inline]
pub fn significant_len(m: &[Word]) -> usize {
    m.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

/// Number of digits in radix `rdx` that always fit in a word, and radix to the power of that number.
pub fn digits_per_word(rdx: u32) -> (usize, Word) {
    let rdx = rdx as Word;
    let mut n = 1;
    let mut big = rdx;
    while let Some(v) = big.checked_mul(rdx) {
        big = v;
        n += 1;
    }
    (n, big)
}

/// Splits a finite `f64` into the sign, the integer mantissa, and the binary exponent:
/// `f = sign * m * 2^e`.
pub fn decompose_f64(f: f64) -> (Sign, u64, Exponent) {
    let bits = f.to_bits();
    let s = if bits >> 63 != 0 { Sign::Neg } else { Sign::Pos };
    let e = ((bits >> 52) & 0x7ff) as Exponent;
    let m = bits & ((1 << 52) - 1);
    if e == 0 {
        (s, m, -1074)
    } else {
        (s, m | (1 << 52), e - 1075)
    }
}

/// `m * 2^e` as `f64`, `m` must have at most 53 significant bits.
pub fn compose_f64(m: u64, e: Exponent) -> f64 {
    debug_assert!(m < (1 << 53));
    let mut f = m as f64;
    let mut e = e;
    while e > 0 {
        let k = e.min(1000);
        f *= 2f64.powi(k as i32);
        e -= k;
    }
    while e < 0 {
        let k = e.max(-1000);
        f *= 2f64.powi(k as i32);
        e -= k;
    }
    f
}

/// Character representing digit `d`.
pub fn digit_char(d: u8, upper: bool) -> char {
    let c = if d < 10 {
        b'0' + d
    } else if upper {
        b'A' + d - 10
    } else {
        b'a' + d - 10
    };
    c as char
}
