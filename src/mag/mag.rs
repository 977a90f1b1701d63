//! Magnitude is a non-negative integer of arbitrary size.

use crate::common::buf::WordBuf;
use crate::common::util::add_carry;
use crate::common::util::significant_len;
use crate::common::util::sub_borrow;
use crate::defs::DoubleWord;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;
use core::cmp::Ordering;
use itertools::izip;

/// Non-negative integer stored as words, least significant word first.
/// The most significant word is never zero; zero has no words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Magnitude {
    m: WordBuf,
}

impl Magnitude {
    /// Zero value.
    pub fn zero() -> Self {
        Magnitude { m: WordBuf::new(0) }
    }

    /// Value consisting of one word.
    pub fn from_word(d: Word) -> Self {
        let mut m = WordBuf::new(0);
        if d != 0 {
            m.push(d);
        }
        Magnitude { m }
    }

    pub fn from_u128(d: u128) -> Self {
        Self::from_words(&[d as Word, (d >> WORD_BIT_SIZE) as Word])
    }

    /// Value from words, least significant first. Leading zero words are dropped.
    pub fn from_words(w: &[Word]) -> Self {
        let n = significant_len(w);
        Magnitude {
            m: WordBuf::from_slice(&w[..n]),
        }
    }

    /// Takes ownership of the buffer and normalizes it.
    pub fn from_buf(mut m: WordBuf) -> Self {
        m.trunc_leading_zeroes();
        Magnitude { m }
    }

    /// 2 to the power of `n`.
    pub fn pow2(n: usize) -> Self {
        let mut m = WordBuf::new(n / WORD_BIT_SIZE + 1);
        m[n / WORD_BIT_SIZE] = 1 << (n % WORD_BIT_SIZE);
        Magnitude { m }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.is_empty()
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.m.len()
    }

    #[inline]
    pub fn digits(&self) -> &[Word] {
        &self.m
    }

    /// Number of significant bits.
    pub fn bit_len(&self) -> usize {
        match self.m.last() {
            Some(&top) => self.m.len() * WORD_BIT_SIZE - top.leading_zeros() as usize,
            None => 0,
        }
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.m.first().map_or(false, |&w| w & 1 != 0)
    }

    /// Returns true if bit `i` is set.
    pub fn test_bit(&self, i: usize) -> bool {
        let idx = i / WORD_BIT_SIZE;
        idx < self.m.len() && (self.m[idx] >> (i % WORD_BIT_SIZE)) & 1 != 0
    }

    /// Returns true if any of the `n` least significant bits is set.
    pub fn low_bits_nonzero(&self, n: usize) -> bool {
        let idx = n / WORD_BIT_SIZE;
        let shift = n % WORD_BIT_SIZE;
        if self.m[..idx.min(self.m.len())].iter().any(|&w| w != 0) {
            return true;
        }
        idx < self.m.len() && shift > 0 && self.m[idx] << (WORD_BIT_SIZE - shift) != 0
    }

    /// Position of the least significant set bit.
    pub fn trailing_zeros(&self) -> Option<usize> {
        self.m
            .iter()
            .position(|&w| w != 0)
            .map(|i| i * WORD_BIT_SIZE + self.m[i].trailing_zeros() as usize)
    }

    /// The least significant 64 bits.
    pub fn low_u64(&self) -> u64 {
        self.m.first().copied().unwrap_or(0)
    }

    /// The least significant 128 bits.
    pub fn low_u128(&self) -> u128 {
        let lo = self.low_u64() as u128;
        let hi = self.m.get(1).copied().unwrap_or(0) as u128;
        (hi << WORD_BIT_SIZE) | lo
    }

    /// Returns the value as u64 if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.m.len() {
            0 => Some(0),
            1 => Some(self.m[0]),
            _ => None,
        }
    }

    /// Returns the value as u128 if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.m.len() <= 2 {
            Some(self.low_u128())
        } else {
            None
        }
    }

    pub fn cmp_slices(a: &[Word], b: &[Word]) -> Ordering {
        a.len()
            .cmp(&b.len())
            .then_with(|| a.iter().rev().cmp(b.iter().rev()))
    }

    // s3 is supposed to be at least one word longer than the longest of s1 and s2.
    pub(super) fn add_slices(s1: &[Word], s2: &[Word], s3: &mut [Word]) {
        let (long, short) = if s1.len() >= s2.len() { (s1, s2) } else { (s2, s1) };
        let mut c = 0;
        let mut iter3 = s3.iter_mut();
        let mut iter_long = long.iter();

        for (a, b, x) in izip!(short.iter(), iter_long.by_ref(), iter3.by_ref()) {
            c = add_carry(*a, *b, c, x);
        }

        for (a, x) in iter_long.zip(iter3.by_ref()) {
            c = add_carry(*a, 0, c, x);
        }

        for x in iter3 {
            *x = c;
            c = 0;
        }
    }

    /// s1 += s2, s1 must be able to hold the result.
    pub(super) fn add_assign_slices(s1: &mut [Word], s2: &[Word]) {
        let mut c = 0;
        let mut iter1 = s1.iter_mut();

        for (b, a) in s2.iter().zip(iter1.by_ref()) {
            c = add_carry(*a, *b, c, a);
        }

        for a in iter1 {
            if c == 0 {
                break;
            }
            c = add_carry(*a, 0, c, a);
        }

        debug_assert!(c == 0);
    }

    /// s1 -= s2, s1 must not be less than s2.
    pub(super) fn sub_assign_slices(s1: &mut [Word], s2: &[Word]) {
        let mut c = 0;
        let mut iter1 = s1.iter_mut();

        for (b, a) in s2.iter().zip(iter1.by_ref()) {
            c = sub_borrow(*a, *b, c, a);
        }

        for a in iter1 {
            if c == 0 {
                break;
            }
            c = sub_borrow(*a, 0, c, a);
        }

        debug_assert!(c == 0);
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut m = WordBuf::new(self.len().max(other.len()) + 1);
        Self::add_slices(&self.m, &other.m, &mut m);
        Self::from_buf(m)
    }

    /// Subtract `other` from `self`. `self` must not be less than `other`.
    pub fn sub(&self, other: &Self) -> Self {
        debug_assert!(self.cmp(other) != Ordering::Less);
        let mut m = self.m.clone();
        Self::sub_assign_slices(&mut m, &other.m);
        Self::from_buf(m)
    }

    /// Absolute difference of `self` and `other`, and the ordering of `self` relative to `other`.
    pub fn abs_diff(&self, other: &Self) -> (Self, Ordering) {
        match self.cmp(other) {
            Ordering::Less => (other.sub(self), Ordering::Less),
            Ordering::Equal => (Self::zero(), Ordering::Equal),
            Ordering::Greater => (self.sub(other), Ordering::Greater),
        }
    }

    pub fn add_word(&self, d: Word) -> Self {
        let mut m = WordBuf::new(self.len() + 1);
        m[..self.len()].copy_from_slice(&self.m);
        Self::add_assign_slices(&mut m, &[d]);
        Self::from_buf(m)
    }

    /// Subtract a word. `self` must not be less than `d`.
    pub fn sub_word(&self, d: Word) -> Self {
        let mut m = self.m.clone();
        Self::sub_assign_slices(&mut m, &[d]);
        Self::from_buf(m)
    }

    /// self = self * k + d
    pub fn mul_add_word(&mut self, k: Word, d: Word) {
        let mut c = d as DoubleWord;
        for w in self.m.iter_mut() {
            let v = *w as DoubleWord * k as DoubleWord + c;
            *w = v as Word;
            c = v >> WORD_BIT_SIZE;
        }
        if c > 0 {
            self.m.push(c as Word);
        }
        self.m.trunc_leading_zeroes();
    }

    pub fn mul_word(&self, k: Word) -> Self {
        let mut ret = self.clone();
        ret.mul_add_word(k, 0);
        ret
    }

    /// Shift left by `n` bits.
    pub fn shl(&self, n: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let idx = n / WORD_BIT_SIZE;
        let shift = n % WORD_BIT_SIZE;
        let mut m = WordBuf::new(self.len() + idx + 1);

        if shift == 0 {
            m[idx..idx + self.len()].copy_from_slice(&self.m);
        } else {
            let mut prev = 0;
            for (i, &w) in self.m.iter().enumerate() {
                m[idx + i] = (w << shift) | prev;
                prev = w >> (WORD_BIT_SIZE - shift);
            }
            m[idx + self.len()] = prev;
        }

        Self::from_buf(m)
    }

    /// Shift right by `n` bits. Shifted out bits are lost.
    pub fn shr(&self, n: usize) -> Self {
        let idx = n / WORD_BIT_SIZE;
        if idx >= self.len() {
            return Self::zero();
        }

        let shift = n % WORD_BIT_SIZE;
        let src = &self.m[idx..];
        let mut m = WordBuf::new(src.len());

        if shift == 0 {
            m.copy_from_slice(src);
        } else {
            for (i, x) in m.iter_mut().enumerate() {
                let hi = src.get(i + 1).map_or(0, |&w| w << (WORD_BIT_SIZE - shift));
                *x = (src[i] >> shift) | hi;
            }
        }

        Self::from_buf(m)
    }

    /// Keep only the `n` least significant bits.
    pub fn low_bits(&self, n: usize) -> Self {
        let idx = n / WORD_BIT_SIZE;
        if idx >= self.len() {
            return self.clone();
        }
        let mut m = WordBuf::from_slice(&self.m[..idx + 1]);
        let shift = n % WORD_BIT_SIZE;
        m[idx] &= (1 << shift) - 1;
        Self::from_buf(m)
    }

    /// Set bit `i`.
    pub fn set_bit(&mut self, i: usize) {
        let idx = i / WORD_BIT_SIZE;
        if idx >= self.m.len() {
            self.m.resize(idx + 1);
        }
        self.m[idx] |= 1 << (i % WORD_BIT_SIZE);
    }

    /// `self` to the power of `e`.
    pub fn pow(&self, mut e: u64) -> Self {
        let mut ret = Self::from_word(1);
        let mut base = self.clone();
        while e > 0 {
            if e & 1 != 0 {
                ret = ret.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }
        ret
    }

    /// Greatest common divisor.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            if let Some(d) = b.to_u64() {
                let r = a.div_rem_word(d).1;
                return Self::from_word(gcd_word(d, r));
            }
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r;
        }
        a
    }

    /// Split the value into (self >> n, self mod 2^n).
    pub fn split_bits(&self, n: usize) -> (Self, Self) {
        (self.shr(n), self.low_bits(n))
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::cmp_slices(&self.m, &other.m)
    }
}

fn gcd_word(mut a: Word, mut b: Word) -> Word {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
