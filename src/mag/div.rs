//! Division.

use crate::common::buf::WordBuf;
use crate::common::util::add_carry;
use crate::defs::DoubleWord;
use crate::defs::Word;
use crate::defs::WORD_BASE;
use crate::defs::WORD_BIT_SIZE;
use crate::mag::Magnitude;
use core::cmp::Ordering;

impl Magnitude {
    /// Divide by a word, return quotient and remainder. `d` must not be zero.
    pub fn div_rem_word(&self, d: Word) -> (Self, Word) {
        debug_assert!(d != 0);

        let mut q = WordBuf::new(self.len());
        let mut r: DoubleWord = 0;
        let d = d as DoubleWord;

        for (x, &w) in q.iter_mut().zip(self.digits().iter()).rev() {
            let v = (r << WORD_BIT_SIZE) | w as DoubleWord;
            *x = (v / d) as Word;
            r = v % d;
        }

        (Self::from_buf(q), r as Word)
    }

    /// Divide `self` by `other`, return quotient and remainder. `other` must not be zero.
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        debug_assert!(!other.is_zero());

        if self.cmp(other) == Ordering::Less {
            return (Self::zero(), self.clone());
        }

        if other.len() == 1 {
            let (q, r) = self.div_rem_word(other.digits()[0]);
            return (q, Self::from_word(r));
        }

        let (q, r) = Self::div_knuth(self.digits(), other.digits());
        (Self::from_buf(q), Self::from_buf(r))
    }

    // Knuth's algorithm D. m2 has at least two words, m1 is not less than m2.
    fn div_knuth(m1: &[Word], m2: &[Word]) -> (WordBuf, WordBuf) {
        let n = m2.len();
        let m = m1.len() - n;
        let shift = m2[n - 1].leading_zeros() as usize;

        // normalize so that the most significant bit of the divisor is set
        let mut vn = WordBuf::new(n);
        let mut un = WordBuf::new(m1.len() + 1);
        Self::shl_slice(m2, shift, &mut vn);
        Self::shl_slice(m1, shift, &mut un);

        let mut q = WordBuf::new(m + 1);
        let vtop = vn[n - 1] as DoubleWord;
        let vnext = vn[n - 2] as DoubleWord;

        for j in (0..=m).rev() {
            let num = ((un[j + n] as DoubleWord) << WORD_BIT_SIZE) | un[j + n - 1] as DoubleWord;
            let mut qhat = num / vtop;
            let mut rhat = num % vtop;

            while qhat >= WORD_BASE
                || qhat * vnext > ((rhat << WORD_BIT_SIZE) | un[j + n - 2] as DoubleWord)
            {
                qhat -= 1;
                rhat += vtop;
                if rhat >= WORD_BASE {
                    break;
                }
            }

            // un[j..j+n+1] -= qhat * vn
            let mut carry: DoubleWord = 0;
            let mut borrow: Word = 0;
            for (u, &v) in un[j..j + n].iter_mut().zip(vn.iter()) {
                let p = qhat * v as DoubleWord + carry;
                carry = p >> WORD_BIT_SIZE;
                let (d1, o1) = u.overflowing_sub(p as Word);
                let (d2, o2) = d1.overflowing_sub(borrow);
                *u = d2;
                borrow = (o1 | o2) as Word;
            }
            let (d1, o1) = un[j + n].overflowing_sub(carry as Word);
            let (d2, o2) = d1.overflowing_sub(borrow);
            un[j + n] = d2;

            if o1 | o2 {
                // qhat was one too large, add the divisor back
                qhat -= 1;
                let mut c = 0;
                for (u, &v) in un[j..j + n].iter_mut().zip(vn.iter()) {
                    c = add_carry(*u, v, c, u);
                }
                un[j + n] = un[j + n].wrapping_add(c);
            }

            q[j] = qhat as Word;
        }

        // denormalize the remainder
        let mut r = WordBuf::new(n);
        for (i, x) in r.iter_mut().enumerate() {
            *x = if shift > 0 {
                (un[i] >> shift) | (un[i + 1] << (WORD_BIT_SIZE - shift))
            } else {
                un[i]
            };
        }

        (q, r)
    }

    // dst = src << shift, shift is less than the word size, dst is at least as long as src.
    fn shl_slice(src: &[Word], shift: usize, dst: &mut [Word]) {
        if shift == 0 {
            dst[..src.len()].copy_from_slice(src);
            return;
        }
        let mut prev = 0;
        for (d, &s) in dst.iter_mut().zip(src.iter()) {
            *d = (s << shift) | prev;
            prev = s >> (WORD_BIT_SIZE - shift);
        }
        if dst.len() > src.len() {
            dst[src.len()] = prev;
        }
    }

    /// Exact division by `other`. The remainder is expected to be zero.
    pub fn div_exact(&self, other: &Self) -> Self {
        let (q, r) = self.div_rem(other);
        debug_assert!(r.is_zero());
        q
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    fn random_mag(n: usize) -> Magnitude {
        let w: Vec<Word> = (0..n).map(|_| random::<Word>()).collect();
        Magnitude::from_words(&w)
    }

    #[test]
    fn test_div_word() {
        let a = Magnitude::from_u128(1_000_000_000_000_000_000_000_007);
        let (q, r) = a.div_rem_word(10);
        assert_eq!(q.low_u128(), 100_000_000_000_000_000_000_000);
        assert_eq!(r, 7);
    }

    #[test]
    fn test_div_rem() {
        for (l1, l2) in [(2, 2), (5, 2), (10, 3), (40, 17), (80, 79), (3, 5)] {
            for _ in 0..20 {
                let a = random_mag(l1);
                let b = random_mag(l2);
                if b.is_zero() {
                    continue;
                }
                let (q, r) = a.div_rem(&b);
                assert!(r < b);
                assert_eq!(q.mul(&b).add(&r), a);
            }
        }
    }

    #[test]
    fn test_div_edge() {
        // qhat correction paths
        let b = Magnitude::from_words(&[0, 1 << 63]);
        let a = Magnitude::from_words(&[Word::MAX, Word::MAX, (1 << 63) - 1]);
        let (q, r) = a.div_rem(&b);
        assert_eq!(q.mul(&b).add(&r), a);
        assert!(r < b);

        let b = Magnitude::from_words(&[Word::MAX, Word::MAX]);
        let a = Magnitude::from_words(&[0, 0, 0, Word::MAX]);
        let (q, r) = a.div_rem(&b);
        assert_eq!(q.mul(&b).add(&r), a);
        assert!(r < b);
    }
}
