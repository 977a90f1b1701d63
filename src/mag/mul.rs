//! Multiplication.

use crate::common::buf::WordBuf;
use crate::defs::DoubleWord;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;
use crate::mag::Magnitude;

/// Operands shorter than this number of words are multiplied with the schoolbook method.
pub(super) const TOOM2_THRESHOLD: usize = 32;

impl Magnitude {
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut m3 = WordBuf::new(self.len() + other.len());
        Self::mul_unbalanced(self.digits(), other.digits(), &mut m3);
        Self::from_buf(m3)
    }

    pub fn sqr(&self) -> Self {
        self.mul(self)
    }

    /// m3 = m1 * m2, m3 must be zeroed and at least m1.len() + m2.len() words long.
    pub(super) fn mul_unbalanced(m1: &[Word], m2: &[Word], m3: &mut [Word]) {
        let (long, short) = if m1.len() >= m2.len() { (m1, m2) } else { (m2, m1) };

        if short.len() < TOOM2_THRESHOLD {
            Self::mul_basecase(long, short, m3);
        } else if long.len() < short.len() * 2 {
            Self::toom2(long, short, m3);
        } else {
            // multiply by chunks of the longer operand
            let mut buf = WordBuf::new(short.len() * 2);
            for (i, chunk) in long.chunks(short.len()).enumerate() {
                buf.fill(0);
                let l = chunk.len() + short.len();
                Self::mul_unbalanced(chunk, short, &mut buf[..l]);
                Self::add_assign_slices(&mut m3[i * short.len()..], &buf[..l]);
            }
        }
    }

    pub(super) fn mul_basecase(m1: &[Word], m2: &[Word], m3: &mut [Word]) {
        for (i, &d1) in m2.iter().enumerate() {
            if d1 == 0 {
                continue;
            }

            let mut c: DoubleWord = 0;
            for (&d2, d3) in m1.iter().zip(m3[i..].iter_mut()) {
                let v = d1 as DoubleWord * d2 as DoubleWord + *d3 as DoubleWord + c;
                *d3 = v as Word;
                c = v >> WORD_BIT_SIZE;
            }
            m3[i + m1.len()] = c as Word;
        }
    }
}
