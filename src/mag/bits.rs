//! Bitwise operations with two's complement semantics.

use crate::common::buf::WordBuf;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;
use crate::mag::Magnitude;

/// Bitwise operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    fn apply(&self, a: Word, b: Word) -> Word {
        match self {
            BitOp::And => a & b,
            BitOp::Or => a | b,
            BitOp::Xor => a ^ b,
        }
    }
}

// Two's complement representation of a signed value using `n` words.
fn to_twos(neg: bool, m: &Magnitude, n: usize) -> WordBuf {
    let mut buf = WordBuf::new(n);
    buf[..m.len()].copy_from_slice(m.digits());
    if neg {
        negate_words(&mut buf);
    }
    buf
}

// In place two's complement negation.
fn negate_words(buf: &mut [Word]) {
    let mut c = 1;
    for w in buf.iter_mut() {
        let (v, o) = (!*w).overflowing_add(c);
        *w = v;
        c = o as Word;
    }
}

impl Magnitude {
    /// Apply `op` to signed values (`neg1`, `self`) and (`neg2`, `other`) treated as
    /// infinite two's complement numbers. Returns the sign and the magnitude of the result.
    pub fn bitwise(&self, neg1: bool, other: &Self, neg2: bool, op: BitOp) -> (bool, Self) {
        let n = self.len().max(other.len()) + 1;
        let a = to_twos(neg1, self, n);
        let b = to_twos(neg2, other, n);

        let mut r = WordBuf::new(n);
        for ((x, &d1), &d2) in r.iter_mut().zip(a.iter()).zip(b.iter()) {
            *x = op.apply(d1, d2);
        }

        let neg = r[n - 1] >> (WORD_BIT_SIZE - 1) != 0;
        if neg {
            negate_words(&mut r);
        }

        (neg, Self::from_buf(r))
    }
}
