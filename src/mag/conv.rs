//! Conversion between magnitudes and digits in a radix.

use crate::common::buf::WordBuf;
use crate::common::util::digits_per_word;
use crate::defs::Error;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;
use crate::mag::Magnitude;

impl Magnitude {
    /// Digits of the value in radix `rdx` (2..=36), most significant first.
    /// Zero has no digits.
    pub fn to_radix_digits(&self, rdx: u32) -> Vec<u8> {
        let mut ret = Vec::new();
        if self.is_zero() {
            return ret;
        }

        if rdx.is_power_of_two() {
            let bits = rdx.trailing_zeros() as usize;
            let n = (self.bit_len() + bits - 1) / bits;
            ret.reserve(n);
            for i in (0..n).rev() {
                ret.push(self.extract_bits(i * bits, bits) as u8);
            }
        } else {
            let (k, big) = digits_per_word(rdx);

            let mut chunks = Vec::new();
            let mut x = self.clone();
            while !x.is_zero() {
                let (q, r) = x.div_rem_word(big);
                chunks.push(r);
                x = q;
            }

            ret.reserve(chunks.len() * k);
            let mut buf = vec![0u8; k];
            for (i, mut c) in chunks.into_iter().rev().enumerate() {
                for d in buf.iter_mut().rev() {
                    *d = (c % rdx as Word) as u8;
                    c /= rdx as Word;
                }
                if i == 0 {
                    let lz = buf.iter().take_while(|&&d| d == 0).count();
                    ret.extend_from_slice(&buf[lz..]);
                } else {
                    ret.extend_from_slice(&buf);
                }
            }
        }

        ret
    }

    /// Value from digits in radix `rdx` (2..=36), most significant first.
    /// Every digit must be less than `rdx`. Fails with `MemoryAllocation` when the
    /// buffer for the digits can not be allocated.
    pub fn from_radix_digits(digits: &[u8], rdx: u32) -> Result<Self, Error> {
        if rdx.is_power_of_two() {
            let bits = rdx.trailing_zeros() as usize;
            let mut m = WordBuf::try_new((digits.len() * bits + WORD_BIT_SIZE - 1) / WORD_BIT_SIZE)?;
            for (i, &d) in digits.iter().rev().enumerate() {
                let pos = i * bits;
                let idx = pos / WORD_BIT_SIZE;
                let shift = pos % WORD_BIT_SIZE;
                m[idx] |= (d as Word) << shift;
                if shift + bits > WORD_BIT_SIZE {
                    m[idx + 1] |= (d as Word) >> (WORD_BIT_SIZE - shift);
                }
            }
            Ok(Self::from_buf(m))
        } else {
            let (k, _) = digits_per_word(rdx);
            let mut ret = Self::zero();
            for chunk in digits.chunks(k) {
                let mut v: Word = 0;
                let mut mul: Word = 1;
                for &d in chunk {
                    v = v * rdx as Word + d as Word;
                    mul *= rdx as Word;
                }
                ret.mul_add_word(mul, v);
            }
            Ok(ret)
        }
    }

    // `n` bits starting from bit `pos`, n is less than the word size.
    fn extract_bits(&self, pos: usize, n: usize) -> Word {
        let m = self.digits();
        let idx = pos / WORD_BIT_SIZE;
        let shift = pos % WORD_BIT_SIZE;
        let mut v = m[idx] >> shift;
        if shift + n > WORD_BIT_SIZE && idx + 1 < m.len() {
            v |= m[idx + 1] << (WORD_BIT_SIZE - shift);
        }
        v & ((1 << n) - 1)
    }
}
