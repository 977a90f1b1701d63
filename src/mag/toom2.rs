//! Karatsuba multiplication.

use crate::common::buf::WordBuf;
use crate::common::util::significant_len;
use crate::defs::Word;
use crate::mag::Magnitude;

impl Magnitude {
    /// m3 = m1 * m2 for operands of similar length, m3 must be zeroed.
    pub(super) fn toom2(m1: &[Word], m2: &[Word], m3: &mut [Word]) {
        let n = m1.len().min(m2.len()) >> 1;

        let (m11, m12) = m1.split_at(n);
        let (m21, m22) = m2.split_at(n);

        // z0 = m11 * m21, z2 = m12 * m22
        let mut z0 = WordBuf::new(n * 2);
        Self::mul_unbalanced(m11, m21, &mut z0);

        let mut z2 = WordBuf::new(m12.len() + m22.len());
        Self::mul_unbalanced(m12, m22, &mut z2);

        // z1 = (m11 + m12) * (m21 + m22) - z0 - z2
        let mut x1 = WordBuf::new(m12.len() + 1);
        Self::add_slices(m11, m12, &mut x1);
        let mut x2 = WordBuf::new(m22.len() + 1);
        Self::add_slices(m21, m22, &mut x2);

        let l1 = significant_len(&x1);
        let l2 = significant_len(&x2);
        let mut z1 = WordBuf::new(l1 + l2);
        Self::mul_unbalanced(&x1[..l1], &x2[..l2], &mut z1);
        Self::sub_assign_slices(&mut z1, &z0);
        Self::sub_assign_slices(&mut z1, &z2);

        let l = significant_len(&z0);
        Self::add_assign_slices(m3, &z0[..l]);
        let l = significant_len(&z1);
        Self::add_assign_slices(&mut m3[n..], &z1[..l]);
        let l = significant_len(&z2);
        Self::add_assign_slices(&mut m3[n * 2..], &z2[..l]);
    }
}
