//! Buffer for holding the words of a magnitude.

use crate::defs::Error;
use crate::defs::Word;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

const STATIC_ALLOCATION: usize = 4;

/// Buffer for holding the words of a magnitude, least significant word first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordBuf {
    inner: SmallVec<[Word; STATIC_ALLOCATION]>,
}

impl WordBuf {
    /// New buffer of `sz` zero words.
    #[inline]
    pub fn new(sz: usize) -> Self {
        WordBuf {
            inner: SmallVec::from_elem(0, sz),
        }
    }

    /// New buffer of `sz` zero words. Allocation failure is reported instead of aborting.
    pub fn try_new(sz: usize) -> Result<Self, Error> {
        let mut inner = SmallVec::new();
        inner.try_reserve_exact(sz)?;
        inner.resize(sz, 0);
        Ok(WordBuf { inner })
    }

    #[inline]
    pub fn from_slice(s: &[Word]) -> Self {
        WordBuf {
            inner: SmallVec::from_slice(s),
        }
    }

    #[inline]
    pub fn fill(&mut self, d: Word) {
        self.inner.fill(d);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn push(&mut self, d: Word) {
        self.inner.push(d);
    }

    #[inline]
    pub fn resize(&mut self, sz: usize) {
        self.inner.resize(sz, 0);
    }

    #[inline]
    pub fn truncate(&mut self, sz: usize) {
        self.inner.truncate(sz);
    }

    /// Remove most significant words containing zeroes.
    pub fn trunc_leading_zeroes(&mut self) {
        while let Some(&0) = self.inner.last() {
            self.inner.pop();
        }
    }
}

impl<I: SliceIndex<[Word]>> IndexMut<I> for WordBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Word]>> Index<I> for WordBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for WordBuf {
    type Target = [Word];

    #[inline]
    fn deref(&self) -> &[Word] {
        self.inner.deref()
    }
}

impl DerefMut for WordBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Word] {
        self.inner.deref_mut()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_word_buf() {
        let mut b = WordBuf::new(3);
        assert_eq!(&b[..], &[0, 0, 0]);
        b[0] = 7;
        b.trunc_leading_zeroes();
        assert_eq!(b.len(), 1);
        b.push(0);
        b.push(5);
        assert_eq!(&b[..], &[7, 0, 5]);

        let b = WordBuf::try_new(10).unwrap();
        assert!(b.iter().all(|&w| w == 0));
        assert!(WordBuf::try_new(usize::MAX / 4).is_err());
    }
}
