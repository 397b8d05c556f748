// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::FixedSequence};

impl<T, const N: usize> From<[T; N]> for FixedSequence<T, N> {
    /// Takes ownership of a full block; the length becomes `N`.
    ///
    /// An empty block is rejected at compile time:
    ///
    /// ```compile_fail
    /// use fixed_sequence::FixedSequence;
    ///
    /// let _seq: FixedSequence<u8, 0> = FixedSequence::from([0u8; 0]);
    /// ```
    fn from(buf: [T; N]) -> Self {
        const { assert!(N > 0, "FixedSequence capacity cannot be 0") };
        Self { buf, len: N }
    }
}

impl<T: Clone + Default, const N: usize> TryFrom<&[T]> for FixedSequence<T, N> {
    type Error = Error;

    /// Clones `src` into a new sequence, or returns
    /// [`Error::CapacityExceeded`] if `src.len() > N`.
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        let mut out = Self::default();
        out.extend_from_slice(src)?;
        Ok(out)
    }
}

impl<T: Default, const N: usize> FixedSequence<T, N> {
    /// Tries to construct from an iterator, erroring with
    /// [`Error::CapacityExceeded`] if it yields more than `N` items.
    ///
    /// - Elements are pushed in iterator order.
    /// - The iterator is left partially consumed on error; the elements pushed
    ///   before the overflow are dropped with the partial sequence.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut out = Self::default();
        for item in iter {
            out.push_back(item)?;
        }
        Ok(out)
    }
}
