// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedSequence`](crate::FixedSequence).
//!
//! - `IntoIter<T, N>` moves elements out by value and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - `&FixedSequence` and `&mut FixedSequence` iterate as slices over the
//!   logical prefix only.

// Crate imports
use crate::sequence::FixedSequence;

// Core imports
use core::{fmt, iter::FusedIterator, mem};

/// Owned iterator returned by `FixedSequence::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Each yielded slot is refilled with
/// `T::default()`.
pub struct IntoIter<T, const N: usize> {
    pub(crate) seq: FixedSequence<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        &self.seq.buf[self.front..self.back]
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T: Default, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(mem::take(&mut self.seq.buf[i]))
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            return None;
        }
        let i = self.front + n; // n < rem == back - front
        self.front = i + 1;
        Some(mem::take(&mut self.seq.buf[i]))
    }
}

impl<T: Default, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(mem::take(&mut self.seq.buf[self.back]))
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.back = self.front;
            return None;
        }
        self.back -= n + 1; // n < rem, so back stays >= front
        Some(mem::take(&mut self.seq.buf[self.back]))
    }
}
impl<T: Default, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T: Default, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a FixedSequence<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut FixedSequence<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T: Default, const N: usize> IntoIterator for FixedSequence<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len,
            seq: self,
        }
    }
}
