// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::sequence::FixedSequence;

impl<T, const N: usize> FixedSequence<T, N> {
    /// Returns a raw pointer to slot 0 of the backing block, for interop with
    /// block-oriented APIs.
    ///
    /// All `N` slots are initialized, but only the first `len` are logically
    /// meaningful. The pointer is valid while the sequence is neither moved
    /// nor mutated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to slot 0 of the backing block.
    ///
    /// Writing through the pointer does **not** update `len`: writes beyond
    /// `len` are not reflected in the logical contents.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns the full backing block, including slots beyond `len`.
    #[inline]
    pub const fn raw_storage(&self) -> &[T; N] {
        &self.buf
    }

    /// Returns the full backing block mutably, including slots beyond `len`.
    ///
    /// The logical length is unaffected by writes through this reference.
    #[inline]
    pub fn raw_storage_mut(&mut self) -> &mut [T; N] {
        &mut self.buf
    }
}
