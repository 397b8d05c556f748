// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::sequence::FixedSequence;

impl<T, const N: usize> FixedSequence<T, N> {
    /// Reverses the logical elements in place.
    ///
    /// Swaps slot `i` with slot `len - 1 - i` for `i` in `0..len / 2`; the
    /// middle element of an odd length is never touched and slots beyond
    /// `len` are left alone.
    #[inline]
    pub fn reverse(&mut self) {
        let len = self.len;
        for i in 0..len / 2 {
            self.buf.swap(i, len - 1 - i);
        }
    }
}
