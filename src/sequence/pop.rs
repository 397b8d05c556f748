// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::FixedSequence};

// Core imports
use core::mem;

impl<T: Default, const N: usize> FixedSequence<T, N> {
    /// Removes the last element and returns it.
    ///
    /// Returns [`Error::Underflow`] if the sequence is empty. The vacated slot
    /// is refilled with `T::default()`. `O(1)`.
    ///
    /// A length above the capacity is reported as
    /// [`Error::InvariantViolation`] and the length is left as found.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, Error> {
        self.check_len()?;
        if self.len == 0 {
            return Err(Error::Underflow);
        }
        self.len -= 1;
        Ok(mem::take(&mut self.buf[self.len]))
    }

    /// Removes the first element and returns it, shifting the remaining
    /// elements one slot left.
    ///
    /// Returns [`Error::Underflow`] if the sequence is empty.
    ///
    /// This is `O(len)`: it can be costly for large sequences.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, Error> {
        self.check_len()?;
        if self.len == 0 {
            return Err(Error::Underflow);
        }
        let len = self.len;
        let out = mem::take(&mut self.buf[0]);

        // Shift left: [1..len) -> [0..len-1); the emptied slot ends at len-1.
        self.buf[..len].rotate_left(1);

        self.len = len - 1;
        Ok(out)
    }
}
