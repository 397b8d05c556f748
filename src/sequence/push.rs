// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::FixedSequence};

impl<T, const N: usize> FixedSequence<T, N> {
    /// Appends `value` at slot `len`.
    ///
    /// Returns [`Error::CapacityExceeded`] if the sequence is full; the
    /// sequence is left unchanged and `value` is dropped. `O(1)`.
    ///
    /// A length above the capacity is reported as
    /// [`Error::InvariantViolation`] before anything is written.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        self.check_len()?;
        if self.len == N {
            return Err(Error::CapacityExceeded { capacity: N });
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` at slot 0, shifting every live element one slot right.
    ///
    /// Returns [`Error::CapacityExceeded`] if the sequence is full; the
    /// sequence is left unchanged and `value` is dropped.
    ///
    /// This is `O(len)`: it can be costly for large sequences.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<(), Error> {
        self.check_len()?;
        if self.len == N {
            return Err(Error::CapacityExceeded { capacity: N });
        }
        let len = self.len;

        // Write into the first free slot, then rotate it to the front:
        // [0..len) -> [1..len+1)
        self.buf[len] = value;
        self.buf[..=len].rotate_right(1);

        self.len = len + 1;
        Ok(())
    }
}
