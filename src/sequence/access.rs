// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::FixedSequence};

impl<T, const N: usize> FixedSequence<T, N> {
    /// Checked element access.
    ///
    /// - Returns [`Error::InvariantViolation`] if `len > N` is observed. This
    ///   is checked first so a corrupted sequence is never reported as an
    ///   ordinary bounds error.
    /// - Returns [`Error::IndexOutOfRange`] if the sequence is empty or
    ///   `pos >= len`.
    ///
    /// The returned reference is valid until the next mutation.
    #[inline]
    pub fn at(&self, pos: usize) -> Result<&T, Error> {
        self.check_index(pos)?;
        Ok(&self.buf[pos])
    }

    /// Checked mutable element access; see [`at`](FixedSequence::at).
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, Error> {
        self.check_index(pos)?;
        Ok(&mut self.buf[pos])
    }

    // Pushes and pops check this before touching the storage.
    pub(crate) fn check_len(&self) -> Result<(), Error> {
        if self.len > N {
            return Err(Error::InvariantViolation {
                len: self.len,
                capacity: N,
            });
        }
        Ok(())
    }

    pub(crate) fn check_index(&self, pos: usize) -> Result<(), Error> {
        self.check_len()?;
        if pos >= self.len {
            return Err(Error::IndexOutOfRange {
                index: pos,
                len: self.len,
            });
        }
        Ok(())
    }
}
