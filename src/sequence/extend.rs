// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::FixedSequence};

impl<T: Clone, const N: usize> FixedSequence<T, N> {
    /// Appends clones of every element of `src` if they all fit; otherwise
    /// no-op and returns [`Error::CapacityExceeded`].
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        let len = self.len;
        if src.len() > N - len {
            return Err(Error::CapacityExceeded { capacity: N });
        }
        self.buf[len..len + src.len()].clone_from_slice(src);
        self.len = len + src.len();
        Ok(())
    }
}
