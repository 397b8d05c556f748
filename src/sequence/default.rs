// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::sequence::FixedSequence;

impl<T: Default, const N: usize> Default for FixedSequence<T, N> {
    fn default() -> Self {
        const { assert!(N > 0, "FixedSequence capacity cannot be 0") };
        Self {
            buf: core::array::from_fn(|_| T::default()),
            len: 0,
        }
    }
}
