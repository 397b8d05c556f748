// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::sequence::FixedSequence;

impl<T: Default, const N: usize> FixedSequence<T, N> {
    /// Constructs an empty sequence with every slot set to `T::default()`.
    ///
    /// The capacity must be non-zero; a zero-capacity sequence does not build:
    ///
    /// ```compile_fail
    /// use fixed_sequence::FixedSequence;
    ///
    /// let _seq = FixedSequence::<u8, 0>::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a sequence from a list of `M` initial elements.
    ///
    /// The length becomes `M` and the slots `[M, N)` are left at
    /// `T::default()`. `M <= N` is checked at compile time:
    ///
    /// ```compile_fail
    /// use fixed_sequence::FixedSequence;
    ///
    /// let _seq: FixedSequence<u8, 2> = FixedSequence::from_array([1, 2, 3]);
    /// ```
    ///
    /// The [`fixed_seq!`](crate::fixed_seq) macro is shorthand for this.
    #[inline]
    pub fn from_array<const M: usize>(items: [T; M]) -> Self {
        const { assert!(M <= N, "initializer list is longer than the capacity") };
        let mut out = Self::default();
        for (slot, item) in out.buf.iter_mut().zip(items) {
            *slot = item;
        }
        out.len = M;
        out
    }
}

impl<T: Copy, const N: usize> FixedSequence<T, N> {
    /// Constructs an empty sequence with the backing block filled with `fill`.
    ///
    /// Note: the initial **length** is `0`. The filled values are never part
    /// of the logical sequence until overwritten by a push.
    ///
    /// ```compile_fail
    /// use fixed_sequence::FixedSequence;
    ///
    /// let _seq = FixedSequence::<u8, 0>::new_with(0);
    /// ```
    #[inline]
    pub const fn new_with(fill: T) -> Self {
        const { assert!(N > 0, "FixedSequence capacity cannot be 0") };
        Self {
            buf: [fill; N],
            len: 0,
        }
    }
}
