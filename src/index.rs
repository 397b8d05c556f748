// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedSequence`](crate::FixedSequence).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the logical prefix `[0..len)`.
//!
//! For a non-panicking lookup use [`FixedSequence::at`], which reports
//! [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) instead.

// Crate imports
use crate::sequence::FixedSequence;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

// One impl covers `usize` and every range form, exactly as for `[T]`.
impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for FixedSequence<T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for FixedSequence<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
