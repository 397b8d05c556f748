// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Degraded-checking API for [`FixedSequence`](crate::FixedSequence).
//!
//! Some targets cannot propagate errors from container operations at all.
//! [`Degraded`] is a parallel API for them: it performs the same operations
//! as the checked API but replaces every capacity, emptiness and bounds error
//! with a silent fallback:
//!
//! | Operation | On error |
//! |---|---|
//! | `push_back` / `push_front` at capacity | no-op, the value is dropped |
//! | `pop_back` / `pop_front` on empty | returns a clone of slot 0, sequence unchanged |
//! | `get` / `get_mut` out of range | returns slot 0 |
//!
//! Slot 0 always exists (the capacity is non-zero), but its value may be
//! stale or `T::default()`. **The fallback value carries no meaning**; this
//! mode trades correctness for never failing.
//!
//! A length larger than the capacity is not an input error and is never
//! swallowed: it panics in this mode too.
//!
//! With the `tracing` feature, every swallowed error emits a
//! `tracing::warn!` event.

// Crate imports
use crate::{error::Error, sequence::FixedSequence, trace::swallowed};

// Core imports
use core::fmt;

/// An explicitly opted-in view of a [`FixedSequence`] whose operations never
/// return errors.
///
/// Obtained with [`FixedSequence::degraded`]. See the [module
/// documentation](crate::degraded) for the exact fallback contract.
///
/// ```rust
/// use fixed_sequence::{fixed_seq, FixedSequence};
///
/// let mut seq: FixedSequence<u8, 2> = fixed_seq![7];
/// let mut d = seq.degraded();
/// d.push_back(8);
/// d.push_back(9); // full: silently ignored
/// assert_eq!(d.pop_front(), 7);
/// assert_eq!(*d.get(5), 8); // out of range: slot 0
/// assert_eq!(seq, [8]);
/// ```
pub struct Degraded<'a, T, const N: usize> {
    seq: &'a mut FixedSequence<T, N>,
}

impl<T, const N: usize> FixedSequence<T, N> {
    /// Borrows this sequence through the degraded-checking API.
    #[inline]
    pub fn degraded(&mut self) -> Degraded<'_, T, N> {
        Degraded { seq: self }
    }
}

impl<T, const N: usize> Degraded<'_, T, N> {
    /// Appends `value`, or drops it if the sequence is full.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.seq.push_back(value) {
            swallow("push_back", err);
        }
    }

    /// Prepends `value`, or drops it if the sequence is full.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        if let Err(err) = self.seq.push_front(value) {
            swallow("push_front", err);
        }
    }

    /// The element at `pos`, or slot 0 if `pos` is out of range.
    #[inline]
    pub fn get(&self, pos: usize) -> &T {
        match self.seq.check_index(pos) {
            Ok(()) => &self.seq.buf[pos],
            Err(err) => {
                swallow("get", err);
                &self.seq.buf[0]
            }
        }
    }

    /// The element at `pos` mutably, or slot 0 if `pos` is out of range.
    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> &mut T {
        match self.seq.check_index(pos) {
            Ok(()) => &mut self.seq.buf[pos],
            Err(err) => {
                swallow("get_mut", err);
                &mut self.seq.buf[0]
            }
        }
    }

    /// The underlying sequence, for the checked API.
    #[inline]
    pub fn as_checked(&mut self) -> &mut FixedSequence<T, N> {
        &mut *self.seq
    }
}

impl<T: Clone + Default, const N: usize> Degraded<'_, T, N> {
    /// Removes and returns the last element, or a clone of slot 0 if the
    /// sequence is empty.
    #[inline]
    pub fn pop_back(&mut self) -> T {
        self.seq.pop_back().unwrap_or_else(|err| {
            swallow("pop_back", err);
            self.seq.buf[0].clone()
        })
    }

    /// Removes and returns the first element, or a clone of slot 0 if the
    /// sequence is empty.
    #[inline]
    pub fn pop_front(&mut self) -> T {
        self.seq.pop_front().unwrap_or_else(|err| {
            swallow("pop_front", err);
            self.seq.buf[0].clone()
        })
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Degraded<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Degraded").field(&self.seq).finish()
    }
}

// An invariant fault is never downgraded to a fallback value.
#[track_caller]
fn swallow(operation: &'static str, err: Error) {
    if !err.is_usage_error() {
        panic!("{operation}: {err}");
    }
    swallowed!(operation, err);
}
