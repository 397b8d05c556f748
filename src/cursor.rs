// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional cursors over [`FixedSequence`](crate::FixedSequence).
//!
//! A cursor is an index into the owning sequence. It can sit anywhere in
//! `0..=len` (the end position is one past the last logical element) and
//! supports increment, dereference, equality and random-access arithmetic.
//!
//! A cursor borrows its sequence, so nothing can change the length while the
//! cursor is alive. Calling [`begin`](crate::FixedSequence::begin) again
//! always yields a fresh cursor.

// Crate imports
use crate::sequence::FixedSequence;

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr,
};

/// A read-only cursor into a [`FixedSequence`].
///
/// ```rust
/// use fixed_sequence::{fixed_seq, FixedSequence};
///
/// let seq: FixedSequence<i32, 4> = fixed_seq![10, 20, 30];
/// let mut cur = seq.begin();
/// assert_eq!(cur.get(), Some(&10));
/// cur += 2;
/// assert_eq!(cur.get(), Some(&30));
/// assert_eq!(seq.end() - seq.begin(), 3);
/// assert_eq!(cur + 1, seq.end());
/// ```
pub struct Cursor<'a, T, const N: usize> {
    seq: &'a FixedSequence<T, N>,
    pos: usize,
}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    pub(crate) fn new(seq: &'a FixedSequence<T, N>, pos: usize) -> Self {
        Self { seq, pos }
    }

    /// The slot index this cursor points at.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` once the cursor has reached (or passed) the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.seq.len()
    }

    /// The element under the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.seq.get(self.pos)
    }

    /// The logical elements from the cursor to the end.
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        self.seq.as_slice().get(self.pos..).unwrap_or(&[])
    }

    /// Moves one slot forward.
    #[inline]
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Moves one slot back, stopping at the first slot.
    #[inline]
    pub fn move_prev(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    fn same_sequence(&self, other: &Self) -> bool {
        ptr::eq(self.seq, other.seq)
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const N: usize> Copy for Cursor<'_, T, N> {}

impl<T, const N: usize> fmt::Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.seq.len())
            .finish()
    }
}

// Two cursors are equal when they point into the same sequence at the same slot.
impl<T, const N: usize> PartialEq for Cursor<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.same_sequence(other) && self.pos == other.pos
    }
}
impl<T, const N: usize> Eq for Cursor<'_, T, N> {}

impl<T, const N: usize> PartialOrd for Cursor<'_, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_sequence(other).then(|| self.pos.cmp(&other.pos))
    }
}

impl<T, const N: usize> Add<usize> for Cursor<'_, T, N> {
    type Output = Self;
    fn add(mut self, n: usize) -> Self {
        self += n;
        self
    }
}
impl<'a, T, const N: usize> Add<Cursor<'a, T, N>> for usize {
    type Output = Cursor<'a, T, N>;
    fn add(self, cursor: Cursor<'a, T, N>) -> Cursor<'a, T, N> {
        cursor + self
    }
}
/// Moving forward saturates at `usize::MAX`; every position past the
/// length is an end position.
impl<T, const N: usize> AddAssign<usize> for Cursor<'_, T, N> {
    fn add_assign(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }
}

/// Moving back saturates at the first slot.
impl<T, const N: usize> Sub<usize> for Cursor<'_, T, N> {
    type Output = Self;
    fn sub(mut self, n: usize) -> Self {
        self -= n;
        self
    }
}
impl<T, const N: usize> SubAssign<usize> for Cursor<'_, T, N> {
    fn sub_assign(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }
}

/// The signed distance between two cursors, in slots.
impl<T, const N: usize> Sub for Cursor<'_, T, N> {
    type Output = isize;
    #[allow(clippy::cast_possible_wrap)]
    fn sub(self, other: Self) -> isize {
        debug_assert!(
            self.same_sequence(&other),
            "cursor distance across different sequences"
        );
        // Exact whenever the true distance fits in isize.
        self.pos.wrapping_sub(other.pos) as isize
    }
}

/// A cursor that can mutate the element it points at.
///
/// ```rust
/// use fixed_sequence::{fixed_seq, FixedSequence};
///
/// let mut seq: FixedSequence<i32, 4> = fixed_seq![1, 2, 3];
/// let mut cur = seq.begin_mut();
/// while let Some(x) = cur.get_mut() {
///     *x *= 2;
///     cur.move_next();
/// }
/// assert_eq!(seq, [2, 4, 6]);
/// ```
pub struct CursorMut<'a, T, const N: usize> {
    seq: &'a mut FixedSequence<T, N>,
    pos: usize,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    pub(crate) fn new(seq: &'a mut FixedSequence<T, N>, pos: usize) -> Self {
        Self { seq, pos }
    }

    /// The slot index this cursor points at.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` once the cursor has reached (or passed) the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.seq.len()
    }

    /// The element under the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.seq.get(self.pos)
    }

    /// The element under the cursor mutably, or `None` at the end position.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.seq.get_mut(self.pos)
    }

    /// Moves one slot forward.
    #[inline]
    pub fn move_next(&mut self) {
        self.advance(1);
    }

    /// Moves one slot back, stopping at the first slot.
    #[inline]
    pub fn move_prev(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Moves `n` slots forward, saturating at `usize::MAX`.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    /// Moves `n` slots back, stopping at the first slot.
    #[inline]
    pub fn retreat(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    /// Downgrades to a read-only cursor at the same position.
    #[inline]
    pub fn into_cursor(self) -> Cursor<'a, T, N> {
        Cursor::new(self.seq, self.pos)
    }
}

impl<T, const N: usize> fmt::Debug for CursorMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("pos", &self.pos)
            .field("len", &self.seq.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::FixedSequence;
    use alloc::vec::Vec;

    #[test]
    fn test_walk_begin_to_end() {
        let s: FixedSequence<i32, 5> = crate::fixed_seq![1, 2, 3];
        let mut cur = s.begin();
        let mut seen = Vec::new();
        while cur != s.end() {
            seen.push(*cur.get().unwrap());
            cur.move_next();
        }
        assert_eq!(seen, [1, 2, 3]);
        assert!(cur.is_end());
        assert_eq!(cur.get(), None);
    }

    #[test]
    fn test_empty_sequence_begin_equals_end() {
        let s: FixedSequence<i32, 2> = FixedSequence::new();
        assert_eq!(s.begin(), s.end());
        assert_eq!(s.end() - s.begin(), 0);
        assert!(s.begin().remaining().is_empty());
    }

    #[test]
    fn test_random_access_arithmetic() {
        let s: FixedSequence<i32, 6> = crate::fixed_seq![10, 20, 30, 40];
        let b = s.begin();
        let e = s.end();
        assert_eq!(e - b, 4);
        assert_eq!(b - e, -4);
        assert_eq!((b + 2).get(), Some(&30));
        assert_eq!((e - 1).get(), Some(&40));
        assert_eq!((b - 3).position(), 0);
        assert!(b < e);
        assert_eq!((b + 1).remaining(), &[20, 30, 40]);
        assert!((e + 5).remaining().is_empty());
    }

    #[test]
    fn test_cursors_of_different_sequences_never_compare_equal() {
        let a: FixedSequence<i32, 2> = crate::fixed_seq![1];
        let b: FixedSequence<i32, 2> = crate::fixed_seq![1];
        assert_ne!(a.begin(), b.begin());
        assert_eq!(a.begin().partial_cmp(&b.begin()), None);
    }

    #[test]
    fn test_cursor_is_restartable() {
        let s: FixedSequence<i32, 3> = crate::fixed_seq![1, 2];
        let mut first = s.begin();
        first.move_next();
        first.move_next();
        assert!(first.is_end());
        assert_eq!(s.begin().get(), Some(&1));
    }

    #[test]
    fn test_cursor_mut_edits_in_place() {
        let mut s: FixedSequence<i32, 4> = crate::fixed_seq![1, 2, 3];
        {
            let mut cur = s.begin_mut();
            cur.advance(2);
            *cur.get_mut().unwrap() = 30;
            cur.retreat(5);
            assert_eq!(cur.position(), 0);
            *cur.get_mut().unwrap() = 10;
            cur.move_next();
            cur.move_prev();
            assert_eq!(cur.get(), Some(&10));
            cur.advance(3);
            assert!(cur.is_end());
            assert_eq!(cur.get_mut(), None);
            let ro = cur.into_cursor();
            assert_eq!(ro.position(), 3);
        }
        assert_eq!(s, [10, 2, 30]);
    }

    #[test]
    fn test_offset_commutes_and_saturates() {
        let s: FixedSequence<i32, 4> = crate::fixed_seq![1, 2, 3];
        let b = s.begin();
        assert_eq!(2 + b, b + 2);
        assert_eq!((1 + b).get(), Some(&2));

        let far = s.end() + usize::MAX;
        assert_eq!(far.position(), usize::MAX);
        assert!(far.is_end());
        assert_eq!(far.get(), None);
        assert_eq!((usize::MAX + b).position(), usize::MAX);
    }

    #[test]
    fn test_cursor_mut_advance_saturates() {
        let mut s: FixedSequence<i32, 2> = crate::fixed_seq![1];
        let mut cur = s.begin_mut();
        cur.advance(usize::MAX);
        cur.move_next();
        assert_eq!(cur.position(), usize::MAX);
        assert!(cur.is_end());
        assert_eq!(cur.get_mut(), None);
    }
}
