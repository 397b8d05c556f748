// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedSequence` type and its inherent API.
//!
//! `FixedSequence<T, N>` is a fixed-capacity sequence that stores its elements
//! inline in a `[T; N]` backing block and tracks a logical length. It mirrors
//! `Vec`/`VecDeque` semantics at both ends, with explicit capacity and
//! emptiness checks reported through [`Error`].
//!
//! No heap allocations are performed.

mod access;
mod default;
mod extend;
mod from;
mod new;
mod pop;
mod push;
mod raw;
mod reverse;
mod slice;

// Crate imports
use crate::cursor::{Cursor, CursorMut};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A fixed-capacity, inline sequence with checked operations at both ends.
///
/// `FixedSequence<T, N>` stores its elements inline in a `[T; N]` block and
/// tracks a logical length `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`) and must be non-zero;
/// - the block is stored inline (on the stack or inside the owning struct);
/// - only the prefix `[0, len)` is part of the logical sequence; the slots
///   `[len, N)` hold stale or `T::default()` values;
/// - no heap allocations are performed.
///
/// # Invariants
///
/// `len <= N` always holds for a sequence built and mutated through this API.
/// [`at`](FixedSequence::at) still checks it and reports
/// [`Error::InvariantViolation`](crate::Error::InvariantViolation) rather than
/// confusing a corrupted length with an ordinary bounds error.
///
/// # Complexity
///
/// - [`push_back`](FixedSequence::push_back) and
///   [`pop_back`](FixedSequence::pop_back) are `O(1)`.
/// - [`push_front`](FixedSequence::push_front) and
///   [`pop_front`](FixedSequence::pop_front) shift every live element by one
///   slot and are `O(len)`. Prefer the back end for large sequences.
/// - Moving or cloning a `FixedSequence<T, N>` moves or clones the whole
///   backing block, which is `O(N)` in the capacity, not in `len`.
///
/// # Element bounds
///
/// - The type itself places no bound on `T`.
/// - Constructors that fill the block ([`new`](FixedSequence::new),
///   [`Default`], [`from_array`](FixedSequence::from_array)) and the pop
///   operations require `T: Default`: a popped slot is refilled with
///   `T::default()` so ownership of the element can move out.
/// - For `T: Copy` without `Default`, use [`new_with`](FixedSequence::new_with).
///
/// # Examples
///
/// ```rust
/// use fixed_sequence::{Error, FixedSequence};
///
/// let mut seq: FixedSequence<u8, 3> = FixedSequence::new();
/// seq.push_back(1).unwrap();
/// seq.push_back(2).unwrap();
/// seq.push_front(0).unwrap();
/// assert_eq!(seq, [0, 1, 2]);
/// assert_eq!(seq.push_back(3), Err(Error::CapacityExceeded { capacity: 3 }));
///
/// assert_eq!(seq.pop_front(), Ok(0));
/// seq.reverse();
/// assert_eq!(seq.as_slice(), &[2, 1]);
/// ```
pub struct FixedSequence<T, const N: usize> {
    pub(crate) buf: [T; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> FixedSequence<T, N> {
    /// The fixed capacity of this sequence.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this sequence (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Sets `len = 0` without touching the stored values.
    ///
    /// The old elements stay in the backing block (see
    /// [`raw_storage`](FixedSequence::raw_storage)) and are dropped when they
    /// are overwritten or when the sequence itself is dropped.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a cursor positioned at the first element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor positioned one past the last logical element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.len)
    }

    /// Returns a mutable cursor positioned at the first element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, N> {
        CursorMut::new(self, 0)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedSequence<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedSequence")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Equality only ever looks at the logical prefix.
impl<T, U, const N: usize, const M: usize> PartialEq<FixedSequence<U, M>> for FixedSequence<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedSequence<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T, U, const N: usize> PartialEq<[U]> for FixedSequence<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U, const N: usize> PartialEq<&[U]> for FixedSequence<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for FixedSequence<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == &other[..]
    }
}
impl<T: Eq, const N: usize> Eq for FixedSequence<T, N> {}
impl<T: Ord, const N: usize> Ord for FixedSequence<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for FixedSequence<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for FixedSequence<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Copy, const N: usize> Copy for FixedSequence<T, N> {}
impl<T: Clone, const N: usize> Clone for FixedSequence<T, N> {
    /// Clones every slot of the backing block, not only the logical prefix.
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.buf.clone_from(&source.buf);
        self.len = source.len;
    }
}

impl<T, const N: usize> Deref for FixedSequence<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for FixedSequence<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedSequence<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for FixedSequence<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for FixedSequence<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for FixedSequence<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedSequence;
    use crate::Error;
    use alloc::{format, string::String, vec::Vec};

    #[test]
    fn test_push_pop_back() {
        let mut s: FixedSequence<u8, 2> = FixedSequence::default();
        s.push_back(1).unwrap();
        s.push_back(2).unwrap();
        assert_eq!(s.push_back(9), Err(Error::CapacityExceeded { capacity: 2 }));
        assert_eq!(s.pop_back(), Ok(2));
        assert_eq!(s.pop_back(), Ok(1));
        assert_eq!(s.pop_back(), Err(Error::Underflow));
    }

    #[test]
    fn test_default_and_capacity() {
        let s: FixedSequence<i32, 4> = FixedSequence::default();
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 4);
        assert!(s.is_empty());
        assert!(!s.is_full());
        assert_eq!(s.spare_capacity(), 4);
        assert_eq!(FixedSequence::<i32, 4>::CAPACITY, 4);
        assert_eq!(s.raw_storage(), &[0; 4]);
    }

    #[test]
    fn test_three_slot_scenario() {
        let mut s: FixedSequence<i32, 3> = FixedSequence::new();
        s.push_back(1).unwrap();
        s.push_back(2).unwrap();
        s.push_back(3).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s, [1, 2, 3]);

        assert_eq!(s.push_back(4), Err(Error::CapacityExceeded { capacity: 3 }));
        assert_eq!(s, [1, 2, 3]);

        assert_eq!(s.pop_front(), Ok(1));
        assert_eq!(s, [2, 3]);
        assert_eq!(s.len(), 2);

        s.push_front(9).unwrap();
        assert_eq!(s, [9, 2, 3]);

        s.reverse();
        assert_eq!(s, [3, 2, 9]);
    }

    #[test]
    fn test_single_slot_scenario() {
        let mut s: FixedSequence<i32, 1> = FixedSequence::default();
        assert_eq!(s.len(), 0);
        assert_eq!(s.pop_back(), Err(Error::Underflow));
        s.push_back(5).unwrap();
        assert_eq!(s, [5]);
        assert_eq!(s.push_back(6), Err(Error::CapacityExceeded { capacity: 1 }));
        assert_eq!(s, [5]);
    }

    #[test]
    fn test_clear_keeps_storage() {
        let mut s: FixedSequence<u8, 3> = crate::fixed_seq![7, 8];
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.get(0), None);
        assert_eq!(s.raw_storage(), &[7, 8, 0]);
        s.push_back(1).unwrap();
        assert_eq!(s, [1]);
    }

    #[test]
    fn test_truncate() {
        let mut s: FixedSequence<u8, 4> = crate::fixed_seq![1, 2, 3];
        s.truncate(5);
        assert_eq!(s.len(), 3);
        s.truncate(1);
        assert_eq!(s, [1]);
    }

    #[test]
    fn test_get_first_last() {
        let mut s: FixedSequence<i32, 4> = crate::fixed_seq![10, 20, 30];
        assert_eq!(s.get(2), Some(&30));
        assert_eq!(s.get(3), None);
        assert_eq!(s.first(), Some(&10));
        assert_eq!(s.last(), Some(&30));
        *s.get_mut(1).unwrap() = 21;
        assert_eq!(s, [10, 21, 30]);
        assert_eq!(s.get_mut(3), None);

        let empty: FixedSequence<i32, 2> = FixedSequence::new();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_equality_is_length_sensitive() {
        let a: FixedSequence<i32, 4> = crate::fixed_seq![1, 2];
        let b: FixedSequence<i32, 4> = crate::fixed_seq![1, 2, 3];
        assert_ne!(a, b);
        assert_ne!(b, a);
        assert_eq!(a, a);
    }

    #[test]
    fn test_equality_ignores_stale_slots() {
        let mut a: FixedSequence<i32, 3> = crate::fixed_seq![1, 2, 3];
        let b: FixedSequence<i32, 3> = crate::fixed_seq![1, 2];
        a.truncate(2);
        assert_ne!(a.raw_storage(), b.raw_storage());
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_across_capacities_and_slices() {
        let a: FixedSequence<i32, 2> = crate::fixed_seq![4, 5];
        let b: FixedSequence<i32, 8> = crate::fixed_seq![4, 5];
        assert_eq!(a, b);
        assert_eq!(a, [4, 5]);
        assert_eq!(a, &[4, 5][..]);
        assert!(a != [4]);
    }

    #[test]
    fn test_ordering_and_hash_follow_slice() {
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a: FixedSequence<i32, 4> = crate::fixed_seq![1, 2];
        let b: FixedSequence<i32, 4> = crate::fixed_seq![1, 3];
        assert!(a < b);

        let mut c: FixedSequence<i32, 4> = crate::fixed_seq![1, 2, 9];
        c.truncate(2);

        let hash = |s: &FixedSequence<i32, 4>| {
            let mut h = DefaultHasher::new();
            s.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(&a), hash(&c));
    }

    #[test]
    fn test_clone_copies_every_slot() {
        let mut a: FixedSequence<String, 3> = FixedSequence::new();
        a.push_back(String::from("x")).unwrap();
        a.push_back(String::from("y")).unwrap();
        a.truncate(1);

        let b = a.clone();
        assert_eq!(b.len(), 1);
        assert_eq!(b.raw_storage()[1], "y");

        let mut c: FixedSequence<String, 3> = FixedSequence::new();
        c.clone_from(&a);
        assert_eq!(c, a);
        assert_eq!(c.raw_storage(), a.raw_storage());
    }

    #[test]
    fn test_copy_when_elements_are_copy() {
        let a: FixedSequence<u8, 2> = crate::fixed_seq![1];
        let mut b = a;
        b.push_back(2).unwrap();
        assert_eq!(a, [1]);
        assert_eq!(b, [1, 2]);
    }

    #[test]
    fn test_take_leaves_empty_sequence() {
        let mut a: FixedSequence<String, 2> = FixedSequence::new();
        a.push_back(String::from("moved")).unwrap();
        let b = core::mem::take(&mut a);
        assert!(a.is_empty());
        assert_eq!(b.as_slice(), &[String::from("moved")]);
    }

    #[test]
    fn test_debug_shows_only_logical_elements() {
        let mut s: FixedSequence<u8, 4> = crate::fixed_seq![1, 2, 3];
        s.truncate(2);
        assert_eq!(
            format!("{s:?}"),
            "FixedSequence { len: 2, elements: [1, 2] }"
        );
    }

    #[test]
    fn test_deref_and_iter() {
        let mut s: FixedSequence<i32, 5> = crate::fixed_seq![3, 1, 2];
        s.sort_unstable();
        assert_eq!(s, [1, 2, 3]);
        for x in s.iter_mut() {
            *x *= 10;
        }
        let collected: Vec<i32> = s.iter().copied().collect();
        assert_eq!(collected, [10, 20, 30]);
        assert!(s.contains(&20));
    }

    #[test]
    fn test_non_default_copy_elements() {
        #[derive(Clone, Copy, Debug, PartialEq)]
        struct NoDefault(u8);

        let mut s: FixedSequence<NoDefault, 2> = FixedSequence::new_with(NoDefault(0));
        s.push_back(NoDefault(1)).unwrap();
        s.push_front(NoDefault(2)).unwrap();
        assert_eq!(s, [NoDefault(2), NoDefault(1)]);
        s.reverse();
        assert_eq!(s.at(0), Ok(&NoDefault(1)));
    }
}
