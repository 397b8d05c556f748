// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-sequence`
//!
//! A `no_std`, fixed-capacity, allocation-free sequence with checked
//! push/pop at both ends, **with no `unsafe`**.
//!
//! The core type, [`FixedSequence<T, N>`], stores `N` elements inline (on the
//! stack or inside the owning struct) and tracks a logical length
//! `len ∈ 0..=N`. It is a drop-in for a growable sequence when the maximum
//! number of elements is known at compile time and the heap must not be
//! touched: embedded targets, real-time loops, allocation-free hot paths.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`FixedSequence::<T, N>::CAPACITY == N`)
//!   and must be non-zero; `N == 0` is rejected when the type is constructed.
//! - Length is a logical prefix: only indices `< len` are part of the
//!   sequence. Slots beyond it keep stale or `T::default()` values.
//! - No heap allocations are performed, ever.
//! - Every capacity, emptiness or bounds failure is reported through
//!   [`Error`] and leaves the sequence unchanged:
//!   - [`push_back`](FixedSequence::push_back) /
//!     [`push_front`](FixedSequence::push_front) →
//!     [`Error::CapacityExceeded`];
//!   - [`pop_back`](FixedSequence::pop_back) /
//!     [`pop_front`](FixedSequence::pop_front) → [`Error::Underflow`];
//!   - [`at`](FixedSequence::at) / [`at_mut`](FixedSequence::at_mut) →
//!     [`Error::IndexOutOfRange`], or [`Error::InvariantViolation`] if the
//!     length is ever observed above the capacity.
//! - `v[i]` and `v[a..b]` follow slice semantics and **panic** when out of
//!   bounds, like `Vec`.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `FixedSequence<T, N>`.
//!   - Deserializing more than `N` elements is an error, never a truncation.
//!
//! - `degraded-checking`
//!   - Enables [`FixedSequence::degraded`], a parallel API that swallows
//!     capacity/bounds errors for targets that cannot propagate them. See
//!     the `degraded` module for the exact (lossy) fallback contract.
//!
//! - `tracing`
//!   - Emits a `tracing::warn!` event each time the degraded API swallows an
//!     error. Implies `degraded-checking`.
//!
//! ## Example
//!
//! ```rust
//! use fixed_sequence::{fixed_seq, Error, FixedSequence};
//!
//! let mut seq: FixedSequence<u32, 3> = fixed_seq![1, 2, 3];
//! assert_eq!(seq.push_back(4), Err(Error::CapacityExceeded { capacity: 3 }));
//!
//! assert_eq!(seq.pop_front(), Ok(1));
//! seq.push_front(9).unwrap();
//! seq.reverse();
//! assert_eq!(seq, [3, 2, 9]);
//! ```
//!
//! See [`FixedSequence`] for detailed behavior, including complexity notes
//! and element bounds.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod cursor;
#[cfg(feature = "degraded-checking")]
pub mod degraded;
mod error;
mod index;
mod iter;
mod macros;
mod sequence;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "degraded-checking")]
mod trace;

// Public exports (crate API surface)
pub use cursor::{Cursor, CursorMut};
#[cfg(feature = "degraded-checking")]
pub use degraded::Degraded;
pub use error::Error;
pub use iter::IntoIter;
pub use sequence::FixedSequence;
