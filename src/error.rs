// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedSequence`.
//!
//! These errors represent capacity, emptiness and bounds conditions, plus the
//! internal-consistency fault `len > N`. They are `Copy` and implement
//! `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`FixedSequence`](crate::FixedSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    CapacityExceeded {
        /// The capacity of the sequence that rejected the element.
        capacity: usize,
    },
    /// A pop was attempted on an empty sequence.
    Underflow,
    /// An index was outside the current logical bounds `[0, len)`.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
    /// The logical length was observed to exceed the capacity.
    ///
    /// This is never caused by valid use of the public API; it signals a
    /// corrupted sequence rather than bad input.
    InvariantViolation {
        /// The observed logical length.
        len: usize,
        /// The fixed capacity.
        capacity: usize,
    },
}

impl Error {
    /// Returns `true` for errors caused by the caller's input (capacity,
    /// emptiness, bounds), as opposed to an internal-consistency fault.
    pub const fn is_usage_error(&self) -> bool {
        !matches!(self, Self::InvariantViolation { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "cannot push: sequence is at capacity {capacity}")
            }
            Self::Underflow => f.write_str("cannot pop: sequence is empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Self::InvariantViolation { len, capacity } => write!(
                f,
                "length {len} exceeds capacity {capacity}: sequence is corrupted"
            ),
        }
    }
}

impl CoreError for Error {}
