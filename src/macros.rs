// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Builds a [`FixedSequence`](crate::FixedSequence) from a list of elements.
///
/// The capacity comes from the surrounding type; a list longer than the
/// capacity is rejected at compile time.
///
/// ```rust
/// use fixed_sequence::{fixed_seq, FixedSequence};
///
/// let seq: FixedSequence<u8, 4> = fixed_seq![1, 2, 3];
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.capacity(), 4);
///
/// let empty: FixedSequence<u8, 4> = fixed_seq![];
/// assert!(empty.is_empty());
/// ```
///
/// ```compile_fail
/// use fixed_sequence::{fixed_seq, FixedSequence};
///
/// let seq: FixedSequence<u8, 1> = fixed_seq![1, 2];
/// ```
#[macro_export]
macro_rules! fixed_seq {
    () => {
        $crate::FixedSequence::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::FixedSequence::from_array([$($x),+])
    };
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::FixedSequence;
    use alloc::string::String;

    #[test]
    fn test_literal_forms() {
        let a: FixedSequence<i32, 3> = fixed_seq![1, 2, 3,];
        assert!(a.is_full());

        let b: FixedSequence<String, 2> = fixed_seq![String::from("x")];
        assert_eq!(b, ["x"]);

        let c: FixedSequence<i32, 1> = fixed_seq![];
        assert_eq!(c.len(), 0);
    }
}
