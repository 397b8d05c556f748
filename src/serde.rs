// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedSequence`](crate::FixedSequence).
//!
//! - **Serialize**: as a sequence of the logical elements (length `len`);
//!   stale slots are never written.
//! - **Deserialize**: from any sequence of at most `N` elements. A longer
//!   input fails with a "too many elements" error instead of truncating.
//!
//! Deserializing requires `T: Default`, which fills the backing block before
//! elements are pushed.

// Crate imports
use crate::sequence::FixedSequence;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize> Serialize for FixedSequence<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let items = self.as_slice();
        let mut seq = s.serialize_seq(Some(items.len()))?;
        for item in items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct SequenceVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for SequenceVisitor<T, N>
where
    T: Deserialize<'de> + Default,
{
    type Value = FixedSequence<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {N} elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = FixedSequence::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push_back(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedSequence<T, N>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SequenceVisitor::<T, N>(PhantomData))
    }
}
