// This file is part of fixed-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Internal event hook for the degraded-checking API.
//!
//! With the `tracing` feature enabled, swallowed errors are reported as
//! `tracing::warn!` events; otherwise the macro expands to nothing.

/// Reports that `$op` swallowed `$err`.
macro_rules! swallowed {
    ($op:expr, $err:expr) => {{
        #[cfg(feature = "tracing")]
        ::tracing::warn!(
            operation = $op,
            error = %$err,
            "degraded-checking swallowed an error"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (&$op, &$err);
    }};
}

pub(crate) use swallowed;
