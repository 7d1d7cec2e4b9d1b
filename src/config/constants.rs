//! # sqlbind Configuration Constants
//!
//! Limits that bound the work done on untrusted input, grouped by the layer
//! that enforces them.
//!
//! ## Dependency Graph
//!
//! ```text
//! MAX_FRAME_PAYLOAD_LEN (16 MiB)
//!       │
//!       ├─> MAX_BIND_VAR_NAME_LEN (must be <=)
//!       │     A bind variable name is read with the same length prefix as
//!       │     a payload, so it can never be allowed to exceed it.
//!       │
//!       └─> MAX_TUPLE_ELEMENTS (independent count, checked before allocation)
//!
//! MAX_DURATION_SECONDS (10,000 years)
//!       │
//!       └─> NANOS_PER_SECOND bounds the nanos field of a wire duration
//! ```
//!
//! ## Critical Invariants
//!
//! 1. `MAX_BIND_VAR_NAME_LEN <= MAX_FRAME_PAYLOAD_LEN`
//! 2. `MAX_TUPLE_ELEMENTS` and `MAX_BIND_VARS` fit in a 5-byte varint
//!
//! ```ignore
//! use sqlbind::config::{MAX_FRAME_PAYLOAD_LEN, MAX_TUPLE_ELEMENTS};
//! ```

// ============================================================================
// WIRE FRAME LIMITS
// Decoding never allocates more than these before validating the input length
// ============================================================================

/// Largest payload (scalar bytes or a bind variable name) accepted by the
/// frame decoder.
pub const MAX_FRAME_PAYLOAD_LEN: usize = 16 * 1024 * 1024;

/// Largest bind variable name accepted by the frame decoder.
pub const MAX_BIND_VAR_NAME_LEN: usize = 64 * 1024;

/// Largest number of elements in a decoded tuple.
pub const MAX_TUPLE_ELEMENTS: usize = 1 << 20;

/// Largest number of entries in a decoded bind variable map.
pub const MAX_BIND_VARS: usize = 1 << 16;

/// Inline capacity of a tuple before it spills to the heap. Most IN-lists
/// carry a handful of values.
pub const TUPLE_INLINE_CAPACITY: usize = 4;

const _: () = assert!(
    MAX_BIND_VAR_NAME_LEN <= MAX_FRAME_PAYLOAD_LEN,
    "MAX_BIND_VAR_NAME_LEN must be <= MAX_FRAME_PAYLOAD_LEN"
);

const _: () = assert!(
    MAX_TUPLE_ELEMENTS as u64 <= u32::MAX as u64 && MAX_BIND_VARS as u64 <= u32::MAX as u64,
    "element counts must fit in a 5-byte varint"
);

// ============================================================================
// DURATION LIMITS
// Matches the range of the well-known protobuf Duration message
// ============================================================================

/// Absolute bound on the seconds field of a wire duration (10,000 years).
pub const MAX_DURATION_SECONDS: i64 = 315_576_000_000;

/// Nanoseconds in one second; the nanos field must stay strictly below it.
pub const NANOS_PER_SECOND: i32 = 1_000_000_000;

// ============================================================================
// FORMATTER
// ============================================================================

/// Placeholder suffix for elided scalar payloads: `"5 bytes"`.
pub const ELIDED_BYTES_SUFFIX: &str = "bytes";

/// Placeholder suffix for elided tuples: `"2 items"`.
pub const ELIDED_ITEMS_SUFFIX: &str = "items";
