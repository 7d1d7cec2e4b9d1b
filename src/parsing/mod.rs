//! # Payload Parsing
//!
//! Strict base-10 parsers for the textual payloads of numeric wire values.
//! They differ from `str::parse` only in how they classify failures: every
//! error is a [`BindError`](crate::errors::BindError) that separates
//! out-of-range input (`ParseOverflow`) from input that is not a number at
//! all (`ParseMalformed`).
//!
//! ```ignore
//! use sqlbind::parsing::{parse_int64, parse_uint64};
//!
//! assert_eq!(parse_int64(b"-42")?, -42);
//! assert!(parse_uint64(b"-1").is_err()); // malformed, never overflow
//! ```
//!
//! [`format_float64`] is the inverse used when building float payloads: the
//! shortest round-trip text, in exponent form for very large or very small
//! magnitudes.
//!
//! No whitespace is trimmed. A leading `+` is accepted for signed and float
//! payloads; unsigned payloads accept digits only.

mod numeric;

pub use numeric::{format_float64, parse_float64, parse_int64, parse_uint64};
