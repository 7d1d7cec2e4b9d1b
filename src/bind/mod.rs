//! # Bind Variable Inference
//!
//! Builds bind variables from native Rust values, choosing the wire type
//! from the value's shape.
//!
//! | Native | Wire type | Payload |
//! |--------|-----------|---------|
//! | `&str`, `String` | VARCHAR | UTF-8 bytes |
//! | `&[u8]`, `Vec<u8>` | VARBINARY | bytes |
//! | `bool` | INT8 | `"1"` / `"0"` |
//! | `i8`, `i16`, `i32` | INT32 | decimal |
//! | `i64`, `isize` | INT64 | decimal |
//! | `u16`, `u32` | UINT32 | decimal |
//! | `u64`, `usize` | UINT64 | decimal |
//! | `f32`, `f64` | FLOAT64 | shortest round-trip decimal |
//! | `None`, [`NativeValue::Nil`] | NULL_TYPE | empty |
//! | [`Value`](crate::types::Value), [`BindVariable`](crate::types::BindVariable) | unchanged | unchanged |
//! | `Vec<T>` of the above | TUPLE | elements inferred in order |
//!
//! A lone `u8` is rejected: one byte could be a tiny integer or one byte of
//! binary data, and the caller has to say which by passing `vec![b]` or a
//! wider integer.
//!
//! ```ignore
//! use sqlbind::bind::build_bind_variable;
//!
//! let bv = build_bind_variable(vec![1i64, 2])?;   // TUPLE(INT64 1, INT64 2)
//! assert!(build_bind_variable(1u8).is_err());     // type u8 not supported as bind var: 1
//! ```

mod infer;
mod native;

pub use infer::{build_bind_variable, build_bind_variables, build_value};
pub use native::NativeValue;
