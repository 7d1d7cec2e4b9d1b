//! # Wire Encoding
//!
//! Conversion between the typed model and the flat wire messages, and the
//! byte framing used to ship those messages.
//!
//! ## Module Structure
//!
//! - `wire`: [`WireValue`] and [`WireBindVariable`], the two wire message
//!   kinds, and the `to_wire`/`from_wire` conversions on the typed model
//! - `frame`: varint-prefixed byte serialization of wire messages and maps
//! - `varint`: the length-prefix integer encoding used by `frame`
//!
//! ## Layering
//!
//! ```text
//! BindVariable ──to_wire──> WireBindVariable ──encode──> bytes
//! BindVariable <─from_wire── WireBindVariable <─decode── bytes
//! ```
//!
//! `from_wire` checks shape only: known tag, scalar vs tuple consistency,
//! no empty or nested tuples. Payload contents are checked by
//! [`validation`](crate::validation).

pub mod frame;
pub mod varint;
mod wire;

pub use frame::{
    decode_bind_variable, decode_bind_vars, decode_wire_bind_variable, decode_wire_bind_vars,
    encode_bind_variable, encode_bind_vars, encode_wire_bind_variable, encode_wire_bind_vars,
};
pub use wire::{bind_vars_from_wire, bind_vars_to_wire, WireBindVariable, WireBindVars, WireValue};
