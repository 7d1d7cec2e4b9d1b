//! # sqlbind - Typed Values and Bind Variables for a SQL Wire Protocol
//!
//! sqlbind is the parameter-binding layer between a SQL-facing query layer
//! and a binary wire protocol. It:
//!
//! - **Represents** values with an explicit wire type tag
//! - **Converts** them losslessly to and from flat wire messages
//! - **Infers** a wire type for native Rust values
//! - **Validates** payloads received from untrusted peers
//!
//! ## Quick Start
//!
//! ```ignore
//! use sqlbind::{build_bind_variables, validate_bind_variables, format_bind_variables, NativeValue};
//! use sqlbind::config::FormatOptions;
//! use sqlbind::encoding::{decode_bind_vars, encode_bind_vars};
//!
//! let vars = build_bind_variables([
//!     ("id", NativeValue::from(7i64)),
//!     ("names", NativeValue::from(vec!["a", "b"])),
//! ])?;
//! let frame = encode_bind_vars(&vars)?;
//!
//! let received = decode_bind_vars(&frame)?;
//! validate_bind_variables(&received)?;
//! log::debug!("{}", format_bind_variables(&received, &FormatOptions::text()));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │      native values (i64, &str, Vec<T>)       │
//! ├──────────────────────────────────────────────┤
//! │          bind: type inference                │
//! ├──────────────────────────────────────────────┤
//! │  types: Type, Value, Tuple, BindVariable     │
//! ├──────────────────────┬───────────────────────┤
//! │ validation (ingress) │ format (logs), equal  │
//! ├──────────────────────┴───────────────────────┤
//! │  encoding: wire messages, varint frames      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Nesting
//!
//! A tuple holds scalar values only. The element type of [`types::Tuple`] is
//! [`types::Value`], which cannot carry the `TUPLE` tag, so a nested tuple
//! cannot be built in memory; on the wire it is rejected by decoding and by
//! validation.
//!
//! ## Module Overview
//!
//! - [`types`]: type tags and the typed value model
//! - [`bind`]: native value inference
//! - [`validation`]: per-type payload rules
//! - [`encoding`]: wire messages and byte framing
//! - [`parsing`]: numeric payload parsers
//! - [`format`]: map equality and log rendering
//! - [`errors`]: bind errors, status codes, coded cause chains
//! - [`duration`]: wire duration conversion
//! - [`config`]: limits and option structs
//!
//! ## Thread Safety
//!
//! Every operation is a pure function over immutable inputs and every public
//! type is `Send + Sync`.

#[macro_use]
mod macros;

pub mod bind;
pub mod config;
pub mod duration;
pub mod encoding;
pub mod errors;
pub mod format;
pub mod parsing;
pub mod types;
pub mod validation;

pub use bind::{build_bind_variable, build_bind_variables, build_value, NativeValue};
pub use encoding::{WireBindVariable, WireBindVars, WireValue};
pub use errors::{BindError, Code, CodedError, CompositeError, ErrorKind};
pub use format::{bind_variables_equal, format_bind_variables, BindVarsDisplay};
pub use types::{BindVariable, BindVars, Tuple, Type, Value};
pub use validation::{validate_bind_variable, validate_bind_variables, Validate};
