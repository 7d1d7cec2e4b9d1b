//! # Typed Values
//!
//! The in-memory model of values crossing the wire boundary.
//!
//! ```text
//! BindVars ── name ──> BindVariable
//!                        ├── Scalar(Value { ty: Type, raw: bytes })
//!                        └── Tuple(Tuple [Value, Value, ...])   (non-empty)
//! ```
//!
//! - [`Type`]: closed set of wire type tags
//! - [`Value`]: scalar tag plus payload; never `TUPLE`
//! - [`Tuple`]: ordered, non-empty list of scalar values
//! - [`BindVariable`]: a scalar or a tuple
//! - [`BindVars`]: bind variables keyed by parameter name
//!
//! All types are immutable once built and are `Send + Sync`.

mod bind_variable;
mod query_type;
mod value;

pub use bind_variable::{BindVariable, BindVars};
pub use query_type::Type;
pub use value::{Tuple, Value};
