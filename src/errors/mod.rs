//! # Error Types
//!
//! Two layers of errors live here:
//!
//! - [`BindError`]: the typed failures of inference, decoding, and
//!   validation. Every variant renders a human-readable message and maps to
//!   a status [`Code`] through [`BindError::code`].
//! - [`CodedError`]: a lightweight cause chain carrying a status code, used
//!   when a binding failure has to travel further up a call stack with more
//!   context attached at each level.
//!
//! ## Status Codes
//!
//! Validation and inference failures are `INVALID_ARGUMENT`; wire decode
//! failures are `INTERNAL`, because they indicate a broken peer rather than
//! a bad parameter.
//!
//! ```ignore
//! use sqlbind::errors::{BindError, Code, CodedError};
//!
//! let err: CodedError = BindError::NilBindVariable.into();
//! assert_eq!(err.code(), Code::InvalidArgument);
//! let err = err.wrap("binding query");
//! assert_eq!(err.to_string(), "binding query: bind variable is nil");
//! ```

mod bind_error;
mod code;
mod coded;

pub use bind_error::{BindError, CompositeError, ErrorKind};
pub use code::Code;
pub use coded::{CodedError, CodedResultExt, Stack};
