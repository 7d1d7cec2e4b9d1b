//! # sqlbind Configuration Module
//!
//! This module centralizes the configuration of the binding layer. It holds
//! two kinds of configuration:
//!
//! - [`constants`]: fixed limits for the byte framing, duration bounds, and
//!   the placeholder text used when bind variables are elided in logs.
//!   Interdependent values are co-located and checked at compile time.
//! - [`options`]: small option structs that callers pass explicitly to the
//!   formatter and to coded-error display. There are no process-wide toggles;
//!   two callers in the same process can format the same map differently.

pub mod constants;
pub mod options;

pub use constants::*;
pub use options::{ErrorOptions, FormatOptions};
