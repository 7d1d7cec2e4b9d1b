//! Explicit options for the formatter and for coded-error display.

/// Controls [`format_bind_variables`](crate::format::format_bind_variables).
///
/// With `full == false`, payloads other than integral and floating-point
/// values are replaced by a size placeholder so that large binary or tuple
/// parameters do not flood the logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    pub full: bool,
    pub as_json: bool,
}

impl FormatOptions {
    pub const fn new(full: bool, as_json: bool) -> Self {
        Self { full, as_json }
    }

    pub const fn text() -> Self {
        Self::new(false, false)
    }

    pub const fn json() -> Self {
        Self::new(false, true)
    }

    pub const fn with_full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }
}

/// Controls [`CodedError::display_with`](crate::errors::CodedError::display_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ErrorOptions {
    /// Append captured stack traces after the message chain.
    pub log_stacks: bool,
}

impl ErrorOptions {
    pub const fn with_stacks() -> Self {
        Self { log_stacks: true }
    }
}
