//! # Coded Error Cause Chain
//!
//! A [`CodedError`] is either a leaf (status code plus message) or a wrapper
//! that adds a message in front of an inner error. The code of a chain is the
//! code of its leaf, so wrapping never changes how a caller classifies the
//! failure.
//!
//! ```text
//! Wrapped("baz") ─> Wrapped("bar") ─> Leaf(INVALID_ARGUMENT, "foo")
//!                                       Display: "baz: bar: foo"
//! ```
//!
//! Stack capture is opt-in per node via [`CodedError::with_stack`]. Captured
//! stacks are printed only through [`CodedError::display_with`] with
//! [`ErrorOptions::log_stacks`] set, and never take part in equality.

use super::{BindError, Code};
use crate::config::ErrorOptions;
use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a captured backtrace.
pub type Stack = Arc<Backtrace>;

#[derive(Debug, Clone)]
pub enum CodedError {
    Leaf {
        code: Code,
        message: String,
        stack: Option<Stack>,
    },
    Wrapped {
        message: String,
        cause: Box<CodedError>,
        stack: Option<Stack>,
    },
}

impl CodedError {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        CodedError::Leaf {
            code,
            message: message.into(),
            stack: None,
        }
    }

    /// Wraps `self` with an outer message, keeping the leaf code.
    pub fn wrap(self, message: impl Into<String>) -> Self {
        CodedError::Wrapped {
            message: message.into(),
            cause: Box::new(self),
            stack: None,
        }
    }

    /// Captures the current stack on this node.
    pub fn with_stack(mut self) -> Self {
        let captured = Some(Arc::new(Backtrace::force_capture()));
        match &mut self {
            CodedError::Leaf { stack, .. } | CodedError::Wrapped { stack, .. } => {
                *stack = captured
            }
        }
        self
    }

    pub fn stack(&self) -> Option<&Backtrace> {
        match self {
            CodedError::Leaf { stack, .. } | CodedError::Wrapped { stack, .. } => {
                stack.as_deref()
            }
        }
    }

    /// Message of this node alone, without the inner chain.
    pub fn message(&self) -> &str {
        match self {
            CodedError::Leaf { message, .. } | CodedError::Wrapped { message, .. } => message,
        }
    }

    /// Code of the leaf; wrapping never changes it.
    pub fn code(&self) -> Code {
        match self.root_cause() {
            CodedError::Leaf { code, .. } => *code,
            CodedError::Wrapped { .. } => Code::Unknown,
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, CodedError::Wrapped { .. })
    }

    /// Removes one level of wrapping: `(true, inner)` for a wrapper,
    /// `(false, self)` for a leaf.
    pub fn unwrap(&self) -> (bool, &CodedError) {
        match self {
            CodedError::Wrapped { cause, .. } => (true, cause),
            leaf => (false, leaf),
        }
    }

    /// Follows [`unwrap`](Self::unwrap) until it reports no more wrapping.
    pub fn unwrap_all(&self) -> &CodedError {
        let mut current = self;
        loop {
            let (was_wrapped, inner) = current.unwrap();
            if !was_wrapped {
                return current;
            }
            current = inner;
        }
    }

    /// Immediate inner error, if any.
    pub fn cause(&self) -> Option<&CodedError> {
        match self {
            CodedError::Wrapped { cause, .. } => Some(cause),
            CodedError::Leaf { .. } => None,
        }
    }

    /// The leaf at the bottom of the chain.
    pub fn root_cause(&self) -> &CodedError {
        let mut current = self;
        while let Some(next) = current.cause() {
            current = next;
        }
        current
    }

    /// Iterates from this node down to the leaf.
    pub fn chain(&self) -> impl Iterator<Item = &CodedError> {
        std::iter::successors(Some(self), |e| e.cause())
    }

    pub fn display_with(&self, opts: ErrorOptions) -> impl fmt::Display + '_ {
        DisplayWith { err: self, opts }
    }
}

struct DisplayWith<'a> {
    err: &'a CodedError,
    opts: ErrorOptions,
}

impl fmt::Display for DisplayWith<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)?;
        if self.opts.log_stacks {
            for stack in self.err.chain().filter_map(CodedError::stack) {
                write!(f, "\n{}", stack)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodedError::Leaf { message, .. } => f.write_str(message),
            CodedError::Wrapped { message, cause, .. } => write!(f, "{}: {}", message, cause),
        }
    }
}

impl std::error::Error for CodedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodedError::Wrapped { cause, .. } => Some(cause.as_ref()),
            CodedError::Leaf { .. } => None,
        }
    }
}

impl PartialEq for CodedError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                CodedError::Leaf {
                    code: a, message: m, ..
                },
                CodedError::Leaf {
                    code: b,
                    message: n,
                    ..
                },
            ) => a == b && m == n,
            (
                CodedError::Wrapped {
                    message: m,
                    cause: a,
                    ..
                },
                CodedError::Wrapped {
                    message: n,
                    cause: b,
                    ..
                },
            ) => m == n && a == b,
            _ => false,
        }
    }
}

impl Eq for CodedError {}

impl From<BindError> for CodedError {
    fn from(err: BindError) -> Self {
        CodedError::new(err.code(), err.to_string())
    }
}

impl From<std::io::Error> for CodedError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let code = match err.kind() {
            ErrorKind::TimedOut => Code::DeadlineExceeded,
            ErrorKind::Interrupted => Code::Canceled,
            ErrorKind::NotFound => Code::NotFound,
            ErrorKind::PermissionDenied => Code::PermissionDenied,
            ErrorKind::AlreadyExists => Code::AlreadyExists,
            _ => Code::Unknown,
        };
        CodedError::new(code, err.to_string())
    }
}

/// Wrapping helpers on results, in the spirit of `eyre::WrapErr`.
pub trait CodedResultExt<T> {
    fn wrap_coded(self, message: impl Into<String>) -> Result<T, CodedError>;

    fn wrap_coded_with<M, F>(self, f: F) -> Result<T, CodedError>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E: Into<CodedError>> CodedResultExt<T> for Result<T, E> {
    fn wrap_coded(self, message: impl Into<String>) -> Result<T, CodedError> {
        self.map_err(|e| e.into().wrap(message))
    }

    fn wrap_coded_with<M, F>(self, f: F) -> Result<T, CodedError>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map_err(|e| e.into().wrap(f()))
    }
}
