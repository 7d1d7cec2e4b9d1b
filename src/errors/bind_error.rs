//! Failures of inference, wire decoding, and payload validation.

use super::Code;
use crate::types::Type;
use thiserror::Error;

/// Error raised while building, decoding, or validating a bind variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A native value whose shape has no wire type.
    #[error("type {type_name} not supported as bind var: {value}")]
    UnsupportedType {
        type_name: &'static str,
        value: String,
    },

    /// A wire message whose shape is inconsistent with its tag.
    #[error("{0}")]
    MalformedWire(String),

    #[error("cannot parse {target} from {raw:?}: overflow")]
    ParseOverflow { target: &'static str, raw: String },

    /// `tail` is set when a float prefix parsed but characters were left over.
    #[error("{}", malformed_message(.target, .raw, .tail))]
    ParseMalformed {
        target: &'static str,
        raw: String,
        tail: bool,
    },

    #[error(transparent)]
    InvalidComposite(#[from] CompositeError),

    /// A tag that may never carry a literal.
    #[error("invalid type specified for bind value: {0}")]
    InvalidScalarType(Type),

    #[error("bind variable is nil")]
    NilBindVariable,

    /// Failure of a named entry in a bind variable map.
    #[error("{key}: {source}")]
    Keyed {
        key: String,
        source: Box<BindError>,
    },
}

fn malformed_message(target: &str, raw: &str, tail: &bool) -> String {
    if *tail {
        format!("unparsed tail left after parsing {} from {:?}", target, raw)
    } else {
        format!("cannot parse {} from {:?}", target, raw)
    }
}

/// Tuple-shape failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositeError {
    #[error("empty tuple is not allowed")]
    Empty,

    #[error("tuple not allowed inside another tuple")]
    Nested,

    #[error("cannot convert a TUPLE bind var into a value")]
    NotScalar,

    /// An element failed validation. Renders as the element's own error so
    /// the underlying reason stays readable after key wrapping.
    #[error("{source}")]
    Element {
        index: usize,
        source: Box<BindError>,
    },
}

/// Flat classification of a [`BindError`], ignoring key wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedType,
    MalformedWire,
    ParseOverflow,
    ParseMalformed,
    InvalidComposite,
    InvalidScalarType,
    NilBindVariable,
}

impl BindError {
    pub(crate) fn malformed_wire(msg: impl Into<String>) -> Self {
        BindError::MalformedWire(msg.into())
    }

    pub(crate) fn keyed(key: impl Into<String>, source: BindError) -> Self {
        BindError::Keyed {
            key: key.into(),
            source: Box::new(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BindError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            BindError::MalformedWire(_) => ErrorKind::MalformedWire,
            BindError::ParseOverflow { .. } => ErrorKind::ParseOverflow,
            BindError::ParseMalformed { .. } => ErrorKind::ParseMalformed,
            BindError::InvalidComposite(_) => ErrorKind::InvalidComposite,
            BindError::InvalidScalarType(_) => ErrorKind::InvalidScalarType,
            BindError::NilBindVariable => ErrorKind::NilBindVariable,
            BindError::Keyed { source, .. } => source.kind(),
        }
    }

    /// Name of the failing map entry, if this error came from map validation.
    pub fn key(&self) -> Option<&str> {
        match self {
            BindError::Keyed { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Innermost error, looking through key and tuple-element wrapping.
    pub fn root(&self) -> &BindError {
        match self {
            BindError::Keyed { source, .. } => source.root(),
            BindError::InvalidComposite(CompositeError::Element { source, .. }) => source.root(),
            other => other,
        }
    }

    /// Status code of the innermost failure: a malformed element inside a
    /// tuple is still a decode failure.
    pub fn code(&self) -> Code {
        match self.root().kind() {
            ErrorKind::MalformedWire => Code::Internal,
            _ => Code::InvalidArgument,
        }
    }
}
