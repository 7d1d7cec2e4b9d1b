//! # Bind Variables
//!
//! A [`BindVariable`] is either a scalar [`Value`] or a [`Tuple`] of scalar
//! values, the latter used for `IN (...)` lists. [`BindVars`] maps parameter
//! names to bind variables; map order carries no meaning.

use super::{Tuple, Type, Value};
use crate::errors::{BindError, CompositeError};
use hashbrown::HashMap;
use std::fmt;

/// Named bind variables of one query.
pub type BindVars = HashMap<String, BindVariable>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindVariable {
    Scalar(Value),
    Tuple(Tuple),
}

impl BindVariable {
    pub const NULL: BindVariable = BindVariable::Scalar(Value::NULL);

    forward_scalar_constructors! {
        int8(i8),
        int32(i32),
        int64(i64),
        uint32(u32),
        uint64(u64),
        float64(f64),
        bool(bool),
    }

    pub fn string(s: impl Into<String>) -> Self {
        BindVariable::Scalar(Value::string(s))
    }

    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        BindVariable::Scalar(Value::bytes(b))
    }

    pub fn decimal(text: impl Into<Vec<u8>>) -> Self {
        BindVariable::Scalar(Value::decimal(text))
    }

    pub fn bit_num(text: impl Into<Vec<u8>>) -> Self {
        BindVariable::Scalar(Value::bit_num(text))
    }

    pub fn hex_num(text: impl Into<Vec<u8>>) -> Self {
        BindVariable::Scalar(Value::hex_num(text))
    }

    pub fn hex_val(text: impl Into<Vec<u8>>) -> Self {
        BindVariable::Scalar(Value::hex_val(text))
    }

    /// Tuple bind variable; fails on an empty sequence.
    pub fn tuple(values: impl IntoIterator<Item = Value>) -> Result<Self, BindError> {
        Tuple::new(values).map(BindVariable::Tuple)
    }

    pub fn ty(&self) -> Type {
        match self {
            BindVariable::Scalar(v) => v.ty(),
            BindVariable::Tuple(_) => Type::Tuple,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, BindVariable::Scalar(v) if v.is_null())
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            BindVariable::Scalar(v) => Some(v),
            BindVariable::Tuple(_) => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            BindVariable::Tuple(t) => Some(t),
            BindVariable::Scalar(_) => None,
        }
    }

    /// Scalar payload of this bind variable. Tuples have no single value.
    pub fn to_value(&self) -> Result<Value, BindError> {
        self.as_value()
            .cloned()
            .ok_or_else(|| CompositeError::NotScalar.into())
    }

    pub fn into_value(self) -> Result<Value, BindError> {
        match self {
            BindVariable::Scalar(v) => Ok(v),
            BindVariable::Tuple(_) => Err(CompositeError::NotScalar.into()),
        }
    }
}

impl Default for BindVariable {
    fn default() -> Self {
        BindVariable::NULL
    }
}

impl From<Value> for BindVariable {
    fn from(v: Value) -> Self {
        BindVariable::Scalar(v)
    }
}

impl From<Tuple> for BindVariable {
    fn from(t: Tuple) -> Self {
        BindVariable::Tuple(t)
    }
}

impl fmt::Display for BindVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindVariable::Scalar(v) => write!(f, "{}", v),
            BindVariable::Tuple(t) => write!(f, "{}", t),
        }
    }
}
