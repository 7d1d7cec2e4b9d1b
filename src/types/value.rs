//! # Scalar Values
//!
//! A [`Value`] is a type tag plus the payload bytes that the tag interprets.
//! Numeric and temporal payloads are decimal or ISO text, text and binary
//! payloads are the bytes themselves. A `Value` can never carry the `TUPLE`
//! tag: tuples are a separate type, [`Tuple`], whose elements are `Value`s,
//! so a tuple inside a tuple cannot be expressed.
//!
//! ## Construction
//!
//! | Constructor | Checks |
//! |-------------|--------|
//! | [`Value::new`] | tag is not `TUPLE`, payload validates for the tag |
//! | [`Value::trusted`] | tag is not `TUPLE` |
//! | `Value::int64(7)`, `Value::string("a")`, ... | none needed |
//!
//! ```ignore
//! use sqlbind::types::{Type, Value};
//!
//! let v = Value::new(Type::Int64, "42")?;
//! assert_eq!(v, Value::int64(42));
//! assert!(Value::new(Type::Uint8, "-1").is_err());
//! ```

use super::Type;
use crate::config::TUPLE_INLINE_CAPACITY;
use crate::errors::{BindError, CompositeError};
use smallvec::SmallVec;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Value {
    ty: Type,
    raw: Vec<u8>,
}

impl Value {
    pub const NULL: Value = Value {
        ty: Type::NullType,
        raw: Vec::new(),
    };

    /// Builds a value after validating the payload against the tag.
    pub fn new(ty: Type, raw: impl Into<Vec<u8>>) -> Result<Value, BindError> {
        let value = Value::trusted(ty, raw)?;
        crate::validation::validate_scalar(value.ty, &value.raw)?;
        Ok(value)
    }

    /// Builds a value without inspecting the payload.
    pub fn trusted(ty: Type, raw: impl Into<Vec<u8>>) -> Result<Value, BindError> {
        if ty == Type::Tuple {
            return Err(CompositeError::NotScalar.into());
        }
        Ok(Value::from_parts(ty, raw.into()))
    }

    /// Caller guarantees `ty != Type::Tuple`.
    pub(crate) fn from_parts(ty: Type, raw: Vec<u8>) -> Value {
        debug_assert_ne!(ty, Type::Tuple);
        Value { ty, raw }
    }

    scalar_constructors! {
        Int8 => i8,
        Int32 => i32,
        Int64 => i64,
        Uint32 => u32,
        Uint64 => u64,
    }

    /// `FLOAT64` value holding the shortest text that parses back to `v`.
    pub fn float64(v: f64) -> Self {
        Self::from_parts(Type::Float64, crate::parsing::format_float64(v).into_bytes())
    }

    /// `VARCHAR` value.
    pub fn string(s: impl Into<String>) -> Value {
        Value::from_parts(Type::Varchar, s.into().into_bytes())
    }

    /// `VARBINARY` value.
    pub fn bytes(b: impl Into<Vec<u8>>) -> Value {
        Value::from_parts(Type::Varbinary, b.into())
    }

    /// `INT8` value holding `"1"` or `"0"`.
    pub fn bool(b: bool) -> Value {
        Value::from_parts(Type::Int8, if b { b"1".to_vec() } else { b"0".to_vec() })
    }

    pub fn decimal(text: impl Into<Vec<u8>>) -> Value {
        Value::from_parts(Type::Decimal, text.into())
    }

    /// `BITNUM` literal such as `0b101`.
    pub fn bit_num(text: impl Into<Vec<u8>>) -> Value {
        Value::from_parts(Type::BitNum, text.into())
    }

    /// `HEXNUM` literal such as `0x1F`.
    pub fn hex_num(text: impl Into<Vec<u8>>) -> Value {
        Value::from_parts(Type::HexNum, text.into())
    }

    /// `HEXVAL` literal such as `X'1F'`.
    pub fn hex_val(text: impl Into<Vec<u8>>) -> Value {
        Value::from_parts(Type::HexVal, text.into())
    }

    #[inline]
    pub fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn is_null(&self) -> bool {
        self.ty == Type::NullType
    }

    /// Payload as text, replacing invalid UTF-8.
    pub fn to_str_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.raw)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::NULL
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("NULL");
        }
        write!(f, "{}({})", self.ty, self.raw.escape_ascii())
    }
}

/// Ordered, non-empty sequence of scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tuple {
    elements: SmallVec<[Value; TUPLE_INLINE_CAPACITY]>,
}

impl Tuple {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Result<Tuple, BindError> {
        let elements: SmallVec<[Value; TUPLE_INLINE_CAPACITY]> = values.into_iter().collect();
        if elements.is_empty() {
            return Err(CompositeError::Empty.into());
        }
        Ok(Tuple { elements })
    }

    pub fn values(&self) -> &[Value] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.elements.into_vec()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", v)?;
        }
        f.write_str(")")
    }
}
