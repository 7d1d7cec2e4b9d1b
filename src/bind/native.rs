//! The closed set of native shapes accepted by inference.

use crate::types::{BindVariable, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Nil,
    Str(String),
    Bytes(Vec<u8>),
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    /// A lone byte; never inferable.
    U8(u8),
    F64(f64),
    Value(Value),
    BindVariable(BindVariable),
    List(Vec<NativeValue>),
}

impl NativeValue {
    /// Rust-facing name of the shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            NativeValue::Nil => "nil",
            NativeValue::Str(_) => "string",
            NativeValue::Bytes(_) => "bytes",
            NativeValue::Bool(_) => "bool",
            NativeValue::I32(_) => "i32",
            NativeValue::I64(_) => "i64",
            NativeValue::U32(_) => "u32",
            NativeValue::U64(_) => "u64",
            NativeValue::U8(_) => "u8",
            NativeValue::F64(_) => "f64",
            NativeValue::Value(_) => "Value",
            NativeValue::BindVariable(_) => "BindVariable",
            NativeValue::List(_) => "list",
        }
    }
}

native_from! {
    String => Str,
    &str => Str,
    Vec<u8> => Bytes,
    &[u8] => Bytes,
    bool => Bool,
    i8 => I32 as i32,
    i16 => I32 as i32,
    i32 => I32,
    i64 => I64,
    isize => I64 as i64,
    u8 => U8,
    u16 => U32 as u32,
    u32 => U32,
    u64 => U64,
    usize => U64 as u64,
    f64 => F64,
    Value => Value,
    BindVariable => BindVariable,
}

impl From<f32> for NativeValue {
    /// Keeps the shortest decimal form of the `f32`, so `0.1f32` becomes
    /// `0.1` rather than the widened `0.10000000149011612`.
    fn from(v: f32) -> Self {
        NativeValue::F64(v.to_string().parse::<f64>().unwrap_or(f64::from(v)))
    }
}

impl From<&String> for NativeValue {
    fn from(v: &String) -> Self {
        NativeValue::Str(v.clone())
    }
}

impl<T: Into<NativeValue>> From<Option<T>> for NativeValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(NativeValue::Nil, Into::into)
    }
}

macro_rules! native_list_from {
    ($($elem:ty),* $(,)?) => {
        $(
            impl From<Vec<$elem>> for NativeValue {
                fn from(v: Vec<$elem>) -> Self {
                    NativeValue::List(v.into_iter().map(NativeValue::from).collect())
                }
            }

            impl From<&[$elem]> for NativeValue {
                fn from(v: &[$elem]) -> Self {
                    NativeValue::List(v.iter().cloned().map(NativeValue::from).collect())
                }
            }
        )*
    };
}

native_list_from! {
    String,
    &str,
    Vec<u8>,
    &[u8],
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    Value,
    NativeValue,
}

impl<T: Into<NativeValue>> From<Vec<Option<T>>> for NativeValue {
    fn from(v: Vec<Option<T>>) -> Self {
        NativeValue::List(v.into_iter().map(NativeValue::from).collect())
    }
}

impl<T: Into<NativeValue> + Clone> From<&[Option<T>]> for NativeValue {
    fn from(v: &[Option<T>]) -> Self {
        NativeValue::List(v.iter().cloned().map(NativeValue::from).collect())
    }
}
