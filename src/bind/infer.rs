use super::NativeValue;
use crate::errors::{BindError, CompositeError};
use crate::types::{BindVariable, BindVars, Tuple, Type, Value};
use log::trace;

fn unsupported(type_name: &'static str, value: impl ToString) -> BindError {
    let err = BindError::UnsupportedType {
        type_name,
        value: value.to_string(),
    };
    trace!("rejected native value: {}", err);
    err
}

/// Infers a scalar value. Lists and tuple bind variables are not scalars.
pub fn build_value(native: impl Into<NativeValue>) -> Result<Value, BindError> {
    scalar(native.into())
}

fn scalar(native: NativeValue) -> Result<Value, BindError> {
    Ok(match native {
        NativeValue::Nil => Value::NULL,
        NativeValue::Str(s) => Value::string(s),
        NativeValue::Bytes(b) => Value::bytes(b),
        NativeValue::Bool(b) => Value::bool(b),
        NativeValue::I32(v) => Value::int32(v),
        NativeValue::I64(v) => Value::int64(v),
        NativeValue::U32(v) => Value::uint32(v),
        NativeValue::U64(v) => Value::uint64(v),
        NativeValue::F64(v) => Value::float64(v),
        NativeValue::Value(v) => v,
        NativeValue::BindVariable(bv) => bv.into_value()?,
        NativeValue::U8(v) => return Err(unsupported("u8", v)),
        NativeValue::List(_) => return Err(CompositeError::NotScalar.into()),
    })
}

fn tuple_element(native: NativeValue) -> Result<Value, BindError> {
    match native {
        NativeValue::List(_) | NativeValue::BindVariable(BindVariable::Tuple(_)) => {
            Err(CompositeError::Nested.into())
        }
        other => scalar(other),
    }
}

/// Infers a bind variable from a native value.
///
/// A list becomes a `TUPLE`; if any element is unsupported the whole list
/// fails with that element's error, and no partial tuple is produced.
pub fn build_bind_variable(native: impl Into<NativeValue>) -> Result<BindVariable, BindError> {
    match native.into() {
        NativeValue::BindVariable(bv) => Ok(bv),
        NativeValue::List(items) => {
            let values = items
                .into_iter()
                .map(tuple_element)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(BindVariable::Tuple(Tuple::new(values)?))
        }
        other => scalar(other).map(BindVariable::Scalar),
    }
}

/// Infers a whole map. Entries are processed in key order and the first
/// failure is reported with its key; for a repeated key the last entry wins.
pub fn build_bind_variables<I, K, V>(entries: I) -> Result<BindVars, BindError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<NativeValue>,
{
    let mut entries: Vec<(String, NativeValue)> = entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = BindVars::with_capacity(entries.len());
    for (key, native) in entries {
        let bv = build_bind_variable(native).map_err(|e| BindError::keyed(key.as_str(), e))?;
        out.insert(key, bv);
    }
    Ok(out)
}

impl TryFrom<NativeValue> for BindVariable {
    type Error = BindError;

    fn try_from(native: NativeValue) -> Result<Self, Self::Error> {
        build_bind_variable(native)
    }
}

impl TryFrom<NativeValue> for Value {
    type Error = BindError;

    fn try_from(native: NativeValue) -> Result<Self, Self::Error> {
        scalar(native)
    }
}
