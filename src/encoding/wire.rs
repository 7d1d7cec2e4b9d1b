//! Wire messages and the typed-model conversions.

use crate::errors::{BindError, CompositeError};
use crate::types::{BindVariable, BindVars, Tuple, Type, Value};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Scalar wire message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WireValue {
    pub r#type: i32,
    #[serde(default)]
    pub value: Vec<u8>,
}

/// Bind variable wire message. `values` is populated only for `TUPLE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WireBindVariable {
    pub r#type: i32,
    #[serde(default)]
    pub value: Vec<u8>,
    #[serde(default)]
    pub values: Vec<WireValue>,
}

/// Bind variable map as received from the wire.
pub type WireBindVars = HashMap<String, WireBindVariable>;

impl WireValue {
    pub fn new(ty: Type, value: impl Into<Vec<u8>>) -> Self {
        WireValue {
            r#type: ty.code(),
            value: value.into(),
        }
    }
}

impl WireBindVariable {
    pub fn scalar(ty: Type, value: impl Into<Vec<u8>>) -> Self {
        WireBindVariable {
            r#type: ty.code(),
            value: value.into(),
            values: Vec::new(),
        }
    }

    pub fn tuple(values: Vec<WireValue>) -> Self {
        WireBindVariable {
            r#type: Type::Tuple.code(),
            value: Vec::new(),
            values,
        }
    }

    /// Checks that the message uses the field its tag calls for: a payload for
    /// scalars, elements for `TUPLE`.
    pub(crate) fn check_shape(&self, ty: Type) -> Result<(), BindError> {
        if ty != Type::Tuple && !self.values.is_empty() {
            return Err(BindError::malformed_wire(format!(
                "{} bind variable carries {} tuple elements",
                ty,
                self.values.len()
            )));
        }
        if ty == Type::Tuple && !self.value.is_empty() {
            return Err(BindError::malformed_wire(format!(
                "TUPLE bind variable carries a {}-byte scalar payload",
                self.value.len()
            )));
        }
        Ok(())
    }
}

impl Value {
    pub fn to_wire(&self) -> WireValue {
        WireValue {
            r#type: self.ty().code(),
            value: self.raw().to_vec(),
        }
    }

    /// Decodes a scalar wire message. The `TUPLE` tag is malformed here.
    pub fn from_wire(wire: &WireValue) -> Result<Value, BindError> {
        let ty = Type::try_from(wire.r#type)?;
        if ty == Type::Tuple {
            return Err(BindError::malformed_wire(
                "TUPLE tag is not allowed in a scalar value",
            ));
        }
        Ok(Value::from_parts(ty, wire.value.clone()))
    }
}

impl From<Value> for WireValue {
    fn from(v: Value) -> Self {
        let r#type = v.ty().code();
        WireValue {
            r#type,
            value: v.into_raw(),
        }
    }
}

impl TryFrom<WireValue> for Value {
    type Error = BindError;

    fn try_from(wire: WireValue) -> Result<Self, Self::Error> {
        let ty = Type::try_from(wire.r#type)?;
        if ty == Type::Tuple {
            return Err(BindError::malformed_wire(
                "TUPLE tag is not allowed in a scalar value",
            ));
        }
        Ok(Value::from_parts(ty, wire.value))
    }
}

/// Decodes one tuple element; a `TUPLE` element is a nesting violation.
fn element_from_wire(wire: WireValue) -> Result<Value, BindError> {
    if wire.r#type == Type::Tuple.code() {
        return Err(CompositeError::Nested.into());
    }
    Value::try_from(wire)
}

impl BindVariable {
    pub fn to_wire(&self) -> WireBindVariable {
        match self {
            BindVariable::Scalar(v) => WireBindVariable {
                r#type: v.ty().code(),
                value: v.raw().to_vec(),
                values: Vec::new(),
            },
            BindVariable::Tuple(t) => WireBindVariable::tuple(t.iter().map(Value::to_wire).collect()),
        }
    }

    pub fn from_wire(wire: &WireBindVariable) -> Result<BindVariable, BindError> {
        BindVariable::try_from(wire.clone())
    }
}

impl From<BindVariable> for WireBindVariable {
    fn from(bv: BindVariable) -> Self {
        match bv {
            BindVariable::Scalar(v) => {
                let r#type = v.ty().code();
                WireBindVariable {
                    r#type,
                    value: v.into_raw(),
                    values: Vec::new(),
                }
            }
            BindVariable::Tuple(t) => {
                WireBindVariable::tuple(t.into_values().into_iter().map(WireValue::from).collect())
            }
        }
    }
}

impl TryFrom<WireBindVariable> for BindVariable {
    type Error = BindError;

    fn try_from(wire: WireBindVariable) -> Result<Self, Self::Error> {
        let ty = Type::try_from(wire.r#type)?;
        wire.check_shape(ty)?;
        if ty != Type::Tuple {
            return Ok(BindVariable::Scalar(Value::from_parts(ty, wire.value)));
        }

        let elements = wire
            .values
            .into_iter()
            .map(element_from_wire)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BindVariable::Tuple(Tuple::new(elements)?))
    }
}

/// Encodes every entry of a typed map.
pub fn bind_vars_to_wire(vars: &BindVars) -> WireBindVars {
    vars.iter().map(|(k, v)| (k.clone(), v.to_wire())).collect()
}

/// Decodes every entry of a wire map; the first failure is reported with
/// its key, in sorted key order.
pub fn bind_vars_from_wire(wire: &WireBindVars) -> Result<BindVars, BindError> {
    let mut keys: Vec<&String> = wire.keys().collect();
    keys.sort_unstable();

    let mut out = BindVars::with_capacity(wire.len());
    for key in keys {
        let bv = BindVariable::from_wire(&wire[key]).map_err(|e| BindError::keyed(key.as_str(), e))?;
        out.insert(key.clone(), bv);
    }
    Ok(out)
}
