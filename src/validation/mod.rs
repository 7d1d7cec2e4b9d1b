//! # Bind Variable Validation
//!
//! Checks that bind variables received from an untrusted source carry
//! payloads that are well formed for their declared type.
//!
//! ## Rules by Tag
//!
//! | Tags | Rule |
//! |------|------|
//! | INT8..INT64 | base-10 integer within i64 |
//! | UINT8..UINT64, YEAR | base-10 integer within u64, no sign |
//! | FLOAT32, FLOAT64 | float with no unparsed tail |
//! | DECIMAL, temporal, text, binary, BIT, ENUM, SET, GEOMETRY, JSON, HEXNUM, HEXVAL, BITNUM, NULL_TYPE | opaque bytes, accepted |
//! | EXPRESSION | always rejected |
//! | TUPLE | non-empty, no TUPLE elements, every element valid |
//!
//! A wire message must also use the field its tag calls for: a scalar
//! carrying tuple elements, or a tuple carrying a payload, is `MalformedWire`,
//! the same as when decoding it.
//!
//! Only the signed or unsigned 64-bit range is checked for integer tags;
//! narrowing to the declared width happens in the query engine.
//!
//! ## Inputs
//!
//! [`Validate`] is implemented for the typed [`BindVariable`], for the
//! [`WireBindVariable`] straight off the wire, and for optional references to
//! the latter, where `None` is the nil bind variable.
//!
//! ```ignore
//! use sqlbind::validation::validate_bind_variables;
//!
//! validate_bind_variables(&wire_vars)?; // "v: cannot parse int64 from \"a\""
//! ```

use crate::errors::{BindError, CompositeError};
use crate::encoding::{WireBindVariable, WireValue};
use crate::parsing::{parse_float64, parse_int64, parse_uint64};
use crate::types::{BindVariable, Type, Value};
use log::debug;
use std::borrow::Borrow;
use std::collections::HashMap as StdHashMap;
use std::hash::BuildHasher;

/// A bind variable representation that can be checked before use.
pub trait Validate {
    fn validate(&self) -> Result<(), BindError>;
}

/// Validates one payload against a scalar tag.
pub fn validate_scalar(ty: Type, raw: &[u8]) -> Result<(), BindError> {
    match ty {
        Type::Int8 | Type::Int16 | Type::Int24 | Type::Int32 | Type::Int64 => {
            parse_int64(raw).map(drop)
        }
        Type::Uint8
        | Type::Uint16
        | Type::Uint24
        | Type::Uint32
        | Type::Uint64
        | Type::Year => parse_uint64(raw).map(drop),
        Type::Float32 | Type::Float64 => parse_float64(raw).map(drop),
        Type::NullType
        | Type::Decimal
        | Type::Timestamp
        | Type::Date
        | Type::Time
        | Type::Datetime
        | Type::Text
        | Type::Blob
        | Type::Varchar
        | Type::Varbinary
        | Type::Char
        | Type::Binary
        | Type::Bit
        | Type::Enum
        | Type::Set
        | Type::Geometry
        | Type::Json
        | Type::HexNum
        | Type::HexVal
        | Type::BitNum => Ok(()),
        Type::Expression => Err(BindError::InvalidScalarType(Type::Expression)),
        Type::Tuple => Err(CompositeError::NotScalar.into()),
    }
}

fn element_error(index: usize, source: BindError) -> BindError {
    CompositeError::Element {
        index,
        source: Box::new(source),
    }
    .into()
}

fn validate_wire_element(wire: &WireValue) -> Result<(), BindError> {
    validate_scalar(Type::try_from(wire.r#type)?, &wire.value)
}

impl Validate for Value {
    fn validate(&self) -> Result<(), BindError> {
        validate_scalar(self.ty(), self.raw())
    }
}

impl Validate for BindVariable {
    fn validate(&self) -> Result<(), BindError> {
        match self {
            BindVariable::Scalar(v) => v.validate(),
            BindVariable::Tuple(t) => {
                for (i, v) in t.iter().enumerate() {
                    v.validate().map_err(|e| element_error(i, e))?;
                }
                Ok(())
            }
        }
    }
}

impl Validate for WireBindVariable {
    fn validate(&self) -> Result<(), BindError> {
        let ty = Type::try_from(self.r#type)?;
        self.check_shape(ty)?;
        if ty != Type::Tuple {
            return validate_scalar(ty, &self.value);
        }
        if self.values.is_empty() {
            return Err(CompositeError::Empty.into());
        }
        for (i, v) in self.values.iter().enumerate() {
            if v.r#type == Type::Tuple.code() {
                return Err(CompositeError::Nested.into());
            }
            validate_wire_element(v).map_err(|e| element_error(i, e))?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), BindError> {
        match self {
            Some(bv) => bv.validate(),
            None => Err(BindError::NilBindVariable),
        }
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<(), BindError> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), BindError> {
        (**self).validate()
    }
}

/// Validates a single bind variable; `None` is the nil bind variable.
pub fn validate_bind_variable<V: Validate>(bv: Option<&V>) -> Result<(), BindError> {
    bv.validate()
}

/// Read access to a named bind variable map, independent of its hasher.
pub trait BindVarMap {
    type Var: Validate;

    fn sorted_entries(&self) -> Vec<(&str, &Self::Var)>;
}

impl<K, V, S> BindVarMap for hashbrown::HashMap<K, V, S>
where
    K: Borrow<str>,
    V: Validate,
    S: BuildHasher,
{
    type Var = V;

    fn sorted_entries(&self) -> Vec<(&str, &V)> {
        let mut entries: Vec<(&str, &V)> = self
            .iter()
            .map(|(k, v)| (<K as Borrow<str>>::borrow(k), v))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K, V, S> BindVarMap for StdHashMap<K, V, S>
where
    K: Borrow<str>,
    V: Validate,
    S: BuildHasher,
{
    type Var = V;

    fn sorted_entries(&self) -> Vec<(&str, &V)> {
        let mut entries: Vec<(&str, &V)> = self
            .iter()
            .map(|(k, v)| (<K as Borrow<str>>::borrow(k), v))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K, V> BindVarMap for std::collections::BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Validate,
{
    type Var = V;

    fn sorted_entries(&self) -> Vec<(&str, &V)> {
        self.iter()
            .map(|(k, v)| (<K as Borrow<str>>::borrow(k), v))
            .collect()
    }
}

/// Validates every entry in key order and stops at the first failure,
/// which is reported as `"<key>: <reason>"`.
pub fn validate_bind_variables<M: BindVarMap + ?Sized>(vars: &M) -> Result<(), BindError> {
    for (key, bv) in vars.sorted_entries() {
        if let Err(e) = bv.validate() {
            debug!("bind variable {:?} failed validation: {}", key, e);
            return Err(BindError::keyed(key, e));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn wire(ty: Type, raw: &str) -> WireBindVariable {
        WireBindVariable::scalar(ty, raw)
    }

    #[test]
    fn test_accepts_well_formed_payloads() {
        let cases = [
            (Type::Int8, "1"),
            (Type::Int16, "1"),
            (Type::Int24, "1"),
            (Type::Int32, "1"),
            (Type::Int64, "1"),
            (Type::Uint8, "1"),
            (Type::Uint16, "1"),
            (Type::Uint24, "1"),
            (Type::Uint32, "1"),
            (Type::Uint64, "1"),
            (Type::Float32, "1.00"),
            (Type::Float64, "1.00"),
            (Type::Decimal, "1.00"),
            (Type::Timestamp, "2012-02-24 23:19:43"),
            (Type::Date, "2012-02-24"),
            (Type::Time, "23:19:43"),
            (Type::Datetime, "2012-02-24 23:19:43"),
            (Type::Year, "1"),
            (Type::Text, "a"),
            (Type::Blob, "a"),
            (Type::Varchar, "a"),
            (Type::Binary, "a"),
            (Type::Char, "a"),
            (Type::Bit, "1"),
            (Type::Enum, "a"),
            (Type::Set, "a"),
            (Type::Varbinary, "a"),
            (Type::NullType, ""),
        ];
        for (ty, raw) in cases {
            assert!(wire(ty, raw).validate().is_ok(), "{} {:?}", ty, raw);
        }
    }

    #[test]
    fn test_rejects_expression() {
        let err = wire(Type::Expression, "a").validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScalarType);
        assert_eq!(
            err.to_string(),
            "invalid type specified for bind value: EXPRESSION"
        );
    }

    #[test]
    fn test_opaque_tags_accept_anything() {
        for ty in [Type::Decimal, Type::Json, Type::Geometry, Type::HexNum, Type::BitNum] {
            assert!(validate_scalar(ty, &[0xff, 0x00]).is_ok(), "{}", ty);
        }
    }

    #[test]
    fn test_tuple_rules() {
        let ok = WireBindVariable::tuple(vec![WireValue::new(Type::Int64, "1")]);
        assert!(ok.validate().is_ok());

        let empty = WireBindVariable::tuple(Vec::new());
        assert_eq!(
            empty.validate().unwrap_err().to_string(),
            "empty tuple is not allowed"
        );

        let nested = WireBindVariable::tuple(vec![WireValue {
            r#type: Type::Tuple.code(),
            value: Vec::new(),
        }]);
        assert_eq!(
            nested.validate().unwrap_err().to_string(),
            "tuple not allowed inside another tuple"
        );
    }

    #[test]
    fn test_tuple_element_error_keeps_index() {
        let bv = WireBindVariable::tuple(vec![
            WireValue::new(Type::Int64, "1"),
            WireValue::new(Type::Int64, "a"),
        ]);
        match bv.validate().unwrap_err() {
            BindError::InvalidComposite(CompositeError::Element { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source.kind(), ErrorKind::ParseMalformed);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_typed_tuple_validates_elements() {
        let bv = BindVariable::tuple([
            Value::trusted(Type::Uint64, "-1").unwrap(),
            Value::int64(2),
        ])
        .unwrap();
        let err = bv.validate().unwrap_err();
        assert_eq!(err.to_string(), r#"cannot parse uint64 from "-1""#);
    }

    #[test]
    fn test_nil_bind_variable() {
        let err = validate_bind_variable::<WireBindVariable>(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NilBindVariable);
        assert!(err.to_string().contains("bind variable is nil"));
    }

    #[test]
    fn test_shape_agrees_with_decode() {
        let scalar_with_elements = WireBindVariable {
            r#type: Type::Int64.code(),
            value: b"1".to_vec(),
            values: vec![WireValue::new(Type::Int64, "1")],
        };
        let mut tuple_with_payload =
            WireBindVariable::tuple(vec![WireValue::new(Type::Int64, "1")]);
        tuple_with_payload.value = b"x".to_vec();

        for wire in [scalar_with_elements, tuple_with_payload] {
            let err = wire.validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedWire);
            assert_eq!(Some(err), BindVariable::from_wire(&wire).err());
        }
    }

    #[test]
    fn test_unknown_tag_is_malformed_wire() {
        let bv = WireBindVariable {
            r#type: 12345,
            ..Default::default()
        };
        assert_eq!(bv.validate().unwrap_err().kind(), ErrorKind::MalformedWire);
    }

    #[test]
    fn test_map_reports_first_sorted_key() {
        let mut vars = hashbrown::HashMap::new();
        vars.insert("b".to_string(), wire(Type::Int64, "x"));
        vars.insert("a".to_string(), wire(Type::Uint64, "-1"));
        vars.insert("c".to_string(), wire(Type::Int64, "1"));
        let err = validate_bind_variables(&vars).unwrap_err();
        assert_eq!(err.key(), Some("a"));
        assert_eq!(err.to_string(), r#"a: cannot parse uint64 from "-1""#);
    }

    #[test]
    fn test_map_of_optional_entries() {
        let mut vars = std::collections::BTreeMap::new();
        vars.insert("k", Some(wire(Type::Int64, "1")));
        vars.insert("n", None);
        let err = validate_bind_variables(&vars).unwrap_err();
        assert_eq!(err.to_string(), "n: bind variable is nil");
    }
}
