//! # Validation Integration Tests
//!
//! Payload rules for every tag, tuple rules, and map-level fail-fast
//! reporting, exercised on wire messages as a server would receive them.

use sqlbind::encoding::{decode_wire_bind_vars, encode_wire_bind_vars};
use sqlbind::{
    validate_bind_variable, validate_bind_variables, BindError, Code, ErrorKind, Type, Validate,
    WireBindVariable, WireBindVars, WireValue,
};

const INVALID_NEG: &str = "-9223372036854775809";
const INVALID_POS: &str = "18446744073709551616";

fn scalar(ty: Type, raw: &str) -> WireBindVariable {
    WireBindVariable::scalar(ty, raw)
}

mod map_tests {
    use super::*;

    #[test]
    fn valid_map_passes() {
        let mut vars = WireBindVars::new();
        vars.insert("v".into(), scalar(Type::Int64, "1"));
        assert!(validate_bind_variables(&vars).is_ok());
    }

    #[test]
    fn bad_scalar_reports_key() {
        let mut vars = WireBindVars::new();
        vars.insert("v".into(), scalar(Type::Int64, "a"));
        let err = validate_bind_variables(&vars).unwrap_err();
        assert_eq!(err.to_string(), r#"v: cannot parse int64 from "a""#);
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[test]
    fn bad_tuple_element_reports_key_and_reason() {
        let mut vars = WireBindVars::new();
        vars.insert(
            "v".into(),
            WireBindVariable::tuple(vec![WireValue::new(Type::Int64, "a")]),
        );
        let err = validate_bind_variables(&vars).unwrap_err();
        assert!(err.to_string().contains(r#"v: cannot parse int64 from "a""#));
        assert_eq!(err.kind(), ErrorKind::InvalidComposite);
        assert_eq!(err.root().kind(), ErrorKind::ParseMalformed);
    }

    #[test]
    fn std_hashmap_is_accepted() {
        let mut vars = std::collections::HashMap::new();
        vars.insert("a".to_string(), scalar(Type::Float64, "1.5"));
        vars.insert("b".to_string(), scalar(Type::Expression, "x"));
        let err = validate_bind_variables(&vars).unwrap_err();
        assert_eq!(err.key(), Some("b"));
        assert_eq!(err.kind(), ErrorKind::InvalidScalarType);
    }

    #[test]
    fn validation_after_frame_decode() {
        let mut vars = WireBindVars::new();
        vars.insert("id".into(), scalar(Type::Uint64, INVALID_POS));
        let decoded = decode_wire_bind_vars(&encode_wire_bind_vars(&vars).unwrap()).unwrap();
        let err = validate_bind_variables(&decoded).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"id: cannot parse uint64 from "18446744073709551616": overflow"#
        );
    }
}

mod single_tests {
    use super::*;

    #[test]
    fn accepted_payloads() {
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
        ];
        for (ty, raw) in cases {
            let bv = scalar(ty, raw);
            assert!(
                validate_bind_variable(Some(&bv)).is_ok(),
                "{} {:?} should validate",
                ty,
                raw
            );
        }
    }

    #[test]
    fn rejected_payloads() {
        let cases = [
            (
                scalar(Type::Int64, INVALID_NEG),
                r#"cannot parse int64 from "-9223372036854775809": overflow"#,
                ErrorKind::ParseOverflow,
            ),
            (
                scalar(Type::Int64, INVALID_POS),
                r#"cannot parse int64 from "18446744073709551616": overflow"#,
                ErrorKind::ParseOverflow,
            ),
            (
                scalar(Type::Int64, "9223372036854775808"),
                r#"cannot parse int64 from "9223372036854775808": overflow"#,
                ErrorKind::ParseOverflow,
            ),
            (
                scalar(Type::Uint64, "-1"),
                r#"cannot parse uint64 from "-1""#,
                ErrorKind::ParseMalformed,
            ),
            (
                scalar(Type::Uint64, INVALID_POS),
                r#"cannot parse uint64 from "18446744073709551616": overflow"#,
                ErrorKind::ParseOverflow,
            ),
            (
                scalar(Type::Float64, "a"),
                r#"unparsed tail left after parsing float64 from "a""#,
                ErrorKind::ParseMalformed,
            ),
            (
                scalar(Type::Expression, "a"),
                "invalid type specified for bind value: EXPRESSION",
                ErrorKind::InvalidScalarType,
            ),
            (
                WireBindVariable::tuple(Vec::new()),
                "empty tuple is not allowed",
                ErrorKind::InvalidComposite,
            ),
            (
                WireBindVariable::tuple(vec![WireValue {
                    r#type: Type::Tuple.code(),
                    value: Vec::new(),
                }]),
                "tuple not allowed inside another tuple",
                ErrorKind::InvalidComposite,
            ),
        ];
        for (bv, message, kind) in cases {
            let err = bv.validate().unwrap_err();
            assert_eq!(err.to_string(), message);
            assert_eq!(err.kind(), kind, "{}", message);
        }
    }

    #[test]
    fn single_element_tuple_is_valid() {
        let bv = WireBindVariable::tuple(vec![WireValue::new(Type::Int64, "1")]);
        assert!(bv.validate().is_ok());
    }

    #[test]
    fn nil_is_distinct_from_payload_errors() {
        let err = validate_bind_variable::<WireBindVariable>(None).unwrap_err();
        assert_eq!(err, BindError::NilBindVariable);
        assert!(err.to_string().contains("bind variable is nil"));
    }

    #[test]
    fn unknown_tag_is_internal() {
        let bv = WireBindVariable {
            r#type: 7777,
            ..Default::default()
        };
        let err = bv.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedWire);
        assert_eq!(err.code(), Code::Internal);
    }
}
