//! Fuzz testing for bind variable validation.
//!
//! Builds wire messages from structured arbitrary input, including unknown
//! type tags, nested tuples, and junk payloads, and checks that validation
//! and conversion never panic and that a validated message always decodes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use sqlbind::{BindVariable, Type, Validate, WireBindVariable, WireValue};

#[derive(Debug, Arbitrary)]
struct ValidateInput {
    tag: FuzzTag,
    payload: Vec<u8>,
    elements: Vec<(FuzzTag, Vec<u8>)>,
}

#[derive(Debug, Arbitrary, Clone, Copy)]
enum FuzzTag {
    Known(u8),
    Raw(i32),
}

impl FuzzTag {
    fn code(self) -> i32 {
        match self {
            FuzzTag::Known(i) => Type::ALL[i as usize % Type::ALL.len()].code(),
            FuzzTag::Raw(code) => code,
        }
    }
}

fuzz_target!(|input: ValidateInput| {
    let wire = WireBindVariable {
        r#type: input.tag.code(),
        value: input.payload,
        values: input
            .elements
            .into_iter()
            .map(|(tag, value)| WireValue {
                r#type: tag.code(),
                value,
            })
            .collect(),
    };

    let validated = wire.validate();
    let decoded = BindVariable::from_wire(&wire);
    if validated.is_ok() {
        let bv = decoded.expect("a validated message must decode");
        assert!(bv.validate().is_ok());
        let _ = bv.to_string();
    }
});
