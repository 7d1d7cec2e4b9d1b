//! Fuzz testing for the bind variable frame decoder.
//!
//! Feeds arbitrary bytes to every frame decoder. Decoding must never panic,
//! and any frame that decodes must re-encode to a frame that decodes to the
//! same value.

#![no_main]

use libfuzzer_sys::fuzz_target;

use sqlbind::encoding::{
    decode_bind_variable, decode_bind_vars, decode_wire_bind_variable, decode_wire_bind_vars,
    encode_bind_variable, encode_bind_vars,
};

fuzz_target!(|data: &[u8]| {
    let _ = decode_wire_bind_variable(data);
    let _ = decode_wire_bind_vars(data);

    if let Ok(bv) = decode_bind_variable(data) {
        let frame = encode_bind_variable(&bv).expect("decoded bind variable must re-encode");
        let again = decode_bind_variable(&frame).expect("re-encoded bind variable must decode");
        assert_eq!(again, bv);
    }

    if let Ok(vars) = decode_bind_vars(data) {
        let frame = encode_bind_vars(&vars).expect("decoded map must re-encode");
        let again = decode_bind_vars(&frame).expect("re-encoded map must decode");
        assert_eq!(again, vars);
    }
});
