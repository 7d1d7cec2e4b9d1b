use crate::errors::BindError;
use std::num::IntErrorKind;

const INT64: &str = "int64";
const UINT64: &str = "uint64";
const FLOAT64: &str = "float64";

fn lossy(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn malformed(target: &'static str, raw: &[u8], tail: bool) -> BindError {
    BindError::ParseMalformed {
        target,
        raw: lossy(raw),
        tail,
    }
}

fn overflow(target: &'static str, raw: &[u8]) -> BindError {
    BindError::ParseOverflow {
        target,
        raw: lossy(raw),
    }
}

fn int_error(target: &'static str, raw: &[u8], kind: &IntErrorKind) -> BindError {
    match kind {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => overflow(target, raw),
        _ => malformed(target, raw, false),
    }
}

pub fn parse_int64(raw: &[u8]) -> Result<i64, BindError> {
    let s = std::str::from_utf8(raw).map_err(|_| malformed(INT64, raw, false))?;
    s.parse::<i64>()
        .map_err(|e| int_error(INT64, raw, e.kind()))
}

pub fn parse_uint64(raw: &[u8]) -> Result<u64, BindError> {
    if matches!(raw.first(), Some(b'-' | b'+')) {
        return Err(malformed(UINT64, raw, false));
    }
    let s = std::str::from_utf8(raw).map_err(|_| malformed(UINT64, raw, false))?;
    s.parse::<u64>()
        .map_err(|e| int_error(UINT64, raw, e.kind()))
}

/// Parses a float payload. Infinity and NaN are accepted only when spelled
/// out; a finite literal too large for f64 is an overflow.
pub fn parse_float64(raw: &[u8]) -> Result<f64, BindError> {
    if raw.is_empty() {
        return Err(malformed(FLOAT64, raw, false));
    }
    let s = std::str::from_utf8(raw).map_err(|_| malformed(FLOAT64, raw, true))?;
    let value = s.parse::<f64>().map_err(|_| malformed(FLOAT64, raw, true))?;
    if value.is_infinite() && !spells_infinity(s) {
        return Err(overflow(FLOAT64, raw));
    }
    Ok(value)
}

fn spells_infinity(s: &str) -> bool {
    let digits = s.trim_start_matches(['+', '-']);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

const PLAIN_FLOAT_MIN: f64 = 1e-4;
const PLAIN_FLOAT_MAX: f64 = 1e21;

/// Renders a float payload as the shortest text that parses back to `v`.
/// Magnitudes below `1e-4` or from `1e21` up use exponent form (`1e300`).
pub fn format_float64(v: f64) -> String {
    let magnitude = v.abs();
    if v.is_finite() && magnitude != 0.0 && !(PLAIN_FLOAT_MIN..PLAIN_FLOAT_MAX).contains(&magnitude) {
        format!("{:e}", v)
    } else {
        v.to_string()
    }
}
