//! # Byte Frames
//!
//! Flat byte serialization of wire messages. Every integer is a
//! [`varint`](super::varint); every byte string is a varint length followed
//! by the bytes.
//!
//! ```text
//! WireValue         := tag:varint  len:varint  payload[len]
//! WireBindVariable  := tag:varint  len:varint  payload[len]  count:varint  WireValue[count]
//! WireBindVars      := count:varint  ( name_len:varint  name[name_len]  WireBindVariable )[count]
//! ```
//!
//! Tags are written as the `u32` bit pattern of the `i32` discriminant so an
//! unknown negative tag survives the frame and is rejected by the typed
//! conversion, not by the framing. Map entries are written in sorted key
//! order, so equal maps produce equal frames.
//!
//! ## Decoding Untrusted Input
//!
//! Decoders never panic. They reject, with `MalformedWire`:
//!
//! - truncated varints or payloads, and trailing bytes after the frame
//! - tags that do not fit in 32 bits
//! - lengths and counts above the limits in [`config`](crate::config)
//! - non-UTF-8 or duplicate map keys
//!
//! Encoders apply the same length and count limits, so a frame that encodes
//! always decodes. A payload, name, or count over its limit fails to encode
//! with the same `MalformedWire` message the decoder would produce.

use super::varint::{put_varint, read_varint};
use super::wire::{WireBindVariable, WireBindVars, WireValue};
use crate::config::{MAX_BIND_VARS, MAX_BIND_VAR_NAME_LEN, MAX_FRAME_PAYLOAD_LEN, MAX_TUPLE_ELEMENTS};
use crate::errors::BindError;
use crate::types::{BindVariable, BindVars};
use eyre::WrapErr;
use log::debug;

fn check_limit(n: u64, limit: usize, what: &str) -> Result<(), BindError> {
    if n > limit as u64 {
        return Err(BindError::malformed_wire(format!(
            "{} {} exceeds limit {}",
            what, n, limit
        )));
    }
    Ok(())
}

fn put_count(n: usize, limit: usize, what: &str, out: &mut Vec<u8>) -> Result<(), BindError> {
    check_limit(n as u64, limit, what)?;
    put_varint(n as u64, out);
    Ok(())
}

fn put_bytes(bytes: &[u8], limit: usize, what: &str, out: &mut Vec<u8>) -> Result<(), BindError> {
    put_count(bytes.len(), limit, what, out)?;
    out.extend_from_slice(bytes);
    Ok(())
}

fn put_tag(tag: i32, out: &mut Vec<u8>) {
    put_varint(tag as u32 as u64, out);
}

fn put_wire_value(v: &WireValue, out: &mut Vec<u8>) -> Result<(), BindError> {
    put_tag(v.r#type, out);
    put_bytes(&v.value, MAX_FRAME_PAYLOAD_LEN, "payload length", out)
}

fn put_wire_bind_variable(bv: &WireBindVariable, out: &mut Vec<u8>) -> Result<(), BindError> {
    put_tag(bv.r#type, out);
    put_bytes(&bv.value, MAX_FRAME_PAYLOAD_LEN, "payload length", out)?;
    put_count(bv.values.len(), MAX_TUPLE_ELEMENTS, "tuple element count", out)?;
    for v in &bv.values {
        put_wire_value(v, out)?;
    }
    Ok(())
}

fn frame_error(err: eyre::Report) -> BindError {
    BindError::malformed_wire(format!("{:#}", err))
}

fn read_count(cursor: &mut &[u8], limit: usize, what: &str) -> Result<usize, BindError> {
    let n = read_varint(cursor)
        .wrap_err_with(|| format!("reading {}", what))
        .map_err(frame_error)?;
    check_limit(n, limit, what)?;
    Ok(n as usize)
}

fn read_bytes(cursor: &mut &[u8], limit: usize, what: &str) -> Result<Vec<u8>, BindError> {
    let len = read_count(cursor, limit, what)?;
    if cursor.len() < len {
        return Err(BindError::malformed_wire(format!(
            "truncated {}: need {} bytes, have {}",
            what,
            len,
            cursor.len()
        )));
    }
    let (head, rest) = cursor.split_at(len);
    *cursor = rest;
    Ok(head.to_vec())
}

fn read_tag(cursor: &mut &[u8]) -> Result<i32, BindError> {
    let tag = read_varint(cursor)
        .wrap_err("reading type tag")
        .map_err(frame_error)?;
    u32::try_from(tag)
        .map(|t| t as i32)
        .map_err(|_| BindError::malformed_wire(format!("type tag {} does not fit in 32 bits", tag)))
}

fn read_wire_value(cursor: &mut &[u8]) -> Result<WireValue, BindError> {
    let r#type = read_tag(cursor)?;
    let value = read_bytes(cursor, MAX_FRAME_PAYLOAD_LEN, "payload length")?;
    Ok(WireValue { r#type, value })
}

fn read_wire_bind_variable(cursor: &mut &[u8]) -> Result<WireBindVariable, BindError> {
    let r#type = read_tag(cursor)?;
    let value = read_bytes(cursor, MAX_FRAME_PAYLOAD_LEN, "payload length")?;
    let count = read_count(cursor, MAX_TUPLE_ELEMENTS, "tuple element count")?;
    let mut values = Vec::with_capacity(count.min(cursor.len()));
    for _ in 0..count {
        values.push(read_wire_value(cursor)?);
    }
    Ok(WireBindVariable {
        r#type,
        value,
        values,
    })
}

fn finish<T>(cursor: &[u8], value: T) -> Result<T, BindError> {
    if !cursor.is_empty() {
        return Err(BindError::malformed_wire(format!(
            "{} trailing bytes after frame",
            cursor.len()
        )));
    }
    Ok(value)
}

/// Serializes a wire message. Fails when a length or count exceeds the
/// limits the decoder enforces, so every frame produced here decodes.
pub fn encode_wire_bind_variable(bv: &WireBindVariable) -> Result<Vec<u8>, BindError> {
    let mut out = Vec::with_capacity(bv.value.len() + 8);
    put_wire_bind_variable(bv, &mut out).inspect_err(|e| {
        debug!("refused to encode bind variable frame: {}", e);
    })?;
    Ok(out)
}

pub fn decode_wire_bind_variable(buf: &[u8]) -> Result<WireBindVariable, BindError> {
    let mut cursor = buf;
    let bv = read_wire_bind_variable(&mut cursor).inspect_err(|e| {
        debug!("rejected bind variable frame of {} bytes: {}", buf.len(), e);
    })?;
    finish(cursor, bv)
}

pub fn encode_bind_variable(bv: &BindVariable) -> Result<Vec<u8>, BindError> {
    encode_wire_bind_variable(&bv.to_wire())
}

/// Decodes a frame and converts it to the typed model.
pub fn decode_bind_variable(buf: &[u8]) -> Result<BindVariable, BindError> {
    BindVariable::try_from(decode_wire_bind_variable(buf)?)
}

pub fn encode_wire_bind_vars(vars: &WireBindVars) -> Result<Vec<u8>, BindError> {
    let mut entries: Vec<(&String, &WireBindVariable)> = vars.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut out = Vec::new();
    let result = put_count(entries.len(), MAX_BIND_VARS, "bind variable count", &mut out)
        .and_then(|()| {
            entries.into_iter().try_for_each(|(name, bv)| {
                put_bytes(name.as_bytes(), MAX_BIND_VAR_NAME_LEN, "name length", &mut out)?;
                put_wire_bind_variable(bv, &mut out)
            })
        });
    if let Err(e) = &result {
        debug!("refused to encode bind variable map frame: {}", e);
    }
    result.map(|()| out)
}

pub fn decode_wire_bind_vars(buf: &[u8]) -> Result<WireBindVars, BindError> {
    let mut cursor = buf;
    let result = read_wire_bind_vars(&mut cursor).and_then(|vars| finish(cursor, vars));
    if let Err(e) = &result {
        debug!("rejected bind variable map frame of {} bytes: {}", buf.len(), e);
    }
    result
}

fn read_wire_bind_vars(cursor: &mut &[u8]) -> Result<WireBindVars, BindError> {
    let count = read_count(cursor, MAX_BIND_VARS, "bind variable count")?;
    let mut vars = WireBindVars::with_capacity(count.min(cursor.len()));
    for _ in 0..count {
        let name = read_bytes(cursor, MAX_BIND_VAR_NAME_LEN, "name length")?;
        let name = String::from_utf8(name)
            .map_err(|_| BindError::malformed_wire("bind variable name is not valid UTF-8"))?;
        let bv = read_wire_bind_variable(cursor)?;
        if vars.contains_key(&name) {
            return Err(BindError::malformed_wire(format!(
                "duplicate bind variable name {:?}",
                name
            )));
        }
        vars.insert(name, bv);
    }
    Ok(vars)
}

pub fn encode_bind_vars(vars: &BindVars) -> Result<Vec<u8>, BindError> {
    encode_wire_bind_vars(&super::bind_vars_to_wire(vars))
}

pub fn decode_bind_vars(buf: &[u8]) -> Result<BindVars, BindError> {
    super::bind_vars_from_wire(&decode_wire_bind_vars(buf)?)
}
