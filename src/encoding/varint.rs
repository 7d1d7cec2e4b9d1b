//! # Variable-Length Integer Encoding
//!
//! Length prefixes and counts in a frame use a marker-byte varint: the first
//! byte either is the value or says how many bytes follow.
//!
//! | Value Range              | Bytes | Format                           |
//! |--------------------------|-------|----------------------------------|
//! | 0 - 240                  | 1     | `[value]`                        |
//! | 241 - 2287               | 2     | `[241 + (v-240)>>8, (v-240)&FF]` |
//! | 2288 - 67823             | 3     | `[249, (v-2288)>>8, (v-2288)&FF]`|
//! | 67824 - 16777215         | 4     | `[250, v>>16, v>>8, v]`          |
//! | 16777216 - 4294967295    | 5     | `[251, v>>24, v>>16, v>>8, v]`   |
//! | 4294967296 - u64::MAX    | 9     | `[255, 8-byte big-endian]`       |
//!
//! Markers 252-254 are invalid.
//!
//! Frames are built by appending to a `Vec<u8>` and read through a cursor
//! (`&mut &[u8]`) that advances past each decoded integer, so a frame decoder
//! is a sequence of `read_*` calls that each either consume input or fail.
//!
//! ```rust
//! use sqlbind::encoding::varint::{put_varint, read_varint, varint_len};
//!
//! let mut buf = Vec::new();
//! put_varint(1000, &mut buf);
//! assert_eq!(buf.len(), varint_len(1000));
//!
//! let mut cursor = &buf[..];
//! assert_eq!(read_varint(&mut cursor).unwrap(), 1000);
//! assert!(cursor.is_empty());
//! ```

use eyre::{bail, ensure, Result};

const ONE_BYTE_MAX: u64 = 240;
const TWO_BYTE_MAX: u64 = 2287;
const THREE_BYTE_MAX: u64 = 67823;
const FOUR_BYTE_MAX: u64 = 0xFF_FFFF;
const FIVE_BYTE_MAX: u64 = 0xFFFF_FFFF;

const MARKER_THREE: u8 = 249;
const MARKER_FOUR: u8 = 250;
const MARKER_FIVE: u8 = 251;
const MARKER_NINE: u8 = 255;

pub fn varint_len(value: u64) -> usize {
    if value <= ONE_BYTE_MAX {
        1
    } else if value <= TWO_BYTE_MAX {
        2
    } else if value <= THREE_BYTE_MAX {
        3
    } else if value <= FOUR_BYTE_MAX {
        4
    } else if value <= FIVE_BYTE_MAX {
        5
    } else {
        9
    }
}

/// Appends the encoding of `value` to `out`.
pub fn put_varint(value: u64, out: &mut Vec<u8>) {
    if value <= ONE_BYTE_MAX {
        out.push(value as u8);
    } else if value <= TWO_BYTE_MAX {
        let v = value - ONE_BYTE_MAX;
        out.push(((v >> 8) + 241) as u8);
        out.push(v as u8);
    } else if value <= THREE_BYTE_MAX {
        let v = value - (TWO_BYTE_MAX + 1);
        out.push(MARKER_THREE);
        out.extend_from_slice(&(v as u16).to_be_bytes());
    } else if value <= FOUR_BYTE_MAX {
        out.push(MARKER_FOUR);
        out.extend_from_slice(&(value as u32).to_be_bytes()[1..]);
    } else if value <= FIVE_BYTE_MAX {
        out.push(MARKER_FIVE);
        out.extend_from_slice(&(value as u32).to_be_bytes());
    } else {
        out.push(MARKER_NINE);
        out.extend_from_slice(&value.to_be_bytes());
    }
}

fn take<'a>(cursor: &mut &'a [u8], n: usize, width: usize) -> Result<&'a [u8]> {
    ensure!(cursor.len() >= n, "truncated {}-byte varint", width);
    let (head, rest) = cursor.split_at(n);
    *cursor = rest;
    Ok(head)
}

/// Decodes one varint from the front of `cursor` and advances past it.
pub fn read_varint(cursor: &mut &[u8]) -> Result<u64> {
    let Some((&first, rest)) = cursor.split_first() else {
        bail!("empty buffer for varint decode");
    };
    *cursor = rest;

    match first {
        0..=240 => Ok(first as u64),
        241..=248 => {
            let b = take(cursor, 1, 2)?;
            Ok(ONE_BYTE_MAX + ((first as u64 - 241) << 8) + b[0] as u64)
        }
        MARKER_THREE => {
            let b = take(cursor, 2, 3)?;
            Ok(TWO_BYTE_MAX + 1 + u16::from_be_bytes([b[0], b[1]]) as u64)
        }
        MARKER_FOUR => {
            let b = take(cursor, 3, 4)?;
            Ok(u32::from_be_bytes([0, b[0], b[1], b[2]]) as u64)
        }
        MARKER_FIVE => {
            let b = take(cursor, 4, 5)?;
            Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as u64)
        }
        MARKER_NINE => {
            let b = take(cursor, 8, 9)?;
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(b);
            Ok(u64::from_be_bytes(bytes))
        }
        _ => bail!("invalid varint marker: {}", first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        put_varint(value, &mut out);
        out
    }

    #[test]
    fn test_varint_len_matches_encoding_at_boundaries() {
        for value in [
            0,
            240,
            241,
            2287,
            2288,
            67823,
            67824,
            0xFF_FFFF,
            0x100_0000,
            0xFFFF_FFFF,
            0x1_0000_0000,
            u64::MAX,
        ] {
            assert_eq!(encoded(value).len(), varint_len(value), "value {}", value);
        }
    }

    #[test]
    fn test_put_varint_known_layouts() {
        assert_eq!(encoded(240), vec![240]);
        assert_eq!(encoded(241), vec![241, 1]);
        assert_eq!(encoded(2287), vec![248, 255]);
        assert_eq!(encoded(2288), vec![249, 0, 0]);
        assert_eq!(encoded(67824), vec![250, 0x01, 0x08, 0xF0]);
        assert_eq!(encoded(0x100_0000), vec![251, 0x01, 0, 0, 0]);
        assert_eq!(encoded(u64::MAX)[0], 255);
    }

    #[test]
    fn test_read_varint_boundaries() {
        for value in [0, 240, 241, 2287, 2288, 67823, 67824, 0xFFFF_FFFF, u64::MAX] {
            let buf = encoded(value);
            let mut cursor = &buf[..];
            assert_eq!(read_varint(&mut cursor).unwrap(), value);
            assert!(cursor.is_empty());
        }
    }

    #[test]
    fn test_read_varint_advances_cursor() {
        let mut buf = encoded(1000);
        buf.extend_from_slice(&encoded(7));
        let mut cursor = &buf[..];
        assert_eq!(read_varint(&mut cursor).unwrap(), 1000);
        assert_eq!(read_varint(&mut cursor).unwrap(), 7);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_read_varint_empty_fails() {
        let mut cursor: &[u8] = &[];
        let err = read_varint(&mut cursor).unwrap_err();
        assert!(err.to_string().contains("empty buffer"));
    }

    #[test]
    fn test_read_varint_truncated_fails() {
        let cases: [&[u8]; 5] = [
            &[241],
            &[249, 0],
            &[250, 0, 0],
            &[251, 0, 0, 0],
            &[255, 0, 0, 0],
        ];
        for buf in cases {
            let mut cursor = buf;
            let err = read_varint(&mut cursor).unwrap_err();
            assert!(err.to_string().contains("truncated"), "{:?}", buf);
        }
    }

    #[test]
    fn test_read_varint_reserved_markers_fail() {
        for marker in 252u8..=254 {
            let buf = [marker, 0, 0, 0, 0, 0, 0, 0, 0];
            let mut cursor = &buf[..];
            let err = read_varint(&mut cursor).unwrap_err();
            assert!(err.to_string().contains("invalid varint marker"));
        }
    }
}
