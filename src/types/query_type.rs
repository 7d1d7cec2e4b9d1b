//! # Wire Type Tags
//!
//! The closed set of type tags carried by every value on the wire. The
//! discriminants are the protocol's stable `i32` codes: the low byte is a
//! per-type ordinal and the high bits are category flags.
//!
//! ## Flag Layout
//!
//! | Flag | Bit | Meaning |
//! |------|-----|---------|
//! | `INTEGRAL` | 0x100 | integer payload in decimal text |
//! | `UNSIGNED` | 0x200 | integer payload is non-negative |
//! | `FLOAT` | 0x400 | floating-point payload in decimal text |
//! | `QUOTED` | 0x800 | payload is quoted when rendered as SQL |
//! | `TEXT` | 0x1000 | payload is character data |
//! | `BINARY` | 0x2000 | payload is raw bytes |
//!
//! The flags are derived from the discriminant, so `Type::Int64 as i32 & 0x100`
//! is set and `Type::Uint64` carries both `INTEGRAL` and `UNSIGNED`.
//!
//! ## Categories
//!
//! | Category | Tags |
//! |----------|------|
//! | **Signed** | INT8, INT16, INT24, INT32, INT64 |
//! | **Unsigned** | UINT8, UINT16, UINT24, UINT32, UINT64 |
//! | **Float** | FLOAT32, FLOAT64 |
//! | **Temporal** | TIMESTAMP, DATE, TIME, DATETIME, YEAR |
//! | **Text/Binary** | TEXT, BLOB, VARCHAR, VARBINARY, CHAR, BINARY |
//! | **Opaque** | DECIMAL, BIT, ENUM, SET, GEOMETRY, JSON, HEXNUM, HEXVAL, BITNUM |
//! | **Never a literal** | EXPRESSION |
//! | **Composite** | TUPLE |
//! | **Null** | NULL_TYPE |

use crate::errors::BindError;
use phf::phf_map;
use std::fmt;

const FLAG_INTEGRAL: i32 = 0x100;
const FLAG_UNSIGNED: i32 = 0x200;
const FLAG_FLOAT: i32 = 0x400;
const FLAG_QUOTED: i32 = 0x800;
const FLAG_TEXT: i32 = 0x1000;
const FLAG_BINARY: i32 = 0x2000;

/// Type tag of a wire value.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Type {
    NullType = 0,
    Int8 = 257,
    Uint8 = 770,
    Int16 = 259,
    Uint16 = 772,
    Int24 = 261,
    Uint24 = 774,
    Int32 = 263,
    Uint32 = 776,
    Int64 = 265,
    Uint64 = 778,
    Float32 = 1035,
    Float64 = 1036,
    Timestamp = 2061,
    Date = 2062,
    Time = 2063,
    Datetime = 2064,
    Year = 785,
    Decimal = 18,
    Text = 6163,
    Blob = 10260,
    Varchar = 6165,
    Varbinary = 10262,
    Char = 6167,
    Binary = 10264,
    Bit = 2073,
    Enum = 2074,
    Set = 2075,
    Tuple = 28,
    Geometry = 2077,
    Json = 2078,
    Expression = 31,
    HexNum = 4128,
    HexVal = 4129,
    BitNum = 4130,
}

static TYPE_NAMES: phf::Map<&'static str, Type> = phf_map! {
    "NULL_TYPE" => Type::NullType,
    "INT8" => Type::Int8,
    "UINT8" => Type::Uint8,
    "INT16" => Type::Int16,
    "UINT16" => Type::Uint16,
    "INT24" => Type::Int24,
    "UINT24" => Type::Uint24,
    "INT32" => Type::Int32,
    "UINT32" => Type::Uint32,
    "INT64" => Type::Int64,
    "UINT64" => Type::Uint64,
    "FLOAT32" => Type::Float32,
    "FLOAT64" => Type::Float64,
    "TIMESTAMP" => Type::Timestamp,
    "DATE" => Type::Date,
    "TIME" => Type::Time,
    "DATETIME" => Type::Datetime,
    "YEAR" => Type::Year,
    "DECIMAL" => Type::Decimal,
    "TEXT" => Type::Text,
    "BLOB" => Type::Blob,
    "VARCHAR" => Type::Varchar,
    "VARBINARY" => Type::Varbinary,
    "CHAR" => Type::Char,
    "BINARY" => Type::Binary,
    "BIT" => Type::Bit,
    "ENUM" => Type::Enum,
    "SET" => Type::Set,
    "TUPLE" => Type::Tuple,
    "GEOMETRY" => Type::Geometry,
    "JSON" => Type::Json,
    "EXPRESSION" => Type::Expression,
    "HEXNUM" => Type::HexNum,
    "HEXVAL" => Type::HexVal,
    "BITNUM" => Type::BitNum,
};

impl Type {
    /// Every tag, in discriminant declaration order.
    pub const ALL: [Type; 35] = [
        Type::NullType,
        Type::Int8,
        Type::Uint8,
        Type::Int16,
        Type::Uint16,
        Type::Int24,
        Type::Uint24,
        Type::Int32,
        Type::Uint32,
        Type::Int64,
        Type::Uint64,
        Type::Float32,
        Type::Float64,
        Type::Timestamp,
        Type::Date,
        Type::Time,
        Type::Datetime,
        Type::Year,
        Type::Decimal,
        Type::Text,
        Type::Blob,
        Type::Varchar,
        Type::Varbinary,
        Type::Char,
        Type::Binary,
        Type::Bit,
        Type::Enum,
        Type::Set,
        Type::Tuple,
        Type::Geometry,
        Type::Json,
        Type::Expression,
        Type::HexNum,
        Type::HexVal,
        Type::BitNum,
    ];

    /// Wire discriminant of this tag.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Looks up a tag by wire discriminant.
    pub fn from_code(code: i32) -> Option<Type> {
        Type::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Looks up a tag by its protocol name, e.g. `"INT64"`.
    pub fn from_name(name: &str) -> Option<Type> {
        TYPE_NAMES.get(name).copied()
    }

    /// Protocol name of this tag, as printed by the formatter.
    pub const fn name(self) -> &'static str {
        match self {
            Type::NullType => "NULL_TYPE",
            Type::Int8 => "INT8",
            Type::Uint8 => "UINT8",
            Type::Int16 => "INT16",
            Type::Uint16 => "UINT16",
            Type::Int24 => "INT24",
            Type::Uint24 => "UINT24",
            Type::Int32 => "INT32",
            Type::Uint32 => "UINT32",
            Type::Int64 => "INT64",
            Type::Uint64 => "UINT64",
            Type::Float32 => "FLOAT32",
            Type::Float64 => "FLOAT64",
            Type::Timestamp => "TIMESTAMP",
            Type::Date => "DATE",
            Type::Time => "TIME",
            Type::Datetime => "DATETIME",
            Type::Year => "YEAR",
            Type::Decimal => "DECIMAL",
            Type::Text => "TEXT",
            Type::Blob => "BLOB",
            Type::Varchar => "VARCHAR",
            Type::Varbinary => "VARBINARY",
            Type::Char => "CHAR",
            Type::Binary => "BINARY",
            Type::Bit => "BIT",
            Type::Enum => "ENUM",
            Type::Set => "SET",
            Type::Tuple => "TUPLE",
            Type::Geometry => "GEOMETRY",
            Type::Json => "JSON",
            Type::Expression => "EXPRESSION",
            Type::HexNum => "HEXNUM",
            Type::HexVal => "HEXVAL",
            Type::BitNum => "BITNUM",
        }
    }

    #[inline]
    const fn has_flag(self, flag: i32) -> bool {
        self.code() & flag == flag
    }

    /// Returns true for signed and unsigned integer tags, YEAR included.
    pub const fn is_integral(self) -> bool {
        self.has_flag(FLAG_INTEGRAL)
    }

    /// Returns true for the five signed integer tags.
    pub const fn is_signed(self) -> bool {
        self.has_flag(FLAG_INTEGRAL) && !self.has_flag(FLAG_UNSIGNED)
    }

    /// Returns true for the unsigned integer tags, YEAR included.
    pub const fn is_unsigned(self) -> bool {
        self.has_flag(FLAG_INTEGRAL | FLAG_UNSIGNED)
    }

    pub const fn is_float(self) -> bool {
        self.has_flag(FLAG_FLOAT)
    }

    /// Integral or floating point. DECIMAL is deliberately excluded: its
    /// payload is opaque text.
    pub const fn is_number(self) -> bool {
        self.is_integral() || self.is_float()
    }

    pub const fn is_quoted(self) -> bool {
        self.has_flag(FLAG_QUOTED)
    }

    pub const fn is_text(self) -> bool {
        self.has_flag(FLAG_TEXT)
    }

    pub const fn is_binary(self) -> bool {
        self.has_flag(FLAG_BINARY)
    }

    pub const fn is_temporal(self) -> bool {
        matches!(
            self,
            Type::Timestamp | Type::Date | Type::Time | Type::Datetime | Type::Year
        )
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Type {
    type Error = BindError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Type::from_code(code)
            .ok_or_else(|| BindError::MalformedWire(format!("unknown type tag: {}", code)))
    }
}

impl From<Type> for i32 {
    fn from(t: Type) -> i32 {
        t.code()
    }
}
