//! # Bind Variable Equality and Formatting
//!
//! Deep equality over bind variable maps, and rendering of a map for logs.
//!
//! ## Elision
//!
//! Unless [`FormatOptions::full`] is set, every entry other than an integral
//! or floating-point scalar is replaced by a `VARCHAR` placeholder before
//! rendering: tuples become `"N items"`, all other scalars `"N bytes"`. This
//! bounds log lines for large binary or `IN (...)` parameters.
//!
//! ## Text Mode
//!
//! ```text
//! map[id:type:INT64 value:"7" names:type:VARCHAR value:"2 items"]
//! ```
//!
//! Keys are sorted. Fields at their default (`NULL_TYPE`, empty payload) are
//! omitted, as in protobuf text format.
//!
//! ## JSON Mode
//!
//! ```text
//! {"id": {"type": "INT64", "value": 7}, "names": {"type": "VARCHAR", "value": "2 items"}}
//! ```
//!
//! Numeric payloads that are valid JSON numbers are written unquoted; every
//! other payload is a JSON string. A full-mode tuple has an empty `value`.
//! `VARBINARY` is reported as `VARCHAR`, since the payload is written as a
//! JSON string either way.

use crate::config::{FormatOptions, ELIDED_BYTES_SUFFIX, ELIDED_ITEMS_SUFFIX};
use crate::types::{BindVariable, BindVars, Type, Value};
use hashbrown::HashMap;
use std::borrow::Cow;
use std::fmt::{self, Write};

/// True iff both maps have the same keys and, per key, equal type and
/// payload. Tuple elements compare in order.
pub fn bind_variables_equal<V: PartialEq>(a: &HashMap<String, V>, b: &HashMap<String, V>) -> bool {
    a.len() == b.len() && a.iter().all(|(k, v)| b.get(k) == Some(v))
}

/// Renders `vars` according to `opts`.
pub fn format_bind_variables(vars: &BindVars, opts: &FormatOptions) -> String {
    BindVarsDisplay::new(vars, *opts).to_string()
}

/// Lazily formatted view of a bind variable map, for log macros.
pub struct BindVarsDisplay<'a> {
    vars: &'a BindVars,
    opts: FormatOptions,
}

impl<'a> BindVarsDisplay<'a> {
    pub fn new(vars: &'a BindVars, opts: FormatOptions) -> Self {
        Self { vars, opts }
    }
}

fn elide(bv: &BindVariable) -> Cow<'_, BindVariable> {
    let placeholder = match bv {
        BindVariable::Tuple(t) => format!("{} {}", t.len(), ELIDED_ITEMS_SUFFIX),
        BindVariable::Scalar(v) if v.ty().is_number() => return Cow::Borrowed(bv),
        BindVariable::Scalar(v) => format!("{} {}", v.len(), ELIDED_BYTES_SUFFIX),
    };
    Cow::Owned(BindVariable::string(placeholder))
}

impl fmt::Display for BindVarsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&String, &BindVariable)> = self.vars.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let entries = entries.into_iter().map(|(k, bv)| {
            let bv = if self.opts.full { Cow::Borrowed(bv) } else { elide(bv) };
            (k, bv)
        });

        if self.opts.as_json {
            f.write_char('{')?;
            for (i, (key, bv)) in entries.enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_json_entry(f, key, &bv)?;
            }
            f.write_char('}')
        } else {
            f.write_str("map[")?;
            for (i, (key, bv)) in entries.enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{}:", key)?;
                write_text_bind_variable(f, &bv)?;
            }
            f.write_char(']')
        }
    }
}

fn write_text_scalar(f: &mut fmt::Formatter<'_>, v: &Value) -> fmt::Result {
    let mut sep = "";
    if v.ty() != Type::NullType {
        write!(f, "type:{}", v.ty())?;
        sep = " ";
    }
    if !v.is_empty() {
        write!(f, "{}value:\"{}\"", sep, v.raw().escape_ascii())?;
    }
    Ok(())
}

fn write_text_bind_variable(f: &mut fmt::Formatter<'_>, bv: &BindVariable) -> fmt::Result {
    match bv {
        BindVariable::Scalar(v) => write_text_scalar(f, v),
        BindVariable::Tuple(t) => {
            write!(f, "type:{}", Type::Tuple)?;
            for v in t {
                f.write_str(" values:{")?;
                write_text_scalar(f, v)?;
                f.write_char('}')?;
            }
            Ok(())
        }
    }
}

fn json_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
}

/// Type name reported in JSON output; binary payloads are rendered as text.
fn json_type_name(ty: Type) -> Type {
    match ty {
        Type::Varbinary => Type::Varchar,
        other => other,
    }
}

fn write_json_entry(f: &mut fmt::Formatter<'_>, key: &str, bv: &BindVariable) -> fmt::Result {
    write!(
        f,
        "{}: {{\"type\": \"{}\", \"value\": ",
        json_string(key),
        json_type_name(bv.ty())
    )?;
    match bv {
        BindVariable::Tuple(_) => f.write_str("\"\"")?,
        BindVariable::Scalar(v) if v.ty().is_number() && is_json_number(v.raw()) => {
            f.write_str(&v.to_str_lossy())?
        }
        BindVariable::Scalar(v) => f.write_str(&json_string(&v.to_str_lossy()))?,
    }
    f.write_char('}')
}

fn is_json_number(raw: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Number>(raw).is_ok()
}
