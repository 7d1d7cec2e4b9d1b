//! # Internal Macros
//!
//! Boilerplate generators for the typed constructors and the native value
//! conversions.
//!
//! ## scalar_constructors!
//!
//! Generates one constructor per numeric tag, named after the tag in snake
//! case, that renders the native value as decimal text.
//!
//! ```ignore
//! impl Value {
//!     scalar_constructors! {
//!         Int64 => i64,
//!         Uint32 => u32,
//!     }
//! }
//!
//! // Generates:
//! // pub fn int64(v: i64) -> Value { Value::from_parts(Type::Int64, v.to_string().into_bytes()) }
//! // pub fn uint32(v: u32) -> Value { Value::from_parts(Type::Uint32, v.to_string().into_bytes()) }
//! ```
//!
//! ## forward_scalar_constructors!
//!
//! Generates `BindVariable` constructors that wrap the `Value` constructor of
//! the same name in `BindVariable::Scalar`.
//!
//! ## native_from!
//!
//! Generates `From<native> for NativeValue` impls, optionally widening the
//! native type first.
//!
//! ```ignore
//! native_from! {
//!     i8 => I32 as i32,
//!     i64 => I64,
//! }
//!
//! // Generates:
//! // impl From<i8> for NativeValue { fn from(v: i8) -> Self { NativeValue::I32(v as i32) } }
//! // impl From<i64> for NativeValue { fn from(v: i64) -> Self { NativeValue::I64(v) } }
//! ```

/// Generates decimal-text constructors for numeric tags.
macro_rules! scalar_constructors {
    ($($tag:ident => $native:ty),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = concat!("`", stringify!($tag), "` value holding `v` as decimal text.")]
                pub fn [<$tag:snake>](v: $native) -> Self {
                    Self::from_parts($crate::types::Type::$tag, v.to_string().into_bytes())
                }
            )*
        }
    };
}

/// Generates `BindVariable` constructors forwarding to `Value`.
macro_rules! forward_scalar_constructors {
    ($($name:ident($arg:ty)),* $(,)?) => {
        $(
            pub fn $name(v: $arg) -> Self {
                Self::Scalar($crate::types::Value::$name(v))
            }
        )*
    };
}

/// Generates `From` impls into `NativeValue`.
macro_rules! native_from {
    (@impl $native:ty, $variant:ident) => {
        impl From<$native> for $crate::bind::NativeValue {
            #[inline]
            fn from(v: $native) -> Self {
                $crate::bind::NativeValue::$variant(v.into())
            }
        }
    };
    (@impl $native:ty, $variant:ident, $wide:ty) => {
        impl From<$native> for $crate::bind::NativeValue {
            #[inline]
            fn from(v: $native) -> Self {
                $crate::bind::NativeValue::$variant(v as $wide)
            }
        }
    };
    ($($native:ty => $variant:ident $(as $wide:ty)?),* $(,)?) => {
        $(
            native_from!(@impl $native, $variant $(, $wide)?);
        )*
    };
}
