//! Runtime values for the Rumor interpreter.
//!
//! A `Value` is one of four scalar kinds. It never changes after
//! construction; operators return new values.
//!
//! # Accessors
//!
//! The `as_*` accessors are total. When the stored kind differs from the
//! requested one they return the caller's default:
//!
//! ```text
//! Value::Int(5).as_int(0)            // 5
//! Value::string("5").as_int(-1)      // -1, strings are never parsed
//! Value::Bool(true).as_float(0.5)    // 0.5
//! ```
//!
//! # Equality
//!
//! Equality is structural and reflexive, so values work as map keys. Floats
//! compare with `==` except that NaN equals NaN (any payload); `-0.0` and
//! `0.0` are equal. Hashing collapses both cases to one bit pattern.
//!
//! # Persisted Layout
//!
//! The serde representation is an externally tagged enum. Under the binary
//! codec the variant index (0 `Bool`, 1 `Int`, 2 `Float`, 3 `Str`) precedes
//! the payload, so the variant order below is part of the save format.

mod heap;
mod ops;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use heap::Heap;

/// Runtime value in the Rumor interpreter.
#[derive(Clone, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// 32-bit signed integer value.
    Int(i32),
    /// 32-bit floating-point value.
    Float(f32),
    /// String value (use `Value::string` to construct).
    Str(Heap<str>),
}

/// Bit pattern of `-0.0`, hashed as `0.0` since the two compare equal.
const NEG_ZERO_BITS: u32 = 0x8000_0000;

/// Every NaN payload hashes as the canonical quiet NaN.
const CANONICAL_NAN_BITS: u32 = 0x7fc0_0000;

impl Value {
    /// Create a string value.
    ///
    /// # Example
    ///
    /// ```text
    /// let name = Value::string("Eve");
    /// let line = Value::string(format!("{greeting}, {name}"));
    /// ```
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// The bool payload, or `default` if this is not a bool.
    #[inline]
    pub fn as_bool(&self, default: bool) -> bool {
        match self {
            Value::Bool(b) => *b,
            _ => default,
        }
    }

    /// The int payload, or `default` if this is not an int.
    #[inline]
    pub fn as_int(&self, default: i32) -> i32 {
        match self {
            Value::Int(n) => *n,
            _ => default,
        }
    }

    /// The float payload, or `default` if this is not a float.
    ///
    /// Ints are not widened here; numeric promotion belongs to the operators.
    #[inline]
    pub fn as_float(&self, default: f32) -> f32 {
        match self {
            Value::Float(f) => *f,
            _ => default,
        }
    }

    /// The string payload, or `default` if this is not a string.
    #[inline]
    pub fn as_str<'a>(&'a self, default: &'a str) -> &'a str {
        match self {
            Value::Str(s) => &**s,
            _ => default,
        }
    }

    /// Get the type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
        }
    }
}

// Conversions used by `Scope::set_var`

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
        }
    }
}

/// Natural textual form, used by string concatenation.
///
/// Strings render without quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // Reflexive float equality: NaN equals NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(x) => {
                let canonical = match x.to_bits() {
                    _ if x.is_nan() => CANONICAL_NAN_BITS,
                    NEG_ZERO_BITS => 0,
                    bits => bits,
                };
                canonical.hash(state);
            }
            Value::Str(s) => s.hash(state),
        }
    }
}
