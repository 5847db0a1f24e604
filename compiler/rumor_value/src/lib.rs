#![deny(clippy::arithmetic_side_effects)]
//! Rumor Value - runtime values for the Rumor scripting language.
//!
//! This crate provides:
//! - `Value`: the immutable, type-tagged scalar every script expression
//!   produces and consumes (bool, int, float, string)
//! - The operator algebra on `Value` (arithmetic with numeric promotion,
//!   boolean operators with default coercion, structural equality)
//! - `BinaryOp` / `UnaryOp` for interpreters that dispatch on operator nodes
//! - `EvalError` for the arithmetic-domain failures that cannot be coerced away
//! - The binary codec for persisted values (`encode_value`, `decode_value`)
//!
//! # Mismatch Policy
//!
//! Kind mismatches are never errors. Accessors fall back to a caller-supplied
//! default, operators coerce. Only integer division by zero and integer
//! overflow are reported through `EvalError`.

pub mod codec;
mod errors;
mod operators;
mod value;

pub use codec::{decode_value, encode_value, CodecError};
pub use errors::{division_by_zero, integer_overflow, EvalError, EvalResult};
pub use operators::{BinaryOp, UnaryOp};
pub use value::{Heap, Value};
