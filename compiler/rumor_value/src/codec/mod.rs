//! Binary codec for persisted runtime state.
//!
//! Everything the runtime persists goes through one bincode configuration:
//! fixed-width little-endian integers, and trailing bytes are rejected so a
//! truncated or concatenated save never decodes as something else.
//!
//! A `Value` encodes as its `u32` variant index followed by the payload in
//! its exact type (`u8` bool, `i32`, `f32` bits, length-prefixed UTF-8).

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::value::Value;

/// Failure to encode or decode persisted state.
///
/// Decoding is all-or-nothing: on any error no partial structure is produced.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Bytes are not a valid encoding (unknown variant tag, truncation,
    /// invalid UTF-8, trailing data).
    #[error("malformed encoding: {0}")]
    Format(#[from] bincode::Error),
    /// A scope snapshot whose name and value sequences differ in length.
    #[error("scope snapshot has {names} names but {values} values")]
    LengthMismatch { names: usize, values: usize },
    /// A scope snapshot written by an unknown layout version.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    /// A scope snapshot that binds the same name twice.
    #[error("duplicate variable `{name}` in scope snapshot")]
    DuplicateName { name: String },
}

#[inline]
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// Encode any serializable runtime structure.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(options().serialize(value)?)
}

/// Decode a runtime structure previously written by [`encode`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    options().deserialize(bytes).map_err(|err| {
        tracing::debug!(error = %err, len = bytes.len(), "failed to decode persisted state");
        CodecError::from(err)
    })
}

/// Encode a single value as `(variant tag, payload)`.
pub fn encode_value(value: &Value) -> Result<Vec<u8>, CodecError> {
    encode(value)
}

/// Decode a single value.
pub fn decode_value(bytes: &[u8]) -> Result<Value, CodecError> {
    decode(bytes)
}
