//! Variable bindings for a script session.
//!
//! A `Scope` is flat: one map from name to `Value`, no parent. Interpreters
//! that need nesting layer scopes with `ScopeStack`.

mod snapshot;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use rumor_value::{codec, CodecError, Value};

pub use snapshot::{ScopeSnapshot, SNAPSHOT_VERSION};

/// Name → `Value` bindings.
///
/// Looking up an unbound name is not an error: `get_var` returns `None`,
/// which stays distinct from a bound `Bool(false)` or `Int(0)`.
///
/// Serde goes through `ScopeSnapshot`, so embedding a `Scope` in another
/// serde format yields the same `(version, names, values)` layout as
/// [`Scope::encode`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "ScopeSnapshot", try_from = "ScopeSnapshot")]
pub struct Scope {
    /// Variable bindings (`FxHashMap` for faster hashing of short names).
    vars: FxHashMap<String, Value>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Scope {
            vars: FxHashMap::default(),
        }
    }

    /// Bind `name` to `value`, replacing any existing binding.
    ///
    /// Accepts `bool`, `i32`, `f32`, `&str`, `String` or a prebuilt `Value`.
    #[inline]
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        tracing::trace!(%name, kind = value.type_name(), "set variable");
        self.vars.insert(name, value);
    }

    /// Look up a variable by name.
    #[inline]
    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Returns `true` if `name` is bound, whatever its value.
    #[inline]
    pub fn has_var(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Remove a binding, returning its value.
    pub fn remove_var(&mut self, name: &str) -> Option<Value> {
        self.vars.remove(name)
    }

    /// Remove every binding in this scope.
    ///
    /// `recursive` is accepted for callers that layer parent scopes on top;
    /// a flat scope has no parent, so it only clears the local bindings.
    /// Use `ScopeStack::clear` for layered clearing.
    pub fn clear(&mut self, recursive: bool) {
        tracing::trace!(bindings = self.vars.len(), recursive, "clear scope");
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        let mut entries: Vec<_> = self
            .vars
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Encode every binding into the persisted snapshot format.
    #[tracing::instrument(level = "debug", skip_all, fields(bindings = self.vars.len()))]
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(&ScopeSnapshot::from(self))
    }

    /// Decode a scope written by [`Scope::encode`].
    ///
    /// Fails without producing a partial scope if the bytes are malformed
    /// or the snapshot is inconsistent.
    #[tracing::instrument(level = "debug", skip_all, fields(len = bytes.len()))]
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let snapshot: ScopeSnapshot = codec::decode(bytes)?;
        Scope::try_from(snapshot)
    }
}
