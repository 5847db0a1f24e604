//! Persisted form of a `Scope`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use rumor_value::{CodecError, Value};

use super::Scope;

/// Layout version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A scope as two parallel sequences, paired by index.
///
/// Names are written in sorted order so equal scopes encode identically.
/// Order carries no meaning on decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScopeSnapshot {
    pub version: u32,
    pub names: Vec<String>,
    pub values: Vec<Value>,
}

impl ScopeSnapshot {
    fn from_entries(mut entries: Vec<(String, Value)>) -> Self {
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        let (names, values) = entries.into_iter().unzip();
        ScopeSnapshot {
            version: SNAPSHOT_VERSION,
            names,
            values,
        }
    }
}

impl From<&Scope> for ScopeSnapshot {
    fn from(scope: &Scope) -> Self {
        ScopeSnapshot::from_entries(
            scope
                .vars
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        )
    }
}

impl From<Scope> for ScopeSnapshot {
    fn from(scope: Scope) -> Self {
        ScopeSnapshot::from_entries(scope.vars.into_iter().collect())
    }
}

impl TryFrom<ScopeSnapshot> for Scope {
    type Error = CodecError;

    fn try_from(snapshot: ScopeSnapshot) -> Result<Self, Self::Error> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(CodecError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        if snapshot.names.len() != snapshot.values.len() {
            return Err(CodecError::LengthMismatch {
                names: snapshot.names.len(),
                values: snapshot.values.len(),
            });
        }

        let mut vars = FxHashMap::default();
        vars.reserve(snapshot.names.len());
        for (name, value) in snapshot.names.into_iter().zip(snapshot.values) {
            if vars.contains_key(&name) {
                return Err(CodecError::DuplicateName { name });
            }
            vars.insert(name, value);
        }
        tracing::debug!(bindings = vars.len(), "restored scope from snapshot");
        Ok(Scope { vars })
    }
}
