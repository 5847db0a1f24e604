//! Rumor Eval - variable state and operator dispatch for the Rumor interpreter.
//!
//! # Architecture
//!
//! - `Scope`: flat name → `Value` store, the only mutable state an
//!   expression can observe or alter
//! - `ScopeSnapshot`: the versioned persisted form of a `Scope`
//! - `ScopeStack`: explicit layering of scopes with innermost-first lookup,
//!   for interpreters that need lexical nesting
//! - `evaluate_binary` / `evaluate_unary`: enum-based operator dispatch
//!
//! # Re-exports
//!
//! Value types come from `rumor_value` and are re-exported for convenience:
//! `Value`, `BinaryOp`, `UnaryOp`, `EvalError`, `EvalResult`, `CodecError`.

mod environment;
mod operators;
mod scope;

#[cfg(test)]
mod tests;

use std::sync::Once;

pub use rumor_value::{BinaryOp, CodecError, EvalError, EvalResult, UnaryOp, Value};

pub use environment::{AssignError, ScopeStack};
pub use operators::{evaluate_binary, evaluate_unary};
pub use scope::{Scope, ScopeSnapshot, SNAPSHOT_VERSION};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=rumor_eval=debug` or `RUST_LOG=rumor_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
