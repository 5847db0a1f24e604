//! Layered scopes for lexical nesting.
//!
//! A flat `Scope` has no parent. `ScopeStack` models nesting explicitly:
//! a global scope at the bottom plus a stack of local layers, searched
//! innermost first.

use rumor_value::Value;

use crate::scope::Scope;

/// Error returned by `ScopeStack::assign`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    /// Variable not bound in any layer.
    #[error("undefined variable: {name}")]
    Undefined { name: String },
}

/// Stack of scopes with shadowing.
///
/// - `set_var` binds in the innermost layer, shadowing outer bindings.
/// - `assign` updates the innermost layer that already binds the name.
/// - `get_var` / `has_var` search from the innermost layer outwards.
/// - The global scope is never popped.
#[derive(Clone, Debug, Default)]
pub struct ScopeStack {
    /// Global scope (always at the bottom).
    global: Scope,
    /// Local layers, with the current scope at the top.
    locals: Vec<Scope>,
}

impl ScopeStack {
    /// Create a stack holding one empty global scope.
    pub fn new() -> Self {
        ScopeStack {
            global: Scope::new(),
            locals: Vec::new(),
        }
    }

    /// Number of layers, counting the global scope.
    pub fn depth(&self) -> usize {
        self.locals.len().saturating_add(1)
    }

    /// Push a new empty scope.
    pub fn push_scope(&mut self) {
        self.locals.push(Scope::new());
        tracing::trace!(depth = self.depth(), "push scope");
    }

    /// Pop the current scope, returning it.
    ///
    /// Returns `None` when only the global scope remains.
    pub fn pop_scope(&mut self) -> Option<Scope> {
        let popped = self.locals.pop();
        tracing::trace!(depth = self.depth(), popped = popped.is_some(), "pop scope");
        popped
    }

    /// The innermost scope.
    #[inline]
    pub fn current(&self) -> &Scope {
        self.locals.last().unwrap_or(&self.global)
    }

    #[inline]
    fn current_mut(&mut self) -> &mut Scope {
        match self.locals.last_mut() {
            Some(scope) => scope,
            None => &mut self.global,
        }
    }

    pub fn global(&self) -> &Scope {
        &self.global
    }

    pub fn global_mut(&mut self) -> &mut Scope {
        &mut self.global
    }

    /// Drop all local layers and return the global scope.
    pub fn into_global(self) -> Scope {
        self.global
    }

    /// Bind a variable in the current scope.
    #[inline]
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.current_mut().set_var(name, value);
    }

    /// Update the innermost existing binding of `name`.
    pub fn assign(&mut self, name: &str, value: impl Into<Value>) -> Result<(), AssignError> {
        let layer = self
            .locals
            .iter_mut()
            .rev()
            .find(|scope| scope.has_var(name));
        match layer {
            Some(scope) => scope.set_var(name, value),
            None if self.global.has_var(name) => self.global.set_var(name, value),
            None => {
                return Err(AssignError::Undefined {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Look up a variable, innermost layer first.
    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.locals
            .iter()
            .rev()
            .find_map(|scope| scope.get_var(name))
            .or_else(|| self.global.get_var(name))
    }

    /// Returns `true` if any layer binds `name`.
    pub fn has_var(&self, name: &str) -> bool {
        self.locals.iter().any(|scope| scope.has_var(name)) || self.global.has_var(name)
    }

    /// Clear bindings.
    ///
    /// Non-recursive clears only the current scope. Recursive clears every
    /// layer and drops all local scopes, leaving one empty global scope.
    pub fn clear(&mut self, recursive: bool) {
        if recursive {
            tracing::debug!(depth = self.depth(), "clear all scopes");
            self.locals.clear();
            self.global.clear(false);
        } else {
            self.current_mut().clear(false);
        }
    }
}

impl From<Scope> for ScopeStack {
    /// Seed the global scope, e.g. with a restored save.
    fn from(global: Scope) -> Self {
        ScopeStack {
            global,
            locals: Vec::new(),
        }
    }
}
