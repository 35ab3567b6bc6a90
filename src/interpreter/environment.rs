use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::interpreter::value::Value;

/// A mapping from names to runtime values, chained for scoping.
///
/// An environment owns its local bindings and may hold a shared reference to
/// an outer environment. Name lookup tries the local map first and then
/// walks the outer chain, innermost first, until the name is found or the
/// chain is exhausted.
///
/// Environments are shared: a new one is created per program run (the
/// global environment) and per function call, and a function value keeps a
/// reference to the environment it was defined in. An environment therefore
/// lives as long as its longest-lived referent, which is either the call
/// stack or a captured closure.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty environment with no outer chain. This is the global
    /// environment of a program run.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            outer: None,
        }
    }

    /// Creates an empty environment that falls back to `outer` on lookup
    /// misses.
    ///
    /// Function application uses this to bind parameters in a fresh scope
    /// that encloses the function's defining environment.
    #[must_use]
    pub fn new_enclosed(outer: Rc<RefCell<Self>>) -> Self {
        Self {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    /// Resolves a name, walking the outer chain on a local miss.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this environment, shadowing any outer binding of the
    /// same name.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
