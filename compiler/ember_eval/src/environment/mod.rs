//! Environments: name bindings chained to an enclosing environment.
//!
//! An environment is a shared handle. Closures keep the environment they were
//! created in alive, and many call frames may share one outer environment.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Value;

/// A single-threaded shared cell.
///
/// Wraps `Rc<RefCell<T>>` so all scope allocations go through
/// [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one frame plus the frame it is nested in.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    outer: Option<Environment>,
}

impl Scope {
    /// Look up `name` here, then along the outer chain.
    fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }
}

/// Handle to a scope. Cloning shares the scope.
#[derive(Clone, Default)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A fresh global environment with no outer scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// A child environment whose lookups fall back to `outer`.
    #[must_use]
    pub fn enclosed(outer: &Environment) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            outer: Some(outer.clone()),
        }))
    }

    /// Look up `name` in this frame, then in the enclosing frames.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.borrow().lookup(name)
    }

    /// Bind `name` in this frame, shadowing any outer binding.
    #[inline]
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Names bound in this frame, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

/// Names only: a frame can (through a closure) contain itself.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.local_names())
            .field("has_outer", &self.0.borrow().outer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
