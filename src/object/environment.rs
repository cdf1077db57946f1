//! Lexically-chained name→value bindings.
//!
//! A `Function` value closes over the environment active when its literal
//! was evaluated, and that environment must outlive the call frame that
//! created it. `Rc<RefCell<_>>` is the ordinary single-threaded answer —
//! the interpreter never crosses a thread boundary, so there is no need
//! for `Arc`/`Mutex` here.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Object;

#[derive(Debug, Default)]
struct EnvironmentData {
    store: HashMap<String, Object>,
    outer: Option<Environment>,
}

/// A shared handle to one scope frame. Cloning an `Environment` clones the
/// handle, not the bindings — every clone observes the same frame.
#[derive(Debug, Clone)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(EnvironmentData::default())))
    }

    /// Opens a new frame enclosed by `self`, for a function call: lookups
    /// fall through to `self` on a miss, but bindings made in the new frame
    /// never leak back out.
    pub fn enclosed(&self) -> Self {
        Self(Rc::new(RefCell::new(EnvironmentData {
            store: HashMap::new(),
            outer: Some(self.clone()),
        })))
    }

    /// Walks the outer chain looking for `name`.
    pub fn get(&self, name: &str) -> Option<Object> {
        let data = self.0.borrow();
        match data.store.get(name) {
            Some(value) => Some(value.clone()),
            None => data.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` in *this* frame — `let` always targets the innermost
    /// scope, never an outer one.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_through_to_outer_scope() {
        let outer = Environment::new();
        outer.set("x", Object::Integer(5));

        let inner = outer.enclosed();
        assert_eq!(inner.get("x"), Some(Object::Integer(5)));
    }

    #[test]
    fn inner_binding_does_not_leak_to_outer() {
        let outer = Environment::new();
        let inner = outer.enclosed();
        inner.set("y", Object::Integer(10));

        assert_eq!(inner.get("y"), Some(Object::Integer(10)));
        assert_eq!(outer.get("y"), None);
    }

    #[test]
    fn shared_handle_observes_later_writes() {
        let env = Environment::new();
        let handle = env.clone();
        env.set("x", Object::Integer(1));
        assert_eq!(handle.get("x"), Some(Object::Integer(1)));
    }

    #[test]
    fn missing_name_resolves_to_none() {
        let env = Environment::new();
        assert_eq!(env.get("missing"), None);
    }
}
