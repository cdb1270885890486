//! Dynamic member model
//!
//! Installation targets are open-ended containers of named members. A
//! [`Container`] is shared and mutable: cloning it clones the handle, not
//! the members, so everything installed through one handle is visible
//! through every other. Containers compare by identity.
//!
//! A container may also be callable, mirroring a function or constructor
//! that carries its own members (a `prototype`, static helpers, ...).

mod json;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Native body of a callable container
pub type NativeFn = dyn Fn(&[Value]) -> Value;

/// A value that can be installed, or read back
///
/// There is no "undefined" variant: an absent member is `None`. Explicit
/// [`Value::Null`] is ordinary content.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Container),
}

impl Value {
    /// A fresh, empty plain object
    pub fn object() -> Self {
        Value::Object(Container::object())
    }

    /// A fresh callable object
    pub fn function(body: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Value::Object(Container::function(body))
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Object(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Truthiness as descriptor fields use it: `null`, `false`, `0`, `NaN`
    /// and the empty string are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Whether this value can be walked as a package descriptor
    pub fn is_extensible(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Whether members can be installed onto this value
    pub fn is_destination(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Read a direct member; `None` for non-containers
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_container().and_then(|c| c.get(key))
    }

    /// Read a member by separated path, e.g. `a.b.c`
    pub fn lookup(&self, path: &str, separator: &str) -> Option<Value> {
        let mut current = self.clone();
        for segment in path.split(separator) {
            current = current.get(segment)?;
        }
        Some(current)
    }

    /// Invoke a callable value; `None` when the value is not callable
    pub fn call(&self, args: &[Value]) -> Option<Value> {
        self.as_container().and_then(|c| c.call(args))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<Container> for Value {
    fn from(container: Container) -> Self {
        Value::Object(container)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

struct Inner {
    call: Option<Rc<NativeFn>>,
    members: RefCell<Vec<(String, Value)>>,
}

/// Shared handle to a mutable, ordered member table
#[derive(Clone)]
pub struct Container {
    inner: Rc<Inner>,
}

impl Container {
    /// Create an empty plain object
    pub fn object() -> Self {
        Self {
            inner: Rc::new(Inner {
                call: None,
                members: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Create an empty callable object
    pub fn function(body: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                call: Some(Rc::new(body)),
                members: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Builder-style [`Container::set`]
    #[must_use]
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner
            .members
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.members.borrow().iter().any(|(k, _)| k == key)
    }

    /// Set a member, returning the value it replaced
    ///
    /// A new key is appended; an existing key keeps its position.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        let mut members = self.inner.members.borrow_mut();
        match members.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                members.push((key, value));
                None
            }
        }
    }

    /// Delete a member so that [`Container::contains`] reports it absent
    pub fn remove(&self, key: &str) -> Option<Value> {
        let mut members = self.inner.members.borrow_mut();
        let index = members.iter().position(|(k, _)| k == key)?;
        Some(members.remove(index).1)
    }

    /// Own member names in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.inner
            .members
            .borrow()
            .iter()
            .map(|(k, _)| k.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.members.borrow().is_empty()
    }

    pub fn is_callable(&self) -> bool {
        self.inner.call.is_some()
    }

    /// Invoke the native body; `None` for plain objects
    pub fn call(&self, args: &[Value]) -> Option<Value> {
        let body = self.inner.call.clone()?;
        Some(body(args))
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &Container) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Container {
    // Members may reference the container itself, so only keys are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("callable", &self.is_callable())
            .field("keys", &self.keys())
            .finish()
    }
}
