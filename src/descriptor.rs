//! Package descriptor builders
//!
//! Descriptors are ordinary [`Value`] objects. These builders write the
//! field names the normalizer looks for, so callers do not have to.
//!
//! ```
//! use installkit::descriptor::{entry, group};
//! use installkit::value::Value;
//!
//! let package = group([
//!     entry("sum", Value::function(|_| Value::from(3))).build(),
//!     entry("answer", 42).override_existing().build(),
//! ])
//! .namespace("prototype")
//! .build();
//! assert!(package.get("items").is_some());
//! ```

use crate::domain::package::fields;
use crate::value::{Container, Value};

/// Start a leaf entry descriptor
pub fn entry(path: impl Into<String>, content: impl Into<Value>) -> EntryBuilder {
    EntryBuilder {
        object: Container::object()
            .with(fields::PATH, Value::String(path.into()))
            .with(fields::CONTENT, content),
    }
}

/// Start a group descriptor over `items`
pub fn group(items: impl IntoIterator<Item = Value>) -> GroupBuilder {
    GroupBuilder {
        object: Container::object().with(fields::ITEMS, Value::Array(items.into_iter().collect())),
    }
}

/// A flat mapping descriptor, members in the given order
pub fn mapping<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Value
where
    K: Into<String>,
    V: Into<Value>,
{
    let object = Container::object();
    for (key, value) in pairs {
        object.set(key, value);
    }
    Value::Object(object)
}

fn hook_value(hook: impl Fn() + 'static) -> Value {
    Value::function(move |_| {
        hook();
        Value::Null
    })
}

/// Builder for a leaf entry descriptor
#[derive(Debug)]
pub struct EntryBuilder {
    object: Container,
}

impl EntryBuilder {
    /// Install onto `dest` instead of the ambient destination
    #[must_use]
    pub fn dest(self, dest: &Container) -> Self {
        self.object.set(fields::DEST, dest.clone());
        self
    }

    /// Allow replacing an occupied path
    #[must_use]
    pub fn override_existing(self) -> Self {
        self.object.set(fields::OVERRIDE, true);
        self
    }

    /// Run `hook` right after the member is set
    #[must_use]
    pub fn on_init(self, hook: impl Fn() + 'static) -> Self {
        self.object.set(fields::INIT, hook_value(hook));
        self
    }

    /// Run `hook` right before the member is removed
    #[must_use]
    pub fn on_destroy(self, hook: impl Fn() + 'static) -> Self {
        self.object.set(fields::DESTROY, hook_value(hook));
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.object)
    }
}

/// Builder for a group descriptor
#[derive(Debug)]
pub struct GroupBuilder {
    object: Container,
}

impl GroupBuilder {
    /// Set the `ns` field
    #[must_use]
    pub fn namespace(self, ns: impl Into<String>) -> Self {
        self.object.set(fields::NAMESPACE[0], Value::String(ns.into()));
        self
    }

    /// Set the `prefix` field
    #[must_use]
    pub fn prefix(self, prefix: impl Into<String>) -> Self {
        self.object.set(fields::NAMESPACE[1], Value::String(prefix.into()));
        self
    }

    /// Set the `basePath` field
    #[must_use]
    pub fn base_path(self, base_path: impl Into<String>) -> Self {
        self.object.set(fields::NAMESPACE[2], Value::String(base_path.into()));
        self
    }

    /// Route every item to `dest`
    #[must_use]
    pub fn dest(self, dest: &Container) -> Self {
        self.object.set(fields::DEST, dest.clone());
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Package;

    #[test]
    fn test_entry_classifies_as_leaf() {
        let value = entry("a.b", 1).override_existing().build();
        let Some(Package::Leaf(spec)) = Package::classify(&value) else {
            panic!("expected a leaf");
        };
        assert_eq!(spec.path, "a.b");
        assert!(spec.override_existing);
    }

    #[test]
    fn test_group_classifies_as_group() {
        let dest = Container::object();
        let value = group([entry("a", 1).build()]).prefix("p").dest(&dest).build();
        let Some(Package::Group(group)) = Package::classify(&value) else {
            panic!("expected a group");
        };
        assert_eq!(group.namespace.as_deref(), Some("p"));
        assert_eq!(group.items.len(), 1);
        assert_eq!(group.destination, Some(Value::Object(dest)));
    }

    #[test]
    fn test_mapping_keeps_order() {
        let value = mapping([("z", 1), ("a", 2)]);
        assert_eq!(value.as_container().unwrap().keys(), vec!["z", "a"]);
    }
}
