//! Package descriptor classification
//!
//! Descriptors arrive as loosely shaped [`Value`]s. [`Package::classify`]
//! turns one into a closed set of shapes once, at the boundary, so the
//! normalizer can match exhaustively instead of probing fields.

use std::fmt;
use std::rc::Rc;

use crate::domain::entry::Hook;
use crate::value::{Container, Value};

/// Field names recognized in descriptor objects
pub mod fields {
    pub const ITEMS: &str = "items";
    pub const PATH: &str = "path";
    pub const CONTENT: &str = "content";
    pub const DEST: &str = "dest";
    pub const OVERRIDE: &str = "override";
    pub const INIT: &str = "init";
    pub const DESTROY: &str = "destroy";
    /// Namespace fields, in priority order
    pub const NAMESPACE: &[&str] = &["ns", "prefix", "basePath"];
}

/// A classified package descriptor
#[derive(Debug, Clone)]
pub enum Package {
    /// Ordered entries, each normalized in turn
    Sequence(Vec<Package>),
    /// Nested items under an optional namespace and destination override
    Group(GroupSpec),
    /// A single path and content
    Leaf(EntrySpec),
    /// Flat mapping shorthand: one entry per key
    ///
    /// Only the keys are kept. Content is read from the normalizer's source
    /// value under the same key, not from the mapping itself.
    Mapping(Vec<String>),
}

/// A group descriptor
#[derive(Debug, Clone, Default)]
pub struct GroupSpec {
    /// Prepended to the prefix of every item, followed by the separator
    pub namespace: Option<String>,
    /// Replaces the ambient destination for every item
    pub destination: Option<Value>,
    pub items: Vec<Package>,
}

/// A leaf entry before it is filtered into an [`InstallationEntry`]
///
/// [`InstallationEntry`]: crate::domain::InstallationEntry
#[derive(Clone, Default)]
pub struct EntrySpec {
    pub path: String,
    /// `None` means no content at all; such entries are dropped
    pub content: Option<Value>,
    pub destination: Option<Container>,
    pub override_existing: bool,
    pub on_init: Option<Hook>,
    pub on_destroy: Option<Hook>,
}

impl EntrySpec {
    pub fn new(path: impl Into<String>, content: Option<Value>) -> Self {
        Self {
            path: path.into(),
            content,
            ..Self::default()
        }
    }

    fn from_object(object: &Container, path: String) -> Self {
        Self {
            path,
            content: object.get(fields::CONTENT),
            destination: object
                .get(fields::DEST)
                .and_then(|d| d.as_container().cloned()),
            override_existing: object.get(fields::OVERRIDE) == Some(Value::Bool(true)),
            on_init: hook_member(object, fields::INIT),
            on_destroy: hook_member(object, fields::DESTROY),
        }
    }
}

impl fmt::Debug for EntrySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntrySpec")
            .field("path", &self.path)
            .field("content", &self.content)
            .field("destination", &self.destination)
            .field("override_existing", &self.override_existing)
            .field("on_init", &self.on_init.is_some())
            .field("on_destroy", &self.on_destroy.is_some())
            .finish()
    }
}

/// Callable members become hooks; anything else is ignored
fn hook_member(object: &Container, field: &str) -> Option<Hook> {
    let callable = object
        .get(field)?
        .as_container()
        .filter(|c| c.is_callable())?
        .clone();
    Some(Rc::new(move || {
        callable.call(&[]);
    }))
}

impl Package {
    /// Classify a descriptor value
    ///
    /// Returns `None` for values that are not extensible (primitives and
    /// null); those normalize to nothing. Shapes are tested in order:
    /// array, group (`items` is an array), leaf (`path` is a string and
    /// `content` is present), and finally mapping.
    pub fn classify(value: &Value) -> Option<Package> {
        match value {
            Value::Array(items) => Some(Package::Sequence(
                items.iter().filter_map(Package::classify).collect(),
            )),
            Value::Object(object) => Some(Self::classify_object(object)),
            _ => None,
        }
    }

    fn classify_object(object: &Container) -> Package {
        if let Some(Value::Array(items)) = object.get(fields::ITEMS) {
            return Package::Group(GroupSpec {
                namespace: namespace_of(object),
                destination: object.get(fields::DEST).filter(Value::is_truthy),
                items: items.iter().filter_map(Package::classify).collect(),
            });
        }

        if let Some(Value::String(path)) = object.get(fields::PATH) {
            if object.contains(fields::CONTENT) {
                return Package::Leaf(EntrySpec::from_object(object, path));
            }
        }

        Package::Mapping(object.keys())
    }
}

/// First truthy namespace field; only strings are used as namespaces
fn namespace_of(object: &Container) -> Option<String> {
    fields::NAMESPACE
        .iter()
        .find_map(|field| object.get(field).filter(Value::is_truthy))
        .and_then(|ns| ns.as_str().map(str::to_string))
}
