//! Descriptor normalization
//!
//! Flattens a classified [`Package`] into leaf [`EntrySpec`]s with their
//! prefix applied and their destination resolved. Sibling order is kept.

use tracing::trace;

use crate::config::InstallConfig;
use crate::domain::{EntrySpec, Package};
use crate::path_utils::namespaced_prefix;
use crate::value::Value;

/// Recursive descriptor normalizer
///
/// `source` is the value that mapping shorthand reads content from. For the
/// two-argument form it is the top-level descriptor itself, so a nested
/// mapping still looks its keys up in the top-level descriptor.
pub struct Normalizer<'a> {
    separator: &'a str,
    source: Option<&'a Value>,
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a InstallConfig, source: Option<&'a Value>) -> Self {
        Self {
            separator: config.separator(),
            source,
        }
    }

    /// Normalize `input` against `destination` under `prefix`
    ///
    /// A destination that cannot hold members yields nothing.
    pub fn normalize(&self, input: &Package, destination: &Value, prefix: &str) -> Vec<EntrySpec> {
        let mut specs = Vec::new();
        self.collect(input, destination, prefix, &mut specs);
        specs
    }

    fn collect(&self, input: &Package, destination: &Value, prefix: &str, out: &mut Vec<EntrySpec>) {
        let Value::Object(dest) = destination else {
            trace!(prefix = %prefix, "skipping package: destination cannot hold members");
            return;
        };

        match input {
            Package::Sequence(items) => {
                for item in items {
                    self.collect(item, destination, prefix, out);
                }
            }
            Package::Group(group) => {
                let dest_next = group.destination.as_ref().unwrap_or(destination);
                let prefix_next = match &group.namespace {
                    Some(ns) => namespaced_prefix(ns, self.separator, prefix),
                    None => prefix.to_string(),
                };
                trace!(prefix = %prefix_next, items = group.items.len(), "normalizing group");
                for item in &group.items {
                    self.collect(item, dest_next, &prefix_next, out);
                }
            }
            Package::Leaf(spec) => {
                let mut entry = spec.clone();
                entry.path = format!("{prefix}{}", spec.path);
                if entry.destination.is_none() {
                    entry.destination = Some(dest.clone());
                }
                out.push(entry);
            }
            Package::Mapping(keys) => {
                for key in keys {
                    let content = self.source.and_then(|source| source.get(key));
                    let leaf = Package::Leaf(EntrySpec::new(key.clone(), content));
                    self.collect(&leaf, destination, prefix, out);
                }
            }
        }
    }
}
