//! Dotted path helpers
//!
//! Paths are plain strings split on the configured separator. Resolution
//! walks from a destination container down to the container that owns the
//! last segment, creating empty objects for missing segments on the way.

use crate::error::{Result, not_a_container};
use crate::value::{Container, Value};

/// Resolve `path` against `destination` into `(target, key)`
///
/// Every segment but the last must be a container or absent; absent
/// segments are created as empty objects. The last segment is returned as
/// the key without being read or written.
///
/// # Examples
///
/// ```
/// use installkit::path_utils::resolve_target;
/// use installkit::value::Container;
///
/// let lib = Container::object();
/// let (target, key) = resolve_target(&lib, "a.b.c", ".").unwrap();
/// assert_eq!(key, "c");
/// assert!(lib.get("a").is_some());
/// assert!(!target.contains("c"));
/// ```
pub fn resolve_target(
    destination: &Container,
    path: &str,
    separator: &str,
) -> Result<(Container, String)> {
    let mut segments = path.split(separator);
    let mut target = destination.clone();
    // split always yields at least one segment
    let mut key = segments.next().unwrap_or_default().to_string();

    for next in segments {
        target = match target.get(&key) {
            None => {
                let created = Container::object();
                target.set(key.clone(), created.clone());
                created
            }
            Some(Value::Object(existing)) => existing,
            Some(_) => return Err(not_a_container(path, key)),
        };
        key = next.to_string();
    }

    Ok((target, key))
}

/// Prefix for the items of a namespaced group: `namespace + separator + prefix`
pub fn namespaced_prefix(namespace: &str, separator: &str, prefix: &str) -> String {
    format!("{namespace}{separator}{prefix}")
}
