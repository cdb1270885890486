//! Installation entries
//!
//! An [`InstallationEntry`] knows where it goes and what it holds. Where it
//! actually landed (`target` and `key`) is only known once it is applied.

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::domain::package::EntrySpec;
use crate::error::{Result, path_collision};
use crate::path_utils::resolve_target;
use crate::value::{Container, Value};

/// Zero-argument lifecycle hook
pub type Hook = Rc<dyn Fn()>;

fn noop() -> Hook {
    Rc::new(|| {})
}

/// Where an applied entry was written
#[derive(Debug, Clone)]
struct Location {
    target: Container,
    key: String,
}

/// A single installable member owned by a controller
pub struct InstallationEntry {
    path: String,
    destination: Container,
    content: Value,
    override_existing: bool,
    init: Hook,
    destroy: Hook,
    location: Option<Location>,
}

impl InstallationEntry {
    /// Build an entry from a normalized spec
    ///
    /// Returns `None` for specs that cannot be installed: no content, an
    /// empty path, or no destination.
    pub fn from_spec(spec: EntrySpec) -> Option<Self> {
        let content = spec.content?;
        let destination = spec.destination?;
        if spec.path.is_empty() {
            return None;
        }
        Some(Self {
            path: spec.path,
            destination,
            content,
            override_existing: spec.override_existing,
            init: spec.on_init.unwrap_or_else(noop),
            destroy: spec.on_destroy.unwrap_or_else(noop),
            location: None,
        })
    }

    /// Fully-qualified path
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn destination(&self) -> &Container {
        &self.destination
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn override_existing(&self) -> bool {
        self.override_existing
    }

    /// Container owning the final segment, once applied
    pub fn target(&self) -> Option<&Container> {
        self.location.as_ref().map(|l| &l.target)
    }

    /// Final path segment, once applied
    pub fn key(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.key.as_str())
    }

    pub fn is_applied(&self) -> bool {
        self.location.is_some()
    }

    /// Write the content at its path and run the init hook
    ///
    /// Intermediate containers are created as needed and stay in place
    /// even if the final key collides.
    pub(crate) fn apply(&mut self, separator: &str) -> Result<()> {
        let (target, key) = resolve_target(&self.destination, &self.path, separator)?;

        if !self.override_existing && target.contains(&key) {
            return Err(path_collision(&self.path));
        }

        target.set(key.clone(), self.content.clone());
        self.location = Some(Location { target, key });
        debug!(path = %self.path, "installed member");

        (self.init)();
        Ok(())
    }

    /// Run the destroy hook and delete the key; no-op when not applied
    pub(crate) fn remove(&mut self) {
        let Some(location) = self.location.take() else {
            return;
        };

        (self.destroy)();
        location.target.remove(&location.key);
        debug!(path = %self.path, "removed member");
    }
}

impl fmt::Debug for InstallationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstallationEntry")
            .field("path", &self.path)
            .field("content", &self.content)
            .field("override_existing", &self.override_existing)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
