//! Installation lifecycle controller
//!
//! The controller owns the entries produced by one install call and is the
//! only handle for taking them down and putting them back.

use tracing::{debug, info, warn};

use crate::config::InstallConfig;
use crate::domain::{EntrySpec, InstallationEntry};
use crate::error::Result;

/// Handle over everything one install call put in place
///
/// Dropping the controller leaves installed members where they are; call
/// [`InstallController::unload`] to remove them.
#[derive(Debug)]
pub struct InstallController {
    separator: String,
    entries: Vec<InstallationEntry>,
}

impl InstallController {
    /// Build a controller from normalized specs, without applying them
    ///
    /// Specs with no content, an empty path, or no destination are dropped.
    pub fn from_specs(config: &InstallConfig, specs: Vec<EntrySpec>) -> Self {
        let entries = specs
            .into_iter()
            .filter_map(|spec| {
                let path = spec.path.clone();
                let entry = InstallationEntry::from_spec(spec);
                if entry.is_none() {
                    debug!(path = %path, "dropping entry without content, path or destination");
                }
                entry
            })
            .collect();

        Self {
            separator: config.separator().to_string(),
            entries,
        }
    }

    /// Apply every entry in order
    ///
    /// Stops at the first collision. Entries applied before it stay
    /// applied and are still removed by a later [`unload`](Self::unload).
    pub fn init(&mut self) -> Result<()> {
        for entry in &mut self.entries {
            if let Err(err) = entry.apply(&self.separator) {
                warn!(path = %entry.path(), error = %err, "install aborted");
                return Err(err);
            }
        }
        info!(count = self.entries.len(), "installed entries");
        Ok(())
    }

    /// Remove every applied entry in order, running destroy hooks
    ///
    /// Entries are kept so that [`init`](Self::init) can apply them again.
    /// Calling it twice is harmless.
    pub fn unload(&mut self) {
        let mut removed = 0;
        for entry in &mut self.entries {
            if entry.is_applied() {
                entry.remove();
                removed += 1;
            }
        }
        info!(count = removed, "unloaded entries");
    }

    /// [`unload`](Self::unload) followed by [`init`](Self::init)
    pub fn reload(&mut self) -> Result<()> {
        self.unload();
        self.init()
    }

    pub fn entries(&self) -> &[InstallationEntry] {
        &self.entries
    }

    /// Fully-qualified paths in installation order
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(InstallationEntry::path).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry is currently applied
    pub fn is_loaded(&self) -> bool {
        self.entries.iter().any(InstallationEntry::is_applied)
    }
}
