//! Domain models for installkit
//!
//! This module contains the types that flow from a raw descriptor to an
//! applied member: [`Package`] is the classified descriptor shape,
//! [`EntrySpec`] a leaf before filtering, and [`InstallationEntry`] the
//! unit owned by a controller.

pub mod entry;
pub mod package;

pub use entry::{Hook, InstallationEntry};
pub use package::{EntrySpec, GroupSpec, Package};
