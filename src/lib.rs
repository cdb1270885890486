//! installkit - install named members at dotted paths
//!
//! Attaches a batch of members (functions, objects, plain values) onto a
//! destination container at dotted paths, creating intermediate containers
//! on the way, and hands back a controller that can unload and reload the
//! whole batch as a unit.
//!
//! ```
//! use installkit::{InstallConfig, install_one};
//! use installkit::value::{Container, Value};
//!
//! let config = InstallConfig::default();
//! let lib = Container::object();
//! let mut controller = install_one(&config, &lib, "a.b.c", 1).unwrap();
//! assert_eq!(Value::Object(lib.clone()).lookup("a.b.c", "."), Some(Value::from(1)));
//!
//! controller.unload();
//! assert_eq!(Value::Object(lib).lookup("a.b.c", "."), None);
//! ```

pub mod config;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod installer;
pub mod path_utils;
pub mod value;

pub use config::InstallConfig;
pub use error::{InstallError, Result};
pub use installer::{
    InstallController, install, install_entries, install_from_map, install_in_context,
    install_one,
};
