//! Error types and handling for installkit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`args`]: Entry point argument errors
//! - [`path`]: Path resolution and collision errors
//! - [`config`]: Configuration errors

pub mod args;
pub mod config;
pub mod path;

pub use args::invalid as invalid_arguments;
pub use config::{invalid as config_invalid, parse_failed as config_parse_failed};
pub use path::{collision as path_collision, not_a_container};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallError {
    // Argument errors
    #[error("install: invalid arguments")]
    #[diagnostic(
        code(installkit::args::invalid),
        help(
            "Call install with (destination, descriptor) or (destination, path, content); the destination must be explicit"
        )
    )]
    InvalidArguments { arity: usize },

    // Path errors
    #[error("install: path {path} already exists!")]
    #[diagnostic(
        code(installkit::path::collision),
        help("Unload the previous installation first, or mark the entry with override")
    )]
    PathCollision { path: String },

    #[error("install: cannot resolve path {path}: '{segment}' is not a container")]
    #[diagnostic(
        code(installkit::path::not_a_container),
        help("Every segment before the last one must be an object or a function")
    )]
    NotAContainer { path: String, segment: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(installkit::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to parse configuration: {reason}")]
    #[diagnostic(code(installkit::config::parse_failed))]
    ConfigParseFailed { reason: String },
}

impl From<serde_yaml::Error> for InstallError {
    fn from(err: serde_yaml::Error) -> Self {
        InstallError::ConfigParseFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallError>;
