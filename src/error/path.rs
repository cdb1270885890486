//! Path resolution errors

use super::InstallError;

/// Creates a path collision error naming the fully-qualified path
pub fn collision(path: impl Into<String>) -> InstallError {
    InstallError::PathCollision { path: path.into() }
}

/// Creates an error for a path walk that hit a non-container segment
pub fn not_a_container(path: impl Into<String>, segment: impl Into<String>) -> InstallError {
    InstallError::NotAContainer {
        path: path.into(),
        segment: segment.into(),
    }
}
