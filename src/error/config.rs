//! Configuration errors

use super::InstallError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> InstallError {
    InstallError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(reason: impl Into<String>) -> InstallError {
    InstallError::ConfigParseFailed {
        reason: reason.into(),
    }
}
