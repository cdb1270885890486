//! Entry point argument errors

use super::InstallError;

/// Creates an invalid arguments error for a call with `arity` arguments
pub fn invalid(arity: usize) -> InstallError {
    InstallError::InvalidArguments { arity }
}
