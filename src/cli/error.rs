use crate::error::{ErrorKind, LayoutError};

// Exit codes for CLI automation
pub const SUCCESS: i32 = 0;
pub const ERROR: i32 = 1;
pub const NOT_FOUND: i32 = 2;
pub const INVALID_INPUT: i32 = 3;
pub const CONFLICT: i32 = 4;

/// Map a handler error to an exit code
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<LayoutError>().map(LayoutError::kind) {
        Some(ErrorKind::DirectoryConflict) => CONFLICT,
        Some(ErrorKind::Listing | ErrorKind::NotADirectory) => NOT_FOUND,
        Some(ErrorKind::InvalidArgument) => INVALID_INPUT,
        _ => ERROR,
    }
}
