//! File system errors

use super::HopError;

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> HopError {
    HopError::IoError {
        message: message.into(),
        source: None,
    }
}
