//! Configuration errors

use super::HopError;

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> HopError {
    HopError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a parse error for a file that is not valid JSON
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> HopError {
    HopError::ParseError {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing required field error
pub fn missing_field(path: impl Into<String>, field: impl Into<String>) -> HopError {
    HopError::MissingRequiredField {
        path: path.into(),
        field: field.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> HopError {
    HopError::ConfigInvalid {
        message: message.into(),
    }
}
