//! Error types and handling for hop
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Locating, reading and parsing the descriptor
//! - [`lookup`]: Named references that did not resolve
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod lookup;

pub use config::{
    invalid as config_invalid, missing_field, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::io_error;
pub use lookup::{ReferenceKind, UnresolvedReference};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for hop operations
#[derive(Error, Diagnostic, Debug)]
pub enum HopError {
    // Discovery errors
    #[error("No hop.json found")]
    #[diagnostic(
        code(hop::config::not_located),
        help(
            "Create ~/.config/hop/hop.json, point HOP_CONFIG at one, or pin it in ~/.config/hop/settings.json"
        )
    )]
    NotLocated,

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(hop::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Malformed configuration file: {path}: {reason}")]
    #[diagnostic(
        code(hop::config::parse_failed),
        help("The file is not valid JSON")
    )]
    ParseError { path: String, reason: String },

    #[error("Missing required field '{field}' in {path}")]
    #[diagnostic(
        code(hop::config::missing_field),
        help("Every hop.json needs schema_version, machine.id and machine.name")
    )]
    MissingRequiredField { path: String, field: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(hop::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Validation failed with {count} error(s)")]
    #[diagnostic(code(hop::config::validation_failed))]
    ValidationFailed { count: usize },

    // Lookup errors
    #[error(transparent)]
    #[diagnostic(transparent)]
    Unresolved(#[from] UnresolvedReference),

    // Audit
    #[error("Audit found {orphans} orphan(s) and {stale} stale project(s)")]
    #[diagnostic(
        code(hop::audit::drift),
        help("Register orphans in hop.json or remove them; fix or drop stale project paths")
    )]
    AuditDrift { orphans: usize, stale: usize },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(hop::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl HopError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HopError::NotLocated => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for HopError {
    fn from(err: std::io::Error) -> Self {
        HopError::IoError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for HopError {
    fn from(err: serde_yaml::Error) -> Self {
        HopError::IoError {
            message: format!("Failed to render YAML: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, HopError>;
