//! Command implementations for the hop CLI

pub mod accounts;
pub mod audit;
pub mod bundles;
pub mod completions;
pub mod infra;
pub mod locate;
pub mod projects;
pub mod show;
pub mod systems;
pub mod validate;
pub mod version;

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::ConfigDocument;
use crate::discovery::{self, DiscoveryPaths, Located};
use crate::error::{HopError, Result};
use crate::loader;

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    /// Explicit descriptor path; bypasses discovery
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Context {
    /// The descriptor path in use, explicit or discovered
    pub fn locate(&self) -> Result<Located> {
        if let Some(path) = &self.config {
            return Ok(Located {
                path: path.clone(),
                source: discovery::LocateSource::CommandLine,
            });
        }
        discovery::locate_traced(&DiscoveryPaths::from_env(), None).ok_or(HopError::NotLocated)
    }

    /// Locate and load the descriptor
    pub fn load(&self) -> Result<ConfigDocument> {
        let located = self.locate()?;
        loader::load(&located.path)
    }
}
