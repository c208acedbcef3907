//! hop - machine environment descriptor
//!
//! Locates the machine's `hop.json`, loads and normalizes it, answers
//! queries about projects, systems, bundles and accounts, and audits the
//! declaration against the filesystem.

pub mod aggregate;
pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod git;
pub mod loader;
pub mod path_utils;
pub mod ui;
pub mod validate;

#[cfg(test)]
mod test_fixtures;
