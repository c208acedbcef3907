//! Data structures for the machine descriptor (`hop.json`)
//!
//! - [`document`]: the root [`ConfigDocument`]
//! - [`machine`]: machine identity and the optional agent root
//! - [`project`]: registered projects
//! - [`infra`]: the infra-repo block and its polymorphic entries
//! - [`bundle`]: named groups of project references
//! - [`account`]: per-service account identities

pub mod account;
pub mod bundle;
pub mod document;
pub mod infra;
pub mod machine;
pub mod project;

pub use account::{Account, Accounts};
pub use bundle::Bundle;
pub use document::ConfigDocument;
pub use infra::{InfraRepo, InfraRepoEntry, InfraRepos, SyncStrategy};
pub use machine::{Machine, MachineType};
pub use project::{GitRef, Project};

/// Returns the tag if it carries any non-whitespace content
pub(crate) fn non_empty(tag: Option<&str>) -> Option<&str> {
    tag.filter(|t| !t.trim().is_empty())
}
