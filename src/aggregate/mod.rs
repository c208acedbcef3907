//! Read-only views derived from a loaded document
//!
//! Nothing here mutates the document. Misses come back as
//! [`UnresolvedReference`] values carrying the searched keys.

pub mod bundle;
pub mod lookup;
pub mod systems;

pub use bundle::{BundleMember, ResolvedBundle, resolve_bundle};
pub use lookup::{AccountMatch, find_account, find_project, list_accounts};
pub use systems::{System, Systems, collect_systems};

use crate::error::UnresolvedReference;

/// Outcome of a named lookup
pub type Lookup<T> = std::result::Result<T, UnresolvedReference>;
