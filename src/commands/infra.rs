//! `hop infra`: the infra-repo block with clone paths

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Context;
use crate::audit::infra_root;
use crate::config::infra::normalize;
use crate::config::{InfraRepo, InfraRepoEntry, SyncStrategy};
use crate::error::Result;
use crate::path_utils::PathResolver;
use crate::ui::{self, display};

#[derive(Serialize)]
struct InfraEntryView {
    #[serde(flatten)]
    record: InfraRepo,
    #[serde(skip_serializing_if = "Option::is_none")]
    clone_path: Option<PathBuf>,
}

#[derive(Serialize)]
struct InfraView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clone_root: Option<PathBuf>,
    readonly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sync: Option<SyncStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contribute: Option<&'a str>,
    repos: Vec<InfraEntryView>,
}

pub fn run(ctx: &Context) -> Result<()> {
    let doc = ctx.load()?;
    let resolver = PathResolver::new(dirs::home_dir(), doc.base_dir().map(Path::to_path_buf));
    let root = infra_root(&doc, &resolver);

    let view = doc.infra_repos.as_ref().map(|block| InfraView {
        path: block.path.as_deref(),
        clone_root: root.clone(),
        readonly: block.readonly,
        sync: block.sync,
        contribute: block.contribute.as_deref(),
        repos: block
            .repos
            .iter()
            .map(|entry| InfraEntryView {
                record: record_of(entry),
                clone_path: root.as_ref().map(|r| r.join(entry.name())),
            })
            .collect(),
    });

    ui::emit(ctx.format, &view, || {
        display::display_infra(&doc, root.as_deref());
    })
}

fn record_of(entry: &InfraRepoEntry) -> InfraRepo {
    match normalize(entry) {
        InfraRepoEntry::Record(repo) => repo,
        InfraRepoEntry::Name(name) => InfraRepo::named(name),
    }
}
