//! `hop projects` and `hop project <name>`

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Context;
use crate::aggregate::find_project;
use crate::aggregate::lookup::filter_projects;
use crate::cli::{NameArgs, ProjectsArgs};
use crate::config::Project;
use crate::error::Result;
use crate::git;
use crate::path_utils::PathResolver;
use crate::ui::{self, display};

/// A project with its on-disk state
#[derive(Serialize)]
struct ProjectView<'a> {
    #[serde(flatten)]
    project: &'a Project,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved_path: Option<PathBuf>,
    exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
}

pub fn run_list(ctx: &Context, args: &ProjectsArgs) -> Result<()> {
    let doc = ctx.load()?;
    let projects = filter_projects(&doc, args.system.as_deref(), args.project_type.as_deref());
    ui::emit(ctx.format, &projects, || display::display_project_list(&projects))
}

pub fn run_show(ctx: &Context, args: &NameArgs) -> Result<()> {
    let doc = ctx.load()?;
    let project = find_project(&doc, &args.name)?;

    let resolver = PathResolver::new(dirs::home_dir(), doc.base_dir().map(Path::to_path_buf));
    let resolved_path = project.path.as_deref().map(|raw| resolver.resolve(raw));
    let exists = resolved_path.as_deref().is_some_and(Path::exists);
    let branch = resolved_path
        .as_deref()
        .filter(|_| exists)
        .and_then(git::head_branch);

    let view = ProjectView {
        project,
        resolved_path,
        exists,
        branch,
    };

    ui::emit(ctx.format, &view, || {
        display::display_project(
            view.project,
            view.resolved_path.as_deref(),
            view.exists,
            view.branch.as_deref(),
        );
    })
}
