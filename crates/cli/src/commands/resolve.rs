use anyhow::{Context, Result};
use tracing::debug;

use super::context::WorkspaceContext;
use crate::display::print_resolved_project;

pub fn resolve_command(project: &str, workspace: Option<&str>, json: bool) -> Result<()> {
    debug!("Resolving project: {}", project);

    let context = WorkspaceContext::open(workspace)?;
    let handle = context.project(project)?;
    let resolved = context
        .resolver()
        .resolve(&handle)
        .with_context(|| format!("Failed to resolve project '{project}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_resolved_project(&resolved);
    }
    Ok(())
}
