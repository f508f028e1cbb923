use anyhow::{Context, Result};
use tracing::debug;

use super::context::WorkspaceContext;
use crate::display::print_artifact_paths;

pub fn paths_command(
    project: &str,
    service: Option<&str>,
    workspace: Option<&str>,
    json: bool,
) -> Result<()> {
    let context = WorkspaceContext::open(workspace)?;
    let handle = context.project(project)?;

    let service = match service {
        Some(service) => Some(service.to_string()),
        None => {
            debug!("No service given, resolving {}", project);
            context
                .resolver()
                .resolve(&handle)
                .with_context(|| format!("Failed to resolve project '{project}'"))?
                .metadata
                .service_name
        }
    };

    let artifacts = context.resolver().paths().artifacts(&handle, service.as_deref());
    if json {
        println!("{}", serde_json::to_string_pretty(&artifacts)?);
    } else {
        print_artifact_paths(&handle, &artifacts);
    }
    Ok(())
}
