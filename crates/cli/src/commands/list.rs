use anyhow::Result;
use walkdir::WalkDir;

use super::context::WorkspaceContext;
use crate::display::print_link_summary;

pub fn list_command(workspace: Option<&str>) -> Result<()> {
    let context = WorkspaceContext::open(workspace)?;
    let resolver = context.resolver();

    let mut names: Vec<String> = WalkDir::new(&context.root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();

    if names.is_empty() {
        println!("No projects found in {}", context.root.display());
        return Ok(());
    }

    for name in names {
        let handle = context.project(&name)?;
        print_link_summary(&name, resolver.resolve(&handle).map_err(Into::into));
    }
    Ok(())
}
