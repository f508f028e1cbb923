//! Source-set extraction from raw classpath entries

use crate::{
    error::WorkspaceAccessError,
    interfaces::Workspace,
    types::{ClasspathEntry, ProjectHandle, SourceDirectory},
};

/// Keep source-kind entries, in declaration order, as project-relative paths.
///
/// `None` entries and every non-source kind are skipped. Duplicates are kept.
pub fn extract_source_directories(entries: &[Option<ClasspathEntry>]) -> Vec<SourceDirectory> {
    entries
        .iter()
        .flatten()
        .filter(|entry| entry.is_source())
        .map(|entry| SourceDirectory::new(entry.path.remove_first_segments(1).as_str()))
        .collect()
}

/// Read the project's raw classpath and extract its source directories
pub fn source_directories(
    workspace: &dyn Workspace,
    project: &ProjectHandle,
) -> Result<Vec<SourceDirectory>, WorkspaceAccessError> {
    let entries = workspace.raw_classpath(project)?;
    Ok(extract_source_directories(&entries))
}
