//! Workspace storage interface

use crate::{
    error::WorkspaceAccessError,
    types::{ClasspathEntry, FileHandle, ProjectHandle, ResourcePath},
};

/// Read access to the projects of a multi-project workspace.
///
/// Absence is reported with `None`/`false`; only data that exists but
/// cannot be read is an error.
pub trait Workspace: Send + Sync {
    /// Look up a file by project-relative path. `None` when it does not exist.
    fn file(&self, project: &ProjectHandle, relative: &ResourcePath) -> Option<FileHandle>;

    /// Whether the file exists and can currently be read
    fn is_accessible(&self, file: &FileHandle) -> bool;

    /// Whether the project exists and is open for reading
    fn is_project_accessible(&self, project: &ProjectHandle) -> bool;

    fn project_by_name(&self, name: &str) -> Option<ProjectHandle>;

    /// Raw build path of a project in declaration order. `None` items are
    /// entries the workspace could not make sense of.
    fn raw_classpath(
        &self,
        project: &ProjectHandle,
    ) -> Result<Vec<Option<ClasspathEntry>>, WorkspaceAccessError>;

    fn read_contents(&self, file: &FileHandle) -> Result<Vec<u8>, WorkspaceAccessError>;
}
