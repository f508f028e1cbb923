use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::{ImplementationMetadata, ResourcePath};

/// Opaque handle naming a project in the workspace
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectHandle {
    name: String,
}

impl ProjectHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ProjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A file inside a project, as handed out by a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub project: ProjectHandle,
    /// Workspace-relative path, starting with the project name.
    pub path: ResourcePath,
    /// Location on disk, when the workspace is backed by one.
    pub location: Option<PathBuf>,
}

impl FileHandle {
    pub fn display_location(&self) -> String {
        match &self.location {
            Some(location) => location.display().to_string(),
            None => self.path.to_string(),
        }
    }
}

/// Project-relative source root, e.g. `src/main/java`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceDirectory(String);

impl SourceDirectory {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Resolved snapshot of a service implementation project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceImplementationProject {
    pub project: ProjectHandle,
    /// Classpath declaration order, duplicates kept.
    pub source_directories: Vec<SourceDirectory>,
    pub metadata: ImplementationMetadata,
}

impl ServiceImplementationProject {
    pub fn new(project: ProjectHandle, metadata: ImplementationMetadata) -> Self {
        Self {
            project,
            source_directories: Vec::new(),
            metadata,
        }
    }

    pub fn service_name(&self) -> Option<&str> {
        self.metadata.service_name.as_deref()
    }
}
