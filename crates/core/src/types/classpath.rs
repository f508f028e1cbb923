use serde::{Deserialize, Serialize};

use super::ResourcePath;

/// The kind of a raw build-path entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Source,
    Library,
    Container,
    Output,
    Project,
    Variable,
}

/// One raw classpath entry as declared by a project.
///
/// Source paths are workspace-level: the first segment names the owning project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClasspathEntry {
    pub kind: EntryKind,
    pub path: ResourcePath,
}

impl ClasspathEntry {
    pub fn new(kind: EntryKind, path: impl Into<ResourcePath>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn source(path: impl Into<ResourcePath>) -> Self {
        Self::new(EntryKind::Source, path)
    }

    pub fn library(path: impl Into<ResourcePath>) -> Self {
        Self::new(EntryKind::Library, path)
    }

    pub fn container(path: impl Into<ResourcePath>) -> Self {
        Self::new(EntryKind::Container, path)
    }

    pub fn output(path: impl Into<ResourcePath>) -> Self {
        Self::new(EntryKind::Output, path)
    }

    pub fn is_source(&self) -> bool {
        self.kind == EntryKind::Source
    }
}
