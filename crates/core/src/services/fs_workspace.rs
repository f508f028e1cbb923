//! File-system backed workspace
//!
//! Every directory directly under the workspace root is a project. The
//! build path of a project comes from its Eclipse-style `.classpath` file.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::{
    error::WorkspaceAccessError,
    interfaces::Workspace,
    types::{ClasspathEntry, EntryKind, FileHandle, ProjectHandle, ResourcePath},
};

pub const CLASSPATH_FILE: &str = ".classpath";

// Structs for deserializing .classpath files
#[derive(Debug, Default, Deserialize)]
struct ClasspathDocument {
    #[serde(default, rename = "classpathentry")]
    entries: Vec<RawClasspathEntry>,
}

#[derive(Debug, Deserialize)]
struct RawClasspathEntry {
    #[serde(default, rename = "@kind")]
    kind: Option<String>,
    #[serde(default, rename = "@path")]
    path: Option<String>,
}

impl RawClasspathEntry {
    /// Convert to a workspace-level entry; source folders get the owning
    /// project prepended. Unknown kinds and entries without a path yield `None`.
    fn into_entry(self, project: &ProjectHandle) -> Option<ClasspathEntry> {
        let path = self.path.filter(|p| !p.trim().is_empty())?;
        let kind = match self.kind.as_deref()? {
            "src" if path.starts_with('/') => EntryKind::Project,
            "src" => {
                let path = ResourcePath::from_segments([project.name(), path.as_str()]);
                return Some(ClasspathEntry::new(EntryKind::Source, format!("/{path}")));
            }
            "lib" => EntryKind::Library,
            "con" => EntryKind::Container,
            "output" => EntryKind::Output,
            "var" => EntryKind::Variable,
            other => {
                tracing::debug!(
                    "Ignoring classpath entry of unknown kind {:?} in {}",
                    other,
                    project
                );
                return None;
            }
        };
        Some(ClasspathEntry::new(kind, path))
    }
}

fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Workspace rooted at a directory on disk
#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root: PathBuf,
}

impl FsWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn project_dir(&self, project: &ProjectHandle) -> PathBuf {
        self.root.join(project.name())
    }

    fn location_of(&self, project: &ProjectHandle, relative: &ResourcePath) -> PathBuf {
        relative
            .segments()
            .fold(self.project_dir(project), |location, segment| location.join(segment))
    }
}

impl Workspace for FsWorkspace {
    fn file(&self, project: &ProjectHandle, relative: &ResourcePath) -> Option<FileHandle> {
        if relative.is_empty() || relative.segments().any(|s| s == "..") {
            return None;
        }
        let location = self.location_of(project, relative);
        if !location.exists() {
            return None;
        }
        Some(FileHandle {
            project: project.clone(),
            path: ResourcePath::from_segments([project.name(), relative.as_str()]),
            location: Some(location),
        })
    }

    fn is_accessible(&self, file: &FileHandle) -> bool {
        match &file.location {
            Some(location) => location.is_file() && fs::File::open(location).is_ok(),
            None => false,
        }
    }

    fn is_project_accessible(&self, project: &ProjectHandle) -> bool {
        let dir = self.project_dir(project);
        dir.is_dir() && fs::read_dir(&dir).is_ok()
    }

    fn project_by_name(&self, name: &str) -> Option<ProjectHandle> {
        if !is_valid_project_name(name) {
            return None;
        }
        let project = ProjectHandle::new(name);
        self.project_dir(&project).is_dir().then_some(project)
    }

    fn raw_classpath(
        &self,
        project: &ProjectHandle,
    ) -> Result<Vec<Option<ClasspathEntry>>, WorkspaceAccessError> {
        let dir = self.project_dir(project);
        if !dir.is_dir() {
            return Err(WorkspaceAccessError::new(
                project.name(),
                "classpath",
                format!("project directory {} is unavailable", dir.display()),
            ));
        }

        let classpath_file = dir.join(CLASSPATH_FILE);
        let contents = match fs::read_to_string(&classpath_file) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No {} in {:?}, treating classpath as empty", CLASSPATH_FILE, dir);
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::error!("Failed to read {:?}: {}", classpath_file, e);
                return Err(WorkspaceAccessError::new(project.name(), "classpath", e.to_string()));
            }
        };

        let document: ClasspathDocument = quick_xml::de::from_str(&contents).map_err(|e| {
            tracing::error!("Failed to parse {:?}: {}", classpath_file, e);
            WorkspaceAccessError::new(
                project.name(),
                "classpath",
                format!("malformed {CLASSPATH_FILE}: {e}"),
            )
        })?;

        Ok(document
            .entries
            .into_iter()
            .map(|raw| raw.into_entry(project))
            .collect())
    }

    fn read_contents(&self, file: &FileHandle) -> Result<Vec<u8>, WorkspaceAccessError> {
        let location = file.location.as_ref().ok_or_else(|| {
            WorkspaceAccessError::new(
                file.project.name(),
                "file",
                format!("{} has no location", file.path),
            )
        })?;
        tracing::debug!("Reading {:?}", location);
        fs::read(location).map_err(|e| {
            WorkspaceAccessError::new(file.project.name(), "file", format!("{}: {e}", file.path))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace_with_project(name: &str) -> (TempDir, FsWorkspace) {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(name)).unwrap();
        let workspace = FsWorkspace::new(temp_dir.path());
        (temp_dir, workspace)
    }

    #[test]
    fn test_project_lookup() {
        let (_temp_dir, workspace) = workspace_with_project("OrderService");

        let project = workspace.project_by_name("OrderService").unwrap();
        assert!(workspace.is_project_accessible(&project));
        assert!(workspace.project_by_name("PaymentService").is_none());
        assert!(workspace.project_by_name("../OrderService").is_none());
        assert!(workspace.project_by_name("").is_none());
    }

    #[test]
    fn test_raw_classpath_maps_entry_kinds() {
        let (temp_dir, workspace) = workspace_with_project("OrderServiceImpl");
        fs::write(
            temp_dir.path().join("OrderServiceImpl").join(CLASSPATH_FILE),
            r#"<?xml version="1.0" encoding="UTF-8"?>
<classpath>
    <classpathentry kind="src" path="src/main/java"/>
    <classpathentry kind="src" path="/OrderService"/>
    <classpathentry kind="con" path="org.eclipse.jdt.launching.JRE_CONTAINER"/>
    <classpathentry kind="lib" path="lib/commons.jar">
        <attributes>
            <attribute name="javadoc_location" value="http://example.org"/>
        </attributes>
    </classpathentry>
    <classpathentry kind="mystery" path="x"/>
    <classpathentry kind="src" path="gen-src"/>
    <classpathentry kind="output" path="bin"/>
</classpath>
"#,
        )
        .unwrap();

        let project = ProjectHandle::new("OrderServiceImpl");
        let entries = workspace.raw_classpath(&project).unwrap();

        assert_eq!(
            entries,
            vec![
                Some(ClasspathEntry::source("/OrderServiceImpl/src/main/java")),
                Some(ClasspathEntry::new(EntryKind::Project, "/OrderService")),
                Some(ClasspathEntry::container("org.eclipse.jdt.launching.JRE_CONTAINER")),
                Some(ClasspathEntry::library("lib/commons.jar")),
                None,
                Some(ClasspathEntry::source("/OrderServiceImpl/gen-src")),
                Some(ClasspathEntry::output("bin")),
            ]
        );
    }

    #[test]
    fn test_missing_classpath_file_is_empty() {
        let (_temp_dir, workspace) = workspace_with_project("OrderServiceImpl");
        let entries = workspace.raw_classpath(&ProjectHandle::new("OrderServiceImpl")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_malformed_classpath_is_access_error() {
        let (temp_dir, workspace) = workspace_with_project("OrderServiceImpl");
        fs::write(
            temp_dir.path().join("OrderServiceImpl").join(CLASSPATH_FILE),
            "<classpath><classpathentry kind=\"src\"",
        )
        .unwrap();

        let err = workspace
            .raw_classpath(&ProjectHandle::new("OrderServiceImpl"))
            .unwrap_err();
        assert_eq!(err.project, "OrderServiceImpl");
        assert_eq!(err.operation, "classpath");
    }

    #[test]
    fn test_classpath_of_missing_project_is_access_error() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = FsWorkspace::new(temp_dir.path());
        assert!(workspace.raw_classpath(&ProjectHandle::new("Ghost")).is_err());
    }

    #[test]
    fn test_file_lookup_and_read() {
        let (temp_dir, workspace) = workspace_with_project("OrderServiceImpl");
        let config_dir = temp_dir.path().join("OrderServiceImpl").join("meta-src");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("ServiceConfig.xml"), "<service-config/>").unwrap();

        let project = ProjectHandle::new("OrderServiceImpl");
        let file = workspace
            .file(&project, &ResourcePath::from("meta-src/ServiceConfig.xml"))
            .unwrap();

        assert_eq!(file.path.as_str(), "OrderServiceImpl/meta-src/ServiceConfig.xml");
        assert!(workspace.is_accessible(&file));
        assert_eq!(workspace.read_contents(&file).unwrap(), b"<service-config/>");

        assert!(workspace.file(&project, &ResourcePath::from("meta-src/Missing.xml")).is_none());
        assert!(
            workspace
                .file(&project, &ResourcePath::from("../OrderServiceImpl/meta-src"))
                .is_none()
        );
    }

    #[test]
    fn test_directory_is_not_an_accessible_file() {
        let (temp_dir, workspace) = workspace_with_project("OrderServiceImpl");
        fs::create_dir_all(temp_dir.path().join("OrderServiceImpl/gen-web-content")).unwrap();

        let project = ProjectHandle::new("OrderServiceImpl");
        let file = workspace
            .file(&project, &ResourcePath::from("gen-web-content"))
            .unwrap();
        assert!(!workspace.is_accessible(&file));
    }
}
