//! In-memory workspace
//!
//! Holds projects, files and build paths in maps. Useful for hosts that
//! already keep the workspace model in memory, and for exercising the
//! resolver without touching disk.

use std::collections::BTreeMap;

use crate::{
    error::WorkspaceAccessError,
    interfaces::Workspace,
    types::{ClasspathEntry, FileHandle, ProjectHandle, ResourcePath},
};

#[derive(Debug, Clone)]
struct MemoryFile {
    contents: Vec<u8>,
    readable: bool,
    read_error: Option<String>,
}

#[derive(Debug, Clone)]
struct MemoryProject {
    open: bool,
    files: BTreeMap<ResourcePath, MemoryFile>,
    classpath: Result<Vec<Option<ClasspathEntry>>, String>,
}

impl Default for MemoryProject {
    fn default() -> Self {
        Self {
            open: true,
            files: BTreeMap::new(),
            classpath: Ok(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspace {
    projects: BTreeMap<String, MemoryProject>,
}

fn normalize(path: &str) -> ResourcePath {
    ResourcePath::from_segments([path])
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    fn project_mut(&mut self, name: &str) -> &mut MemoryProject {
        self.projects.entry(name.to_string()).or_default()
    }

    fn file_mut(&mut self, project: &str, path: &str) -> Option<&mut MemoryFile> {
        self.projects
            .get_mut(project)
            .and_then(|p| p.files.get_mut(&normalize(path)))
    }

    /// Add an open, empty project. Existing projects are left as they are.
    pub fn add_project(&mut self, name: &str) -> &mut Self {
        self.project_mut(name);
        self
    }

    pub fn remove_project(&mut self, name: &str) -> &mut Self {
        self.projects.remove(name);
        self
    }

    /// Keep the project in the workspace but make it inaccessible
    pub fn close_project(&mut self, name: &str) -> &mut Self {
        self.project_mut(name).open = false;
        self
    }

    /// Add or replace a file, creating the project when needed
    pub fn add_file(
        &mut self,
        project: &str,
        path: &str,
        contents: impl Into<Vec<u8>>,
    ) -> &mut Self {
        self.project_mut(project).files.insert(
            normalize(path),
            MemoryFile {
                contents: contents.into(),
                readable: true,
                read_error: None,
            },
        );
        self
    }

    pub fn remove_file(&mut self, project: &str, path: &str) -> &mut Self {
        if let Some(p) = self.projects.get_mut(project) {
            p.files.remove(&normalize(path));
        }
        self
    }

    /// The file keeps existing but reports itself as not accessible
    pub fn set_file_readable(&mut self, project: &str, path: &str, readable: bool) -> &mut Self {
        if let Some(file) = self.file_mut(project, path) {
            file.readable = readable;
        }
        self
    }

    /// The file looks accessible, but reading it fails with `message`
    pub fn fail_reads(&mut self, project: &str, path: &str, message: &str) -> &mut Self {
        if let Some(file) = self.file_mut(project, path) {
            file.read_error = Some(message.to_string());
        }
        self
    }

    pub fn set_classpath(
        &mut self,
        project: &str,
        entries: Vec<Option<ClasspathEntry>>,
    ) -> &mut Self {
        self.project_mut(project).classpath = Ok(entries);
        self
    }

    /// Make every classpath read of the project fail with `message`
    pub fn fail_classpath(&mut self, project: &str, message: &str) -> &mut Self {
        self.project_mut(project).classpath = Err(message.to_string());
        self
    }
}

impl Workspace for MemoryWorkspace {
    fn file(&self, project: &ProjectHandle, relative: &ResourcePath) -> Option<FileHandle> {
        let relative = normalize(relative.as_str());
        let stored = self.projects.get(project.name())?;
        stored.files.contains_key(&relative).then(|| FileHandle {
            project: project.clone(),
            path: ResourcePath::from_segments([project.name(), relative.as_str()]),
            location: None,
        })
    }

    fn is_accessible(&self, file: &FileHandle) -> bool {
        let Some(project) = self.projects.get(file.project.name()) else {
            return false;
        };
        let relative = file.path.remove_first_segments(1);
        project.open && project.files.get(&relative).is_some_and(|f| f.readable)
    }

    fn is_project_accessible(&self, project: &ProjectHandle) -> bool {
        self.projects.get(project.name()).is_some_and(|p| p.open)
    }

    fn project_by_name(&self, name: &str) -> Option<ProjectHandle> {
        self.projects
            .contains_key(name)
            .then(|| ProjectHandle::new(name))
    }

    fn raw_classpath(
        &self,
        project: &ProjectHandle,
    ) -> Result<Vec<Option<ClasspathEntry>>, WorkspaceAccessError> {
        let stored = self.projects.get(project.name()).ok_or_else(|| {
            WorkspaceAccessError::new(project.name(), "classpath", "project does not exist")
        })?;
        stored
            .classpath
            .clone()
            .map_err(|message| WorkspaceAccessError::new(project.name(), "classpath", message))
    }

    fn read_contents(&self, file: &FileHandle) -> Result<Vec<u8>, WorkspaceAccessError> {
        let relative = file.path.remove_first_segments(1);
        let stored = self
            .projects
            .get(file.project.name())
            .and_then(|p| p.files.get(&relative))
            .ok_or_else(|| {
                WorkspaceAccessError::new(
                    file.project.name(),
                    "file",
                    format!("{} does not exist", file.path),
                )
            })?;

        match &stored.read_error {
            Some(message) => Err(WorkspaceAccessError::new(
                file.project.name(),
                "file",
                format!("{}: {message}", file.path),
            )),
            None => Ok(stored.contents.clone()),
        }
    }
}
