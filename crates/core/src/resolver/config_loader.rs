//! Loads service artifacts through the workspace and the config parser
//!
//! Absence of an artifact is tolerated: the target keeps whatever values
//! it had. Content that exists but is malformed fails the load.

use crate::{
    config::NamingConvention,
    error::{ConfigParseError, ParserError, Result},
    interfaces::{ConfigParser, ResolutionEvent, ResolutionObserver, Workspace},
    paths::PathDeriver,
    services::TracingObserver,
    types::{
        ImplementationMetadata, InterfaceMetadata, ProjectHandle, ResourcePath,
        ServiceImplementationProject,
    },
};

/// Result of a tolerated load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Absent,
}

pub struct ConfigLoader<'a> {
    workspace: &'a dyn Workspace,
    parser: &'a dyn ConfigParser,
    paths: PathDeriver<'a>,
    observer: &'a dyn ResolutionObserver,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(
        workspace: &'a dyn Workspace,
        parser: &'a dyn ConfigParser,
        naming: &'a NamingConvention,
    ) -> Self {
        Self {
            workspace,
            parser,
            paths: PathDeriver::new(naming),
            observer: &TracingObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn ResolutionObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Populate `defaults` from the service config of `project` and return it
    pub fn load(
        &self,
        project: &ProjectHandle,
        service_name: &str,
        defaults: ImplementationMetadata,
    ) -> Result<ImplementationMetadata> {
        let mut metadata = defaults;
        self.populate(project, service_name, &mut metadata)?;
        Ok(metadata)
    }

    /// Populate the metadata embedded in `target`. On error `target` is unchanged.
    pub fn load_into(
        &self,
        target: &mut ServiceImplementationProject,
        service_name: &str,
    ) -> Result<LoadOutcome> {
        let mut metadata = target.metadata.clone();
        let outcome = self.populate(&target.project, service_name, &mut metadata)?;
        target.metadata = metadata;
        Ok(outcome)
    }

    /// Shared by both load shapes. The parser may leave `metadata` half
    /// written on failure; callers only keep it on success.
    pub(crate) fn populate(
        &self,
        project: &ProjectHandle,
        service_name: &str,
        metadata: &mut ImplementationMetadata,
    ) -> Result<LoadOutcome> {
        let relative = self.paths.service_config_path(service_name);
        let Some(bytes) = self.fetch(project, &relative)? else {
            return Ok(LoadOutcome::Absent);
        };

        self.parser
            .parse_service_config(&bytes, metadata)
            .map_err(|source| self.parse_failed(project, &relative, service_name, source))?;
        Ok(LoadOutcome::Loaded)
    }

    /// Fill interface metadata from the properties artifact of `project`
    pub fn load_interface(
        &self,
        project: &ProjectHandle,
        service_name: &str,
        target: &mut InterfaceMetadata,
    ) -> Result<LoadOutcome> {
        let relative = self.paths.interface_properties_path();
        let Some(bytes) = self.fetch(project, &relative)? else {
            return Ok(LoadOutcome::Absent);
        };

        let mut metadata = target.clone();
        self.parser
            .parse_interface_properties(&bytes, &mut metadata)
            .map_err(|source| self.parse_failed(project, &relative, service_name, source))?;
        *target = metadata;
        Ok(LoadOutcome::Loaded)
    }

    /// Read an artifact, or `None` when it is absent or not accessible.
    /// A read failure of an accessible file is an error.
    pub(crate) fn fetch(
        &self,
        project: &ProjectHandle,
        relative: &ResourcePath,
    ) -> Result<Option<Vec<u8>>> {
        self.read_artifact(project, relative, false)
    }

    /// Like [`fetch`](Self::fetch), for artifacts a project may lack
    pub(crate) fn fetch_optional(
        &self,
        project: &ProjectHandle,
        relative: &ResourcePath,
    ) -> Result<Option<Vec<u8>>> {
        self.read_artifact(project, relative, true)
    }

    fn read_artifact(
        &self,
        project: &ProjectHandle,
        relative: &ResourcePath,
        optional: bool,
    ) -> Result<Option<Vec<u8>>> {
        let path = ResourcePath::from_segments([project.name(), relative.as_str()]);
        self.observer.on_event(&ResolutionEvent::LoadAttempted {
            project: project.name().to_string(),
            path: path.clone(),
        });

        match self.workspace.file(project, relative) {
            Some(file) if self.workspace.is_accessible(&file) => {
                Ok(Some(self.workspace.read_contents(&file)?))
            }
            file => {
                self.observer.on_event(&ResolutionEvent::LoadAbsent {
                    project: project.name().to_string(),
                    path: Some(path),
                    location: file.map(|file| file.display_location()),
                    optional,
                });
                Ok(None)
            }
        }
    }

    fn parse_failed(
        &self,
        project: &ProjectHandle,
        relative: &ResourcePath,
        service_name: &str,
        source: ParserError,
    ) -> ConfigParseError {
        let path = ResourcePath::from_segments([project.name(), relative.as_str()]);
        self.observer.on_event(&ResolutionEvent::LoadFailed {
            project: project.name().to_string(),
            path: path.clone(),
            reason: source.to_string(),
        });
        ConfigParseError {
            path,
            service: service_name.to_string(),
            source,
        }
    }
}
