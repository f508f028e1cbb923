//! Builds cross-linked implementation project snapshots
//!
//! One synchronous pass per call: load the base metadata, extract the
//! source set, then link the interface project named by the service.
//! Missing data only leaves fields empty. Data that exists but cannot be
//! read as declared fails the pass.

use crate::{
    config::NamingConvention,
    error::{ConfigParseError, Result},
    interfaces::{ConfigParser, LinkAbsence, ResolutionEvent, ResolutionObserver, Workspace},
    paths::PathDeriver,
    resolver::{classpath, config_loader::ConfigLoader},
    services::TracingObserver,
    types::{
        ImplementationMetadata, InterfaceMetadata, ProjectHandle, ServiceImplementationProject,
        SourceDirectory,
    },
    utils::Properties,
};

/// Key of the implementation properties file naming the service
pub const SERVICE_NAME_PROPERTY: &str = "service_name";

pub struct MetadataResolver<'a> {
    workspace: &'a dyn Workspace,
    parser: &'a dyn ConfigParser,
    naming: &'a NamingConvention,
    observer: &'a dyn ResolutionObserver,
}

impl<'a> MetadataResolver<'a> {
    pub fn new(
        workspace: &'a dyn Workspace,
        parser: &'a dyn ConfigParser,
        naming: &'a NamingConvention,
    ) -> Self {
        Self {
            workspace,
            parser,
            naming,
            observer: &TracingObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn ResolutionObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn paths(&self) -> PathDeriver<'a> {
        PathDeriver::new(self.naming)
    }

    fn loader(&self) -> ConfigLoader<'a> {
        ConfigLoader::new(self.workspace, self.parser, self.naming).with_observer(self.observer)
    }

    fn emit(&self, event: ResolutionEvent) {
        self.observer.on_event(&event);
    }

    /// Resolve a fresh snapshot of `project`
    pub fn resolve(&self, project: &ProjectHandle) -> Result<ServiceImplementationProject> {
        let metadata =
            ImplementationMetadata::new(project.name(), &self.naming.default_consumer_source_dir);
        let mut resolved = ServiceImplementationProject::new(project.clone(), metadata);

        let hint = self.service_name_hint(project)?;
        self.load_base_metadata(project, hint.as_deref(), &mut resolved.metadata)?;
        resolved.source_directories = self.extract_source_set(project)?;
        self.link_interface(project, &mut resolved.metadata)?;

        Ok(resolved)
    }

    /// Reload an existing snapshot in place. Fields the service config sets
    /// are overwritten, the source set and interface link are rebuilt.
    /// On error `target` is left exactly as it was.
    pub fn refresh(&self, target: &mut ServiceImplementationProject) -> Result<()> {
        let project = target.project.clone();
        let mut refreshed = target.clone();
        refreshed.metadata.interface_metadata = InterfaceMetadata::default();

        let hint = match target.service_name() {
            Some(name) => Some(name.to_string()),
            None => self.service_name_hint(&project)?,
        };
        self.load_base_metadata(&project, hint.as_deref(), &mut refreshed.metadata)?;
        refreshed.source_directories = self.extract_source_set(&project)?;
        self.link_interface(&project, &mut refreshed.metadata)?;

        *target = refreshed;
        Ok(())
    }

    /// The service config location needs a service name before the config
    /// is read: take it from the implementation properties, else from the
    /// project name. The hint never becomes `service_name` by itself.
    fn service_name_hint(&self, project: &ProjectHandle) -> Result<Option<String>> {
        let relative = self.paths().service_impl_properties_path();
        if let Some(bytes) = self.loader().fetch_optional(project, &relative)? {
            let properties = Properties::from_bytes(&bytes).map_err(|source| ConfigParseError {
                path: self.paths().service_impl_properties_file(project),
                service: project.name().to_string(),
                source,
            })?;
            if let Some(name) = properties.get_non_empty(SERVICE_NAME_PROPERTY) {
                return Ok(Some(name.to_string()));
            }
        }
        Ok(self.naming.service_name_from_project(project.name()))
    }

    fn load_base_metadata(
        &self,
        project: &ProjectHandle,
        service_name: Option<&str>,
        metadata: &mut ImplementationMetadata,
    ) -> Result<()> {
        match service_name {
            Some(service_name) => {
                self.loader().populate(project, service_name, metadata)?;
            }
            None => self.emit(ResolutionEvent::LoadAbsent {
                project: project.name().to_string(),
                path: None,
                location: None,
                optional: false,
            }),
        }
        Ok(())
    }

    fn extract_source_set(&self, project: &ProjectHandle) -> Result<Vec<SourceDirectory>> {
        let directories = classpath::source_directories(self.workspace, project)?;
        self.emit(ResolutionEvent::SourceSetExtracted {
            project: project.name().to_string(),
            count: directories.len(),
        });
        Ok(directories)
    }

    fn link_interface(
        &self,
        project: &ProjectHandle,
        metadata: &mut ImplementationMetadata,
    ) -> Result<()> {
        let link_absent = |reason| ResolutionEvent::LinkAbsent {
            project: project.name().to_string(),
            reason,
        };

        let Some(service_name) = metadata.service_name.clone() else {
            self.emit(link_absent(LinkAbsence::NoServiceName));
            return Ok(());
        };

        let Some(interface_project) = self.workspace.project_by_name(&service_name) else {
            self.emit(link_absent(LinkAbsence::ProjectMissing {
                service: service_name,
            }));
            return Ok(());
        };

        if !self.workspace.is_project_accessible(&interface_project) {
            self.emit(link_absent(LinkAbsence::ProjectInaccessible {
                service: service_name,
            }));
            return Ok(());
        }

        let mut interface = InterfaceMetadata {
            project_name: Some(interface_project.name().to_string()),
            service_name: Some(service_name.clone()),
            ..Default::default()
        };
        self.loader()
            .load_interface(&interface_project, &service_name, &mut interface)?;
        metadata.interface_metadata = interface;

        self.emit(ResolutionEvent::LinkResolved {
            project: project.name().to_string(),
            interface_project: interface_project.name().to_string(),
        });
        Ok(())
    }
}
