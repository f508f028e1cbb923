//! Resolution observer that forwards checkpoints to `tracing`

use tracing::{debug, error, warn};

use crate::interfaces::{LinkAbsence, ResolutionEvent, ResolutionObserver};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn on_event(&self, event: &ResolutionEvent) {
        match event {
            ResolutionEvent::LoadAttempted { project, path } => {
                debug!(project = %project, path = %path, "Loading service artifact");
            }
            ResolutionEvent::LoadAbsent {
                project,
                path: Some(path),
                optional: true,
                ..
            } => {
                debug!(project = %project, path = %path, "Optional service artifact not present");
            }
            ResolutionEvent::LoadAbsent {
                project,
                path: Some(path),
                location,
                ..
            } => {
                warn!(
                    project = %project,
                    path = %path,
                    location = location.as_deref().unwrap_or("-"),
                    "The service artifact either does not exist or is not accessible"
                );
            }
            ResolutionEvent::LoadAbsent {
                project,
                path: None,
                ..
            } => {
                debug!(project = %project, "No service name known, skipping service config");
            }
            ResolutionEvent::LoadFailed {
                project,
                path,
                reason,
            } => {
                error!(
                    project = %project,
                    path = %path,
                    reason = %reason,
                    "Failed to parse service artifact"
                );
            }
            ResolutionEvent::SourceSetExtracted { project, count } => {
                debug!(project = %project, count = *count, "Extracted source directories");
            }
            ResolutionEvent::LinkResolved {
                project,
                interface_project,
            } => {
                debug!(
                    project = %project,
                    interface = %interface_project,
                    "Linked interface project"
                );
            }
            ResolutionEvent::LinkAbsent { project, reason } => match reason {
                LinkAbsence::NoServiceName => {
                    debug!(project = %project, "No service name for the implementation project");
                }
                LinkAbsence::ProjectMissing { service } => {
                    warn!(
                        project = %project,
                        service = %service,
                        "The interface project does not exist"
                    );
                }
                LinkAbsence::ProjectInaccessible { service } => {
                    warn!(
                        project = %project,
                        service = %service,
                        "The interface project is not accessible"
                    );
                }
            },
        }
    }
}
