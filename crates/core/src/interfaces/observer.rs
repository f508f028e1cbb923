//! Checkpoints reported while resolving a project

use crate::types::ResourcePath;

/// Why an implementation project ended up without a linked interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAbsence {
    /// No service config named a service
    NoServiceName,
    ProjectMissing { service: String },
    ProjectInaccessible { service: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionEvent {
    LoadAttempted {
        project: String,
        path: ResourcePath,
    },
    /// `path` is `None` when no location could be computed at all.
    /// `location` is set when the workspace knows the file but cannot read it.
    /// `optional` artifacts are ones a project may legitimately lack.
    LoadAbsent {
        project: String,
        path: Option<ResourcePath>,
        location: Option<String>,
        optional: bool,
    },
    LoadFailed {
        project: String,
        path: ResourcePath,
        reason: String,
    },
    SourceSetExtracted {
        project: String,
        count: usize,
    },
    LinkResolved {
        project: String,
        interface_project: String,
    },
    LinkAbsent {
        project: String,
        reason: LinkAbsence,
    },
}

/// Receives resolution checkpoints; the algorithm itself never logs
pub trait ResolutionObserver: Send + Sync {
    fn on_event(&self, event: &ResolutionEvent);
}
