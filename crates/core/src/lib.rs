//! svclink - links service implementation projects to their interface projects
//!
//! This crate provides functionality to:
//! - Resolve the metadata of a service implementation project from workspace
//!   state (classpath, service config, the paired interface project)
//! - Derive the artifact locations packaging steps consume (jar, war, web.xml, ...)
//! - Plug in any workspace storage or config format through small traits
pub mod config;
pub mod error;
pub mod interfaces;
pub mod paths;
pub mod resolver;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{ConfigParseError, Error, ParserError, Result, WorkspaceAccessError};
pub use types::*;

// Re-export main API components
pub use config::{Config, NamingConvention};
pub use interfaces::{ConfigParser, ResolutionEvent, ResolutionObserver, Workspace};
pub use paths::{ArtifactPaths, PathDeriver};
pub use resolver::{ConfigLoader, LoadOutcome, MetadataResolver};
pub use services::{DefaultConfigParser, FsWorkspace, MemoryWorkspace};
