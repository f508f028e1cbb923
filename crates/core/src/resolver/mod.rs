//! Metadata resolution pipeline

pub mod classpath;
pub mod config_loader;
pub mod metadata_resolver;

pub use classpath::{extract_source_directories, source_directories};
pub use config_loader::{ConfigLoader, LoadOutcome};
pub use metadata_resolver::{MetadataResolver, SERVICE_NAME_PROPERTY};
