pub mod classpath;
pub mod metadata;
pub mod project;
pub mod resource_path;

// Re-export commonly used types
pub use classpath::{ClasspathEntry, EntryKind};
pub use metadata::{ImplementationMetadata, InterfaceMetadata};
pub use project::{FileHandle, ProjectHandle, ServiceImplementationProject, SourceDirectory};
pub use resource_path::{ResourcePath, SEPARATOR};
