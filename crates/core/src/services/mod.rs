//! Service implementations for the collaborator interfaces

pub mod default_config_parser;
pub mod fs_workspace;
pub mod memory_workspace;
pub mod recording_observer;
pub mod tracing_observer;

pub use default_config_parser::DefaultConfigParser;
pub use fs_workspace::FsWorkspace;
pub use memory_workspace::MemoryWorkspace;
pub use recording_observer::RecordingObserver;
pub use tracing_observer::TracingObserver;
