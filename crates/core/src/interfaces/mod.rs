//! Seams between the resolution core and its collaborators
//!
//! The resolver reaches the workspace, the config parser and its log sink
//! only through these traits, so each can be replaced by a fake in tests
//! or by a host-specific implementation.

pub mod config_parser;
pub mod observer;
pub mod workspace;

pub use config_parser::ConfigParser;
pub use observer::{LinkAbsence, ResolutionEvent, ResolutionObserver};
pub use workspace::Workspace;
