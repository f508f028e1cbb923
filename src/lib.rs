//! Facade over `svclink-core` for the workspace-level integration tests
pub use svclink_core::*;
