//! Configuration management for svclink

mod naming;
mod settings;
pub mod validation;

// Re-export main types
pub use naming::NamingConvention;
pub use settings::{CONFIG_FILE_NAMES, Config};
pub use validation::{ConfigValidator, NamingValidator};
