pub mod formatter;

pub use formatter::{print_artifact_paths, print_link_summary, print_resolved_project};
