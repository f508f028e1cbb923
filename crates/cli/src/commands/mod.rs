pub mod context;
pub mod init;
pub mod list;
pub mod paths;
pub mod resolve;

pub use context::WorkspaceContext;
pub use init::init_command;
pub use list::list_command;
pub use paths::paths_command;
pub use resolve::resolve_command;
