use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{init_command, list_command, paths_command, resolve_command};

#[derive(Parser, Debug)]
#[command(name = "svclink")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve an implementation project and print its metadata
    #[command(visible_alias = "r")]
    Resolve {
        /// Name of the implementation project
        project: String,

        /// Workspace directory (defaults to current directory)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Print the resolved project as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the derived artifact paths of an implementation project
    #[command(visible_alias = "p")]
    Paths {
        /// Name of the implementation project
        project: String,

        /// Service name used for the war file (resolved from the workspace when omitted)
        #[arg(short, long)]
        service: Option<String>,

        /// Workspace directory (defaults to current directory)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Print the paths as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve every project of the workspace and summarize the links
    #[command(visible_alias = "l")]
    List {
        /// Workspace directory (defaults to current directory)
        #[arg(short, long)]
        workspace: Option<String>,
    },
    /// Write a default svclink configuration
    Init {
        /// Specify the current working directory
        #[arg(short, long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Resolve {
                project,
                workspace,
                json,
            } => resolve_command(&project, workspace.as_deref(), json),
            Commands::Paths {
                project,
                service,
                workspace,
                json,
            } => paths_command(&project, service.as_deref(), workspace.as_deref(), json),
            Commands::List { workspace } => list_command(workspace.as_deref()),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
