use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use svclink_core::{
    Config, DefaultConfigParser, FsWorkspace, MetadataResolver, ProjectHandle, Workspace,
};
use tracing::debug;

/// Workspace directory, its configuration and storage, as used by every command
pub struct WorkspaceContext {
    pub root: PathBuf,
    pub config: Config,
    pub workspace: FsWorkspace,
    pub parser: DefaultConfigParser,
}

impl WorkspaceContext {
    pub fn open(workspace: Option<&str>) -> Result<Self> {
        let root = match workspace {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir().context("Failed to get current directory")?,
        };
        let root = root
            .canonicalize()
            .with_context(|| format!("Workspace directory not found: {}", root.display()))?;

        let config = Config::discover(&root)
            .with_context(|| format!("Failed to load configuration for {}", root.display()))?;
        debug!("Using workspace {:?}", root);

        Ok(Self {
            workspace: FsWorkspace::new(&root),
            root,
            config,
            parser: DefaultConfigParser::new(),
        })
    }

    pub fn resolver(&self) -> MetadataResolver<'_> {
        MetadataResolver::new(&self.workspace, &self.parser, &self.config.naming)
    }

    pub fn project(&self, name: &str) -> Result<ProjectHandle> {
        self.workspace
            .project_by_name(name)
            .with_context(|| format!("Project '{}' not found in {}", name, self.root.display()))
    }
}
