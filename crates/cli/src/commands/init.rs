use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use svclink_core::{Config, config::CONFIG_FILE_NAMES};
use tracing::info;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let root = root
        .canonicalize()
        .context("Failed to canonicalize workspace root")?;

    let config_path = root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote default configuration to {:?}", config_path);

    println!("✅ Created config: {}", config_path.display());
    Ok(())
}
