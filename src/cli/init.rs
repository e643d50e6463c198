//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use xtm_achievements::config::Config;

/// Write the default configuration file
pub async fn init_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    Config::default().save_to_file(path)?;
    info!("Created config file: {}", path.display());
    println!("Created {}", path.display());

    Ok(())
}
