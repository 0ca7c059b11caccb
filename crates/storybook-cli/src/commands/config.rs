use anyhow::Result;
use tracing::info;

use storybook_core::AppConfig;

pub fn run(config: &AppConfig, write: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if write {
        config.save()?;
        info!("Wrote configuration to {}", path.display());
        println!("Saved configuration to {}", path.display());
        return Ok(());
    }

    let origin = if path.exists() { "" } else { " (not found, defaults)" };
    println!("# {}{}\n", path.display(), origin);
    print!("{}", config.to_toml()?);
    Ok(())
}
