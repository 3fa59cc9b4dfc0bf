use anyhow::Result;
use bomberos_core::DisplayConfig;
use owo_colors::OwoColorize;

pub fn run(init: bool) -> Result<()> {
    let path = DisplayConfig::config_path()?;

    if init {
        if path.exists() {
            println!("{}", format!("Config already exists at {}", path.display()).dimmed());
        } else {
            DisplayConfig::create_default_config(&path)?;
            println!("Created {}", path.display());
        }
        return Ok(());
    }

    let config = DisplayConfig::load_from(&path)?;
    println!("{}", path.display().to_string().bold());
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}
