//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TERMYNAL_CONFIG";

/// Get the config file path (`$TERMYNAL_CONFIG` or ~/.config/termynal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.toml"))
}

/// Get the config directory path (~/.config/termynal)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("termynal"))
}

/// Load configuration from the default location, or defaults if not found
pub fn load() -> Result<Config> {
    load_from(&config_path()?)
}

/// Load configuration from a file, or return defaults if it does not exist
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

/// Save configuration to a file, creating parent directories
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, contents).with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

/// Outcome of writing a default config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitResult {
    Created(PathBuf),
    AlreadyExists(PathBuf),
    Overwritten(PathBuf),
}

/// Write the default config to `path`. An existing file is kept unless
/// `force` is set.
pub fn init_at(path: &Path, force: bool) -> Result<InitResult> {
    let existed = path.exists();
    if existed && !force {
        return Ok(InitResult::AlreadyExists(path.to_path_buf()));
    }
    save_to(&Config::default(), path)?;
    Ok(if existed {
        InitResult::Overwritten(path.to_path_buf())
    } else {
        InitResult::Created(path.to_path_buf())
    })
}
