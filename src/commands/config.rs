//! Config subcommands handler

use anyhow::{Context, Result};

use termynal::config::InitResult;
use termynal::Config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the configuration file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration file.
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    match Config::init_at(&path, force)? {
        InitResult::Created(path) => println!("Created {}", path.display()),
        InitResult::Overwritten(path) => println!("Overwrote {}", path.display()),
        InitResult::AlreadyExists(path) => {
            println!("{} already exists (use --force to overwrite)", path.display())
        }
    }
    Ok(())
}
