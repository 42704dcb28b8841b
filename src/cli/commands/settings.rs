//! Configuration inspection command.

use crate::config::{self, Config};

/// Print the effective configuration, optionally writing defaults first
pub fn cmd_config(current: &Config, init: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if init {
        match &path {
            Some(p) if p.exists() => println!("Config already exists at {}", p.display()),
            _ => {
                let written = config::save(&Config::default())?;
                println!("Wrote default config to {}", written.display());
            }
        }
    }

    match &path {
        Some(p) => println!("# {}", p.display()),
        None => println!("# (no config directory available)"),
    }
    print!("{}", toml::to_string_pretty(current)?);

    Ok(())
}
