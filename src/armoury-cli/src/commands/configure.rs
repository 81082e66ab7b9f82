//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up armoury CLI defaults.

use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
pub fn handle(
    waccf: Option<bool>,
    add_plugin: Option<String>,
    remove_plugin: Option<String>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    let mut changed = false;

    if let Some(enabled) = waccf {
        config.include_waccf = enabled;
        println!(
            "WACCF compatibility {} by default",
            if enabled { "enabled" } else { "disabled" }
        );
        changed = true;
    }

    if let Some(plugin) = add_plugin {
        if config.is_plugin_included(Some(&plugin)) {
            println!("{plugin} is already included");
        } else {
            println!("Added {plugin}");
            config.included_plugins.push(plugin);
            changed = true;
        }
    }

    if let Some(plugin) = remove_plugin {
        let before = config.included_plugins.len();
        config
            .included_plugins
            .retain(|included| !included.eq_ignore_ascii_case(&plugin));
        if config.included_plugins.len() < before {
            println!("Removed {plugin}");
            changed = true;
        } else {
            println!("{plugin} was not in the included set");
        }
    }

    if changed {
        config.save()?;
    } else if waccf.is_none() {
        show_config(&config)?;
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    println!(
        "WACCF compatibility: {}",
        if config.include_waccf { "on" } else { "off" }
    );

    if config.included_plugins.is_empty() {
        println!("Included plugins: (none)");
    } else {
        println!("Included plugins:");
        for plugin in &config.included_plugins {
            println!("  {plugin}");
        }
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}
