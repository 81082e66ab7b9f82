//! Command handlers for the armoury CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod classify;
pub mod configure;
pub mod rebalance;
pub mod stats;

use anyhow::{Context, Result};
use armoury::PluginDump;
use std::fs;
use std::path::Path;

/// Load a plugin dump from a YAML file.
pub(crate) fn load_dump(path: &Path) -> Result<PluginDump> {
    let data = fs::read(path)
        .with_context(|| format!("Failed to read plugin dump: {}", path.display()))?;

    PluginDump::from_yaml(&data)
        .with_context(|| format!("Failed to parse plugin dump: {}", path.display()))
}

/// Best available label for a weapon in report output.
pub(crate) fn weapon_label(weapon: &armoury::WeaponRecord) -> &str {
    weapon
        .editor_id
        .as_deref()
        .or(weapon.name.as_deref())
        .unwrap_or("<unnamed>")
}
