//! Rebalance command handler
//!
//! Runs the full pipeline over a plugin dump: plugin filter, type and
//! material detection, stat computation. Unrecognized weapons are reported
//! and left alone.

use anyhow::{Context, Result};
use armoury::{rebalance_weapon, WeaponPatch};
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::{load_dump, weapon_label};
use crate::config::Config;

/// YAML patch report written by `--output`.
#[derive(Debug, Serialize)]
struct PatchReport {
    include_waccf: bool,
    weapons: Vec<PatchEntry>,
}

#[derive(Debug, Serialize)]
struct PatchEntry {
    editor_id: Option<String>,
    name: Option<String>,
    weapon_type: &'static str,
    material: String,
    stats: armoury::WeaponStats,
}

/// Handle the rebalance command.
pub fn handle(
    input: &Path,
    output: Option<&Path>,
    include_waccf: bool,
    config: &Config,
) -> Result<()> {
    let dump = load_dump(input)?;

    let mut entries = Vec::new();
    let mut filtered = 0usize;
    let mut unrecognized = 0usize;

    for weapon in dump.weapons() {
        if !config.is_plugin_included(weapon.plugin.as_deref()) {
            filtered += 1;
            continue;
        }

        match rebalance_weapon(weapon, &dump, include_waccf) {
            Some(patch) => {
                print_patch(weapon_label(weapon), &patch);
                entries.push(PatchEntry {
                    editor_id: weapon.editor_id.clone(),
                    name: weapon.name.clone(),
                    weapon_type: patch.weapon_type,
                    material: patch.material,
                    stats: patch.stats,
                });
            }
            None => unrecognized += 1,
        }
    }

    println!();
    println!(
        "Rebalanced {} weapon(s); {} unrecognized, {} outside included plugins",
        entries.len(),
        unrecognized,
        filtered
    );

    if let Some(path) = output {
        let report = PatchReport {
            include_waccf,
            weapons: entries,
        };
        let contents =
            serde_yaml::to_string(&report).context("Failed to serialize patch report")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write patch report to {}", path.display()))?;
        println!("Patch report written to {}", path.display());
    }

    Ok(())
}

fn print_patch(label: &str, patch: &WeaponPatch) {
    println!(
        "{}: {} {} -> speed {} reach {} stagger {} damage {} crit {}",
        label,
        patch.material,
        patch.weapon_type,
        patch.stats.speed,
        patch.stats.reach,
        patch.stats.stagger,
        patch.stats.base_damage,
        patch.stats.crit_damage
    );
}
