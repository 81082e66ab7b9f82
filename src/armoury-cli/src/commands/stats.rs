//! Stat query command handler

use anyhow::{Context, Result};
use armoury::ANIMATED_TYPES;

/// Handle the stats command: compute and print one stat block.
pub fn handle(weapon_type: &str, material: &str, include_waccf: bool, json: bool) -> Result<()> {
    let stats = armoury::compute_stats(weapon_type, material, include_waccf).with_context(|| {
        format!(
            "'{}' is not an animated weapon type (expected one of: {})",
            weapon_type,
            ANIMATED_TYPES.join(", ")
        )
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let mode = if include_waccf { "WACCF" } else { "vanilla" };
    println!(
        "{} / {} ({} tables)",
        weapon_type.to_lowercase(),
        material.to_lowercase(),
        mode
    );
    println!("  Speed:       {}", stats.speed);
    println!("  Reach:       {}", stats.reach);
    println!("  Stagger:     {}", stats.stagger);
    println!("  Base damage: {}", stats.base_damage);
    println!("  Crit damage: {}", stats.crit_damage);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_vanilla_types() {
        let err = handle("dagger", "steel", false, false).unwrap_err();
        assert!(err.to_string().contains("not an animated weapon type"));
    }

    #[test]
    fn test_accepts_animated_types() {
        assert!(handle("halberd", "daedric", false, true).is_ok());
        assert!(handle("Claw", "foobar", true, false).is_ok());
    }
}
