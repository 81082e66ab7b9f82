//! Classification command handler
//!
//! Prints the detected weapon type and material for every weapon in a
//! plugin dump without computing stats.

use anyhow::Result;
use armoury::{detect_material, detect_type_from_keywords, detect_type_from_name, KeywordResolver, WeaponRecord};
use std::path::Path;

use super::{load_dump, weapon_label};

/// Handle the classify command.
pub fn handle(input: &Path, include_waccf: bool) -> Result<()> {
    let dump = load_dump(input)?;

    for weapon in dump.weapons() {
        println!("{}", describe(weapon, &dump, include_waccf));
    }

    Ok(())
}

/// One report line for a weapon.
fn describe(weapon: &WeaponRecord, resolver: &impl KeywordResolver, include_waccf: bool) -> String {
    let weapon_type = weapon
        .name
        .as_deref()
        .and_then(detect_type_from_name)
        .or_else(|| detect_type_from_keywords(weapon, resolver))
        .unwrap_or("unknown");
    let material = detect_material(weapon, resolver, include_waccf);

    format!(
        "{}: type={} material={}",
        weapon_label(weapon),
        weapon_type,
        material
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use armoury::PluginDump;

    #[test]
    fn test_describe() {
        let dump = PluginDump::from_yaml(
            b"\
keywords:
  - id: 1
    editor_id: WeapTypeWhip
  - id: 2
    editor_id: WeapMaterialElven
weapons:
  - editor_id: ElvenWhip
    keywords: [1, 2]
  - name: Fork
",
        )
        .unwrap();

        assert_eq!(
            describe(&dump.weapons()[0], &dump, false),
            "ElvenWhip: type=whip material=elven"
        );
        assert_eq!(
            describe(&dump.weapons()[1], &dump, false),
            "Fork: type=unknown material=steel"
        );
    }
}
