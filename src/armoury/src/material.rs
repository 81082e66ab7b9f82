//! Material detection.
//!
//! A weapon's material is inferred from its editor ID (bound weapons and
//! one lore exception) or from its keyword set. Detection never fails;
//! weapons that match nothing fall back to [`DEFAULT_MATERIAL`]. All
//! results are lowercase.

use crate::record::{KeywordResolver, WeaponRecord};

/// Material assumed when nothing else matches.
pub const DEFAULT_MATERIAL: &str = "steel";

/// WACCF material keywords, e.g. `WACCF_WeaponMaterialOrcish`.
const WACCF_MATERIAL_MARKER: &str = "waccf_weaponmaterial";

/// Vanilla material keywords, e.g. `WeapMaterialSteel`.
const MATERIAL_MARKER: &str = "material";

/// Detect the material of a weapon.
///
/// Priority order:
/// 1. The Dragon Priest claws, which carry no usable keywords, are orcish.
/// 2. Bound weapons are identified by naming convention: `mystic` variants
///    are daedric, the rest dwarven.
/// 3. First keyword carrying a material marker wins. With WACCF active,
///    `waccf_weaponmaterial*` keywords take precedence over the generic
///    `material` substring rule.
/// 4. [`DEFAULT_MATERIAL`].
///
/// Unresolvable keywords and keywords without an editor ID are skipped.
pub fn detect_material(
    weapon: &WeaponRecord,
    resolver: &impl KeywordResolver,
    include_waccf: bool,
) -> String {
    if let Some(editor_id) = &weapon.editor_id {
        let editor_id = editor_id.to_lowercase();

        if editor_id == "dragonpriestclaws" || editor_id == "dragonpriestclawsleft" {
            return "orcish".to_string();
        }

        if editor_id.contains("bound") {
            if editor_id.contains("mystic") {
                return "daedric".to_string();
            }
            return "dwarven".to_string();
        }
    }

    let Some(keywords) = &weapon.keywords else {
        return DEFAULT_MATERIAL.to_string();
    };

    for &keyword in keywords {
        let Some(record) = resolver.resolve(keyword) else {
            continue;
        };
        let Some(editor_id) = &record.editor_id else {
            continue;
        };
        let name = editor_id.to_lowercase();

        if include_waccf && name.contains(WACCF_MATERIAL_MARKER) {
            return name.replace(WACCF_MATERIAL_MARKER, "").trim().to_string();
        }

        if let Some(index) = name.find(MATERIAL_MARKER) {
            // Everything after the marker is the material name; a bare
            // marker with nothing following is not a match
            let tail = name[index + MATERIAL_MARKER.len()..].trim();
            if !tail.is_empty() {
                return tail.to_string();
            }
        }
    }

    DEFAULT_MATERIAL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{KeywordRecord, KeywordRef};

    /// Index-backed keyword table; out-of-range refs are unresolvable.
    struct Keywords(Vec<KeywordRecord>);

    impl Keywords {
        fn new(names: &[&str]) -> Self {
            Keywords(
                names
                    .iter()
                    .map(|name| KeywordRecord {
                        editor_id: Some((*name).to_string()),
                    })
                    .collect(),
            )
        }
    }

    impl KeywordResolver for Keywords {
        fn resolve(&self, keyword: KeywordRef) -> Option<&KeywordRecord> {
            self.0.get(keyword.0 as usize)
        }
    }

    fn weapon(editor_id: Option<&str>, keyword_count: usize) -> WeaponRecord {
        WeaponRecord {
            editor_id: editor_id.map(str::to_string),
            keywords: Some((0..keyword_count as u32).map(KeywordRef).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_dragon_priest_claws_are_orcish() {
        let keywords = Keywords::new(&["WeapMaterialEbony"]);
        let claws = weapon(Some("DragonPriestClaws"), 1);
        assert_eq!(detect_material(&claws, &keywords, false), "orcish");

        let left = weapon(Some("dragonpriestclawsLEFT"), 1);
        assert_eq!(detect_material(&left, &keywords, false), "orcish");
    }

    #[test]
    fn test_bound_weapons() {
        let keywords = Keywords::new(&[]);
        let bound = weapon(Some("BoundRapier"), 0);
        assert_eq!(detect_material(&bound, &keywords, false), "dwarven");

        let mystic = weapon(Some("MysticBoundRapier"), 0);
        assert_eq!(detect_material(&mystic, &keywords, false), "daedric");
    }

    #[test]
    fn test_no_keywords_defaults_to_steel() {
        let keywords = Keywords::new(&[]);
        let bare = WeaponRecord {
            editor_id: Some("IronPike".to_string()),
            ..Default::default()
        };
        assert_eq!(detect_material(&bare, &keywords, false), "steel");

        // An empty keyword list behaves the same
        assert_eq!(detect_material(&weapon(None, 0), &keywords, false), "steel");
    }

    #[test]
    fn test_material_keyword() {
        let keywords = Keywords::new(&["WeapTypeSword", "MATERIALSteel"]);
        assert_eq!(detect_material(&weapon(None, 2), &keywords, false), "steel");

        let keywords = Keywords::new(&["DLC2WeaponMaterialStalhrim"]);
        assert_eq!(
            detect_material(&weapon(None, 1), &keywords, false),
            "stalhrim"
        );
    }

    #[test]
    fn test_first_material_keyword_wins() {
        let keywords = Keywords::new(&["WeapMaterialOrcish", "WeapMaterialGlass"]);
        assert_eq!(
            detect_material(&weapon(None, 2), &keywords, false),
            "orcish"
        );
    }

    #[test]
    fn test_waccf_keyword() {
        let keywords = Keywords::new(&["WACCF_WeaponMaterialOrcish"]);
        assert_eq!(detect_material(&weapon(None, 1), &keywords, true), "orcish");
    }

    #[test]
    fn test_waccf_keyword_still_matches_generic_rule_when_disabled() {
        // With the flag off the WACCF branch is skipped, but the generic
        // rule matches the "material" substring inside the WACCF marker and
        // extracts the same tail. Long-standing behavior, kept as is.
        let keywords = Keywords::new(&["WACCF_WeaponMaterialOrcish"]);
        assert_eq!(
            detect_material(&weapon(None, 1), &keywords, false),
            "orcish"
        );
    }

    #[test]
    fn test_bare_material_suffix_is_skipped() {
        let keywords = Keywords::new(&["WeapMaterial", "WeapMaterialEbony"]);
        assert_eq!(detect_material(&weapon(None, 2), &keywords, false), "ebony");

        let keywords = Keywords::new(&["WeapMaterial"]);
        assert_eq!(detect_material(&weapon(None, 1), &keywords, false), "steel");
    }

    #[test]
    fn test_unresolvable_and_nameless_keywords_are_skipped() {
        let mut keywords = Keywords::new(&["WeapMaterialDaedric"]);
        keywords.0.insert(0, KeywordRecord { editor_id: None });

        // Refs: 5 is unresolvable, 0 has no editor ID, 1 is the material
        let weapon = WeaponRecord {
            keywords: Some(vec![KeywordRef(5), KeywordRef(0), KeywordRef(1)]),
            ..Default::default()
        };
        assert_eq!(detect_material(&weapon, &keywords, false), "daedric");
    }

    #[test]
    fn test_detection_is_pure() {
        let keywords = Keywords::new(&["WeapMaterialNordic"]);
        let subject = weapon(None, 1);
        let copy = subject.clone();

        let a = detect_material(&subject, &keywords, false);
        let b = detect_material(&subject, &keywords, false);
        assert_eq!(a, b);
        assert_eq!(subject, copy);
    }
}
