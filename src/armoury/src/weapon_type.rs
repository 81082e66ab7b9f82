//! Weapon type detection.
//!
//! Two independent detectors: a substring scan over the display name and an
//! exact-match scan over the keyword set. Callers chain them (name first,
//! keywords as fallback); no match is a normal outcome.

use crate::record::{KeywordResolver, WeaponRecord};

/// Ordered (phrases, type) rules for name-based detection.
///
/// `greatsword` is ordered before `sword` so a greatsword never reports as
/// a plain sword; otherwise order only fixes which rule wins for names that
/// genuinely mention several types.
const NAME_RULES: &[(&[&str], &str)] = &[
    (&["dagger"], "dagger"),
    (&["greatsword"], "greatsword"),
    (&["sword"], "sword"),
    (&["war axe", "waraxe"], "waraxe"),
    (&["mace"], "mace"),
    (&["battleaxe", "battle axe"], "battleaxe"),
    (&["warhammer", "war hammer"], "warhammer"),
    (&["spear"], "spear"),
    (&["halberd"], "halberd"),
    (&["quarterstaff", "quarter staff"], "quarterstaff"),
    (&["claw"], "claw"),
];

/// Exact keyword editor IDs to animated weapon types.
const KEYWORD_TYPES: &[(&str, &str)] = &[
    ("weaptypeclaw", "claw"),
    ("weaptypehalberd", "halberd"),
    ("weaptypekatana", "katana"),
    ("weaptypepike", "pike"),
    ("weaptypeqtrstaff", "quarterstaff"),
    ("weaptyperapier", "rapier"),
    ("weaptypewhip", "whip"),
];

/// Detect a weapon type from a display name.
///
/// Case-insensitive; returns the first matching rule, or `None` for an
/// empty or unrecognized name.
pub fn detect_type_from_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return None;
    }

    let name = name.to_lowercase();

    NAME_RULES
        .iter()
        .find(|(phrases, _)| phrases.iter().any(|phrase| name.contains(phrase)))
        .map(|(_, kind)| *kind)
}

/// Detect a weapon type from the weapon's keywords.
///
/// Returns the type of the first keyword (in record order) whose resolved
/// editor ID matches the fixed `weaptype*` table; unresolvable keywords are
/// skipped.
pub fn detect_type_from_keywords(
    weapon: &WeaponRecord,
    resolver: &impl KeywordResolver,
) -> Option<&'static str> {
    let keywords = weapon.keywords.as_ref()?;

    for &keyword in keywords {
        let Some(record) = resolver.resolve(keyword) else {
            continue;
        };
        let Some(editor_id) = &record.editor_id else {
            continue;
        };
        let name = editor_id.to_lowercase();

        if let Some((_, kind)) = KEYWORD_TYPES.iter().find(|(key, _)| name == *key) {
            return Some(*kind);
        }
    }

    None
}
