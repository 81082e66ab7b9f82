//! Stat tables and the rebalancer.
//!
//! Hardcoded rebalance data for the animated weapon types: a base stat
//! block per type, two damage-offset tables keyed by material (vanilla and
//! WACCF), and an ordered list of material-specific stat adjustments.
//! Lookups are case-insensitive; every computation returns a fresh value
//! and never touches the static tables.

use serde::Serialize;

/// A computed weapon stat block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaponStats {
    pub speed: f32,
    pub reach: f32,
    pub stagger: f32,
    pub base_damage: i32,
    pub crit_damage: i32,
}

// ============================================================================
// Base stats
// ============================================================================

/// The weapon types with entries in the base stat table, in table order.
///
/// Vanilla types (dagger, sword, ...) deliberately have no entries: weapons
/// outside this set are left untouched by the rebalancer.
pub const ANIMATED_TYPES: &[&str] = &[
    "claw",
    "rapier",
    "katana",
    "whip",
    "pike",
    "quarterstaff",
    "halberd",
];

/// Base stats per animated weapon type: speed, reach, stagger, base damage,
/// critical damage.
const BASE_STATS: &[(&str, WeaponStats)] = &[
    (
        "claw",
        WeaponStats {
            speed: 1.2,
            reach: 0.7,
            stagger: 0.0,
            base_damage: 5,
            crit_damage: 1,
        },
    ),
    (
        "rapier",
        WeaponStats {
            speed: 1.15,
            reach: 1.1,
            stagger: 0.6,
            base_damage: 5,
            crit_damage: 5,
        },
    ),
    (
        "katana",
        WeaponStats {
            speed: 1.125,
            reach: 1.0,
            stagger: 0.75,
            base_damage: 7,
            crit_damage: 3,
        },
    ),
    (
        "whip",
        WeaponStats {
            speed: 0.9,
            reach: 2.0,
            stagger: 0.4,
            base_damage: 7,
            crit_damage: 1,
        },
    ),
    (
        "pike",
        WeaponStats {
            speed: 0.7,
            reach: 1.7,
            stagger: 1.0,
            base_damage: 12,
            crit_damage: 7,
        },
    ),
    (
        "quarterstaff",
        WeaponStats {
            speed: 1.1,
            reach: 1.2,
            stagger: 1.0,
            base_damage: 10,
            crit_damage: 4,
        },
    ),
    (
        "halberd",
        WeaponStats {
            speed: 0.65,
            reach: 1.55,
            stagger: 1.1,
            base_damage: 15,
            crit_damage: 8,
        },
    ),
];

/// Get the base stat block for a weapon type
pub fn base_stats(weapon_type: &str) -> Option<&'static WeaponStats> {
    BASE_STATS
        .iter()
        .find(|(kind, _)| kind.eq_ignore_ascii_case(weapon_type))
        .map(|(_, stats)| stats)
}

// ============================================================================
// Damage offsets
// ============================================================================

/// Per-material damage offsets, vanilla tables.
///
/// Note: nordhero and tempest exist only here, not in the WACCF table.
const DAMAGE_OFFSETS: &[(&str, i32)] = &[
    ("iron", 0),
    ("riekling", -1),
    ("steel", 1),
    ("silver", 1),
    ("draugr", 1),
    ("imperial", 2),
    ("orcish", 2),
    ("dragonpriest", 2),
    ("dwarven", 3),
    ("falmer", 3),
    ("forsworn", 3),
    ("dawnguard", 3),
    ("nordhero", 4),
    ("skyforge", 4),
    ("elven", 4),
    ("nordic", 4),
    ("blades", 4),
    ("draugrhoned", 4),
    ("redguard", 4),
    ("glass", 5),
    ("falmerhoned", 5),
    ("ebony", 6),
    ("stalhrim", 6),
    ("tempest", 6),
    ("daedric", 7),
    ("dragonbone", 8),
];

/// Per-material damage offsets when WACCF is active.
const DAMAGE_OFFSETS_WACCF: &[(&str, i32)] = &[
    ("iron", 0),
    ("riekling", -1),
    ("steel", 1),
    ("silver", 1),
    ("draugr", 1),
    ("imperial", 1),
    ("orcish", 4),
    ("dragonpriest", 2),
    ("dwarven", 2),
    ("falmer", 3),
    ("forsworn", 2),
    ("dawnguard", 3),
    ("skyforge", 4),
    ("elven", 3),
    ("nordic", 4),
    ("blades", 4),
    ("draugrhoned", 4),
    ("redguard", 4),
    ("glass", 5),
    ("falmerhoned", 5),
    ("ebony", 6),
    ("stalhrim", 6),
    ("daedric", 8),
    ("dragonbone", 7),
];

/// Get the damage offset for a material. Unknown materials offset by 0.
pub fn damage_offset(material: &str, include_waccf: bool) -> i32 {
    let table = if include_waccf {
        DAMAGE_OFFSETS_WACCF
    } else {
        DAMAGE_OFFSETS
    };

    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(material))
        .map_or(0, |(_, offset)| *offset)
}

// ============================================================================
// Material adjustments
// ============================================================================

/// Material-specific stat adjustments, applied in order after the base
/// lookup and before the damage offset. New rules slot in here without
/// touching the base table.
const MATERIAL_RULES: &[(&str, fn(&mut WeaponStats, bool))] =
    &[("stalhrim", stalhrim_stagger)];

/// WACCF ships its own stalhrim balance, so the stagger bonus only applies
/// without it.
fn stalhrim_stagger(stats: &mut WeaponStats, include_waccf: bool) {
    if !include_waccf {
        stats.stagger += 0.1;
    }
}

// ============================================================================
// Rebalancer
// ============================================================================

/// Compute the rebalanced stat block for a weapon type and material.
///
/// Returns `None` for any type outside [`ANIMATED_TYPES`]; an unknown
/// material is fine and simply contributes no damage offset.
pub fn compute_stats(weapon_type: &str, material: &str, include_waccf: bool) -> Option<WeaponStats> {
    let mut stats = base_stats(weapon_type)?.clone();

    for (name, adjust) in MATERIAL_RULES {
        if name.eq_ignore_ascii_case(material) {
            adjust(&mut stats, include_waccf);
        }
    }

    stats.base_damage += damage_offset(material, include_waccf);

    Some(stats)
}
