//! Per-weapon rebalancing pipeline.
//!
//! Ties the classifiers and the rebalancer together for one record: detect
//! a type (display name first, keywords as fallback), detect a material,
//! compute stats. Weapons outside the animated set yield `None` and must be
//! left untouched by the host.

use serde::Serialize;

use crate::material::detect_material;
use crate::record::{KeywordResolver, WeaponRecord};
use crate::stats::{compute_stats, WeaponStats};
use crate::weapon_type::{detect_type_from_keywords, detect_type_from_name};

/// The outcome of rebalancing one weapon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaponPatch {
    pub weapon_type: &'static str,
    pub material: String,
    pub stats: WeaponStats,
}

/// Rebalance a single weapon record.
///
/// Returns `None` when no type can be detected or the detected type has no
/// base stats (vanilla types like `dagger` or `greatsword`); the record
/// itself is never modified.
pub fn rebalance_weapon(
    weapon: &WeaponRecord,
    resolver: &impl KeywordResolver,
    include_waccf: bool,
) -> Option<WeaponPatch> {
    let weapon_type = weapon
        .name
        .as_deref()
        .and_then(detect_type_from_name)
        .or_else(|| detect_type_from_keywords(weapon, resolver))?;

    let material = detect_material(weapon, resolver, include_waccf);
    let stats = compute_stats(weapon_type, &material, include_waccf)?;

    Some(WeaponPatch {
        weapon_type,
        material,
        stats,
    })
}
