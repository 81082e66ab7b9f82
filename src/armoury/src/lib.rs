//! # armoury
//!
//! Rebalancing library for Animated Armoury weapon records.
//!
//! This library provides functionality to:
//! - Detect a weapon's material from its editor ID or keyword set
//! - Detect a weapon's type from its display name or keyword set
//! - Compute rebalanced stat blocks for the animated weapon types
//!   (claw, rapier, katana, whip, pike, quarterstaff, halberd)
//! - Load plugin dumps (keyword table + weapon list) from YAML
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = fs::read("NewArmoury.yaml")?;
//! let dump = armoury::PluginDump::from_yaml(&data)?;
//!
//! for weapon in dump.weapons() {
//!     if let Some(patch) = armoury::rebalance_weapon(weapon, &dump, false) {
//!         println!(
//!             "{}: {} {} -> {:?}",
//!             weapon.editor_id.as_deref().unwrap_or("?"),
//!             patch.material,
//!             patch.weapon_type,
//!             patch.stats,
//!         );
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod material;
pub mod patch;
pub mod record;
pub mod stats;
pub mod store;
pub mod weapon_type;

// Re-export commonly used items
#[doc(inline)]
pub use material::{detect_material, DEFAULT_MATERIAL};
#[doc(inline)]
pub use patch::{rebalance_weapon, WeaponPatch};
#[doc(inline)]
pub use record::{KeywordRecord, KeywordRef, KeywordResolver, WeaponRecord};
#[doc(inline)]
pub use stats::{compute_stats, damage_offset, WeaponStats, ANIMATED_TYPES};
#[doc(inline)]
pub use store::{PluginDump, StoreError};
#[doc(inline)]
pub use weapon_type::{detect_type_from_keywords, detect_type_from_name};
