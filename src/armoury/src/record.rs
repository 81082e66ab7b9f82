//! Weapon and keyword record types.
//!
//! These mirror the subset of the game's plugin records the rebalancer
//! reads. Records are owned by whatever store loaded them and are never
//! mutated here; rebalancing produces new values instead.

use serde::{Deserialize, Serialize};

/// Opaque reference to a keyword record, resolvable through a
/// [`KeywordResolver`].
///
/// Stands in for a form ID; the numeric value has no meaning to the
/// classifiers beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordRef(pub u32);

/// A resolved keyword record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// Editor ID, e.g. `WeapMaterialSteel` or `WeapTypeHalberd`.
    pub editor_id: Option<String>,
}

/// A weapon record as read from a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponRecord {
    /// Editor ID, e.g. `DraugrPike` or `MysticBoundRapier`.
    pub editor_id: Option<String>,
    /// In-game display name, e.g. "Glass Greatsword".
    pub name: Option<String>,
    /// Plugin the record originates from, e.g. `NewArmoury.esp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    /// Keyword references in record order. `None` if the record carries no
    /// keyword list at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<KeywordRef>>,
}

/// Resolves keyword references against a loaded store.
///
/// An unresolvable reference is a normal outcome (`None`), never an error;
/// the classifiers skip such keywords.
pub trait KeywordResolver {
    fn resolve(&self, keyword: KeywordRef) -> Option<&KeywordRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_ref_is_transparent() {
        let parsed: KeywordRef = serde_yaml::from_str("42").unwrap();
        assert_eq!(parsed, KeywordRef(42));
        assert_eq!(serde_yaml::to_string(&KeywordRef(7)).unwrap().trim(), "7");
    }

    #[test]
    fn test_weapon_record_optional_fields() {
        let weapon: WeaponRecord = serde_yaml::from_str("editor_id: IronDagger").unwrap();
        assert_eq!(weapon.editor_id.as_deref(), Some("IronDagger"));
        assert!(weapon.name.is_none());
        assert!(weapon.plugin.is_none());
        assert!(weapon.keywords.is_none());
    }
}
