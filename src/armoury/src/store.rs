//! Plugin dump loading.
//!
//! The game's actual load order is out of scope here; a [`PluginDump`] is a
//! YAML snapshot of the records the rebalancer needs: a keyword table and a
//! weapon list. The dump implements [`KeywordResolver`] over its own
//! keyword table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{KeywordRecord, KeywordRef, KeywordResolver, WeaponRecord};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// One keyword table entry in a dump file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct KeywordEntry {
    id: KeywordRef,
    #[serde(default)]
    editor_id: Option<String>,
}

/// On-disk dump layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DumpData {
    #[serde(default)]
    keywords: Vec<KeywordEntry>,
    #[serde(default)]
    weapons: Vec<WeaponRecord>,
}

/// A loaded plugin dump: resolvable keywords plus the weapons to process.
#[derive(Debug, Clone)]
pub struct PluginDump {
    keywords: HashMap<KeywordRef, KeywordRecord>,
    weapons: Vec<WeaponRecord>,
}

impl PluginDump {
    /// Parse a dump from YAML data.
    ///
    /// Duplicate keyword ids keep the last entry, matching load-order
    /// override semantics.
    pub fn from_yaml(data: &[u8]) -> Result<Self, StoreError> {
        let data: DumpData = serde_yaml::from_slice(data)?;

        let keywords = data
            .keywords
            .into_iter()
            .map(|entry| {
                (
                    entry.id,
                    KeywordRecord {
                        editor_id: entry.editor_id,
                    },
                )
            })
            .collect();

        Ok(PluginDump {
            keywords,
            weapons: data.weapons,
        })
    }

    /// The weapon records in the dump, in file order.
    pub fn weapons(&self) -> &[WeaponRecord] {
        &self.weapons
    }

    /// Number of keyword table entries.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

impl KeywordResolver for PluginDump {
    fn resolve(&self, keyword: KeywordRef) -> Option<&KeywordRecord> {
        self.keywords.get(&keyword)
    }
}
