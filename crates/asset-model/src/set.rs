//! Desktop-set view derived from peripheral assets.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::error::ModelError;
use crate::peripheral::ComponentSlot;

/// Location reported when a set's members sit in different places.
pub const MIXED_LOCATIONS: &str = "Mixed Locations";

/// Grouping key of a desktop set: `(financial year, set id)`.
///
/// Displayed as `2025-26-T01`. The financial year itself contains a hyphen,
/// so the composite text splits at the last one.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct SetKey {
    pub financial_year: String,
    pub set_id: String,
}

impl SetKey {
    pub fn new(financial_year: impl Into<String>, set_id: impl Into<String>) -> Self {
        Self {
            financial_year: financial_year.into(),
            set_id: set_id.into(),
        }
    }
}

impl fmt::Display for SetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.financial_year, self.set_id)
    }
}

impl FromStr for SetKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.rsplit_once('-') {
            Some((year, set_id)) if !year.is_empty() && !set_id.is_empty() => {
                Ok(Self::new(year, set_id))
            }
            _ => Err(ModelError::InvalidSetKey(s.to_string())),
        }
    }
}

/// One logical desktop computer assembled from its peripheral assets.
///
/// Recomputed from the asset collection on every grouping call; it has no
/// identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopSet {
    pub set_id: String,
    pub financial_year: String,
    pub display_name: String,
    /// At most one asset per slot.
    pub components: BTreeMap<ComponentSlot, Asset>,
    /// Every asset carrying this set's key, in input order.
    pub all_assets: Vec<Asset>,
    /// Share of the four slots filled: 0, 25, 50, 75 or 100.
    pub completeness: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub total_cost: f64,
}

impl DesktopSet {
    pub fn key(&self) -> SetKey {
        SetKey::new(self.financial_year.clone(), self.set_id.clone())
    }

    pub fn component(&self, slot: ComponentSlot) -> Option<&Asset> {
        self.components.get(&slot)
    }

    pub fn is_complete(&self) -> bool {
        self.completeness == 100
    }

    pub fn missing_slots(&self) -> Vec<ComponentSlot> {
        ComponentSlot::ALL
            .into_iter()
            .filter(|slot| !self.components.contains_key(slot))
            .collect()
    }

    /// Members that lost their slot to a later asset of the same type.
    pub fn duplicate_count(&self) -> usize {
        self.all_assets.len().saturating_sub(self.components.len())
    }

    pub fn has_mixed_locations(&self) -> bool {
        self.location.as_deref() == Some(MIXED_LOCATIONS)
    }
}

/// Output of the grouping engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedAssets {
    pub desktop_sets: Vec<DesktopSet>,
    pub ungrouped_assets: Vec<Asset>,
}

impl GroupedAssets {
    pub fn set_count(&self) -> usize {
        self.desktop_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.desktop_sets.is_empty() && self.ungrouped_assets.is_empty()
    }

    pub fn incomplete_sets(&self) -> impl Iterator<Item = &DesktopSet> {
        self.desktop_sets.iter().filter(|set| !set.is_complete())
    }

    pub fn find_set(&self, key: &SetKey) -> Option<&DesktopSet> {
        self.desktop_sets
            .iter()
            .find(|set| set.financial_year == key.financial_year && set.set_id == key.set_id)
    }
}
