//! Desktop-set grouping.
//!
//! Peripheral assets are bucketed by `(financial year, set id)` and each
//! bucket is reduced to a [`DesktopSet`]. Assets whose tag does not follow the
//! peripheral grammar pass through unchanged.
//!
//! Data-quality problems resolve by fixed policy, never by error:
//!
//! - two assets of the same type in one set: the later one keeps the slot
//! - set cost: taken from the first asset of the set only
//! - differing locations: reported as [`MIXED_LOCATIONS`]

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use asset_model::{
    Asset, ComponentSlot, DesktopSet, GroupedAssets, MIXED_LOCATIONS, PeripheralType, SetKey,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lookup::{set_display_name, set_number};
use crate::tag::parse_asset_tag;

/// Ordering of set ids within one financial year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetIdOrder {
    /// Plain string comparison: `T10` sorts before `T2`.
    #[default]
    Lexical,
    /// Compare the number after `T`: `T2` sorts before `T10`.
    Numeric,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingOptions {
    pub set_id_order: SetIdOrder,
}

impl GroupingOptions {
    #[must_use]
    pub fn with_set_id_order(mut self, order: SetIdOrder) -> Self {
        self.set_id_order = order;
        self
    }
}

/// Group assets into desktop sets using default options.
///
/// Sets are ordered newest financial year first, then by set id.
pub fn group_assets_into_desktop_sets(assets: &[Asset]) -> GroupedAssets {
    group_assets_with(assets, &GroupingOptions::default())
}

/// Group assets into desktop sets.
pub fn group_assets_with(assets: &[Asset], options: &GroupingOptions) -> GroupedAssets {
    let mut buckets: BTreeMap<SetKey, Vec<(PeripheralType, &Asset)>> = BTreeMap::new();
    let mut ungrouped_assets = Vec::new();

    for asset in assets {
        let info = parse_asset_tag(&asset.asset_tagging);
        match (info.peripheral_type(), info.set_key()) {
            (Some(peripheral_type), Some(key)) => {
                buckets.entry(key).or_default().push((peripheral_type, asset));
            }
            _ => ungrouped_assets.push(asset.clone()),
        }
    }

    let mut desktop_sets: Vec<DesktopSet> = buckets
        .into_iter()
        .map(|(key, members)| build_desktop_set(key, &members))
        .collect();
    desktop_sets.sort_by(|left, right| compare_sets(left, right, options.set_id_order));

    debug!(
        asset_count = assets.len(),
        set_count = desktop_sets.len(),
        ungrouped_count = ungrouped_assets.len(),
        "grouped assets into desktop sets"
    );

    GroupedAssets {
        desktop_sets,
        ungrouped_assets,
    }
}

fn build_desktop_set(key: SetKey, members: &[(PeripheralType, &Asset)]) -> DesktopSet {
    let mut components: BTreeMap<ComponentSlot, Asset> = BTreeMap::new();
    for (peripheral_type, asset) in members {
        // Last write wins for duplicate slots.
        components.insert(peripheral_type.slot(), (*asset).clone());
    }

    let completeness = completeness_percent(components.len());
    let total_cost = members
        .first()
        .map_or(0.0, |(_, asset)| asset.cost_value());
    let location = shared_location(members.iter().map(|(_, asset)| *asset));
    let all_assets = members.iter().map(|(_, asset)| (*asset).clone()).collect();

    DesktopSet {
        display_name: set_display_name(&key.financial_year, &key.set_id),
        set_id: key.set_id,
        financial_year: key.financial_year,
        components,
        all_assets,
        completeness,
        location,
        total_cost,
    }
}

fn completeness_percent(filled: usize) -> u8 {
    let filled = filled.min(ComponentSlot::ALL.len());
    // filled <= 4, so the result is at most 100
    (filled * 100 / ComponentSlot::ALL.len()) as u8
}

fn shared_location<'a>(assets: impl Iterator<Item = &'a Asset>) -> Option<String> {
    let locations: BTreeSet<&str> = assets.filter_map(Asset::location_value).collect();
    match locations.len() {
        0 => None,
        1 => locations.into_iter().next().map(str::to_string),
        _ => Some(MIXED_LOCATIONS.to_string()),
    }
}

fn compare_sets(left: &DesktopSet, right: &DesktopSet, order: SetIdOrder) -> Ordering {
    right
        .financial_year
        .cmp(&left.financial_year)
        .then_with(|| compare_set_ids(&left.set_id, &right.set_id, order))
}

fn compare_set_ids(left: &str, right: &str, order: SetIdOrder) -> Ordering {
    match order {
        SetIdOrder::Lexical => left.cmp(right),
        SetIdOrder::Numeric => numeric_key(left)
            .cmp(&numeric_key(right))
            .then_with(|| left.cmp(right)),
    }
}

/// Orders digit strings by value without parsing (set ids have no length cap).
fn numeric_key(set_id: &str) -> (usize, &str) {
    let digits = set_number(set_id);
    (digits.len(), digits)
}
