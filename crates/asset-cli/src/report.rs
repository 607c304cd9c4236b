//! Row models behind the command output.
//!
//! Everything here is plain data derived from a grouping result, so the
//! tables in `summary` stay free of business rules and the rules stay
//! testable without a terminal.

use asset_model::{Asset, ComponentSlot, DesktopSet, GroupedAssets};
use asset_sets::{parse_asset_tag, peripheral_type_name, set_display_name, set_identifier};

/// One desktop set as shown in the `sets` table.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRow {
    pub display_name: String,
    pub financial_year: String,
    pub set_id: String,
    /// Tag in each slot, in [`ComponentSlot::ALL`] order.
    pub slot_tags: [Option<String>; 4],
    pub completeness: u8,
    pub location: Option<String>,
    pub total_cost: f64,
    pub duplicates: usize,
}

impl SetRow {
    pub fn from_set(set: &DesktopSet) -> Self {
        let slot_tags = ComponentSlot::ALL.map(|slot| {
            set.component(slot)
                .map(|asset| asset.asset_tagging.clone())
        });
        Self {
            display_name: set.display_name.clone(),
            financial_year: set.financial_year.clone(),
            set_id: set.set_id.clone(),
            slot_tags,
            completeness: set.completeness,
            location: set.location.clone(),
            total_cost: set.total_cost,
            duplicates: set.duplicate_count(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completeness == 100
    }
}

/// Rows for the `sets` table, in grouping order.
pub fn set_rows(grouped: &GroupedAssets, incomplete_only: bool) -> Vec<SetRow> {
    shown_sets(grouped, incomplete_only)
        .into_iter()
        .map(SetRow::from_set)
        .collect()
}

/// Footer figures for the `sets` table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SetTotals {
    pub sets: usize,
    pub complete: usize,
    pub grouped_assets: usize,
    pub ungrouped_assets: usize,
    pub total_cost: f64,
}

impl SetTotals {
    pub fn incomplete(&self) -> usize {
        self.sets - self.complete
    }
}

/// Sets shown in the `sets` table, in grouping order.
pub fn shown_sets(grouped: &GroupedAssets, incomplete_only: bool) -> Vec<&DesktopSet> {
    grouped
        .desktop_sets
        .iter()
        .filter(|set| !incomplete_only || !set.is_complete())
        .collect()
}

/// Totals over the sets actually shown.
pub fn set_totals(shown: &[&DesktopSet], grouped: &GroupedAssets) -> SetTotals {
    SetTotals {
        sets: shown.len(),
        complete: shown.iter().filter(|set| set.is_complete()).count(),
        grouped_assets: shown.iter().map(|set| set.all_assets.len()).sum(),
        ungrouped_assets: grouped.ungrouped_assets.len(),
        total_cost: shown.iter().map(|set| set.total_cost).sum(),
    }
}

/// Diagnostics for a single tag, as printed by `parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReport {
    pub tag: String,
    pub is_peripheral: bool,
    pub type_name: &'static str,
    pub financial_year: Option<String>,
    pub set_id: Option<String>,
    pub set_identifier: Option<String>,
    pub display_name: Option<String>,
}

pub fn tag_report(tag: &str) -> TagReport {
    let info = parse_asset_tag(tag);
    let display_name = match (info.financial_year(), info.set_id()) {
        (Some(year), Some(set_id)) => Some(set_display_name(year, set_id)),
        _ => None,
    };
    TagReport {
        tag: tag.to_string(),
        is_peripheral: info.is_peripheral(),
        type_name: peripheral_type_name(info.peripheral_type().map(|kind| kind.code())),
        financial_year: info.financial_year().map(str::to_string),
        set_id: info.set_id().map(str::to_string),
        set_identifier: set_identifier(tag),
        display_name,
    }
}

/// One asset as shown in the `ungrouped` and `search` tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRow {
    pub tag: String,
    pub class: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub original_cost: Option<String>,
}

impl AssetRow {
    pub fn from_asset(asset: &Asset) -> Self {
        let description = match (&asset.description, &asset.sub_class) {
            (Some(description), _) => Some(description.clone()),
            (None, sub_class) => sub_class.clone(),
        };
        Self {
            tag: asset.asset_tagging.clone(),
            class: asset.class.clone(),
            description,
            location: asset.location_value().map(str::to_string),
            original_cost: recorded_cost(asset),
        }
    }
}

/// Cost cell text: formatted when numeric, otherwise as recorded.
fn recorded_cost(asset: &Asset) -> Option<String> {
    match asset.parsed_cost() {
        Some(value) => Some(format_cost(value)),
        None => asset
            .original_cost
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(str::to_string),
    }
}

/// `75%`.
pub fn completeness_label(completeness: u8) -> String {
    format!("{completeness}%")
}

/// Two decimals with thousands separators: `52,000.00`.
pub fn format_cost(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset_sets::group_assets_into_desktop_sets;

    fn sample() -> GroupedAssets {
        group_assets_into_desktop_sets(&[
            Asset::new("SSBAS/Mo/2025-26/T01").with_original_cost("52,000"),
            Asset::new("SSBAS/Ko/2025-26/T01"),
            Asset::new("SSBAS/Ro/2025-26/T01"),
            Asset::new("SSBAS/Co/2025-26/T01"),
            Asset::new("SSBAS/Mo/2024-25/T02").with_original_cost("18000"),
            Asset::new("SSBAS/Mo/2024-25/T02"),
            Asset::new("PROJECTOR-3"),
        ])
    }

    #[test]
    fn test_set_rows_follow_slot_order() {
        let rows = set_rows(&sample(), false);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].slot_tags,
            [
                Some("SSBAS/Mo/2025-26/T01".to_string()),
                Some("SSBAS/Ko/2025-26/T01".to_string()),
                Some("SSBAS/Ro/2025-26/T01".to_string()),
                Some("SSBAS/Co/2025-26/T01".to_string()),
            ]
        );
        assert_eq!(rows[1].slot_tags[1], None);
        assert_eq!(rows[1].duplicates, 1);
    }

    #[test]
    fn test_incomplete_filter_and_totals() {
        let grouped = sample();
        let rows = set_rows(&grouped, true);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_name, "Desktop Set 2 (2024-25)");

        let totals = set_totals(&shown_sets(&grouped, true), &grouped);
        assert_eq!(totals.sets, 1);
        assert_eq!(totals.complete, 0);
        assert_eq!(totals.incomplete(), 1);
        assert_eq!(totals.grouped_assets, 2);
        assert_eq!(totals.ungrouped_assets, 1);
        assert_eq!(totals.total_cost, 18000.0);
    }

    #[test]
    fn test_tag_report() {
        let report = tag_report("SSBAS/Co/2025-26/T010");
        assert!(report.is_peripheral);
        assert_eq!(report.type_name, "CPU");
        assert_eq!(report.set_identifier.as_deref(), Some("2025-26-T010"));
        assert_eq!(report.display_name.as_deref(), Some("Desktop Set 10 (2025-26)"));

        let report = tag_report("LAPTOP-9");
        assert!(!report.is_peripheral);
        assert_eq!(report.type_name, "Unknown");
        assert_eq!(report.financial_year, None);
        assert_eq!(report.display_name, None);
    }

    #[test]
    fn test_asset_row_falls_back_to_sub_class() {
        let asset = Asset::new("FAN-2")
            .with_sub_class("Ceiling fan")
            .with_location("  ")
            .with_original_cost("1,250.5");
        let row = AssetRow::from_asset(&asset);
        assert_eq!(row.description.as_deref(), Some("Ceiling fan"));
        assert_eq!(row.location, None);
        assert_eq!(row.original_cost.as_deref(), Some("1,250.50"));
    }

    #[test]
    fn test_asset_row_keeps_unparseable_cost_text() {
        let row = AssetRow::from_asset(&Asset::new("LOCKER-4").with_original_cost(" TBD "));
        assert_eq!(row.original_cost.as_deref(), Some("TBD"));

        let row = AssetRow::from_asset(&Asset::new("LOCKER-5").with_original_cost("0"));
        assert_eq!(row.original_cost.as_deref(), Some("0.00"));

        let row = AssetRow::from_asset(&Asset::new("LOCKER-6").with_original_cost(""));
        assert_eq!(row.original_cost, None);
    }

    #[test]
    fn test_totals_without_filter() {
        let grouped = sample();
        let totals = set_totals(&shown_sets(&grouped, false), &grouped);
        assert_eq!(totals.sets, 2);
        assert_eq!(totals.complete, 1);
        assert_eq!(totals.grouped_assets, 6);
        assert_eq!(totals.total_cost, 52000.0 + 18000.0);
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(0.0), "0.00");
        assert_eq!(format_cost(999.0), "999.00");
        assert_eq!(format_cost(1000.0), "1,000.00");
        assert_eq!(format_cost(1234567.891), "1,234,567.89");
        assert_eq!(format_cost(-52000.0), "-52,000.00");
    }

    #[test]
    fn test_completeness_label() {
        assert_eq!(completeness_label(75), "75%");
    }
}
