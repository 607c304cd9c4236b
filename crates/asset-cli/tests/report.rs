//! Report rows built from files on disk.

use std::fs;

use asset_cli::report::{AssetRow, set_rows, set_totals, shown_sets};
use asset_ingest::load_assets;
use asset_sets::{GroupingOptions, SetIdOrder, group_assets_with};
use tempfile::TempDir;

const REGISTER: &str = "\
Asset Tagging,Class,Description,Location,Original Cost
SSBAS/Mo/2025-26/T10,IT,Monitor,Lab A,\"9,500\"
SSBAS/Co/2025-26/T2,IT,CPU,Lab B,41000
SSBAS/Ko/2025-26/T2,IT,Keyboard,Lab B,
SSBAS/Ro/2025-26/T2,IT,Mouse,Lab B,
SSBAS/Mo/2025-26/T2,IT,Monitor,Lab B,
SSBAS/Mo/2023-24/T01,IT,Monitor,Store,7000
WHITEBOARD-3,Furniture,Whiteboard,Room 12,4000
";

fn grouped(order: SetIdOrder) -> (TempDir, asset_model::GroupedAssets) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("register.csv");
    fs::write(&path, REGISTER).unwrap();
    let assets = load_assets(&path).unwrap();
    let options = GroupingOptions::default().with_set_id_order(order);
    (dir, group_assets_with(&assets, &options))
}

#[test]
fn lexical_and_numeric_orders() {
    let (_dir, lexical) = grouped(SetIdOrder::Lexical);
    let names: Vec<_> = set_rows(&lexical, false)
        .into_iter()
        .map(|row| row.display_name)
        .collect();
    assert_eq!(
        names,
        [
            "Desktop Set 10 (2025-26)",
            "Desktop Set 2 (2025-26)",
            "Desktop Set 1 (2023-24)",
        ]
    );

    let (_dir, numeric) = grouped(SetIdOrder::Numeric);
    let names: Vec<_> = set_rows(&numeric, false)
        .into_iter()
        .map(|row| row.display_name)
        .collect();
    assert_eq!(
        names,
        [
            "Desktop Set 2 (2025-26)",
            "Desktop Set 10 (2025-26)",
            "Desktop Set 1 (2023-24)",
        ]
    );
}

#[test]
fn totals_cover_all_sets() {
    let (_dir, grouped) = grouped(SetIdOrder::Lexical);
    let totals = set_totals(&shown_sets(&grouped, false), &grouped);

    assert_eq!(totals.sets, 3);
    assert_eq!(totals.complete, 1);
    assert_eq!(totals.grouped_assets, 6);
    assert_eq!(totals.ungrouped_assets, 1);
    // Set T2 is costed from its first member only.
    assert_eq!(totals.total_cost, 9500.0 + 41000.0 + 7000.0);
}

#[test]
fn ungrouped_rows() {
    let (_dir, grouped) = grouped(SetIdOrder::Lexical);
    let rows: Vec<AssetRow> = grouped
        .ungrouped_assets
        .iter()
        .map(AssetRow::from_asset)
        .collect();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tag, "WHITEBOARD-3");
    assert_eq!(rows[0].class.as_deref(), Some("Furniture"));
    assert_eq!(rows[0].original_cost.as_deref(), Some("4,000.00"));
}
