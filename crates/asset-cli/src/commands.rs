use std::path::Path;

use anyhow::{Context, Result};
use asset_cli::config::Settings;
use asset_cli::report::{AssetRow, SetRow, set_totals, shown_sets, tag_report};
use asset_ingest::load_assets;
use asset_model::{Asset, GroupedAssets};
use asset_sets::{group_assets_with, search_assets};
use tracing::{info, info_span, warn};

use crate::cli::{InputArgs, ParseArgs, SearchArgs, SetsArgs};
use crate::summary::{print_assets, print_sets, print_tag_reports};

pub fn run_sets(args: &SetsArgs, settings: &Settings) -> Result<()> {
    let path = args.input.input.as_path();
    let span = info_span!("sets", path = %path.display());
    let _guard = span.enter();

    let assets = load(path)?;
    let settings = settings.clone().with_numeric_order(args.numeric_order);
    let grouped = group_assets_with(&assets, &settings.grouping);
    report_data_quality(&grouped);
    info!(
        asset_count = assets.len(),
        set_count = grouped.set_count(),
        ungrouped_count = grouped.ungrouped_assets.len(),
        "grouped assets"
    );

    if args.json {
        let output = if args.incomplete {
            GroupedAssets {
                desktop_sets: grouped.incomplete_sets().cloned().collect(),
                ungrouped_assets: grouped.ungrouped_assets.clone(),
            }
        } else {
            grouped
        };
        let json = serde_json::to_string_pretty(&output).context("serialize grouping result")?;
        println!("{json}");
        return Ok(());
    }

    let shown = shown_sets(&grouped, args.incomplete);
    let rows: Vec<SetRow> = shown.iter().copied().map(SetRow::from_set).collect();
    let totals = set_totals(&shown, &grouped);
    print_sets(&rows, &totals, &settings.display);
    Ok(())
}

pub fn run_ungrouped(args: &InputArgs, settings: &Settings) -> Result<()> {
    let path = args.input.as_path();
    let span = info_span!("ungrouped", path = %path.display());
    let _guard = span.enter();

    let assets = load(path)?;
    let grouped = group_assets_with(&assets, &settings.grouping);
    let rows: Vec<AssetRow> = grouped
        .ungrouped_assets
        .iter()
        .map(AssetRow::from_asset)
        .collect();
    print_assets("Ungrouped assets", &rows, &settings.display);
    Ok(())
}

pub fn run_parse(args: &ParseArgs, settings: &Settings) -> Result<()> {
    let reports: Vec<_> = args
        .tags
        .iter()
        .map(String::as_str)
        .map(tag_report)
        .collect();
    print_tag_reports(&reports, &settings.display);
    Ok(())
}

pub fn run_search(args: &SearchArgs, settings: &Settings) -> Result<()> {
    let path = args.input.input.as_path();
    let span = info_span!("search", path = %path.display());
    let _guard = span.enter();

    let assets = load(path)?;
    let hits = search_assets(&assets, &args.query);
    info!(query = %args.query, hit_count = hits.len(), "searched assets");
    let rows: Vec<AssetRow> = hits.into_iter().map(AssetRow::from_asset).collect();
    print_assets("Matching assets", &rows, &settings.display);
    Ok(())
}

fn load(path: &Path) -> Result<Vec<Asset>> {
    load_assets(path).with_context(|| format!("load assets from {}", path.display()))
}

/// Warn about sets the grouping resolved by policy rather than by data.
fn report_data_quality(grouped: &GroupedAssets) {
    for set in &grouped.desktop_sets {
        let duplicates = set.duplicate_count();
        if duplicates > 0 {
            warn!(
                set = %set.key(),
                duplicates,
                "set has more than one asset for a component, keeping the last"
            );
        }
        if set.has_mixed_locations() {
            warn!(set = %set.key(), "set components are recorded at different locations");
        }
    }
}
