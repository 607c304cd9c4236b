//! Asset records from spreadsheet exports (CSV with one header row).

use std::path::Path;

use asset_model::Asset;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::source::read_text;

use super::header::{AssetColumn, HeaderLayout, column_for_header};

/// Read asset records from a CSV file.
///
/// Rows without an asset tag are skipped. Columns that do not map to a
/// modelled field are kept in [`Asset::extra`].
pub fn read_assets_csv(path: &Path) -> Result<Vec<Asset>> {
    let text = read_text(path)?;
    parse_assets_csv(&text, path)
}

/// Parse CSV text; `path` is only used for diagnostics.
pub fn parse_assets_csv(text: &str, path: &Path) -> Result<Vec<Asset>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .clone();
    if headers.iter().all(str::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let layout = HeaderLayout::new(headers.iter());
    let Some(tag_index) = layout.position(AssetColumn::Tag) else {
        return Err(IngestError::MissingTagColumn {
            path: path.to_path_buf(),
            headers: layout.headers.join(", "),
        });
    };

    let mut assets = Vec::new();
    let mut skipped = 0usize;
    for result in reader.records() {
        let record = result.map_err(|source| csv_error(path, source))?;
        let tag = record.get(tag_index).unwrap_or_default();
        if tag.is_empty() {
            skipped += 1;
            warn!(
                path = %path.display(),
                line = record.position().map_or(0, csv::Position::line),
                "skipping row without asset tag"
            );
            continue;
        }
        assets.push(asset_from_record(&layout, &record, tag));
    }

    debug!(
        path = %path.display(),
        asset_count = assets.len(),
        skipped,
        "loaded assets from CSV"
    );
    Ok(assets)
}

fn asset_from_record(layout: &HeaderLayout, record: &csv::StringRecord, tag: &str) -> Asset {
    let mut asset = Asset::new(tag);
    for (index, value) in record.iter().enumerate() {
        if value.is_empty() {
            continue;
        }
        let value = value.to_string();
        match layout.columns.get(index).copied().flatten() {
            Some(AssetColumn::Tag) => {}
            Some(AssetColumn::Class) => asset.class = Some(value),
            Some(AssetColumn::SubClass) => asset.sub_class = Some(value),
            Some(AssetColumn::Description) => asset.description = Some(value),
            Some(AssetColumn::Location) => asset.location = Some(value),
            Some(AssetColumn::OriginalCost) => asset.original_cost = Some(value),
            None => {
                let Some(header) = layout.headers.get(index) else {
                    continue;
                };
                // Repeated modelled columns are dropped, not passed through.
                if header.is_empty() || column_for_header(header).is_some() {
                    continue;
                }
                asset
                    .extra
                    .insert(header.clone(), serde_json::Value::String(value));
            }
        }
    }
    asset
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        line: source.position().map_or(0, csv::Position::line),
        source,
    }
}
