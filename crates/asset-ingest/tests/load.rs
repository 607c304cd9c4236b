//! Integration tests for loading asset files from disk.

use std::fs;
use std::path::Path;

use asset_ingest::{IngestError, InputFormat, load_assets};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_csv_export() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "assets.CSV",
        "\u{feff}Asset Tagging,Description,Location,Original Cost\n\
         SSBAS/Mo/2025-26/T01,Monitor,Lab A,52000\n\
         SSBAS/Ko/2025-26/T01,Keyboard,Lab A,\n\
         BENCH-07,Lab bench,Chemistry,18000\n",
    );

    let assets = load_assets(&path).unwrap();

    assert_eq!(assets.len(), 3);
    assert_eq!(assets[0].asset_tagging, "SSBAS/Mo/2025-26/T01");
    assert_eq!(assets[1].original_cost, None);
    assert_eq!(assets[2].location.as_deref(), Some("Chemistry"));
}

#[test]
fn loads_json_export() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "assets.json",
        r#"{"assets": [
            {"assetTagging": "SSBAS/Ro/2024-25/T03", "class": "IT"},
            {"assetTagging": "CUPBOARD-1", "class": "Furniture", "purchaseDate": "2019-07-01"}
        ]}"#,
    );

    let assets = load_assets(&path).unwrap();

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].class.as_deref(), Some("IT"));
    assert_eq!(
        assets[1].extra.get("purchaseDate"),
        Some(&serde_json::json!("2019-07-01"))
    );
}

#[test]
fn rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "assets.xlsx", "binary");
    assert!(matches!(
        load_assets(&path),
        Err(IngestError::UnsupportedFormat { .. })
    ));
}

#[test]
fn missing_file_reports_path() {
    let err = load_assets(Path::new("/no/such/dir/assets.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.to_string().contains("/no/such/dir/assets.csv"));
}

#[test]
fn input_format_from_extension() {
    assert_eq!(
        InputFormat::from_path(Path::new("a/b.Json")),
        Some(InputFormat::Json)
    );
    assert_eq!(InputFormat::from_path(Path::new("a/b")), None);
}
