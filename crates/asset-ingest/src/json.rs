//! Asset records from the register's JSON export.
//!
//! Two layouts are accepted: a bare array of asset objects, or an object whose
//! `assets` field holds that array (the paginated store export).

use std::path::Path;

use asset_model::Asset;
use serde_json::Value;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::read_text;

/// Read asset records from a JSON file.
pub fn read_assets_json(path: &Path) -> Result<Vec<Asset>> {
    let text = read_text(path)?;
    parse_assets_json(&text, path)
}

/// Parse JSON text; `path` is only used for diagnostics.
pub fn parse_assets_json(text: &str, path: &Path) -> Result<Vec<Asset>> {
    let json_error = |source: serde_json::Error| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    };

    let document: Value = serde_json::from_str(text).map_err(json_error)?;
    let records = match document {
        records @ Value::Array(_) => records,
        Value::Object(mut object) => match object.remove("assets") {
            Some(records @ Value::Array(_)) => records,
            Some(_) => {
                return Err(IngestError::JsonLayout {
                    path: path.to_path_buf(),
                    reason: "'assets' is not an array".to_string(),
                });
            }
            None => {
                return Err(IngestError::JsonLayout {
                    path: path.to_path_buf(),
                    reason: "object has no 'assets' field".to_string(),
                });
            }
        },
        _ => {
            return Err(IngestError::JsonLayout {
                path: path.to_path_buf(),
                reason: "expected an array of assets".to_string(),
            });
        }
    };

    let assets: Vec<Asset> = serde_json::from_value(records).map_err(json_error)?;
    debug!(
        path = %path.display(),
        asset_count = assets.len(),
        "loaded assets from JSON"
    );
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<Asset>> {
        parse_assets_json(text, Path::new("assets.json"))
    }

    #[test]
    fn test_bare_array() {
        let assets = parse(
            r#"[
                {"assetTagging": "SSBAS/Co/2025-26/T01", "originalCost": 52000, "location": "Lab A"},
                {"assetTagging": "CHAIR-1", "quantity": 12}
            ]"#,
        )
        .unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].original_cost.as_deref(), Some("52000"));
        assert_eq!(assets[1].extra.get("quantity"), Some(&serde_json::json!(12)));
    }

    #[test]
    fn test_export_object() {
        let assets =
            parse(r#"{"assets": [{"assetTagging": "DESK-2"}], "cursor": null}"#).unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].asset_tagging, "DESK-2");
    }

    #[test]
    fn test_layout_errors() {
        assert!(matches!(
            parse(r#"{"items": []}"#),
            Err(IngestError::JsonLayout { .. })
        ));
        assert!(matches!(
            parse(r#"{"assets": {}}"#),
            Err(IngestError::JsonLayout { .. })
        ));
        assert!(matches!(parse("42"), Err(IngestError::JsonLayout { .. })));
    }

    #[test]
    fn test_invalid_records() {
        assert!(matches!(
            parse(r#"[{"location": "Lab A"}]"#),
            Err(IngestError::JsonParse { .. })
        ));
        assert!(matches!(parse("[{"), Err(IngestError::JsonParse { .. })));
    }
}
