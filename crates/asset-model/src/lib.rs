//! Data model for the fixed-asset register.
//!
//! Assets arrive from the register's store or a spreadsheet import as flat
//! records. The types here describe those records, the parsed form of a
//! desktop-peripheral asset tag, and the derived desktop-set view.

pub mod asset;
pub mod error;
pub mod peripheral;
pub mod set;

pub use asset::Asset;
pub use error::{ModelError, Result};
pub use peripheral::{ComponentSlot, PeripheralInfo, PeripheralType};
pub use set::{DesktopSet, GroupedAssets, MIXED_LOCATIONS, SetKey};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_assets_serializes_camel_case() {
        let grouped = GroupedAssets {
            desktop_sets: vec![],
            ungrouped_assets: vec![Asset::new("RANDOM-001")],
        };
        let json = serde_json::to_value(&grouped).expect("serialize grouped assets");
        assert!(json.get("desktopSets").is_some());
        assert_eq!(
            json["ungroupedAssets"][0]["assetTagging"],
            serde_json::json!("RANDOM-001")
        );
    }
}
