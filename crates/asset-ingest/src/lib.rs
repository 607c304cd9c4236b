//! Asset register ingestion.
//!
//! Loads the flat asset list the grouping engine works on, either from a
//! spreadsheet export (CSV) or from the register store's JSON export.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use asset_ingest::load_assets;
//!
//! let assets = load_assets(Path::new("exports/assets-2025.csv"))?;
//! println!("{} assets", assets.len());
//! ```

mod error;
mod json;
mod source;
mod spreadsheet;

use std::path::Path;

use asset_model::Asset;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use json::{parse_assets_json, read_assets_json};
pub use source::{MAX_INPUT_FILE_SIZE, check_file_size_with_limit, read_text};
pub use spreadsheet::{
    AssetColumn, HeaderLayout, column_for_header, compact_key, parse_assets_csv, read_assets_csv,
};

/// Input file kinds, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Load assets from a `.csv` or `.json` file.
pub fn load_assets(path: &Path) -> Result<Vec<Asset>> {
    match InputFormat::from_path(path) {
        Some(InputFormat::Csv) => read_assets_csv(path),
        Some(InputFormat::Json) => read_assets_json(path),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
