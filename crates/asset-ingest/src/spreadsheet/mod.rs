//! Spreadsheet (CSV) import.

mod header;
mod reader;

pub use header::{AssetColumn, HeaderLayout, column_for_header, compact_key};
pub use reader::{parse_assets_csv, read_assets_csv};
