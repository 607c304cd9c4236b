//! Asset-tag parsing and desktop-set grouping.
//!
//! Desktop computers in the register are recorded as four assets (monitor,
//! keyboard, mouse, CPU) whose tags share a financial year and set number.
//! This crate recognizes those tags and folds the matching assets into
//! [`DesktopSet`](asset_model::DesktopSet) summaries.
//!
//! # Example
//!
//! ```
//! use asset_model::Asset;
//! use asset_sets::group_assets_into_desktop_sets;
//!
//! let assets = vec![
//!     Asset::new("SSBAS/Mo/2025-26/T01"),
//!     Asset::new("SSBAS/Ko/2025-26/T01"),
//!     Asset::new("CHAIR-042"),
//! ];
//! let grouped = group_assets_into_desktop_sets(&assets);
//! assert_eq!(grouped.desktop_sets[0].display_name, "Desktop Set 1 (2025-26)");
//! assert_eq!(grouped.desktop_sets[0].completeness, 50);
//! assert_eq!(grouped.ungrouped_assets.len(), 1);
//! ```

mod grouping;
mod lookup;
mod search;
mod tag;

pub use grouping::{
    GroupingOptions, SetIdOrder, group_assets_into_desktop_sets, group_assets_with,
};
pub use lookup::{UNKNOWN_PERIPHERAL, peripheral_type_name, set_display_name, set_number};
pub use search::search_assets;
pub use tag::{is_desktop_peripheral, parse_asset_tag, set_identifier};
