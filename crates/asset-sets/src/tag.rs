//! Desktop-peripheral asset tag grammar.
//!
//! Conforming tags look like `SSBAS/Mo/2025-26/T01`:
//!
//! | Segment | Form                                   |
//! |---------|----------------------------------------|
//! | prefix  | `SSBAS`                                |
//! | type    | `Mo`, `Ko`, `Ro`, `Co`                 |
//! | year    | 4 digits, `-`, 2 digits                |
//! | set     | `T` followed by one or more digits     |
//!
//! Matching ignores ASCII case and surrounding whitespace. Anything else is an
//! ordinary, non-peripheral tag.

use std::sync::LazyLock;

use asset_model::{PeripheralInfo, PeripheralType};
use regex::Regex;

static PERIPHERAL_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^SSBAS/(MO|KO|RO|CO)/([0-9]{4}-[0-9]{2})/(T[0-9]+)$")
        .expect("Invalid peripheral tag regex")
});

/// Parse one asset tag.
///
/// Never fails: tags outside the grammar yield [`PeripheralInfo::NotPeripheral`].
/// Only the type code is normalized; year and set id keep their matched text.
pub fn parse_asset_tag(tag: &str) -> PeripheralInfo {
    let Some(captures) = PERIPHERAL_TAG_REGEX.captures(tag.trim()) else {
        return PeripheralInfo::NotPeripheral;
    };
    let Some(peripheral_type) = PeripheralType::from_code(&captures[1]) else {
        return PeripheralInfo::NotPeripheral;
    };
    PeripheralInfo::Peripheral {
        peripheral_type,
        financial_year: captures[2].to_string(),
        set_id: captures[3].to_string(),
    }
}

/// True when the tag is a desktop-set peripheral.
pub fn is_desktop_peripheral(tag: &str) -> bool {
    parse_asset_tag(tag).is_peripheral()
}

/// Composite set identifier (`2025-26-T01`) for a conforming tag.
pub fn set_identifier(tag: &str) -> Option<String> {
    parse_asset_tag(tag).set_key().map(|key| key.to_string())
}
