use asset_model::PeripheralType;

/// Label returned for missing or unrecognized peripheral codes.
pub const UNKNOWN_PERIPHERAL: &str = "Unknown";

/// Display label for a peripheral tag code (`Mo` -> `Monitor`).
pub fn peripheral_type_name(code: Option<&str>) -> &'static str {
    code.map(str::trim)
        .and_then(PeripheralType::from_code)
        .map_or(UNKNOWN_PERIPHERAL, |peripheral| peripheral.display_name())
}

/// Set number shown to people: set id without the `T` and leading zeros.
pub fn set_number(set_id: &str) -> &str {
    let digits = set_id
        .strip_prefix(['T', 't'])
        .unwrap_or(set_id)
        .trim_start_matches('0');
    if digits.is_empty() { "0" } else { digits }
}

/// `Desktop Set 1 (2025-26)`.
pub fn set_display_name(financial_year: &str, set_id: &str) -> String {
    format!("Desktop Set {} ({financial_year})", set_number(set_id))
}
