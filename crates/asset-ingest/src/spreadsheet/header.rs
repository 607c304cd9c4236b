//! Spreadsheet header normalization.
//!
//! Headers are matched exactly after compaction (drop non-alphanumerics,
//! upper-case), so `Asset Tagging`, `asset_tagging` and `assetTagging` are the
//! same column. There is no fuzzy matching.

/// Asset field a spreadsheet column feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetColumn {
    Tag,
    Class,
    SubClass,
    Description,
    Location,
    OriginalCost,
}

/// Uppercase alphanumeric form of a header.
pub fn compact_key(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Column for a header, `None` for pass-through columns.
pub fn column_for_header(header: &str) -> Option<AssetColumn> {
    match compact_key(header).as_str() {
        "ASSETTAGGING" | "ASSETTAG" => Some(AssetColumn::Tag),
        "CLASS" => Some(AssetColumn::Class),
        "SUBCLASS" => Some(AssetColumn::SubClass),
        "DESCRIPTION" => Some(AssetColumn::Description),
        "LOCATION" => Some(AssetColumn::Location),
        "ORIGINALCOST" => Some(AssetColumn::OriginalCost),
        _ => None,
    }
}

/// Column layout resolved from a header row.
#[derive(Debug, Clone)]
pub struct HeaderLayout {
    /// Trimmed header names in file order.
    pub headers: Vec<String>,
    /// Modelled column per header position.
    pub columns: Vec<Option<AssetColumn>>,
}

impl HeaderLayout {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|header| header.as_ref().trim().to_string())
            .collect();
        let mut columns: Vec<Option<AssetColumn>> = Vec::with_capacity(headers.len());
        for header in &headers {
            let column = column_for_header(header);
            // First occurrence wins; later duplicates pass through.
            if column.is_some() && columns.contains(&column) {
                columns.push(None);
            } else {
                columns.push(column);
            }
        }
        Self { headers, columns }
    }

    pub fn position(&self, column: AssetColumn) -> Option<usize> {
        self.columns.iter().position(|c| *c == Some(column))
    }

    pub fn has_tag_column(&self) -> bool {
        self.position(AssetColumn::Tag).is_some()
    }
}
