//! Flat asset records as held by the register.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One physical asset (furniture, computer, lab equipment, ...).
///
/// The tag string is the record's identity. Every other field is optional;
/// fields the register does not model explicitly are kept in `extra` and
/// serialized back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Free-text asset tag, e.g. `SSBAS/Mo/2025-26/T01`.
    pub asset_tagging: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Purchase cost as recorded. Accepts a JSON number or string.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_cost"
    )]
    pub original_cost: Option<String>,
    /// Pass-through fields (supplier, purchase date, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Asset {
    pub fn new(asset_tagging: impl Into<String>) -> Self {
        Self {
            asset_tagging: asset_tagging.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_sub_class(mut self, sub_class: impl Into<String>) -> Self {
        self.sub_class = Some(sub_class.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_original_cost(mut self, cost: impl Into<String>) -> Self {
        self.original_cost = Some(cost.into());
        self
    }

    /// Trimmed location, `None` when absent or blank.
    pub fn location_value(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Recorded cost as a number, `None` when absent or not a finite number.
    /// Thousands separators are ignored.
    pub fn parsed_cost(&self) -> Option<f64> {
        let raw = self.original_cost.as_deref()?;
        let cleaned: String = raw.trim().chars().filter(|ch| *ch != ',').collect();
        cleaned
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Recorded cost as a number; absent and unparseable values are 0.
    pub fn cost_value(&self) -> f64 {
        self.parsed_cost().unwrap_or(0.0)
    }

    /// Lower-cased haystack of the searchable text fields.
    pub fn search_text(&self) -> String {
        [
            Some(self.asset_tagging.as_str()),
            self.class.as_deref(),
            self.sub_class.as_deref(),
            self.description.as_deref(),
            self.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
    }
}

fn deserialize_cost<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCost {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(
        Option::<RawCost>::deserialize(deserializer)?.map(|raw| match raw {
            RawCost::Number(number) => number.to_string(),
            RawCost::Text(text) => text,
        }),
    )
}
