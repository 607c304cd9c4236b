//! Desktop peripheral vocabulary.
//!
//! Desktop computers are tagged as four separate assets, one per peripheral,
//! sharing a financial year and set number. The two-letter codes in the tag
//! are a fixed vocabulary: `Ro` is the mouse.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Peripheral kind encoded in a desktop-set asset tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PeripheralType {
    #[serde(rename = "Mo")]
    Monitor,
    #[serde(rename = "Ko")]
    Keyboard,
    #[serde(rename = "Ro")]
    Mouse,
    #[serde(rename = "Co")]
    Cpu,
}

impl PeripheralType {
    pub const ALL: [PeripheralType; 4] = [
        PeripheralType::Monitor,
        PeripheralType::Keyboard,
        PeripheralType::Mouse,
        PeripheralType::Cpu,
    ];

    /// Tag code as written in asset tags.
    pub fn code(&self) -> &'static str {
        match self {
            PeripheralType::Monitor => "Mo",
            PeripheralType::Keyboard => "Ko",
            PeripheralType::Mouse => "Ro",
            PeripheralType::Cpu => "Co",
        }
    }

    /// Look up a tag code, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "mo" => Some(PeripheralType::Monitor),
            "ko" => Some(PeripheralType::Keyboard),
            "ro" => Some(PeripheralType::Mouse),
            "co" => Some(PeripheralType::Cpu),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PeripheralType::Monitor => "Monitor",
            PeripheralType::Keyboard => "Keyboard",
            PeripheralType::Mouse => "Mouse",
            PeripheralType::Cpu => "CPU",
        }
    }

    /// Component slot this peripheral fills in a desktop set.
    pub fn slot(&self) -> ComponentSlot {
        match self {
            PeripheralType::Monitor => ComponentSlot::Monitor,
            PeripheralType::Keyboard => ComponentSlot::Keyboard,
            PeripheralType::Mouse => ComponentSlot::Mouse,
            PeripheralType::Cpu => ComponentSlot::Cpu,
        }
    }
}

impl fmt::Display for PeripheralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Named position in a desktop set. A set has exactly four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSlot {
    Monitor,
    Keyboard,
    Mouse,
    Cpu,
}

impl ComponentSlot {
    pub const ALL: [ComponentSlot; 4] = [
        ComponentSlot::Monitor,
        ComponentSlot::Keyboard,
        ComponentSlot::Mouse,
        ComponentSlot::Cpu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentSlot::Monitor => "monitor",
            ComponentSlot::Keyboard => "keyboard",
            ComponentSlot::Mouse => "mouse",
            ComponentSlot::Cpu => "cpu",
        }
    }
}

impl fmt::Display for ComponentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse result for a single asset tag.
///
/// A tag either matches the desktop-peripheral grammar completely or not at
/// all; there is no partially parsed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeripheralInfo {
    Peripheral {
        peripheral_type: PeripheralType,
        financial_year: String,
        set_id: String,
    },
    NotPeripheral,
}

impl PeripheralInfo {
    pub fn is_peripheral(&self) -> bool {
        matches!(self, PeripheralInfo::Peripheral { .. })
    }

    pub fn peripheral_type(&self) -> Option<PeripheralType> {
        match self {
            PeripheralInfo::Peripheral {
                peripheral_type, ..
            } => Some(*peripheral_type),
            PeripheralInfo::NotPeripheral => None,
        }
    }

    pub fn financial_year(&self) -> Option<&str> {
        match self {
            PeripheralInfo::Peripheral { financial_year, .. } => Some(financial_year),
            PeripheralInfo::NotPeripheral => None,
        }
    }

    pub fn set_id(&self) -> Option<&str> {
        match self {
            PeripheralInfo::Peripheral { set_id, .. } => Some(set_id),
            PeripheralInfo::NotPeripheral => None,
        }
    }

    /// Grouping key, present only for conforming tags.
    pub fn set_key(&self) -> Option<crate::SetKey> {
        match self {
            PeripheralInfo::Peripheral {
                financial_year,
                set_id,
                ..
            } => Some(crate::SetKey::new(financial_year.clone(), set_id.clone())),
            PeripheralInfo::NotPeripheral => None,
        }
    }
}

/// Flat wire form: `{type, financialYear, setId, isPeripheral}`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PeripheralInfoRecord<'a> {
    #[serde(rename = "type")]
    peripheral_type: Option<PeripheralType>,
    financial_year: Option<&'a str>,
    set_id: Option<&'a str>,
    is_peripheral: bool,
}

impl Serialize for PeripheralInfo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PeripheralInfoRecord {
            peripheral_type: self.peripheral_type(),
            financial_year: self.financial_year(),
            set_id: self.set_id(),
            is_peripheral: self.is_peripheral(),
        }
        .serialize(serializer)
    }
}
