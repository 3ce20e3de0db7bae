//! Catalogue entry types

use serde::{Deserialize, Serialize};

/// Physical dimension of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Length,
    Mass,
    Time,
    Temperature,
    Velocity,
    Acceleration,
    Area,
    Volume,
    Density,
    Frequency,
    Force,
    Pressure,
    Energy,
    Power,
    ElectricCurrent,
    AmountOfSubstance,
    LuminousIntensity,
    Fraction,
    Unknown,
}

/// Unit system membership, used to choose which parsing grammar to trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    SiBase,
    SiDerived,
    Other,
}

impl SystemType {
    /// SI base and SI derived units get the strict grammar
    pub fn is_si(&self) -> bool {
        matches!(self, SystemType::SiBase | SystemType::SiDerived)
    }
}

/// Immutable catalogue entry for one known unit.
///
/// Looked up by notation (exact) or name (case-insensitive); never
/// constructed by the pipeline from text alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Physical dimension
    pub dimension: UnitType,
    /// System membership
    pub system: SystemType,
    /// Symbolic notations ("km", "km/h")
    pub notations: Vec<String>,
    /// Spelled-out names ("kilometer", "kilometres")
    #[serde(default)]
    pub names: Vec<String>,
}

impl UnitDefinition {
    /// Whether this entry lists the given notation (case-sensitive)
    pub fn has_notation(&self, notation: &str) -> bool {
        self.notations.iter().any(|n| n == notation)
    }

    /// Whether this entry lists the given name (case-insensitive)
    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}
