//! Unit value object

use serde::{Deserialize, Serialize};

use crate::catalogue::UnitDefinition;
use crate::domain::Span;

/// A unit as it appears in (or is derived from) the source text.
///
/// A `Unit` is owned by exactly one [`Quantity`](crate::domain::Quantity)
/// or one extraction record; it is never shared mutably. The `definition`
/// is a catalogue entry attached after lookup, absent when the symbol is
/// not in the structured catalogue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit symbol as written ("km/h", "°C")
    pub raw_name: String,
    /// Catalogue classification, when the symbol is known
    pub definition: Option<UnitDefinition>,
    /// Offsets of the unit in the source text, when it came from text
    pub span: Option<Span>,
}

impl Unit {
    /// Create a unit from its symbol alone
    pub fn new(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            definition: None,
            span: None,
        }
    }

    /// Create a unit with source offsets
    pub fn with_span(raw_name: impl Into<String>, span: Span) -> Self {
        Self {
            raw_name: raw_name.into(),
            definition: None,
            span: Some(span),
        }
    }

    /// Whether the symbol is blank
    pub fn is_blank(&self) -> bool {
        self.raw_name.trim().is_empty()
    }
}
