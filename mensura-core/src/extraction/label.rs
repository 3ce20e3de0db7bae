//! Tagging labels for unit extraction

use serde::{Deserialize, Serialize};

/// Label assigned to each character (then to each cluster) of a unit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitLabel {
    /// SI prefix characters ("k" in "km")
    Prefix,
    /// Base symbol characters ("m" in "km")
    Base,
    /// Exponent and separator characters ("/", "-2")
    Pow,
    /// Connective characters inside a unit run
    Other,
    /// Value-domain filler; suppressed in the tagged trace
    ValueOther,
}

impl UnitLabel {
    /// Opening markup for the tagged trace; `None` suppresses markup
    pub fn opening_tag(&self) -> Option<&'static str> {
        match self {
            UnitLabel::Prefix => Some("<prefix>"),
            UnitLabel::Base => Some("<base>"),
            UnitLabel::Pow => Some("<pow>"),
            UnitLabel::Other => Some("<other>"),
            UnitLabel::ValueOther => None,
        }
    }

    /// Closing markup for the tagged trace
    pub fn closing_tag(&self) -> Option<&'static str> {
        match self {
            UnitLabel::Prefix => Some("</prefix>"),
            UnitLabel::Base => Some("</base>"),
            UnitLabel::Pow => Some("</pow>"),
            UnitLabel::Other => Some("</other>"),
            UnitLabel::ValueOther => None,
        }
    }
}
