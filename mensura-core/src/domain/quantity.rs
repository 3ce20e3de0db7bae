//! Quantity value objects

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Span, Unit};

/// A numeric value paired with its (possibly unresolved) unit.
///
/// `normalized` is only ever set after a successful normalization pass;
/// a quantity with neither a raw value nor a raw unit is *empty* and
/// normalizes to `None` rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// The value exactly as written in the text ("2", "2,5", "twenty two")
    pub raw_value: String,
    /// The unit as extracted from the text, if any
    pub raw_unit: Option<Unit>,
    /// The raw unit after catalogue lookup (set during normalization)
    pub parsed_unit: Option<Unit>,
    /// The numeric interpretation of `raw_value`, when one exists
    pub parsed_value: Option<Decimal>,
    /// The unit-system-normalized form, set after successful normalization
    pub normalized: Option<NormalizedQuantity>,
    /// Offsets of the quantity in the source text
    pub span: Span,
}

impl Quantity {
    /// Create a quantity from a raw value string
    pub fn from_raw_value(raw_value: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
            ..Self::default()
        }
    }

    /// A quantity is empty when it carries neither a value nor a unit
    pub fn is_empty(&self) -> bool {
        self.raw_value.trim().is_empty() && self.raw_unit.is_none()
    }

    /// Whether normalization has already succeeded for this quantity
    pub fn is_normalized(&self) -> bool {
        self.normalized.is_some()
    }
}

/// The canonical, SI-base-equivalent form of a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuantity {
    /// Converted numeric value, arbitrary-precision decimal
    pub value: Decimal,
    /// Canonical unit ("m/s", "K")
    pub unit: Unit,
    /// Per-factor decomposition when a composite unit was normalized,
    /// keyed by factor symbol with its signed exponent
    pub product_form: Option<BTreeMap<String, i32>>,
}

impl NormalizedQuantity {
    /// Create a normalized quantity without a product decomposition
    pub fn new(value: Decimal, unit: Unit) -> Self {
        Self {
            value,
            unit,
            product_form: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emptiness_requires_both_value_and_unit_absent() {
        let mut quantity = Quantity::default();
        assert!(quantity.is_empty());

        quantity.raw_value = "  ".to_string();
        assert!(quantity.is_empty());

        quantity.raw_unit = Some(Unit::new("m"));
        assert!(!quantity.is_empty());

        let with_value = Quantity::from_raw_value("2");
        assert!(!with_value.is_empty());
    }
}
