//! Flat single-grammar normalization path

use std::sync::Arc;

use mensura_units::Profile;

use crate::domain::{NormalizedQuantity, Quantity};
use crate::normalization::normalizer::{compose, ProductDecomposition};
use crate::normalization::{NormalizationError, UnitAlgebra};

/// Reduced-capability normalization entry point.
///
/// Unlike [`QuantityNormalizer`](crate::normalization::QuantityNormalizer)
/// there is no catalogue-driven grammar selection: every symbol goes
/// through the broad grammar, and no definitions are attached. This trades
/// correctness on ambiguous input for wider symbol coverage and is kept as
/// a separate strategy for callers without a catalogue.
pub struct NormalizationWrapper {
    algebra: Arc<dyn UnitAlgebra>,
}

impl NormalizationWrapper {
    pub fn new(algebra: Arc<dyn UnitAlgebra>) -> Self {
        Self { algebra }
    }

    /// Normalize a quantity through the broad grammar alone.
    ///
    /// The numeric value is always taken from the raw value string; the
    /// quantity itself is left untouched.
    pub fn normalize(
        &self,
        quantity: &Quantity,
    ) -> Result<Option<NormalizedQuantity>, NormalizationError> {
        if quantity.is_empty() {
            return Ok(None);
        }
        let raw_unit = match &quantity.raw_unit {
            Some(unit) if !unit.is_blank() => unit,
            _ => return Ok(None),
        };
        let raw_name = raw_unit.raw_name.trim();

        let expr = self
            .algebra
            .parse(raw_name, Profile::Broad)
            .map_err(|source| NormalizationError::UnparsableUnit {
                raw: raw_name.to_string(),
                source,
            })?;

        let value = quantity.raw_value.trim().parse::<f64>().map_err(|source| {
            NormalizationError::UnconvertibleValue {
                raw: quantity.raw_value.clone(),
                source: Some(source),
            }
        })?;

        compose(
            self.algebra.as_ref(),
            &expr,
            value,
            None,
            &quantity.raw_value,
            ProductDecomposition::Immediate,
        )
        .map(Some)
    }
}
