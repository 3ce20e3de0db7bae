//! Catalogue-driven quantity normalization

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use mensura_units::{Profile, UnitExpr, UnitFactor};

use crate::catalogue::Catalogue;
use crate::context::PipelineContext;
use crate::domain::{NormalizedQuantity, Quantity, Unit};
use crate::normalization::{NormalizationError, UnitAlgebra};

/// Converts quantities to their unit-system-normalized form.
///
/// The catalogue classification of the raw unit decides which grammar the
/// symbol is routed through: units known to be SI (base or derived) go
/// through the strict grammar, everything else through the broad one. The
/// broad grammar accepts a superset of malformed input that would silently
/// misparse well-formed SI strings, which is why the split exists.
pub struct QuantityNormalizer {
    catalogue: Arc<Catalogue>,
    algebra: Arc<dyn UnitAlgebra>,
}

impl QuantityNormalizer {
    pub fn new(catalogue: Arc<Catalogue>, algebra: Arc<dyn UnitAlgebra>) -> Self {
        Self { catalogue, algebra }
    }

    pub fn from_context(context: &PipelineContext) -> Self {
        Self::new(context.catalogue(), context.algebra())
    }

    /// Normalize one quantity in place.
    ///
    /// Returns `Ok(None)` for empty quantities and quantities without a
    /// usable raw unit. On success the quantity's `parsed_unit` and
    /// `normalized` fields are populated and the normalized form is also
    /// returned.
    pub fn normalize(
        &self,
        quantity: &mut Quantity,
    ) -> Result<Option<NormalizedQuantity>, NormalizationError> {
        if quantity.is_empty() {
            return Ok(None);
        }
        let raw_unit = match &quantity.raw_unit {
            Some(unit) if !unit.is_blank() => unit.clone(),
            _ => return Ok(None),
        };
        let raw_name = raw_unit.raw_name.trim().to_string();

        let definition = self.catalogue.find_definition(&raw_name).cloned();
        let mut parsed_unit = Unit::new(raw_name.clone());
        parsed_unit.definition = definition.clone();
        parsed_unit.span = raw_unit.span;
        quantity.parsed_unit = Some(parsed_unit);

        let profile = match &definition {
            Some(definition) if definition.system.is_si() => Profile::Strict,
            _ => Profile::Broad,
        };
        debug!(unit = raw_name.as_str(), ?profile, "selected unit grammar");

        let expr = self
            .algebra
            .parse(&raw_name, profile)
            .map_err(|source| NormalizationError::UnparsableUnit {
                raw: raw_name.clone(),
                source,
            })?;

        let mut normalized = compose(
            self.algebra.as_ref(),
            &expr,
            numeric_value(quantity)?,
            quantity.parsed_value,
            &quantity.raw_value,
            ProductDecomposition::Irreducible,
        )?;

        // Best-effort classification of the normalized symbol as well
        if let Some(definition) = self.catalogue.find_definition(&normalized.unit.raw_name) {
            normalized.unit.definition = Some(definition.clone());
        }

        quantity.normalized = Some(normalized.clone());
        Ok(Some(normalized))
    }
}

/// The numeric value the conversion starts from: the parsed value when one
/// exists, otherwise the raw string interpreted directly.
pub(crate) fn numeric_value(quantity: &Quantity) -> Result<f64, NormalizationError> {
    match &quantity.parsed_value {
        Some(value) => value
            .to_f64()
            .ok_or_else(|| NormalizationError::UnconvertibleValue {
                raw: quantity.raw_value.clone(),
                source: None,
            }),
        None => quantity.raw_value.trim().parse::<f64>().map_err(|source| {
            NormalizationError::UnconvertibleValue {
                raw: quantity.raw_value.clone(),
                source: Some(source),
            }
        }),
    }
}

/// Which factor decomposition `product_form` records.
///
/// The catalogue-backed path decomposes down to irreducible SI-base
/// factors; the wrapper keeps the product's factors as written.
pub(crate) enum ProductDecomposition {
    Irreducible,
    Immediate,
}

/// Three-way composition over the parsed unit shape.
///
/// Converted values go through a decimal-from-string step on the shortest
/// f64 representation. This stabilizes precision across chained factors
/// and must not be replaced with a direct f64-to-decimal conversion.
pub(crate) fn compose(
    algebra: &dyn UnitAlgebra,
    expr: &UnitExpr,
    value: f64,
    exact: Option<Decimal>,
    raw_value: &str,
    decomposition: ProductDecomposition,
) -> Result<NormalizedQuantity, NormalizationError> {
    Ok(match expr {
        UnitExpr::Atomic { symbol } => {
            let value = match exact {
                Some(exact) => exact,
                None => rematerialize(value, raw_value)?,
            };
            NormalizedQuantity::new(value, Unit::new(symbol.clone()))
        }
        UnitExpr::LinearTransformed { .. } => {
            let converted = expr.system_transform().convert(value);
            NormalizedQuantity::new(
                rematerialize(converted, raw_value)?,
                Unit::new(expr.canonical_base_symbol()),
            )
        }
        UnitExpr::Product { factors } => {
            let converted = expr.system_transform().convert(value);
            let mut normalized = NormalizedQuantity::new(
                rematerialize(converted, raw_value)?,
                Unit::new(expr.canonical_base_symbol()),
            );
            normalized.product_form = Some(match decomposition {
                ProductDecomposition::Irreducible => expr.base_factors().into_iter().collect(),
                ProductDecomposition::Immediate => immediate_form(algebra, factors),
            });
            normalized
        }
    })
}

fn rematerialize(value: f64, raw_value: &str) -> Result<Decimal, NormalizationError> {
    value
        .to_string()
        .parse::<Decimal>()
        .map_err(|_| NormalizationError::UnconvertibleValue {
            raw: raw_value.to_string(),
            source: None,
        })
}

/// Immediate factor decomposition of a product, keyed by factor symbol.
/// Factors without a printable symbol are rendered through the formatter.
fn immediate_form(algebra: &dyn UnitAlgebra, factors: &[UnitFactor]) -> BTreeMap<String, i32> {
    let mut form = BTreeMap::new();
    for factor in factors {
        let key = match factor.unit.symbol() {
            Some(symbol) => symbol.to_string(),
            None => algebra.format(&factor.unit.base_factors()),
        };
        *form.entry(key).or_insert(0) += factor.exponent;
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{SystemType, UnitType};
    use crate::normalization::SiAlgebra;
    use rust_decimal_macros::dec;

    fn normalizer() -> QuantityNormalizer {
        QuantityNormalizer::new(Catalogue::global(), Arc::new(SiAlgebra))
    }

    fn quantity(value: &str, unit: &str) -> Quantity {
        let mut quantity = Quantity::from_raw_value(value);
        quantity.raw_unit = Some(Unit::new(unit));
        quantity
    }

    #[test]
    fn empty_quantity_normalizes_to_none() {
        let mut empty = Quantity::default();
        let result = normalizer().normalize(&mut empty);
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn blank_unit_normalizes_to_none() {
        let mut quantity = quantity("2", "  ");
        let result = normalizer().normalize(&mut quantity);
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn parsed_unit_is_attached_with_its_definition() {
        let mut quantity = quantity("2", "km");
        normalizer().normalize(&mut quantity).unwrap();

        let parsed = quantity.parsed_unit.as_ref().unwrap();
        assert_eq!(parsed.raw_name, "km");
        let definition = parsed.definition.as_ref().unwrap();
        assert_eq!(definition.dimension, UnitType::Length);
        assert_eq!(definition.system, SystemType::SiBase);
    }

    #[test]
    fn normalized_unit_gets_a_definition_when_the_catalogue_knows_it() {
        let mut quantity = quantity("2", "km");
        let normalized = normalizer().normalize(&mut quantity).unwrap().unwrap();

        assert_eq!(normalized.unit.raw_name, "m");
        assert_eq!(normalized.value, dec!(2000));
        let definition = normalized.unit.definition.as_ref().unwrap();
        assert_eq!(definition.dimension, UnitType::Length);
    }

    #[test]
    fn unknown_unit_surfaces_the_raw_string_in_the_error() {
        let mut quantity = quantity("2", "xyzzy");
        let error = normalizer().normalize(&mut quantity).unwrap_err();
        assert!(error.to_string().contains("xyzzy"));
        assert!(quantity.normalized.is_none());
    }

    #[test]
    fn uncatalogued_units_still_normalize_through_the_broad_grammar() {
        // "ms" is not in the catalogue, so it goes through the broad
        // grammar and still resolves as a prefixed second.
        let mut quantity = quantity("2", "ms");
        let normalized = normalizer().normalize(&mut quantity).unwrap().unwrap();
        assert_eq!(normalized.unit.raw_name, "s");
        assert_eq!(normalized.value, dec!(0.002));
    }

    #[test]
    fn parsed_value_takes_precedence_over_the_raw_string() {
        let mut quantity = quantity("not-a-number", "m");
        quantity.parsed_value = Some(dec!(3));
        let normalized = normalizer().normalize(&mut quantity).unwrap().unwrap();
        assert_eq!(normalized.value, dec!(3));
    }

    #[test]
    fn malformed_raw_value_with_no_parsed_value_is_an_error() {
        let mut quantity = quantity("twenty", "m");
        let error = normalizer().normalize(&mut quantity).unwrap_err();
        assert!(matches!(
            error,
            NormalizationError::UnconvertibleValue { .. }
        ));
        assert!(error.to_string().contains("twenty"));
    }

    #[test]
    fn product_form_decomposes_into_irreducible_factors() {
        let mut quantity = quantity("2", "km/h");
        let normalized = normalizer().normalize(&mut quantity).unwrap().unwrap();

        let form = normalized.product_form.as_ref().unwrap();
        assert_eq!(form.get("m"), Some(&1));
        assert_eq!(form.get("s"), Some(&-1));
        assert!(!form.contains_key("km"));
        assert!(!form.contains_key("h"));
    }
}
