//! End-to-end normalization behaviour over the embedded catalogue

use std::sync::Arc;

use mensura_core::context::PipelineContext;
use mensura_core::domain::{Quantity, Unit};
use mensura_core::normalization::{NormalizationError, NormalizationWrapper, SiAlgebra};

fn quantity(value: &str, unit: &str) -> Quantity {
    let mut quantity = Quantity::from_raw_value(value);
    quantity.raw_unit = Some(Unit::new(unit));
    quantity
}

fn normalize(value: &str, unit: &str) -> (String, String) {
    let mut quantity = quantity(value, unit);
    let normalized = PipelineContext::with_defaults()
        .normalizer()
        .normalize(&mut quantity)
        .expect("normalization should succeed")
        .expect("quantity is not empty");
    (normalized.value.to_string(), normalized.unit.raw_name)
}

#[test]
fn linear_transformed_units_convert_into_their_parent() {
    assert_eq!(normalize("2", "km"), ("2000".into(), "m".into()));
    assert_eq!(normalize("3", "min"), ("180".into(), "s".into()));
}

#[test]
fn temperature_offset_is_applied_after_scaling() {
    assert_eq!(normalize("10", "°C"), ("283.15".into(), "K".into()));
}

#[test]
fn quotients_of_atomic_si_units_divide_the_scale_factors() {
    assert_eq!(
        normalize("2", "km/h"),
        ("0.5555555555555556".into(), "m/s".into())
    );
}

#[test]
fn three_factor_products_commute_with_prefix_and_exponent_rules() {
    assert_eq!(
        normalize("2000", "km*g/h"),
        ("0.5555555555555556".into(), "m·kg/s".into())
    );
    assert_eq!(
        normalize("2000", "km*kg/h"),
        ("555.5555555555555".into(), "m·kg/s".into())
    );
}

#[test]
fn atomic_units_pass_through_unchanged() {
    assert_eq!(normalize("2", "m"), ("2".into(), "m".into()));
}

#[test]
fn normalization_is_idempotent_on_canonical_symbols() {
    let (value, unit) = normalize("2", "km");
    let again = normalize(&value, &unit);
    assert_eq!(again, (value, unit));
}

#[test]
fn empty_quantity_is_a_non_error_none() {
    let mut empty = Quantity::default();
    let result = PipelineContext::with_defaults()
        .normalizer()
        .normalize(&mut empty);
    assert!(matches!(result, Ok(None)));
}

#[test]
fn unrecognized_unit_strings_raise_an_error_naming_the_input() {
    let mut quantity = quantity("2", "xyzzy");
    let error = PipelineContext::with_defaults()
        .normalizer()
        .normalize(&mut quantity)
        .unwrap_err();
    assert!(matches!(error, NormalizationError::UnparsableUnit { .. }));
    assert!(error.to_string().contains("xyzzy"));
}

#[test]
fn product_form_is_the_irreducible_decomposition() {
    let mut quantity = quantity("2", "km/h");
    let normalized = PipelineContext::with_defaults()
        .normalizer()
        .normalize(&mut quantity)
        .unwrap()
        .unwrap();

    let form = normalized.product_form.expect("composite unit");
    assert_eq!(form.get("m"), Some(&1));
    assert_eq!(form.get("s"), Some(&-1));
    assert!(!form.contains_key("km"));
}

#[test]
fn wrapper_and_profiled_paths_agree_on_plain_si_input() {
    let plain = quantity("2", "km");

    let wrapped = NormalizationWrapper::new(Arc::new(SiAlgebra))
        .normalize(&plain)
        .unwrap()
        .unwrap();

    let mut profiled_input = plain.clone();
    let profiled = PipelineContext::with_defaults()
        .normalizer()
        .normalize(&mut profiled_input)
        .unwrap()
        .unwrap();

    assert_eq!(wrapped.value, profiled.value);
    assert_eq!(wrapped.unit.raw_name, profiled.unit.raw_name);
}
