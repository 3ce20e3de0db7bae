//! JSON shape of the public data model

use mensura_core::context::PipelineContext;
use mensura_core::domain::{Measurement, Quantity, Span, Unit};

#[test]
fn normalized_quantity_serializes_with_stable_field_names() {
    let mut quantity = Quantity::from_raw_value("2");
    quantity.raw_unit = Some(Unit::new("km"));
    PipelineContext::with_defaults()
        .normalizer()
        .normalize(&mut quantity)
        .unwrap();

    let json = serde_json::to_value(&quantity).unwrap();
    assert_eq!(json["raw_value"], "2");
    assert_eq!(json["raw_unit"]["raw_name"], "km");
    assert_eq!(json["normalized"]["unit"]["raw_name"], "m");
    assert_eq!(json["normalized"]["value"], "2000");
}

#[test]
fn measurement_variants_round_trip_through_json() {
    let measurement = Measurement::Value {
        quantity: Quantity::from_raw_value("10"),
        quantified_object: Some(Span::new(3, 8)),
    };

    let json = serde_json::to_string(&measurement).unwrap();
    let back: Measurement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, measurement);
    assert_eq!(back.quantified_object(), Some(Span::new(3, 8)));
}
