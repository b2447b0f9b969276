//! Session-level round-trip coverage for every supported property kind.

use persist_core::{
    BasicValue, Dimension, FormatSpec, Point, Point2D, PropertyType, PropertyValue, Rect, Rgba,
    UNBOUND_DATA_SOURCE_NAME,
};
use std::sync::Arc;
use uuid::Uuid;
use workspace_persist::testing;
use workspace_persist::wire::ConvertError;

/// Encode, decode with the value's own declared type, and compare.
fn assert_round_trip(value: PropertyValue) {
    let converter = testing::sample_converter();
    let basic = converter.to_basic(&value);
    let restored = converter
        .to_property(&basic, &value.property_type())
        .unwrap();
    assert_eq!(restored, value);
}

#[test]
fn round_trips_primitives() {
    assert_round_trip(PropertyValue::string("hello world"));
    assert_round_trip(PropertyValue::Int32(-42));
    assert_round_trip(PropertyValue::Int64(9_223_372_036_854_775_807));
    assert_round_trip(PropertyValue::Float64(1.25));
    assert_round_trip(PropertyValue::Bool(false));
}

#[test]
fn round_trips_composites() {
    assert_round_trip(PropertyValue::Point(Point::new(3, 7)));
    assert_round_trip(PropertyValue::Point2D(Point2D::new(3.5, 7.25)));
    assert_round_trip(PropertyValue::Rect(Rect::new(10, 20, 300, 400)));
    assert_round_trip(PropertyValue::Dimension(Dimension::new(640, 480)));
    assert_round_trip(PropertyValue::Color(Rgba::opaque(255, 128, 0)));
    assert_round_trip(PropertyValue::Color(Rgba::new(255, 128, 0, 64)));
    assert_round_trip(PropertyValue::Format(FormatSpec::date("%Y-%m-%d")));
    assert_round_trip(PropertyValue::Format(FormatSpec::decimal("#,##0.00")));
    assert_round_trip(PropertyValue::string_array(["a", "b;c", "d\\e", ""]));
}

#[test]
fn round_trips_enum_member() {
    let value = PropertyValue::Enum(testing::color_enum().value_of("RED").unwrap());
    assert_round_trip(value);
}

#[test]
fn round_trips_catalog_data_source() {
    let converter = testing::sample_converter();
    let source = converter.catalog().get("Sales Warehouse").unwrap();

    let basic = converter.to_basic(&PropertyValue::DataSource(Arc::clone(&source)));
    assert_eq!(basic, BasicValue::String("Sales Warehouse".to_string()));

    match converter
        .to_property(&basic, &PropertyType::DataSource)
        .unwrap()
    {
        PropertyValue::DataSource(restored) => assert!(Arc::ptr_eq(&restored, &source)),
        other => panic!("expected data source, got {other:?}"),
    }
}

#[test]
fn object_reference_resolves_to_original_node() {
    let converter = testing::sample_converter();
    let query_id = Uuid::parse_str(testing::QUERY_ID).unwrap();
    let node = Arc::clone(converter.tree().get(&query_id).unwrap());

    let basic = converter.to_basic(&PropertyValue::Object(Arc::clone(&node)));
    assert_eq!(basic, BasicValue::String(testing::QUERY_ID.to_string()));

    match converter.to_property(&basic, &PropertyType::Object).unwrap() {
        // Identity, not a value-equal copy
        PropertyValue::Object(restored) => assert!(Arc::ptr_eq(&restored, &node)),
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn primitives_pass_through_unchanged() {
    let converter = testing::sample_converter();

    assert_eq!(
        converter.to_basic(&PropertyValue::string("as-is")),
        BasicValue::String("as-is".to_string())
    );
    assert_eq!(
        converter.to_basic(&PropertyValue::Int32(7)),
        BasicValue::Int32(7)
    );
    assert_eq!(
        converter.to_basic(&PropertyValue::Int64(7)),
        BasicValue::Int64(7)
    );
    assert_eq!(
        converter.to_basic(&PropertyValue::Float64(0.5)),
        BasicValue::Float64(0.5)
    );
    assert_eq!(
        converter.to_basic(&PropertyValue::Bool(true)),
        BasicValue::Bool(true)
    );
}

#[test]
fn encoding_is_idempotent() {
    let converter = testing::sample_converter();
    let value = PropertyValue::string_array(["x;y", "z"]);

    assert_eq!(converter.to_basic(&value), converter.to_basic(&value));
}

#[test]
fn point_matches_documented_encoding() {
    let converter = testing::sample_converter();

    let basic = converter.to_basic(&PropertyValue::Point(Point::new(3, 7)));
    assert_eq!(basic, BasicValue::String("3,7".to_string()));
    assert_eq!(
        converter.to_property(&basic, &PropertyType::Point).unwrap(),
        PropertyValue::Point(Point::new(3, 7))
    );
}

#[test]
fn fractional_point_truncates_when_declared_integer() {
    let converter = testing::sample_converter();
    let basic = BasicValue::String("3.5,7.2".to_string());

    assert_eq!(
        converter.to_property(&basic, &PropertyType::Point).unwrap(),
        PropertyValue::Point(Point::new(3, 7))
    );
}

#[test]
fn enum_matches_documented_encoding() {
    let converter = testing::sample_converter();
    let declared = PropertyType::Enum(testing::color_enum());

    let value = PropertyValue::Enum(testing::color_enum().value_of("RED").unwrap());
    let basic = converter.to_basic(&value);
    assert_eq!(basic, BasicValue::String("RED".to_string()));
    assert_eq!(converter.to_property(&basic, &declared).unwrap(), value);
}

#[test]
fn reserved_literal_always_builds_fresh_unbound_source() {
    let converter = testing::sample_converter();
    let basic = BasicValue::String(UNBOUND_DATA_SOURCE_NAME.to_string());

    let first = converter
        .to_property(&basic, &PropertyType::DataSource)
        .unwrap();
    let second = converter
        .to_property(&basic, &PropertyType::DataSource)
        .unwrap();

    match (first, second) {
        (PropertyValue::DataSource(a), PropertyValue::DataSource(b)) => {
            // Fresh per decode, never a catalog entry
            assert!(!Arc::ptr_eq(&a, &b));
            assert_eq!(a.display_name(), UNBOUND_DATA_SOURCE_NAME);
            assert!(converter.catalog().get(UNBOUND_DATA_SOURCE_NAME).is_none());
        }
        other => panic!("expected data sources, got {other:?}"),
    }
}

#[test]
fn decode_failures_surface_immediately() {
    let converter = testing::sample_converter();

    let err = converter
        .to_property(&BasicValue::Bool(true), &PropertyType::Rect)
        .unwrap_err();
    assert!(matches!(err, ConvertError::TypeMismatch { .. }));

    let err = converter
        .to_property(
            &BasicValue::String("not-a-rect".to_string()),
            &PropertyType::Rect,
        )
        .unwrap_err();
    assert!(matches!(err, ConvertError::Malformed { .. }));

    let err = converter
        .to_property(
            &BasicValue::String("No Such Source".to_string()),
            &PropertyType::DataSource,
        )
        .unwrap_err();
    assert!(matches!(err, ConvertError::UnknownDataSource { .. }));
}
