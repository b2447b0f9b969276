//! Forward conversion: PropertyValue → BasicValue.
//!
//! This module converts in-memory property values to their transport-safe
//! basic representations. Primitives pass through unchanged; every
//! composite kind is string-encoded by its sub-encoder.
//!
//! Forward conversion is total: the value universe is a closed enum and
//! every variant has an arm here, so there is no unregistered-type failure
//! mode. Encoding is deterministic - the same value always produces the
//! same representation.

use persist_core::{
    BasicValue, Dimension, FormatSpec, Point, Point2D, PropertyValue, Rect, Rgba,
};

/// Delimiter between string-array elements on the wire.
pub(crate) const ARRAY_DELIMITER: char = ';';

/// Escape character inside string-array elements.
pub(crate) const ARRAY_ESCAPE: char = '\\';

/// Convert a property value to its basic representation.
///
/// # Example
///
/// ```rust
/// use persist_core::{BasicValue, Point, PropertyValue};
/// use wire_types::forward::to_basic;
///
/// let value = PropertyValue::Point(Point::new(3, 7));
/// assert_eq!(to_basic(&value), BasicValue::String("3,7".to_string()));
///
/// let value = PropertyValue::Int32(42);
/// assert_eq!(to_basic(&value), BasicValue::Int32(42));
/// ```
pub fn to_basic(value: &PropertyValue) -> BasicValue {
    match value {
        // Object references travel as the node's stable UUID
        PropertyValue::Object(object) => BasicValue::String(object.uuid().to_string()),

        // Primitives pass through unchanged
        PropertyValue::String(s) => BasicValue::String(s.clone()),
        PropertyValue::Int32(i) => BasicValue::Int32(*i),
        PropertyValue::Float64(f) => BasicValue::Float64(*f),
        PropertyValue::Bool(b) => BasicValue::Bool(*b),
        PropertyValue::Int64(i) => BasicValue::Int64(*i),

        // Enums travel as the member's declared name
        PropertyValue::Enum(value) => BasicValue::String(value.member().to_string()),

        // Data sources travel as their display name
        PropertyValue::DataSource(source) => {
            BasicValue::String(source.display_name().to_string())
        }

        PropertyValue::Format(spec) => BasicValue::String(encode_format(spec)),
        PropertyValue::Point(p) => BasicValue::String(encode_point(p)),
        PropertyValue::Point2D(p) => BasicValue::String(encode_point2d(p)),
        PropertyValue::Rect(r) => BasicValue::String(encode_rect(r)),
        PropertyValue::Dimension(d) => BasicValue::String(encode_dimension(d)),
        PropertyValue::Color(c) => BasicValue::String(encode_color(c)),
        PropertyValue::StringArray(items) => BasicValue::String(encode_string_array(items)),
    }
}

/// Encode an integer point as `"x,y"`.
pub fn encode_point(point: &Point) -> String {
    format!("{},{}", point.x, point.y)
}

/// Encode a double-precision point as `"x,y"`.
pub fn encode_point2d(point: &Point2D) -> String {
    format!("{},{}", point.x, point.y)
}

/// Encode a rectangle as `"x,y,width,height"`.
pub fn encode_rect(rect: &Rect) -> String {
    format!("{},{},{},{}", rect.x, rect.y, rect.width, rect.height)
}

/// Encode a dimension as `"width,height"`.
pub fn encode_dimension(dimension: &Dimension) -> String {
    format!("{},{}", dimension.width, dimension.height)
}

/// Encode a color as `"r,g,b"` when fully opaque, `"r,g,b,a"` otherwise.
pub fn encode_color(color: &Rgba) -> String {
    if color.is_opaque() {
        format!("{},{},{}", color.r, color.g, color.b)
    } else {
        format!("{},{},{},{}", color.r, color.g, color.b, color.a)
    }
}

/// Encode a format specification as `"date,<pattern>"` or
/// `"decimal,<pattern>"`.
pub fn encode_format(spec: &FormatSpec) -> String {
    match spec {
        FormatSpec::Date { pattern } => format!("date,{pattern}"),
        FormatSpec::Decimal { pattern } => format!("decimal,{pattern}"),
    }
}

/// Encode a string array by joining elements with `;`.
///
/// Literal `\` and `;` inside an element are escaped as `\\` and `\;` so
/// the encoding is reversible. The empty array encodes to the empty
/// string; an array holding exactly one empty element is indistinguishable
/// from it on the wire.
pub fn encode_string_array(items: &[String]) -> String {
    let escaped: Vec<String> = items.iter().map(|item| escape_element(item)).collect();
    escaped.join(&ARRAY_DELIMITER.to_string())
}

fn escape_element(element: &str) -> String {
    let mut out = String::with_capacity(element.len());
    for c in element.chars() {
        if c == ARRAY_ESCAPE || c == ARRAY_DELIMITER {
            out.push(ARRAY_ESCAPE);
        }
        out.push(c);
    }
    out
}
