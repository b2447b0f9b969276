//! Reverse conversion: BasicValue + declared type → PropertyValue.
//!
//! The wire form is generally a bare string and carries no type
//! information, so reconstruction dispatches on the declared
//! [`PropertyType`] of the receiving field rather than on the input.
//!
//! Two kinds need the session context supplied through
//! [`ConversionContext`]: object references resolve their UUID against the
//! bound workspace tree, and data-source references resolve their display
//! name against the bound catalog. The reserved
//! [`UNBOUND_DATA_SOURCE_NAME`] literal never consults the catalog and
//! always constructs a fresh, unbound source.
//!
//! All unexpected input returns explicit errors; nothing falls back to a
//! default value.

use crate::error::{ConvertError, Result};
use crate::forward::{ARRAY_DELIMITER, ARRAY_ESCAPE};
use persist_core::{
    BasicValue, DataSource, DataSourceCatalog, Dimension, EnumDescriptor, FormatSpec, Point,
    Point2D, PropertyType, PropertyValue, Rect, Rgba, WorkspaceTree, UNBOUND_DATA_SOURCE_NAME,
};
use std::sync::Arc;
use uuid::Uuid;

/// Session references needed to resolve object and data-source kinds.
///
/// Borrowed, not owned: the tree and catalog belong to the persistence
/// session and are only read here.
#[derive(Debug, Clone, Copy)]
pub struct ConversionContext<'a> {
    tree: &'a WorkspaceTree,
    catalog: &'a DataSourceCatalog,
}

impl<'a> ConversionContext<'a> {
    /// Create a context over the session's tree and catalog.
    pub fn new(tree: &'a WorkspaceTree, catalog: &'a DataSourceCatalog) -> Self {
        Self { tree, catalog }
    }
}

/// Reconstruct a property value from its basic representation.
///
/// # Errors
///
/// Returns an error if:
/// - the basic value's primitive kind cannot serve the declared type
/// - a string encoding does not parse as the declared kind
/// - an object id, data-source name, or enum member resolves to nothing
/// - an integer narrows out of range
///
/// # Example
///
/// ```rust
/// use persist_core::{
///     BasicValue, DataSourceCatalog, Point, PropertyType, PropertyValue, WorkspaceObject,
///     WorkspaceTree,
/// };
/// use std::sync::Arc;
/// use wire_types::reverse::{to_property, ConversionContext};
///
/// let tree = WorkspaceTree::new(Arc::new(WorkspaceObject::new("workspace"))).unwrap();
/// let catalog = DataSourceCatalog::new();
/// let ctx = ConversionContext::new(&tree, &catalog);
///
/// let basic = BasicValue::String("3,7".to_string());
/// let value = to_property(&basic, &PropertyType::Point, &ctx).unwrap();
/// assert_eq!(value, PropertyValue::Point(Point::new(3, 7)));
/// ```
pub fn to_property(
    basic: &BasicValue,
    declared: &PropertyType,
    ctx: &ConversionContext<'_>,
) -> Result<PropertyValue> {
    match declared {
        PropertyType::Object => {
            let input = expect_str(basic, declared)?;
            let uuid = Uuid::parse_str(input).map_err(|_| ConvertError::InvalidObjectId {
                input: input.to_string(),
            })?;
            ctx.tree
                .get(&uuid)
                .cloned()
                .map(PropertyValue::Object)
                .ok_or(ConvertError::UnknownObject { uuid })
        }

        PropertyType::String => {
            let input = expect_str(basic, declared)?;
            Ok(PropertyValue::String(input.to_string()))
        }

        PropertyType::Int32 => match basic {
            BasicValue::Int32(i) => Ok(PropertyValue::Int32(*i)),
            // An i64 carrier is accepted when the value fits
            BasicValue::Int64(i) => i32::try_from(*i).map(PropertyValue::Int32).map_err(|_| {
                ConvertError::NumericOverflow {
                    value: *i,
                    declared: declared.to_string(),
                }
            }),
            other => Err(mismatch(declared, other)),
        },

        PropertyType::Float64 => match basic {
            BasicValue::Float64(f) => Ok(PropertyValue::Float64(*f)),
            other => Err(mismatch(declared, other)),
        },

        PropertyType::Bool => match basic {
            BasicValue::Bool(b) => Ok(PropertyValue::Bool(*b)),
            other => Err(mismatch(declared, other)),
        },

        PropertyType::Int64 => match basic {
            BasicValue::Int64(i) => Ok(PropertyValue::Int64(*i)),
            BasicValue::Int32(i) => Ok(PropertyValue::Int64(i64::from(*i))),
            other => Err(mismatch(declared, other)),
        },

        PropertyType::Enum(descriptor) => {
            let member = expect_str(basic, declared)?;
            parse_enum(member, descriptor)
        }

        PropertyType::DataSource => {
            let name = expect_str(basic, declared)?;
            parse_data_source(name, ctx.catalog)
        }

        PropertyType::Format => {
            let input = expect_str(basic, declared)?;
            Ok(PropertyValue::Format(parse_format(input)?))
        }

        PropertyType::Point => {
            let input = expect_str(basic, declared)?;
            Ok(PropertyValue::Point(parse_point(input)?))
        }

        PropertyType::Point2D => {
            let input = expect_str(basic, declared)?;
            Ok(PropertyValue::Point2D(parse_point2d(input)?))
        }

        PropertyType::Rect => {
            let input = expect_str(basic, declared)?;
            Ok(PropertyValue::Rect(parse_rect(input)?))
        }

        PropertyType::Dimension => {
            let input = expect_str(basic, declared)?;
            Ok(PropertyValue::Dimension(parse_dimension(input)?))
        }

        PropertyType::Color => {
            let input = expect_str(basic, declared)?;
            Ok(PropertyValue::Color(parse_color(input)?))
        }

        PropertyType::StringArray => {
            let input = expect_str(basic, declared)?;
            Ok(PropertyValue::StringArray(parse_string_array(input)?))
        }
    }
}

fn expect_str<'v>(basic: &'v BasicValue, declared: &PropertyType) -> Result<&'v str> {
    basic.as_str().ok_or_else(|| mismatch(declared, basic))
}

fn mismatch(declared: &PropertyType, actual: &BasicValue) -> ConvertError {
    ConvertError::TypeMismatch {
        declared: declared.to_string(),
        actual: actual.kind_name(),
    }
}

fn parse_enum(member: &str, descriptor: &EnumDescriptor) -> Result<PropertyValue> {
    descriptor
        .value_of(member)
        .map(PropertyValue::Enum)
        .ok_or_else(|| ConvertError::UnknownEnumMember {
            enum_name: descriptor.name().to_string(),
            member: member.to_string(),
        })
}

fn parse_data_source(name: &str, catalog: &DataSourceCatalog) -> Result<PropertyValue> {
    if name == UNBOUND_DATA_SOURCE_NAME {
        // Reserved literal: always a fresh source, never a catalog lookup
        return Ok(PropertyValue::DataSource(Arc::new(DataSource::unbound())));
    }
    catalog
        .get(name)
        .map(PropertyValue::DataSource)
        .ok_or_else(|| ConvertError::UnknownDataSource {
            name: name.to_string(),
        })
}

/// Parse a `"x,y"` encoding into a double-precision point.
pub fn parse_point2d(input: &str) -> Result<Point2D> {
    let [x, y] = numeric_fields::<2>(input, "point2d")?;
    Ok(Point2D::new(
        parse_f64(x, "point2d", input)?,
        parse_f64(y, "point2d", input)?,
    ))
}

/// Parse a `"x,y"` encoding into an integer point.
///
/// Fields are parsed as doubles and truncated toward zero, matching the
/// writer side of existing persisted workspaces, which shares one
/// double-precision encoding for both point kinds.
pub fn parse_point(input: &str) -> Result<Point> {
    let p = parse_point2d(input).map_err(|_| malformed("point", input))?;
    Ok(Point::new(p.x as i32, p.y as i32))
}

/// Parse a `"x,y,width,height"` encoding into a rectangle.
pub fn parse_rect(input: &str) -> Result<Rect> {
    let [x, y, width, height] = numeric_fields::<4>(input, "rect")?;
    Ok(Rect::new(
        parse_i32(x, "rect", input)?,
        parse_i32(y, "rect", input)?,
        parse_i32(width, "rect", input)?,
        parse_i32(height, "rect", input)?,
    ))
}

/// Parse a `"width,height"` encoding into a dimension.
pub fn parse_dimension(input: &str) -> Result<Dimension> {
    let [width, height] = numeric_fields::<2>(input, "dimension")?;
    Ok(Dimension::new(
        parse_i32(width, "dimension", input)?,
        parse_i32(height, "dimension", input)?,
    ))
}

/// Parse a `"r,g,b"` or `"r,g,b,a"` encoding into a color.
pub fn parse_color(input: &str) -> Result<Rgba> {
    let fields: Vec<&str> = input.split(',').collect();
    let channels: Vec<u8> = fields
        .iter()
        .map(|field| field.parse::<u8>().map_err(|_| malformed("color", input)))
        .collect::<Result<_>>()?;
    match channels.as_slice() {
        [r, g, b] => Ok(Rgba::opaque(*r, *g, *b)),
        [r, g, b, a] => Ok(Rgba::new(*r, *g, *b, *a)),
        _ => Err(malformed("color", input)),
    }
}

/// Parse a `"date,<pattern>"` or `"decimal,<pattern>"` encoding.
///
/// The pattern is everything after the first delimiter, so patterns may
/// themselves contain commas.
pub fn parse_format(input: &str) -> Result<FormatSpec> {
    let (tag, pattern) = input.split_once(',').ok_or_else(|| malformed("format", input))?;
    match tag {
        "date" => Ok(FormatSpec::date(pattern)),
        "decimal" => Ok(FormatSpec::decimal(pattern)),
        _ => Err(malformed("format", input)),
    }
}

/// Parse a `;`-joined string-array encoding, undoing `\\` and `\;`
/// escapes.
///
/// The empty encoding decodes to the empty array. A dangling escape at
/// the end of the input is malformed.
pub fn parse_string_array(input: &str) -> Result<Vec<String>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    for c in input.chars() {
        if escaped {
            current.push(c);
            escaped = false;
        } else if c == ARRAY_ESCAPE {
            escaped = true;
        } else if c == ARRAY_DELIMITER {
            items.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    if escaped {
        return Err(malformed("string array", input));
    }
    items.push(current);
    Ok(items)
}

fn numeric_fields<'i, const N: usize>(input: &'i str, kind: &'static str) -> Result<[&'i str; N]> {
    let fields: Vec<&str> = input.split(',').collect();
    fields.try_into().map_err(|_| malformed(kind, input))
}

fn parse_f64(field: &str, kind: &'static str, input: &str) -> Result<f64> {
    field.parse::<f64>().map_err(|_| malformed(kind, input))
}

fn parse_i32(field: &str, kind: &'static str, input: &str) -> Result<i32> {
    field.parse::<i32>().map_err(|_| malformed(kind, input))
}

fn malformed(kind: &'static str, input: &str) -> ConvertError {
    ConvertError::Malformed {
        kind,
        input: input.to_string(),
    }
}
