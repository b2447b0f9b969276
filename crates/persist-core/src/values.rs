//! Value representations for workspace persistence.
//!
//! This module defines the two value universes the converter maps between:
//! [`PropertyValue`], the in-memory domain form, and [`BasicValue`], the
//! transport-safe form that crosses the persistence boundary.

use crate::datasource::DataSource;
use crate::format::FormatSpec;
use crate::geometry::{Dimension, Point, Point2D, Rect, Rgba};
use crate::object::WorkspaceObject;
use crate::types::{EnumValue, PropertyType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Transport-safe form of a property value.
///
/// Either a primitive passed through unchanged, or a string produced by a
/// kind-specific encoder. The wire form is not self-describing: readers
/// reconstruct a [`PropertyValue`] from it by supplying the declared
/// [`PropertyType`] of the receiving field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BasicValue {
    /// String, either a passed-through primitive or an encoded composite
    String(String),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// Boolean value
    Bool(bool),
}

impl BasicValue {
    /// Short name of the carried primitive, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::Float64(_) => "float64",
            Self::Bool(_) => "bool",
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64, widening an i32.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            Self::Int32(i) => Some(i64::from(*i)),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// In-memory form of a workspace property.
///
/// Tagged union over the closed set of types a property can hold; exactly
/// one variant is active per instance. The set is fixed at compile time so
/// the converter can match exhaustively over it in both directions.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Reference to an object in the workspace tree
    Object(Arc<WorkspaceObject>),

    /// String value
    String(String),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit floating point
    Float64(f64),

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int64(i64),

    /// Member of a named enumeration
    Enum(EnumValue),

    /// Reference to a named data source
    DataSource(Arc<DataSource>),

    /// Formatter specification
    Format(FormatSpec),

    /// Integer 2D point
    Point(Point),

    /// Double-precision 2D point
    Point2D(Point2D),

    /// Rectangle (origin + extent)
    Rect(Rect),

    /// Width/height pair
    Dimension(Dimension),

    /// RGBA color
    Color(Rgba),

    /// Array of strings
    StringArray(Vec<String>),
}

impl PropertyValue {
    /// Create a string property value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a string-array property value from anything stringish.
    pub fn string_array<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::StringArray(values.into_iter().map(Into::into).collect())
    }

    /// The declared type of this value.
    ///
    /// Persistence writers record this next to the encoded form so readers
    /// can reconstruct the value from a non-self-describing wire string.
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::Object(_) => PropertyType::Object,
            Self::String(_) => PropertyType::String,
            Self::Int32(_) => PropertyType::Int32,
            Self::Float64(_) => PropertyType::Float64,
            Self::Bool(_) => PropertyType::Bool,
            Self::Int64(_) => PropertyType::Int64,
            Self::Enum(value) => PropertyType::Enum(value.descriptor().clone()),
            Self::DataSource(_) => PropertyType::DataSource,
            Self::Format(_) => PropertyType::Format,
            Self::Point(_) => PropertyType::Point,
            Self::Point2D(_) => PropertyType::Point2D,
            Self::Rect(_) => PropertyType::Rect,
            Self::Dimension(_) => PropertyType::Dimension,
            Self::Color(_) => PropertyType::Color,
            Self::StringArray(_) => PropertyType::StringArray,
        }
    }
}
