//! Declared property types for workspace persistence.
//!
//! This module defines `PropertyType`, the closed type universe for every
//! value a workspace property can hold. The set is fixed at compile time:
//! the converter in `wire-types` matches exhaustively over it, so every
//! kind is guaranteed a handler in both conversion directions.
//!
//! The wire form of a property is generally a bare string and is not
//! self-describing, so readers must supply the declared `PropertyType` of
//! the receiving field to reconstruct the value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a workspace property.
///
/// One variant per [`PropertyValue`](crate::PropertyValue) kind. `Enum`
/// carries its member set because the wire form (a bare member name) can
/// only be validated and reconstructed against the declared descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyType {
    /// Reference to an object in the bound workspace tree
    Object,

    /// String value
    String,

    /// 32-bit signed integer
    Int32,

    /// 64-bit IEEE 754 floating point
    Float64,

    /// Boolean value
    Bool,

    /// 64-bit signed integer
    Int64,

    /// Member of a named, closed enumeration
    Enum(EnumDescriptor),

    /// Reference to a named data source in the bound catalog
    DataSource,

    /// Formatter specification (date or decimal pattern)
    Format,

    /// Integer 2D point
    Point,

    /// Double-precision 2D point
    Point2D,

    /// Rectangle (origin + extent)
    Rect,

    /// Width/height pair
    Dimension,

    /// RGBA color
    Color,

    /// Array of strings
    StringArray,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::String => write!(f, "string"),
            Self::Int32 => write!(f, "int32"),
            Self::Float64 => write!(f, "float64"),
            Self::Bool => write!(f, "bool"),
            Self::Int64 => write!(f, "int64"),
            Self::Enum(descriptor) => write!(f, "enum {}", descriptor.name()),
            Self::DataSource => write!(f, "data source"),
            Self::Format => write!(f, "format"),
            Self::Point => write!(f, "point"),
            Self::Point2D => write!(f, "point2d"),
            Self::Rect => write!(f, "rect"),
            Self::Dimension => write!(f, "dimension"),
            Self::Color => write!(f, "color"),
            Self::StringArray => write!(f, "string array"),
        }
    }
}

/// A named enumeration with a closed, ordered member set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    name: String,
    members: Vec<String>,
}

impl EnumDescriptor {
    /// Create a descriptor from a name and its member names.
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// The enumeration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member names, in declaration order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Whether `member` names a member of this enumeration.
    pub fn contains(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }

    /// Resolve a member name to an [`EnumValue`].
    ///
    /// Returns `None` when the name is not in the member set. This is the
    /// only way to construct an `EnumValue`, so every value is guaranteed
    /// to name a real member of its descriptor.
    pub fn value_of(&self, member: &str) -> Option<EnumValue> {
        if self.contains(member) {
            Some(EnumValue {
                descriptor: self.clone(),
                member: member.to_string(),
            })
        } else {
            None
        }
    }
}

/// A validated member of an [`EnumDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    descriptor: EnumDescriptor,
    member: String,
}

impl EnumValue {
    /// The descriptor this value belongs to.
    pub fn descriptor(&self) -> &EnumDescriptor {
        &self.descriptor
    }

    /// The member name.
    pub fn member(&self) -> &str {
        &self.member
    }
}
