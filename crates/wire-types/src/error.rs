//! Error types for wire-form conversions.
//!
//! Every error here is a registration or data defect, not a transient
//! condition: conversions are never retried and failures are surfaced to
//! the caller immediately rather than falling back to default values.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while reconstructing a property value from its
/// basic representation.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The basic value's primitive kind has no conversion to the declared
    /// type (e.g. an integer offered for a declared point).
    #[error("cannot decode a {actual} basic value as {declared}")]
    TypeMismatch {
        declared: String,
        actual: &'static str,
    },

    /// A string encoding that does not parse as its declared kind.
    #[error("malformed {kind} encoding: {input:?}")]
    Malformed { kind: &'static str, input: String },

    /// An object reference whose id is not a UUID.
    #[error("invalid object id {input:?}")]
    InvalidObjectId { input: String },

    /// An object reference that resolves to nothing in the bound tree.
    #[error("no object {uuid} in the bound workspace tree")]
    UnknownObject { uuid: Uuid },

    /// A data-source name absent from the bound catalog.
    #[error("no data source named {name:?} in the catalog")]
    UnknownDataSource { name: String },

    /// A member name outside the declared enumeration.
    #[error("{member:?} is not a member of enum {enum_name}")]
    UnknownEnumMember { enum_name: String, member: String },

    /// Lossy integer narrowing.
    #[error("numeric overflow converting {value} to {declared}")]
    NumericOverflow { value: i64, declared: String },
}

/// Result type for wire-form conversions.
pub type Result<T> = std::result::Result<T, ConvertError>;
