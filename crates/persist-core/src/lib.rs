//! Core types for the workspace-persist conversion layer.
//!
//! This crate provides the foundational model shared across the
//! persistence stack, including:
//!
//! - [`PropertyValue`] - In-memory domain values held by workspace properties
//! - [`BasicValue`] - Transport-safe values crossing the persistence boundary
//! - [`PropertyType`] - The closed, declared type universe
//! - [`WorkspaceTree`] - The object tree with its UUID identity index
//! - [`DataSourceCatalog`] - Named data-source lookup for a session
//!
//! # Architecture
//!
//! persist-core sits at the foundation of the persistence stack:
//!
//! ```text
//! persist-core (this crate)
//!    │
//!    ├─── wire-types         (PropertyValue ⇄ BasicValue conversions)
//!    │
//!    └─── workspace-persist  (per-session converter facade)
//! ```
//!
//! # Example
//!
//! ```rust
//! use persist_core::{Point, PropertyType, PropertyValue};
//!
//! let value = PropertyValue::Point(Point::new(3, 7));
//! assert_eq!(value.property_type(), PropertyType::Point);
//! ```

pub mod datasource;
pub mod format;
pub mod geometry;
pub mod object;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use datasource::{DataSource, DataSourceCatalog, UNBOUND_DATA_SOURCE_NAME};
pub use format::FormatSpec;
pub use geometry::{Dimension, Point, Point2D, Rect, Rgba};
pub use object::{TreeError, WorkspaceObject, WorkspaceTree};
pub use types::{EnumDescriptor, EnumValue, PropertyType};
pub use values::{BasicValue, PropertyValue};
