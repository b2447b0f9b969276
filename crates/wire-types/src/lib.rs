//! Wire-form conversions for workspace property values.
//!
//! This crate provides bidirectional conversion between persist-core's
//! `PropertyValue` and the transport-safe `BasicValue` form that crosses
//! the persistence boundary.
//!
//! # Modules
//!
//! - [`forward`] - PropertyValue → BasicValue encoding
//! - [`reverse`] - BasicValue + declared PropertyType → PropertyValue
//! - [`error`] - Error types for conversion failures
//!
//! # Key Design Principles
//!
//! 1. **No silent fallbacks** - All unexpected cases return explicit errors
//! 2. **Closed type universe** - Both directions match exhaustively, so
//!    every kind has a handler by construction
//! 3. **Declared-type dispatch** - The wire form is not self-describing;
//!    reconstruction is driven by the receiving field's declared type
//!
//! # Example
//!
//! ```rust
//! use persist_core::{
//!     BasicValue, DataSourceCatalog, Point, PropertyType, PropertyValue, WorkspaceObject,
//!     WorkspaceTree,
//! };
//! use std::sync::Arc;
//! use wire_types::{forward::to_basic, reverse::{to_property, ConversionContext}};
//!
//! let value = PropertyValue::Point(Point::new(3, 7));
//! let basic = to_basic(&value);
//! assert_eq!(basic, BasicValue::String("3,7".to_string()));
//!
//! let tree = WorkspaceTree::new(Arc::new(WorkspaceObject::new("workspace"))).unwrap();
//! let catalog = DataSourceCatalog::new();
//! let ctx = ConversionContext::new(&tree, &catalog);
//! assert_eq!(to_property(&basic, &PropertyType::Point, &ctx).unwrap(), value);
//! ```

pub mod error;
pub mod forward;
pub mod reverse;

pub use error::{ConvertError, Result};
pub use forward::to_basic;
pub use reverse::{to_property, ConversionContext};
