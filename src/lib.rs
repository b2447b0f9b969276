//! Workspace persistence conversion library.
//!
//! Maps the closed set of workspace property types to transport-safe
//! basic forms and back, for crossing a persistence or network boundary.
//! Outbound, a persistence writer hands domain values to
//! [`SessionConverter::to_basic`]; inbound, a reader hands the stored
//! basic form plus the receiving field's declared type to
//! [`SessionConverter::to_property`].
//!
//! # Crates
//!
//! - `persist-core` - the value, type, tree, and catalog model
//! - `wire-types` - the bidirectional conversions and their errors
//! - `workspace-persist` (this crate) - the per-session converter facade
//!
//! # Example
//!
//! ```rust
//! use persist_core::{
//!     DataSourceCatalog, PropertyType, PropertyValue, Rgba, WorkspaceObject, WorkspaceTree,
//! };
//! use std::sync::Arc;
//! use workspace_persist::SessionConverter;
//!
//! let tree = WorkspaceTree::new(Arc::new(WorkspaceObject::new("workspace"))).unwrap();
//! let converter = SessionConverter::new(Arc::new(tree), Arc::new(DataSourceCatalog::new()));
//!
//! let value = PropertyValue::Color(Rgba::opaque(255, 0, 0));
//! let basic = converter.to_basic(&value);
//! let restored = converter.to_property(&basic, &PropertyType::Color).unwrap();
//! assert_eq!(restored, value);
//! ```

pub mod converter;
pub mod testing;

pub use converter::SessionConverter;

// Re-export the model and wire crates for convenience
pub use persist_core as model;
pub use wire_types as wire;
