//! Shared fixtures for converter tests.
//!
//! Builds a small, fully known workspace: a tree with fixed object ids, a
//! catalog with two data sources, and a three-member color enumeration.

use crate::SessionConverter;
use persist_core::{
    DataSource, DataSourceCatalog, EnumDescriptor, WorkspaceObject, WorkspaceTree,
};
use std::sync::Arc;
use uuid::Uuid;

/// Fixed id of the sample tree's root.
pub const ROOT_ID: &str = "f47ac10b-58cc-4372-a567-0e02b2c3d479";

/// Fixed id of the sample tree's single query node.
pub const QUERY_ID: &str = "9a1b2c3d-4e5f-4a6b-8c7d-0e1f2a3b4c5d";

/// A two-level workspace tree with fixed UUIDs.
pub fn sample_tree() -> WorkspaceTree {
    let query = Arc::new(WorkspaceObject::with_uuid(
        Uuid::parse_str(QUERY_ID).unwrap(),
        "quarterly-sales",
    ));
    let root = Arc::new(
        WorkspaceObject::with_uuid(Uuid::parse_str(ROOT_ID).unwrap(), "workspace")
            .with_children(vec![query]),
    );
    WorkspaceTree::new(root).unwrap()
}

/// A catalog holding two named data sources.
pub fn sample_catalog() -> DataSourceCatalog {
    let mut catalog = DataSourceCatalog::new();
    catalog
        .add(DataSource::new("Sales Warehouse").with_connection_uri("jdbc:postgresql://sales/dw"));
    catalog.add(DataSource::new("HR Reporting"));
    catalog
}

/// A three-member color enumeration.
pub fn color_enum() -> EnumDescriptor {
    EnumDescriptor::new(
        "ChartColor",
        vec!["RED".to_string(), "GREEN".to_string(), "BLUE".to_string()],
    )
}

/// A converter bound to [`sample_tree`] and [`sample_catalog`].
pub fn sample_converter() -> SessionConverter {
    SessionConverter::new(Arc::new(sample_tree()), Arc::new(sample_catalog()))
}
