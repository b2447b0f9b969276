//! The per-session converter facade.

use persist_core::{BasicValue, DataSourceCatalog, PropertyType, PropertyValue, WorkspaceTree};
use std::sync::Arc;
use wire_types::reverse::ConversionContext;

/// Converts workspace property values to basic forms and back for one
/// persistence session.
///
/// A converter is constructed once per session, bound to the session's
/// workspace tree and data-source catalog, and is stateless beyond those
/// two read-only references. It takes no locks and mutates nothing, so it
/// is safe to share across concurrent callers as long as nothing else
/// mutates the bound tree or catalog.
///
/// # Example
///
/// ```rust
/// use persist_core::{
///     DataSourceCatalog, Point, PropertyType, PropertyValue, WorkspaceObject, WorkspaceTree,
/// };
/// use std::sync::Arc;
/// use workspace_persist::SessionConverter;
///
/// let tree = WorkspaceTree::new(Arc::new(WorkspaceObject::new("workspace"))).unwrap();
/// let converter = SessionConverter::new(Arc::new(tree), Arc::new(DataSourceCatalog::new()));
///
/// let value = PropertyValue::Point(Point::new(3, 7));
/// let basic = converter.to_basic(&value);
/// assert_eq!(converter.to_property(&basic, &PropertyType::Point).unwrap(), value);
/// ```
pub struct SessionConverter {
    tree: Arc<WorkspaceTree>,
    catalog: Arc<DataSourceCatalog>,
}

impl SessionConverter {
    /// Bind a converter to a session's tree and catalog.
    pub fn new(tree: Arc<WorkspaceTree>, catalog: Arc<DataSourceCatalog>) -> Self {
        tracing::debug!(
            "Bound session converter to workspace tree ({} objects) and catalog ({} data sources)",
            tree.object_count(),
            catalog.len()
        );
        Self { tree, catalog }
    }

    /// The bound workspace tree.
    pub fn tree(&self) -> &Arc<WorkspaceTree> {
        &self.tree
    }

    /// The bound data-source catalog.
    pub fn catalog(&self) -> &Arc<DataSourceCatalog> {
        &self.catalog
    }

    /// Convert a property value to its basic representation for outbound
    /// transport.
    pub fn to_basic(&self, value: &PropertyValue) -> BasicValue {
        wire_types::to_basic(value)
    }

    /// Reconstruct a property value from its basic representation, using
    /// the declared type of the receiving field.
    ///
    /// # Errors
    ///
    /// Propagates [`wire_types::ConvertError`] for mismatched primitive
    /// kinds, malformed encodings, and unresolvable object, data-source,
    /// or enum references.
    pub fn to_property(
        &self,
        basic: &BasicValue,
        declared: &PropertyType,
    ) -> wire_types::Result<PropertyValue> {
        let ctx = ConversionContext::new(&self.tree, &self.catalog);
        wire_types::to_property(basic, declared, &ctx)
    }
}
