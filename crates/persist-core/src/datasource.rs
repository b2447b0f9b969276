//! Named data sources and the session catalog.
//!
//! Data-source properties travel as display names; reconstruction looks
//! the name up in the catalog bound to the persistence session. One name
//! is reserved: [`UNBOUND_DATA_SOURCE_NAME`] never hits the catalog and
//! instead constructs a fresh, unbound source.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Reserved display name meaning "construct a fresh, unbound data source".
///
/// The exact bytes are part of the wire contract: workspaces persisted by
/// earlier releases carry this literal, so it must not change.
pub const UNBOUND_DATA_SOURCE_NAME: &str = "PlayPen Database";

/// A named connection description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    display_name: String,
    connection_uri: Option<String>,
}

impl DataSource {
    /// Create a data source with the given display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            connection_uri: None,
        }
    }

    /// Attach a connection URI.
    pub fn with_connection_uri(mut self, uri: impl Into<String>) -> Self {
        self.connection_uri = Some(uri.into());
        self
    }

    /// Create the fresh, catalog-unbound source the reserved name decodes
    /// to. It carries [`UNBOUND_DATA_SOURCE_NAME`] as its display name so
    /// re-encoding yields the same wire bytes.
    pub fn unbound() -> Self {
        Self::new(UNBOUND_DATA_SOURCE_NAME)
    }

    /// The display name, which is also the wire encoding.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The connection URI, if configured.
    pub fn connection_uri(&self) -> Option<&str> {
        self.connection_uri.as_deref()
    }
}

/// Name-indexed catalog of the data sources known to a session.
#[derive(Debug, Default)]
pub struct DataSourceCatalog {
    sources: HashMap<String, Arc<DataSource>>,
}

impl DataSourceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a data source under its display name, returning the shared
    /// handle. A source registered under an existing name replaces the
    /// previous entry.
    pub fn add(&mut self, source: DataSource) -> Arc<DataSource> {
        let handle = Arc::new(source);
        self.sources
            .insert(handle.display_name().to_string(), Arc::clone(&handle));
        handle
    }

    /// Look up a data source by display name.
    pub fn get(&self, display_name: &str) -> Option<Arc<DataSource>> {
        self.sources.get(display_name).cloned()
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// The registered display names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}
