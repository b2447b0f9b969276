//! The workspace object tree and its identity index.
//!
//! Persisted object references travel as stable UUIDs rather than raw
//! references, so reference resolution needs an id-indexed registry over
//! the tree. `WorkspaceTree` builds that index once at construction by
//! walking the tree; the index is immutable afterwards, which keeps
//! resolution lock-free for concurrent readers.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while building a workspace tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Two nodes in the tree carry the same UUID.
    #[error("duplicate object id {uuid} in workspace tree")]
    DuplicateId { uuid: Uuid },
}

/// A node in the workspace object tree.
///
/// Equality is identity: two nodes are equal when they carry the same
/// UUID, regardless of name or children.
#[derive(Debug)]
pub struct WorkspaceObject {
    uuid: Uuid,
    name: String,
    children: Vec<Arc<WorkspaceObject>>,
}

impl WorkspaceObject {
    /// Create a leaf node with a fresh UUID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_uuid(Uuid::new_v4(), name)
    }

    /// Create a leaf node with an explicit UUID.
    ///
    /// Persistence readers use this to rebuild nodes under their stored
    /// identities.
    pub fn with_uuid(uuid: Uuid, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Attach children to this node.
    pub fn with_children(mut self, children: Vec<Arc<WorkspaceObject>>) -> Self {
        self.children = children;
        self
    }

    /// The node's stable identity.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// The node's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's direct children.
    pub fn children(&self) -> &[Arc<WorkspaceObject>] {
        &self.children
    }
}

impl PartialEq for WorkspaceObject {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for WorkspaceObject {}

/// A workspace tree with a UUID index over every node.
///
/// The index is built once from the root and never mutated, so lookups
/// take no locks and the tree is safe to share across threads behind an
/// `Arc`.
#[derive(Debug)]
pub struct WorkspaceTree {
    root: Arc<WorkspaceObject>,
    index: HashMap<Uuid, Arc<WorkspaceObject>>,
}

impl WorkspaceTree {
    /// Build a tree over `root`, indexing every reachable node by UUID.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DuplicateId`] when two reachable nodes carry
    /// the same UUID; persisted references would be ambiguous otherwise.
    pub fn new(root: Arc<WorkspaceObject>) -> Result<Self, TreeError> {
        let mut index = HashMap::new();
        let mut stack = vec![Arc::clone(&root)];
        while let Some(node) = stack.pop() {
            if index.insert(node.uuid(), Arc::clone(&node)).is_some() {
                return Err(TreeError::DuplicateId { uuid: node.uuid() });
            }
            for child in node.children() {
                stack.push(Arc::clone(child));
            }
        }
        Ok(Self { root, index })
    }

    /// The tree's root node.
    pub fn root(&self) -> &Arc<WorkspaceObject> {
        &self.root
    }

    /// Resolve a node by its UUID.
    pub fn get(&self, uuid: &Uuid) -> Option<&Arc<WorkspaceObject>> {
        self.index.get(uuid)
    }

    /// Number of indexed nodes, root included.
    pub fn object_count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_covers_all_nodes() {
        let leaf = Arc::new(WorkspaceObject::new("query-1"));
        let folder =
            Arc::new(WorkspaceObject::new("reports").with_children(vec![Arc::clone(&leaf)]));
        let root =
            Arc::new(WorkspaceObject::new("workspace").with_children(vec![Arc::clone(&folder)]));
        let tree = WorkspaceTree::new(Arc::clone(&root)).unwrap();

        assert_eq!(tree.object_count(), 3);
        assert!(Arc::ptr_eq(tree.get(&leaf.uuid()).unwrap(), &leaf));
        assert!(Arc::ptr_eq(tree.get(&root.uuid()).unwrap(), &root));
    }

    #[test]
    fn test_unknown_uuid_resolves_to_none() {
        let root = Arc::new(WorkspaceObject::new("workspace"));
        let tree = WorkspaceTree::new(root).unwrap();
        assert!(tree.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_duplicate_uuid_rejected() {
        let id = Uuid::new_v4();
        let a = Arc::new(WorkspaceObject::with_uuid(id, "a"));
        let b = Arc::new(WorkspaceObject::with_uuid(id, "b"));
        let root = Arc::new(WorkspaceObject::new("workspace").with_children(vec![a, b]));

        let err = WorkspaceTree::new(root).unwrap_err();
        assert!(matches!(err, TreeError::DuplicateId { uuid } if uuid == id));
    }

    #[test]
    fn test_equality_is_identity() {
        let id = Uuid::new_v4();
        let a = WorkspaceObject::with_uuid(id, "a");
        let b = WorkspaceObject::with_uuid(id, "renamed");
        assert_eq!(a, b);
    }
}
