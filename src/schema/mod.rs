//! Declarative resource schemas.
//!
//! A [`SchemaNode`] describes how one segment of the remote resource
//! tree is treated: whether its own payload is saved, which singular
//! children are descended into, and which collection endpoints are
//! listed and expanded. It is pure data — the traversal engine
//! interprets it, the node itself does nothing.

pub mod catalog;

/// Backup behavior for one resource path segment.
///
/// Entries keep their declared order so a run visits the tree in a
/// stable, reproducible sequence. A node is immutable once built and
/// may be shared across any number of traversals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaNode {
    save: bool,
    children: Vec<(String, SchemaNode)>,
    lists: Vec<(String, SchemaNode)>,
}

impl SchemaNode {
    /// A node whose own payload is fetched and persisted.
    pub fn saved() -> Self {
        Self {
            save: true,
            ..Self::default()
        }
    }

    /// An organizational node: never persisted itself, only descended.
    pub fn container() -> Self {
        Self::default()
    }

    /// Add a singular nested resource, recursed into unconditionally.
    pub fn child(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.children.push((name.into(), node));
        self
    }

    /// Add a collection endpoint; every listed member is recursed into
    /// with the given schema.
    pub fn list(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.lists.push((name.into(), node));
        self
    }

    /// Whether this node's own payload is persisted.
    pub fn save(&self) -> bool {
        self.save
    }

    /// Singular children, in declared order.
    pub fn children(&self) -> &[(String, SchemaNode)] {
        &self.children
    }

    /// Collection endpoints, in declared order.
    pub fn lists(&self) -> &[(String, SchemaNode)] {
        &self.lists
    }

    /// Depth of the schema tree, counting this node. Traversal
    /// recursion is bounded by it.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .chain(self.lists.iter())
            .map(|(_, node)| node.depth())
            .max()
            .unwrap_or(0)
    }
}
