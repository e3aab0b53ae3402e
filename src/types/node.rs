//! Person nodes and the handles that identify them.

use std::collections::BTreeSet;

use serde::Serialize;

/// Stable handle to a person inside a [`FriendGraph`](crate::graph::FriendGraph) arena.
///
/// Identity in the graph is the handle, never the label: two people with the
/// same name are two different nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A person in the friend graph.
#[derive(Debug, Clone, Serialize)]
pub struct PersonNode {
    /// Handle of this node (assigned by the graph on creation).
    id: NodeId,
    /// Display label. Not unique.
    label: String,
    /// Handles of every direct friend, iterated in creation order.
    adjacent: BTreeSet<NodeId>,
}

impl PersonNode {
    pub(crate) fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            adjacent: BTreeSet::new(),
        }
    }

    /// Handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Direct friends of this person.
    pub fn adjacent(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacent.iter().copied()
    }

    /// Number of direct friends (a self-loop counts once).
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Whether `other` is a direct friend.
    pub fn is_adjacent_to(&self, other: NodeId) -> bool {
        self.adjacent.contains(&other)
    }

    /// Record `other` as a friend. Returns false if it already was one.
    pub(crate) fn link(&mut self, other: NodeId) -> bool {
        self.adjacent.insert(other)
    }
}
