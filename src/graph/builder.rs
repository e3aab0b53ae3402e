//! Fluent API for building FriendGraph instances.

use crate::types::{GraphResult, NodeId};

use super::FriendGraph;

/// Fluent builder for constructing a FriendGraph.
///
/// Friendships are recorded and applied in order by [`GraphBuilder::build`],
/// so an invalid handle surfaces there as an error instead of panicking here.
#[derive(Default)]
pub struct GraphBuilder {
    graph: FriendGraph,
    friendships: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a registered person.
    pub fn person(&mut self, label: &str) -> NodeId {
        self.graph.add_new_person(label)
    }

    /// Add several registered people, returning their handles in order.
    pub fn people(&mut self, labels: &[&str]) -> Vec<NodeId> {
        labels.iter().map(|label| self.person(label)).collect()
    }

    /// Make two people friends.
    pub fn friends(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.friendships.push((a, b));
        self
    }

    /// Build the final FriendGraph.
    pub fn build(self) -> GraphResult<FriendGraph> {
        let mut graph = self.graph;
        for (a, b) in self.friendships {
            graph.set_friends(a, b)?;
        }
        Ok(graph)
    }
}
