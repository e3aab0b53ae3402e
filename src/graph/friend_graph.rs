//! Core graph structure: a node arena plus the set of registered members.

use std::collections::BTreeSet;

use crate::types::{GraphError, GraphResult, NodeId, PersonNode, TraversalStrategy};

use super::traversal::{self, trace_visit};

/// An undirected friend graph.
///
/// Every person ever created lives in the arena and is addressed by its
/// [`NodeId`]. Membership is tracked separately: creating a person does not
/// register it, `add_person` and `set_friends` do.
#[derive(Debug, Clone, Default)]
pub struct FriendGraph {
    /// All people created through this graph, indexed by `NodeId`.
    people: Vec<PersonNode>,
    /// Handles registered with this graph.
    members: BTreeSet<NodeId>,
}

impl FriendGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a person with no friends. The person is not yet a member.
    pub fn create_person(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.people.len());
        self.people.push(PersonNode::new(id, label));
        id
    }

    /// Allocate a person and register it in one step.
    pub fn add_new_person(&mut self, label: impl Into<String>) -> NodeId {
        let id = self.create_person(label);
        self.members.insert(id);
        id
    }

    /// Register a person. Adding a member twice is a no-op.
    pub fn add_person(&mut self, id: NodeId) -> GraphResult<()> {
        self.require(id)?;
        self.members.insert(id);
        Ok(())
    }

    /// Register every person in `ids`.
    pub fn add_people(&mut self, ids: &[NodeId]) -> GraphResult<()> {
        for &id in ids {
            self.add_person(id)?;
        }
        Ok(())
    }

    /// Make `a` and `b` friends of each other.
    ///
    /// Both endpoints are registered as members, so an edge can never point
    /// at a person the graph does not list. Repeating the call changes nothing.
    pub fn set_friends(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        self.require(a)?;
        self.require(b)?;

        let added = self.people[a.index()].link(b);
        self.people[b.index()].link(a);
        self.members.insert(a);
        self.members.insert(b);

        if added {
            log::debug!(
                "linked {} ({}) <-> {} ({})",
                self.people[a.index()].label(),
                a,
                self.people[b.index()].label(),
                b
            );
        }
        Ok(())
    }

    /// Get a person by handle, member or not.
    pub fn person(&self, id: NodeId) -> Option<&PersonNode> {
        self.people.get(id.index())
    }

    /// Whether `id` has been registered with this graph.
    pub fn is_member(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    /// Registered people, in creation order.
    pub fn people(&self) -> impl Iterator<Item = &PersonNode> + '_ {
        self.members.iter().map(move |id| &self.people[id.index()])
    }

    /// Handles of every member carrying exactly this label.
    pub fn find_by_label(&self, label: &str) -> Vec<NodeId> {
        self.people()
            .filter(|p| p.label() == label)
            .map(PersonNode::id)
            .collect()
    }

    /// Direct friends of `id`. Empty for an unknown handle.
    pub fn neighbors(&self, id: NodeId) -> Vec<&PersonNode> {
        match self.person(id) {
            Some(person) => person
                .adjacent()
                .filter_map(|other| self.person(other))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Number of people allocated, members or not.
    pub fn node_count(&self) -> usize {
        self.people.len()
    }

    /// Number of registered people.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Number of undirected friendships. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let mut loops = 0;
        let mut ends = 0;
        for person in &self.people {
            ends += person.degree();
            if person.is_adjacent_to(person.id()) {
                loops += 1;
            }
        }
        (ends - loops) / 2 + loops
    }

    /// Breadth-first reachability check.
    pub fn are_connected_bfs(&self, start: NodeId, target: NodeId) -> GraphResult<bool> {
        traversal::bfs_connected(self, start, target, trace_visit)
    }

    /// Iterative depth-first reachability check.
    pub fn are_connected_dfs(&self, start: NodeId, target: NodeId) -> GraphResult<bool> {
        traversal::dfs_connected(self, start, target, trace_visit)
    }

    /// Depth-first reachability check in recursive preorder.
    pub fn are_connected_recursive(&self, start: NodeId, target: NodeId) -> GraphResult<bool> {
        traversal::recursive_connected(self, start, target, trace_visit)
    }

    /// Reachability check using the given strategy.
    pub fn are_connected(
        &self,
        start: NodeId,
        target: NodeId,
        strategy: TraversalStrategy,
    ) -> GraphResult<bool> {
        self.are_connected_with(start, target, strategy, trace_visit)
    }

    /// Reachability check calling `visit` once for every person visited.
    pub fn are_connected_with<F>(
        &self,
        start: NodeId,
        target: NodeId,
        strategy: TraversalStrategy,
        visit: F,
    ) -> GraphResult<bool>
    where
        F: FnMut(&PersonNode),
    {
        match strategy {
            TraversalStrategy::Bfs => traversal::bfs_connected(self, start, target, visit),
            TraversalStrategy::Dfs => traversal::dfs_connected(self, start, target, visit),
            TraversalStrategy::Recursive => {
                traversal::recursive_connected(self, start, target, visit)
            }
        }
    }

    /// Everyone reachable from `start`, including `start`, in BFS order.
    pub fn reachable_from(&self, start: NodeId) -> GraphResult<Vec<NodeId>> {
        traversal::bfs_reachable(self, start)
    }

    fn require(&self, id: NodeId) -> GraphResult<&PersonNode> {
        self.person(id).ok_or(GraphError::UnknownNode(id))
    }
}
