//! Query executor: connectivity and component queries.

use serde::Serialize;

use crate::graph::FriendGraph;
use crate::types::{GraphResult, NodeId, TraversalStrategy, DEFAULT_STRATEGY};

/// Parameters for a connectivity query.
pub struct ConnectivityParams {
    /// Person the search starts from.
    pub start: NodeId,
    /// Person being looked for.
    pub target: NodeId,
    /// Which algorithm to run.
    pub strategy: TraversalStrategy,
}

impl ConnectivityParams {
    /// Query `start` -> `target` with the default strategy.
    pub fn new(start: NodeId, target: NodeId) -> Self {
        Self {
            start,
            target,
            strategy: DEFAULT_STRATEGY,
        }
    }

    /// Use a specific strategy.
    pub fn strategy(mut self, strategy: TraversalStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Result of a connectivity query.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectivityResult {
    /// Whether `target` is reachable from `start`.
    pub connected: bool,
    /// The strategy that produced this answer.
    pub strategy: TraversalStrategy,
    /// People in the order the strategy visited them.
    pub visited: Vec<NodeId>,
}

/// Runs queries against a FriendGraph.
#[derive(Debug, Default)]
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Decide reachability and record the visit order.
    pub fn connected(
        &self,
        graph: &FriendGraph,
        params: ConnectivityParams,
    ) -> GraphResult<ConnectivityResult> {
        let mut visited = Vec::new();
        let connected =
            graph.are_connected_with(params.start, params.target, params.strategy, |person| {
                log::trace!("visit {} ({})", person.label(), person.id());
                visited.push(person.id());
            })?;

        log::debug!(
            "{} -> {} via {}: connected={} after {} visits",
            params.start,
            params.target,
            params.strategy,
            connected,
            visited.len()
        );

        Ok(ConnectivityResult {
            connected,
            strategy: params.strategy,
            visited,
        })
    }

    /// Everyone in the same connected component as `start`.
    pub fn component(&self, graph: &FriendGraph, start: NodeId) -> GraphResult<Vec<NodeId>> {
        graph.reachable_from(start)
    }
}
