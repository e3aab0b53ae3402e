//! friend-graph: an undirected friend graph with reachability checks.
//!
//! People are nodes in an arena, addressed by [`NodeId`] handles; friendships
//! are symmetric adjacency entries. Whether two people are connected can be
//! answered by breadth-first search, iterative depth-first search, or
//! depth-first search in recursive preorder. All three agree on the answer.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{ConnectivityParams, ConnectivityResult, QueryEngine};
pub use graph::{FriendGraph, GraphBuilder};
pub use types::{
    GraphError, GraphResult, NodeId, PersonNode, TraversalStrategy, DEFAULT_STRATEGY,
};
