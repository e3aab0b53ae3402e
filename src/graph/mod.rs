//! In-memory friend graph: the core data structure and its traversals.

pub mod builder;
pub mod friend_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use friend_graph::FriendGraph;
pub use traversal::{bfs_connected, bfs_reachable, dfs_connected, recursive_connected};
