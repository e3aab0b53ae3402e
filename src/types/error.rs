//! Error types for the friend-graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the friend-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A traversal was started from a node this graph does not hold.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A mutation referenced a node handle this graph never allocated.
    #[error("Node {0} does not belong to this graph")]
    UnknownNode(NodeId),

    /// No person carries the given label.
    #[error("No person named {0:?}")]
    UnknownLabel(String),

    /// Traversal strategy name could not be parsed.
    #[error("Unknown traversal strategy: {0}")]
    UnknownStrategy(String),
}

/// Convenience result type for friend-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
