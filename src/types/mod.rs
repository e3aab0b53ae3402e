//! All data types for the friend-graph library.

pub mod error;
pub mod node;
pub mod strategy;

pub use error::{GraphError, GraphResult};
pub use node::{NodeId, PersonNode};
pub use strategy::TraversalStrategy;

/// Strategy used when a caller does not pick one.
pub const DEFAULT_STRATEGY: TraversalStrategy = TraversalStrategy::Bfs;
