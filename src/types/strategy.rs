//! Reachability strategies.

use serde::Serialize;

/// The algorithm used to decide whether two people are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalStrategy {
    /// Breadth-first search over a FIFO frontier.
    Bfs,
    /// Depth-first search over a LIFO frontier.
    Dfs,
    /// Depth-first search in recursive preorder.
    Recursive,
}

impl TraversalStrategy {
    /// Every strategy, in a stable order.
    pub const ALL: [TraversalStrategy; 3] = [Self::Bfs, Self::Dfs, Self::Recursive];

    /// Return a human-readable name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Recursive => "recursive",
        }
    }

    /// Parse a strategy from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadth-first" => Some(Self::Bfs),
            "dfs" | "depth_first" | "depth-first" => Some(Self::Dfs),
            "recursive" | "rec" => Some(Self::Recursive),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
