//! The demo friend graph the CLI answers questions about.

use crate::graph::{FriendGraph, GraphBuilder};
use crate::types::{GraphError, GraphResult, NodeId};

/// The Simpson family, and an island of regulars from Moe's that nobody in
/// the family is friends with.
pub fn demo_graph() -> GraphResult<FriendGraph> {
    let mut builder = GraphBuilder::new();

    let family = builder.people(&[
        "homer simpson",
        "marge simpson",
        "maggie simpson",
        "lisa simpson",
        "grandpa simpson",
    ]);
    let (homer, marge, maggie, lisa, grandpa) =
        (family[0], family[1], family[2], family[3], family[4]);
    builder
        .friends(homer, marge)
        .friends(homer, lisa)
        .friends(homer, maggie)
        .friends(marge, maggie)
        .friends(maggie, lisa)
        .friends(lisa, grandpa);

    let island = builder.people(&["moe", "barney", "lenny"]);
    let (moe, barney, lenny) = (island[0], island[1], island[2]);
    builder.friends(moe, barney).friends(barney, lenny);

    builder.build()
}

/// Find a member by full label, or by the first word of the label.
pub fn resolve_person(graph: &FriendGraph, name: &str) -> GraphResult<NodeId> {
    let wanted = name.trim().to_lowercase();
    graph
        .people()
        .find(|p| p.label().to_lowercase() == wanted)
        .or_else(|| {
            graph.people().find(|p| {
                p.label()
                    .split_whitespace()
                    .next()
                    .is_some_and(|first| first.to_lowercase() == wanted)
            })
        })
        .map(|p| p.id())
        .ok_or_else(|| GraphError::UnknownLabel(name.to_string()))
}
