//! Graph traversal algorithms (BFS, DFS, recursive DFS).
//!
//! All three share the same bookkeeping rule: a person is marked seen when it
//! is scheduled, so no one is ever scheduled twice. Graph membership is not
//! consulted; traversal follows friendships outward from `start`.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, NodeId, PersonNode};

use super::FriendGraph;

/// Default visitor: emit each visited label at trace level.
pub fn trace_visit(person: &PersonNode) {
    log::trace!("visit {} ({})", person.label(), person.id());
}

fn traversal_root(graph: &FriendGraph, start: NodeId) -> GraphResult<&PersonNode> {
    graph.person(start).ok_or_else(|| {
        GraphError::InvalidArgument(format!("start node {} does not exist in this graph", start))
    })
}

/// Breadth-first check: is `target` reachable from `start`?
pub fn bfs_connected<F>(
    graph: &FriendGraph,
    start: NodeId,
    target: NodeId,
    mut visit: F,
) -> GraphResult<bool>
where
    F: FnMut(&PersonNode),
{
    let root = traversal_root(graph, start)?;

    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<&PersonNode> = VecDeque::new();
    seen.insert(root.id());
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        visit(current);
        if current.id() == target {
            return Ok(true);
        }

        for neighbor_id in current.adjacent() {
            if !seen.insert(neighbor_id) {
                continue;
            }
            if let Some(neighbor) = graph.person(neighbor_id) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(false)
}

/// Depth-first check with an explicit stack: is `target` reachable from `start`?
pub fn dfs_connected<F>(
    graph: &FriendGraph,
    start: NodeId,
    target: NodeId,
    mut visit: F,
) -> GraphResult<bool>
where
    F: FnMut(&PersonNode),
{
    let root = traversal_root(graph, start)?;

    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<&PersonNode> = vec![root];
    seen.insert(root.id());

    while let Some(current) = stack.pop() {
        visit(current);
        if current.id() == target {
            return Ok(true);
        }

        for neighbor_id in current.adjacent() {
            if !seen.insert(neighbor_id) {
                continue;
            }
            if let Some(neighbor) = graph.person(neighbor_id) {
                stack.push(neighbor);
            }
        }
    }

    Ok(false)
}

/// Depth-first check in recursive preorder: descend into the first unseen
/// friend, return on the first success, back off when a person runs out of
/// unseen friends.
///
/// The call stack is kept on the heap as a stack of neighbor iterators, one
/// per open frame, so arbitrarily long chains cannot overflow the thread stack.
pub fn recursive_connected<F>(
    graph: &FriendGraph,
    start: NodeId,
    target: NodeId,
    mut visit: F,
) -> GraphResult<bool>
where
    F: FnMut(&PersonNode),
{
    let root = traversal_root(graph, start)?;

    visit(root);
    if root.id() == target {
        return Ok(true);
    }

    let mut seen: HashSet<NodeId> = HashSet::new();
    seen.insert(root.id());
    let mut frames = vec![root.adjacent()];

    while let Some(frame) = frames.last_mut() {
        let Some(neighbor_id) = frame.next() else {
            frames.pop();
            continue;
        };
        if !seen.insert(neighbor_id) {
            continue;
        }
        let Some(neighbor) = graph.person(neighbor_id) else {
            continue;
        };

        visit(neighbor);
        if neighbor_id == target {
            return Ok(true);
        }
        frames.push(neighbor.adjacent());
    }

    Ok(false)
}

/// Every person reachable from `start` (including `start`), in BFS order.
pub fn bfs_reachable(graph: &FriendGraph, start: NodeId) -> GraphResult<Vec<NodeId>> {
    let root = traversal_root(graph, start)?;

    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut queue: VecDeque<&PersonNode> = VecDeque::new();
    seen.insert(root.id());
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        order.push(current.id());
        for neighbor_id in current.adjacent() {
            if seen.insert(neighbor_id) {
                if let Some(neighbor) = graph.person(neighbor_id) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    Ok(order)
}
