//! CLI command implementations.

use crate::engine::{ConnectivityParams, QueryEngine};
use crate::graph::FriendGraph;
use crate::types::{GraphResult, NodeId, TraversalStrategy};

use super::demo::{demo_graph, resolve_person};

/// Print the demo scenarios under every strategy.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let graph = demo_graph()?;
    let query = QueryEngine::new();

    let pairs = [
        ("homer", "grandpa"),
        ("homer", "moe"),
        ("moe", "lenny"),
        ("lisa", "lisa"),
    ];

    let mut rows = Vec::new();
    for (from, to) in pairs {
        let start = resolve_person(&graph, from)?;
        let target = resolve_person(&graph, to)?;
        for strategy in TraversalStrategy::ALL {
            let result = query.connected(
                &graph,
                ConnectivityParams::new(start, target).strategy(strategy),
            )?;
            rows.push((from, to, result));
        }
    }

    if json {
        let out: Vec<serde_json::Value> = rows
            .iter()
            .map(|(from, to, result)| {
                serde_json::json!({
                    "from": from,
                    "to": to,
                    "strategy": result.strategy.name(),
                    "connected": result.connected,
                    "visited": labels(&graph, &result.visited),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        println!(
            "Demo graph: {} people, {} friendships",
            graph.member_count(),
            graph.edge_count()
        );
        for (from, to, result) in &rows {
            println!(
                "  {:<10} {} -> {}: {}",
                result.strategy.name(),
                from,
                to,
                if result.connected {
                    "connected"
                } else {
                    "not connected"
                }
            );
        }
    }
    Ok(())
}

/// Check whether two people in the demo graph are connected.
pub fn cmd_connected(
    from: &str,
    to: &str,
    strategy: TraversalStrategy,
    trace: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = demo_graph()?;
    let start = resolve_person(&graph, from)?;
    let target = resolve_person(&graph, to)?;

    let result = QueryEngine::new().connected(
        &graph,
        ConnectivityParams::new(start, target).strategy(strategy),
    )?;

    if json {
        let mut info = serde_json::json!({
            "from": label(&graph, start),
            "to": label(&graph, target),
            "strategy": strategy.name(),
            "connected": result.connected,
        });
        if trace {
            info["visited"] = serde_json::json!(labels(&graph, &result.visited));
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "{} and {} are {} ({})",
            label(&graph, start),
            label(&graph, target),
            if result.connected {
                "connected"
            } else {
                "not connected"
            },
            strategy.name()
        );
        if trace {
            println!("Visit order:");
            for (step, name) in labels(&graph, &result.visited).iter().enumerate() {
                println!("  {:>3}. {}", step + 1, name);
            }
        }
    }
    Ok(())
}

/// List everyone in the same component as `name`.
pub fn cmd_component(name: &str, json: bool) -> GraphResult<()> {
    let graph = demo_graph()?;
    let start = resolve_person(&graph, name)?;
    let members = QueryEngine::new().component(&graph, start)?;

    if json {
        let info = serde_json::json!({
            "person": label(&graph, start),
            "component": labels(&graph, &members),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "{} can reach {} people:",
            label(&graph, start),
            members.len()
        );
        for name in labels(&graph, &members) {
            println!("  {}", name);
        }
    }
    Ok(())
}

/// List every member of the demo graph with their friends.
pub fn cmd_people(json: bool) -> GraphResult<()> {
    let graph = demo_graph()?;

    if json {
        let out: Vec<serde_json::Value> = graph
            .people()
            .map(|p| {
                serde_json::json!({
                    "id": p.id(),
                    "label": p.label(),
                    "friends": labels(&graph, &p.adjacent().collect::<Vec<_>>()),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        for person in graph.people() {
            let friends = labels(&graph, &person.adjacent().collect::<Vec<_>>());
            println!(
                "{} {}: {}",
                person.id(),
                person.label(),
                if friends.is_empty() {
                    "(no friends)".to_string()
                } else {
                    friends.join(", ")
                }
            );
        }
    }
    Ok(())
}

fn label(graph: &FriendGraph, id: NodeId) -> String {
    graph
        .person(id)
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn labels(graph: &FriendGraph, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|&id| label(graph, id)).collect()
}
