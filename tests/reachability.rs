//! Reachability tests: BFS, DFS and recursive DFS.

use friend_graph::graph::FriendGraph;
use friend_graph::types::error::GraphError;
use friend_graph::types::{NodeId, TraversalStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Springfield {
    graph: FriendGraph,
    homer: NodeId,
    marge: NodeId,
    maggie: NodeId,
    lisa: NodeId,
    grandpa: NodeId,
    moe: NodeId,
    barney: NodeId,
    lenny: NodeId,
}

fn springfield() -> Springfield {
    let mut graph = FriendGraph::new();
    let homer = graph.create_person("homer simpson");
    let marge = graph.create_person("marge simpson");
    let maggie = graph.create_person("maggie simpson");
    let lisa = graph.create_person("lisa simpson");
    let grandpa = graph.create_person("grandpa simpson");
    graph
        .add_people(&[homer, marge, maggie, lisa, grandpa])
        .unwrap();
    graph.set_friends(homer, marge).unwrap();
    graph.set_friends(homer, lisa).unwrap();
    graph.set_friends(homer, maggie).unwrap();
    graph.set_friends(marge, maggie).unwrap();
    graph.set_friends(maggie, lisa).unwrap();
    graph.set_friends(lisa, grandpa).unwrap();

    let moe = graph.create_person("moe");
    let barney = graph.create_person("barney");
    let lenny = graph.create_person("lenny");
    graph.add_people(&[moe, barney, lenny]).unwrap();
    graph.set_friends(moe, barney).unwrap();
    graph.set_friends(barney, lenny).unwrap();

    Springfield {
        graph,
        homer,
        marge,
        maggie,
        lisa,
        grandpa,
        moe,
        barney,
        lenny,
    }
}

fn all_ids(graph: &FriendGraph) -> Vec<NodeId> {
    graph.people().map(|p| p.id()).collect()
}

fn random_graph(rng: &mut StdRng, people: usize, friendships: usize) -> FriendGraph {
    let mut graph = FriendGraph::new();
    let ids: Vec<NodeId> = (0..people)
        .map(|i| graph.add_new_person(format!("person_{}", i)))
        .collect();
    for _ in 0..friendships {
        let a = ids[rng.gen_range(0..people)];
        let b = ids[rng.gen_range(0..people)];
        graph.set_friends(a, b).unwrap();
    }
    graph
}

fn visit_order(
    graph: &FriendGraph,
    start: NodeId,
    target: NodeId,
    strategy: TraversalStrategy,
) -> Vec<String> {
    let mut order = Vec::new();
    graph
        .are_connected_with(start, target, strategy, |p| order.push(p.label().to_string()))
        .unwrap();
    order
}

// ==================== Scenarios ====================

#[test]
fn test_homer_reaches_grandpa() {
    let s = springfield();
    assert!(s.graph.are_connected_bfs(s.homer, s.grandpa).unwrap());
    assert!(s.graph.are_connected_dfs(s.homer, s.grandpa).unwrap());
    assert!(s.graph.are_connected_recursive(s.homer, s.grandpa).unwrap());
}

#[test]
fn test_island_is_unreachable() {
    let s = springfield();
    assert!(!s.graph.are_connected_bfs(s.homer, s.moe).unwrap());
    assert!(s.graph.are_connected_bfs(s.moe, s.lenny).unwrap());

    for strategy in TraversalStrategy::ALL {
        for &a in &[s.homer, s.marge, s.maggie, s.lisa, s.grandpa] {
            for &b in &[s.moe, s.barney, s.lenny] {
                assert!(!s.graph.are_connected(a, b, strategy).unwrap());
                assert!(!s.graph.are_connected(b, a, strategy).unwrap());
            }
        }
    }
}

#[test]
fn test_everyone_reaches_themselves() {
    let s = springfield();
    for id in all_ids(&s.graph) {
        assert!(s.graph.are_connected_bfs(id, id).unwrap());
        assert!(s.graph.are_connected_dfs(id, id).unwrap());
        assert!(s.graph.are_connected_recursive(id, id).unwrap());
    }
}

#[test]
fn test_lonely_person() {
    let mut s = springfield();
    let hermit = s.graph.add_new_person("hermit");

    for strategy in TraversalStrategy::ALL {
        assert!(s.graph.are_connected(hermit, hermit, strategy).unwrap());
        for other in all_ids(&s.graph).into_iter().filter(|&id| id != hermit) {
            assert!(!s.graph.are_connected(hermit, other, strategy).unwrap());
        }
    }
}

#[test]
fn test_strategies_agree_and_are_symmetric() {
    let s = springfield();
    let ids = all_ids(&s.graph);
    for &a in &ids {
        for &b in &ids {
            let bfs = s.graph.are_connected_bfs(a, b).unwrap();
            assert_eq!(bfs, s.graph.are_connected_dfs(a, b).unwrap());
            assert_eq!(bfs, s.graph.are_connected_recursive(a, b).unwrap());
            assert_eq!(bfs, s.graph.are_connected_bfs(b, a).unwrap());
        }
    }
}

#[test]
fn test_strategies_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..20 {
        let people = 5 + round * 2;
        let graph = random_graph(&mut rng, people, people);
        let ids = all_ids(&graph);
        let component_of: Vec<Vec<NodeId>> = ids
            .iter()
            .map(|&id| graph.reachable_from(id).unwrap())
            .collect();

        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids {
                let expected = component_of[i].contains(&b);
                for strategy in TraversalStrategy::ALL {
                    assert_eq!(graph.are_connected(a, b, strategy).unwrap(), expected);
                    assert_eq!(graph.are_connected(b, a, strategy).unwrap(), expected);
                }
            }
        }
    }
}

// ==================== Visit order ====================

#[test]
fn test_bfs_visits_level_by_level() {
    let s = springfield();
    let order = visit_order(&s.graph, s.homer, s.grandpa, TraversalStrategy::Bfs);
    assert_eq!(
        order,
        vec![
            "homer simpson",
            "marge simpson",
            "maggie simpson",
            "lisa simpson",
            "grandpa simpson",
        ]
    );
}

#[test]
fn test_dfs_visits_last_scheduled_first() {
    let s = springfield();
    // homer schedules marge, maggie, lisa; lisa is popped first and
    // schedules grandpa, who is popped next.
    let order = visit_order(&s.graph, s.homer, s.grandpa, TraversalStrategy::Dfs);
    assert_eq!(
        order,
        vec!["homer simpson", "lisa simpson", "grandpa simpson"]
    );
}

#[test]
fn test_recursive_visits_in_preorder() {
    let s = springfield();
    // homer -> marge -> maggie -> lisa -> grandpa, descending into the
    // first unseen friend each time.
    let order = visit_order(&s.graph, s.homer, s.grandpa, TraversalStrategy::Recursive);
    assert_eq!(
        order,
        vec![
            "homer simpson",
            "marge simpson",
            "maggie simpson",
            "lisa simpson",
            "grandpa simpson",
        ]
    );
}

#[test]
fn test_recursive_backtracks() {
    let mut graph = FriendGraph::new();
    let root = graph.add_new_person("root");
    let dead_end = graph.add_new_person("dead end");
    let leaf = graph.add_new_person("leaf");
    let goal = graph.add_new_person("goal");
    graph.set_friends(root, dead_end).unwrap();
    graph.set_friends(dead_end, leaf).unwrap();
    graph.set_friends(root, goal).unwrap();

    let order = visit_order(&graph, root, goal, TraversalStrategy::Recursive);
    assert_eq!(order, vec!["root", "dead end", "leaf", "goal"]);
}

#[test]
fn test_no_one_visited_twice() {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = random_graph(&mut rng, 40, 120);
    let ids = all_ids(&graph);
    let missing = {
        let mut other = FriendGraph::new();
        for _ in 0..=ids.len() {
            other.create_person("x");
        }
        // Never a member of `graph`, so traversal runs to exhaustion.
        other.create_person("missing")
    };
    assert!(graph.person(missing).is_none());

    for strategy in TraversalStrategy::ALL {
        let mut visited = Vec::new();
        let found = graph
            .are_connected_with(ids[0], missing, strategy, |p| visited.push(p.id()))
            .unwrap();
        assert!(!found);

        let mut unique = visited.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), visited.len());
        assert_eq!(visited.len(), graph.reachable_from(ids[0]).unwrap().len());
    }
}

// ==================== Edge cases ====================

#[test]
fn test_unknown_start_is_invalid_argument() {
    let mut other = FriendGraph::new();
    for i in 0..10 {
        other.create_person(format!("p{}", i));
    }
    let foreign = other.create_person("foreign");

    let s = springfield();
    for strategy in TraversalStrategy::ALL {
        match s.graph.are_connected(foreign, s.homer, strategy) {
            Err(GraphError::InvalidArgument(_)) => {}
            other => panic!("Expected InvalidArgument error, got {:?}", other),
        }
    }
    assert!(matches!(
        s.graph.reachable_from(foreign),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_unknown_target_is_not_found() {
    let mut other = FriendGraph::new();
    for i in 0..10 {
        other.create_person(format!("p{}", i));
    }
    let foreign = other.create_person("foreign");

    let s = springfield();
    for strategy in TraversalStrategy::ALL {
        assert!(!s.graph.are_connected(s.homer, foreign, strategy).unwrap());
    }
}

#[test]
fn test_traversal_ignores_membership() {
    let mut graph = FriendGraph::new();
    let drifter = graph.create_person("drifter");
    assert!(!graph.is_member(drifter));
    assert!(graph.are_connected_bfs(drifter, drifter).unwrap());
    assert!(graph.are_connected_recursive(drifter, drifter).unwrap());
}

#[test]
fn test_long_chain_does_not_overflow() {
    let mut graph = FriendGraph::new();
    let first = graph.add_new_person("link_0");
    let mut prev = first;
    for i in 1..100_000 {
        let next = graph.add_new_person(format!("link_{}", i));
        graph.set_friends(prev, next).unwrap();
        prev = next;
    }

    assert!(graph.are_connected_recursive(first, prev).unwrap());
    assert!(graph.are_connected_dfs(first, prev).unwrap());
    assert!(graph.are_connected_bfs(prev, first).unwrap());
}

#[test]
fn test_reachable_from_is_component() {
    let s = springfield();
    let family = s.graph.reachable_from(s.grandpa).unwrap();
    assert_eq!(family.len(), 5);
    assert_eq!(family[0], s.grandpa);
    assert!(!family.contains(&s.moe));

    let bar = s.graph.reachable_from(s.barney).unwrap();
    assert_eq!(bar, vec![s.barney, s.moe, s.lenny]);
}
