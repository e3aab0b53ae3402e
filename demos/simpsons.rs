//! Build the Simpson family graph, add an island, and ask who can reach whom.

use friend_graph::*;

fn main() -> GraphResult<()> {
    env_logger::init();

    let mut friends = FriendGraph::new();

    let homer = friends.create_person("homer simpson");
    let marge = friends.create_person("marge simpson");
    let maggie = friends.create_person("maggie simpson");
    let lisa = friends.create_person("lisa simpson");
    let grandpa = friends.create_person("grandpa simpson");

    friends.add_people(&[homer, marge, maggie, lisa, grandpa])?;
    friends.set_friends(homer, marge)?;
    friends.set_friends(homer, lisa)?;
    friends.set_friends(homer, maggie)?;
    friends.set_friends(marge, maggie)?;
    friends.set_friends(maggie, lisa)?;
    friends.set_friends(lisa, grandpa)?;

    // An island nobody in the family is friends with
    let moe = friends.create_person("moe");
    let barney = friends.create_person("barney");
    let lenny = friends.create_person("lenny");
    friends.add_people(&[moe, barney, lenny])?;
    friends.set_friends(moe, barney)?;
    friends.set_friends(barney, lenny)?;

    println!(
        "Graph has {} people and {} friendships",
        friends.member_count(),
        friends.edge_count()
    );

    let query = QueryEngine::new();
    for (start, target) in [(homer, grandpa), (homer, moe), (moe, lenny)] {
        for strategy in TraversalStrategy::ALL {
            let result = query.connected(
                &friends,
                ConnectivityParams::new(start, target).strategy(strategy),
            )?;
            let path: Vec<&str> = result
                .visited
                .iter()
                .filter_map(|&id| friends.person(id).map(|p| p.label()))
                .collect();
            println!(
                "[{}] {} -> {}: {} (visited {})",
                strategy,
                friends.person(start).map_or("?", |p| p.label()),
                friends.person(target).map_or("?", |p| p.label()),
                result.connected,
                path.join(", ")
            );
        }
    }

    Ok(())
}
