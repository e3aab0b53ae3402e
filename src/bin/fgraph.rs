//! CLI entry point for the `fgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use friend_graph::cli::commands;
use friend_graph::types::{GraphError, TraversalStrategy};

#[derive(Parser)]
#[command(
    name = "fgraph",
    about = "Friend graph CLI: reachability by BFS, DFS or recursive DFS"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Enable trace logging, including every person visited
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo scenarios under every strategy
    Demo,
    /// Check whether two people are connected
    Connected {
        /// Person to start from (first name or full name)
        from: String,
        /// Person to look for
        to: String,
        /// Strategy: bfs, dfs, or recursive
        #[arg(long, default_value = "bfs")]
        strategy: String,
        /// Also print the order people were visited in
        #[arg(long)]
        trace: bool,
    },
    /// List everyone reachable from a person
    Component {
        /// Person to start from
        name: String,
    },
    /// List every person with their friends
    People,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
            .init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Connected {
            from,
            to,
            strategy,
            trace,
        } => {
            let strategy = match TraversalStrategy::from_name(&strategy) {
                Some(s) => s,
                None => {
                    eprintln!("Error: {}", GraphError::UnknownStrategy(strategy));
                    process::exit(3);
                }
            };
            commands::cmd_connected(&from, &to, strategy, trace, json)
        }
        Commands::Component { name } => commands::cmd_component(&name, json),
        Commands::People => commands::cmd_people(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidArgument(_) | GraphError::UnknownStrategy(_) => 3,
            GraphError::UnknownLabel(_) | GraphError::UnknownNode(_) => 4,
        };
        process::exit(code);
    }
}
