//! Command-line surface for the `fgraph` binary.

pub mod commands;
pub mod demo;

pub use demo::{demo_graph, resolve_person};
