//! Command-line interface for the spanwise spanning tree builders.
//!
//! Each command assembles a [`WeightedGraph`](spanwise_core::WeightedGraph)
//! from arguments or a built-in demonstration graph, runs one strategy, and
//! returns an [`ExecutionSummary`] for rendering.

mod commands;
mod demo;

pub use commands::{
    Cli, CliError, Command, DemoCommand, EdgeSpecError, ExecutionSummary, GraphArgs,
    KruskalCommand, MAX_VERTICES, OutputFormat, PrimCommand, parse_edge_spec, render_summary, run_cli,
};
pub use demo::DemoGraph;
