//! Command implementations and argument parsing for the spanwise CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spanwise_core::{
    Edge, GraphError, KruskalBuilder, MstBuilder, MstResult, PrimBuilder, PrimMode, VertexIndex,
    WeightedGraph,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::demo::DemoGraph;

/// Largest vertex count accepted on the command line. The graph allocates an
/// incidence list per vertex before any edge is read.
pub const MAX_VERTICES: usize = 1 << 24;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Compute minimum spanning trees with Kruskal's or Prim's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a minimum spanning forest with Kruskal's algorithm.
    Kruskal(KruskalCommand),
    /// Build a minimum spanning tree with Prim's algorithm.
    Prim(PrimCommand),
    /// Run a strategy on its built-in demonstration graph.
    Demo(DemoCommand),
}

/// Graph description shared by the `kruskal` and `prim` commands.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Number of vertices; vertices are numbered from zero.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub vertices: usize,

    /// Undirected edge written as `U:V:W`. Repeat for every edge.
    #[arg(long = "edge", value_name = "U:V:W", value_parser = parse_edge_spec)]
    pub edges: Vec<Edge>,
}

impl GraphArgs {
    /// Validates the arguments into a graph.
    ///
    /// # Errors
    /// Returns [`CliError::TooManyVertices`] when `vertices` exceeds
    /// [`MAX_VERTICES`], and [`CliError::Core`] when an edge references a
    /// missing vertex or carries a non-finite weight.
    pub fn into_graph(self) -> Result<WeightedGraph, CliError> {
        if self.vertices > MAX_VERTICES {
            return Err(CliError::TooManyVertices {
                requested: self.vertices,
                limit: MAX_VERTICES,
            });
        }
        Ok(WeightedGraph::new(self.vertices, self.edges)?)
    }
}

/// Options accepted by the `kruskal` command.
#[derive(Debug, Args, Clone)]
pub struct KruskalCommand {
    /// Graph to span.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Scan every edge even after the tree is complete.
    #[arg(long)]
    pub no_early_exit: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Options accepted by the `prim` command.
#[derive(Debug, Args, Clone)]
pub struct PrimCommand {
    /// Graph to span.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Vertex the tree grows from.
    #[arg(long, default_value_t = 0)]
    pub start: VertexIndex,

    /// Reseed from unreached vertices to span every component.
    #[arg(long)]
    pub forest: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Options accepted by the `demo` command.
#[derive(Debug, Args, Clone)]
pub struct DemoCommand {
    /// Demonstration to run.
    #[arg(value_enum)]
    pub graph: DemoGraph,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Rendering formats for [`render_summary`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One edge per line followed by the total weight and connectivity.
    #[default]
    Text,
    /// The strategy name and full result as a JSON document.
    Json,
}

/// Errors raised while parsing a `U:V:W` edge argument.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum EdgeSpecError {
    /// The argument did not have exactly three `:`-separated parts.
    #[error("expected `U:V:W`, got `{spec}`")]
    Shape {
        /// Raw argument.
        spec: String,
    },
    /// An endpoint was not a non-negative integer.
    #[error("invalid vertex `{value}` in edge `{spec}`")]
    Vertex {
        /// Raw argument.
        spec: String,
        /// Offending part.
        value: String,
    },
    /// The weight was not a number.
    #[error("invalid weight `{value}` in edge `{spec}`")]
    Weight {
        /// Raw argument.
        spec: String,
        /// Offending part.
        value: String,
    },
}

/// Parses a `U:V:W` edge argument.
///
/// Weights accept anything [`f32`] parses; non-finite weights are rejected
/// later by graph validation.
///
/// # Errors
/// Returns [`EdgeSpecError`] when the argument is malformed.
///
/// # Examples
/// ```
/// use spanwise_cli::cli::parse_edge_spec;
///
/// let edge = parse_edge_spec("0:3:5.5")?;
/// assert_eq!(edge.endpoints(), (0, 3));
/// assert_eq!(edge.weight(), 5.5);
/// # Ok::<(), spanwise_cli::cli::EdgeSpecError>(())
/// ```
pub fn parse_edge_spec(spec: &str) -> Result<Edge, EdgeSpecError> {
    let mut parts = spec.split(':').map(str::trim);
    let (Some(source), Some(target), Some(weight), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(EdgeSpecError::Shape {
            spec: spec.to_owned(),
        });
    };

    let vertex = |value: &str| {
        value.parse::<VertexIndex>().map_err(|_| EdgeSpecError::Vertex {
            spec: spec.to_owned(),
            value: value.to_owned(),
        })
    };
    let source = vertex(source)?;
    let target = vertex(target)?;
    let weight = weight.parse::<f32>().map_err(|_| EdgeSpecError::Weight {
        spec: spec.to_owned(),
        value: weight.to_owned(),
    })?;
    Ok(Edge::new(source, target, weight))
}

/// Errors surfaced while executing CLI commands.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph validation or spanning tree construction failed.
    #[error(transparent)]
    Core(#[from] GraphError),
    /// `--vertices` asked for more vertices than the CLI accepts.
    #[error("{requested} vertices requested, at most {limit} are supported")]
    TooManyVertices {
        /// Requested vertex count.
        requested: usize,
        /// Largest accepted vertex count.
        limit: usize,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the strategy that ran.
    pub strategy: String,
    /// Requested rendering format.
    pub format: OutputFormat,
    /// Spanning tree or forest produced by the strategy.
    pub result: MstResult,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    strategy: &'a str,
    result: &'a MstResult,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph is invalid or the strategy rejects
/// it.
///
/// # Examples
/// ```
/// use spanwise_cli::cli::{Cli, Command, DemoCommand, DemoGraph, OutputFormat, run_cli};
///
/// let cli = Cli {
///     command: Command::Demo(DemoCommand {
///         graph: DemoGraph::Prim,
///         format: OutputFormat::Text,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.result.total_weight(), 16.0);
/// # Ok::<(), spanwise_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Kruskal(command) => {
            span.record("command", field::display("kruskal"));
            run_kruskal(command)
        }
        Command::Prim(command) => {
            span.record("command", field::display("prim"));
            run_prim(command)
        }
        Command::Demo(command) => {
            span.record("command", field::display("demo"));
            run_demo(command)
        }
    }
}

pub(super) fn run_kruskal(command: KruskalCommand) -> Result<ExecutionSummary, CliError> {
    let graph = command.graph.into_graph()?;
    let builder = KruskalBuilder::new().with_early_exit(!command.no_early_exit);
    execute(&builder, &graph, command.format)
}

pub(super) fn run_prim(command: PrimCommand) -> Result<ExecutionSummary, CliError> {
    let graph = command.graph.into_graph()?;
    let mode = if command.forest {
        PrimMode::Forest
    } else {
        PrimMode::SingleComponent
    };
    let builder = PrimBuilder::new().with_start(command.start).with_mode(mode);
    execute(&builder, &graph, command.format)
}

pub(super) fn run_demo(command: DemoCommand) -> Result<ExecutionSummary, CliError> {
    let graph = command.graph.graph()?;
    execute(command.graph.builder().as_ref(), &graph, command.format)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(builder, graph, format),
    fields(strategy = builder.strategy_name()),
)]
fn execute(
    builder: &dyn MstBuilder,
    graph: &WeightedGraph,
    format: OutputFormat,
) -> Result<ExecutionSummary, CliError> {
    let result = builder.build(graph)?;
    info!(
        edges = result.edges().len(),
        total_weight = result.total_weight(),
        connected = result.is_connected(),
        trees = result.tree_count(),
        "spanning tree computed"
    );
    Ok(ExecutionSummary {
        strategy: builder.strategy_name().to_owned(),
        format,
        result,
    })
}

/// Renders `summary` to `writer` in the format it requested.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{Cli, Command, DemoCommand, DemoGraph, OutputFormat, render_summary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = run_cli(Cli {
///     command: Command::Demo(DemoCommand {
///         graph: DemoGraph::Kruskal,
///         format: OutputFormat::Text,
///     }),
/// })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("total weight: 19"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => {
            writeln!(writer, "strategy: {}", summary.strategy)?;
            for edge in summary.result.edges() {
                let (source, target) = edge.endpoints();
                writeln!(writer, "{source} - {target} : {}", edge.weight())?;
            }
            writeln!(writer, "total weight: {}", summary.result.total_weight())?;
            writeln!(writer, "connected: {}", summary.result.is_connected())?;
        }
        OutputFormat::Json => {
            let document = JsonSummary {
                strategy: &summary.strategy,
                result: &summary.result,
            };
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
