//! Command implementations and argument parsing for the spanning CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use spanning_core::{Graph, GraphError, MinimumSpanningForest, build_mst};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeListError, parse_edge_list};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanning",
    about = "Compute minimum spanning trees with Borůvka's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a minimum spanning tree (or forest) from an edge-list file.
    Mst(MstCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Edge-list file to read, or `-` for standard input.
    pub input: PathBuf,

    /// Print only the summary lines, omitting the accepted edges.
    #[arg(long = "summary-only")]
    pub summary_only: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input was not a well-formed edge list.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path of the malformed input.
        path: PathBuf,
        /// Parser failure, including the offending line.
        #[source]
        source: EdgeListError,
    },
    /// The parsed edge list did not describe a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Outcome of the `mst` command, ready for rendering.
#[derive(Debug, Clone)]
pub struct MstSummary {
    /// Number of vertices in the input graph.
    pub vertex_count: usize,
    /// Number of edges in the input graph.
    pub edge_count: usize,
    /// The spanning forest that was built.
    pub forest: MinimumSpanningForest,
    /// Whether rendering should omit the edge rows.
    pub summary_only: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read, parsed or validated.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanning_cli::cli::{Cli, Command, MstCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 2\n1 2 3\n0 2 9\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         input: file.path().to_path_buf(),
///         summary_only: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 5.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<MstSummary, CliError> {
    match cli.command {
        Command::Mst(mst) => {
            Span::current().record("command", field::display("mst"));
            run_mst(mst)
        }
    }
}

/// Runs the `mst` command, reading standard input when the path is `-`.
pub(super) fn run_mst(command: MstCommand) -> Result<MstSummary, CliError> {
    run_mst_with_stdin(command, || io::stdin().lock())
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command, stdin),
    fields(input = field::Empty, summary_only = command.summary_only),
)]
pub(super) fn run_mst_with_stdin<R: BufRead>(
    command: MstCommand,
    stdin: impl FnOnce() -> R,
) -> Result<MstSummary, CliError> {
    let MstCommand {
        input,
        summary_only,
    } = command;
    Span::current().record("input", field::display(input.display()));

    let list = if input.as_os_str() == STDIN_PATH {
        parse_edge_list(stdin())
    } else {
        parse_edge_list(open_file(&input)?)
    }
    .map_err(|source| CliError::Parse {
        path: input.clone(),
        source,
    })?;
    let graph = Graph::new(list.vertex_count, list.edges)?;
    let forest = build_mst(&graph);

    info!(
        vertices = graph.vertex_count(),
        edges = forest.edges().len(),
        components = forest.component_count(),
        total_weight = forest.total_weight(),
        "mst command completed"
    );
    Ok(MstSummary {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        forest,
        summary_only,
    })
}

fn open_file(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Summary lines come first, followed (unless `summary_only` is set) by one
/// tab-separated `source destination weight` row per accepted edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanning_cli::cli::{MstSummary, render_summary};
/// # use spanning_core::{Edge, Graph, build_mst};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::new(2, vec![Edge::new(0, 1, 1.5)])?;
/// let summary = MstSummary {
///     vertex_count: graph.vertex_count(),
///     edge_count: graph.edge_count(),
///     forest: build_mst(&graph),
///     summary_only: false,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("0\t1\t1.5\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &MstSummary, mut writer: impl Write) -> io::Result<()> {
    let forest = &summary.forest;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    writeln!(writer, "components: {}", forest.component_count())?;
    writeln!(writer, "rounds: {}", forest.rounds())?;
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    writeln!(
        writer,
        "tree: {}",
        if forest.is_tree() { "yes" } else { "no" }
    )?;
    if summary.summary_only {
        return Ok(());
    }
    for edge in forest.edges() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            edge.source(),
            edge.destination(),
            edge.weight()
        )?;
    }
    Ok(())
}
