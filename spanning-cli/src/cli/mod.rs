//! Command-line interface orchestration for the spanning tools.
//!
//! The CLI offers a single `mst` command that reads a plain-text edge list
//! from a file or standard input and prints the resulting spanning forest.

mod commands;
mod edge_list;

pub use commands::{
    Cli, CliError, Command, MstCommand, MstSummary, STDIN_PATH, render_summary, run_cli,
};
pub use edge_list::{EdgeList, EdgeListError, parse_edge_list};
