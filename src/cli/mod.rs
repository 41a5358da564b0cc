//! CLI argument parsing for spoor
//!
//! Uses clap for argument parsing. Global flags: --edges,
//! --default-weight, --format, --quiet, --verbose, --log-level,
//! --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use spoor_core::format::OutputFormat;
use spoor_core::graph::Strategy;

/// Spoor - graph path-finding CLI
#[derive(Parser, Debug)]
#[command(name = "spoor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge-list file, one `FROM TO [WEIGHT]` per line (`-` for stdin)
    #[arg(long, global = true, env = "SPOOR_EDGES")]
    pub edges: Option<PathBuf>,

    /// Weight applied to edges listed without one
    #[arg(long, global = true, default_value = "1", value_parser = parse::parse_default_weight)]
    pub default_weight: f64,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse::parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two nodes
    Find {
        /// Starting node
        start: String,

        /// Target node
        target: String,

        /// Search strategy (bfs, dfs, dijkstra)
        #[arg(long, short, default_value = "dijkstra", value_parser = parse::parse_strategy)]
        strategy: Strategy,
    },

    /// Run every strategy over the same graph and compare the paths
    Compare {
        /// Starting node
        start: String,

        /// Target node
        target: String,
    },

    /// Show the graph snapshot (node and edge counts, adjacency)
    Info,
}
