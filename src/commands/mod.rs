//! CLI commands for spoor

pub mod compare;
pub mod dispatch;
pub mod find;
pub mod info;

use spoor_core::edgelist;
use spoor_core::error::{Result, SpoorError};
use spoor_core::graph::{Cost, Graph};

use crate::cli::Cli;

/// Load the graph named by `--edges` (or `SPOOR_EDGES`)
pub fn load_graph(cli: &Cli) -> Result<Graph> {
    let path = cli.edges.as_ref().ok_or(SpoorError::EdgeListNotSpecified)?;
    let edges = edgelist::load(path, Cost::new(cli.default_weight))?;
    Ok(edgelist::build_graph(&edges))
}
