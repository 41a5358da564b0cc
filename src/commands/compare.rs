//! Compare command - run every strategy over the same graph
//!
//! BFS and DFS report the weighted cost of whatever path they found;
//! Dijkstra reports its own minimal cost.

use std::time::Instant;

use serde::Serialize;

use spoor_core::error::Result;
use spoor_core::format::OutputFormat;
use spoor_core::graph::{self, Cost, Graph, SearchResult, Strategy};

use crate::cli::Cli;
use crate::commands::load_graph;

const STRATEGIES: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::Dijkstra];

/// One strategy's outcome for output
#[derive(Debug, Serialize)]
struct StrategyRun {
    strategy: Strategy,
    result: SearchResult,
    /// Dijkstra's own cost, or the summed edge weights of a BFS/DFS path
    #[serde(skip_serializing_if = "Option::is_none")]
    weighted_cost: Option<Cost>,
}

/// Execute the compare command
pub fn execute(cli: &Cli, start: &str, target: &str, started: Instant) -> Result<()> {
    let graph = load_graph(cli)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?started.elapsed(), "load_graph");
    }

    let runs: Vec<StrategyRun> = STRATEGIES
        .iter()
        .map(|strategy| {
            let result = graph::find(&graph, *strategy, start, target);
            let weighted_cost = weighted_cost(&graph, &result);
            StrategyRun {
                strategy: *strategy,
                result,
                weighted_cost,
            }
        })
        .collect();

    match cli.format {
        OutputFormat::Json => output_json(start, target, &runs)?,
        OutputFormat::Human => output_human(&runs),
    }

    Ok(())
}

fn weighted_cost(graph: &Graph, result: &SearchResult) -> Option<Cost> {
    match result {
        SearchResult::Found {
            cost: Some(cost), ..
        } => Some(*cost),
        SearchResult::Found { path, .. } => graph.path_cost(path),
        SearchResult::NotFound => None,
    }
}

/// Output in human-readable format
fn output_human(runs: &[StrategyRun]) {
    for run in runs {
        println!("{}:", run.strategy);
        match &run.result {
            SearchResult::Found { path, steps, .. } => {
                println!("  Path: {}", path.join(" -> "));
                println!("  Steps: {}", steps);
                if let Some(cost) = run.weighted_cost {
                    println!("  Cost: {}", cost);
                }
            }
            SearchResult::NotFound => {
                println!("  no path found");
            }
        }
    }
}

/// Output in JSON format
fn output_json(start: &str, target: &str, runs: &[StrategyRun]) -> Result<()> {
    let envelope = serde_json::json!({
        "from": start,
        "to": target,
        "runs": runs,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
