//! Find command - run a single path query

use std::time::Instant;

use spoor_core::error::Result;
use spoor_core::format::OutputFormat;
use spoor_core::graph::{self, SearchResult, Strategy};

use crate::cli::Cli;
use crate::commands::load_graph;

/// Execute the find command
pub fn execute(
    cli: &Cli,
    start: &str,
    target: &str,
    strategy: Strategy,
    started: Instant,
) -> Result<()> {
    let graph = load_graph(cli)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?started.elapsed(), "load_graph");
    }

    let result = graph::find(&graph, strategy, start, target);

    match cli.format {
        OutputFormat::Json => output_json(strategy, start, target, &result)?,
        OutputFormat::Human => output_human(cli, strategy, start, target, &result),
    }

    Ok(())
}

/// Output in JSON format
fn output_json(
    strategy: Strategy,
    start: &str,
    target: &str,
    result: &SearchResult,
) -> Result<()> {
    let envelope = serde_json::json!({
        "strategy": strategy,
        "from": start,
        "to": target,
        "result": result,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

/// Output in human-readable format
fn output_human(
    cli: &Cli,
    strategy: Strategy,
    start: &str,
    target: &str,
    result: &SearchResult,
) {
    match result {
        SearchResult::Found { path, steps, cost } => {
            println!("{}", path.join(" -> "));
            println!(
                "Path length: {} hop{}",
                steps,
                if *steps == 1 { "" } else { "s" }
            );
            if let Some(cost) = cost {
                println!("Total cost: {}", cost);
            }
        }
        SearchResult::NotFound => {
            if !cli.quiet {
                println!("no path found from {} to {} ({})", start, target, strategy);
            }
        }
    }
}
