//! Info command - print the graph snapshot
//!
//! This is the read-only view a rendering consumer would receive: node
//! and edge counts plus the full adjacency, nodes sorted and neighbors
//! in edge-insertion order.

use std::time::Instant;

use spoor_core::error::Result;
use spoor_core::format::OutputFormat;
use spoor_core::graph::Graph;

use crate::cli::Cli;
use crate::commands::load_graph;

/// Execute the info command
pub fn execute(cli: &Cli, started: Instant) -> Result<()> {
    let graph = load_graph(cli)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?started.elapsed(), "load_graph");
    }

    match cli.format {
        OutputFormat::Json => output_json(&graph)?,
        OutputFormat::Human => output_human(&graph),
    }

    Ok(())
}

/// Output in human-readable format
fn output_human(graph: &Graph) {
    println!("Nodes: {}", graph.node_count());
    println!("Edges: {}", graph.edge_count());
    for node in graph.nodes() {
        let entries: Vec<String> = graph
            .neighbors(node)
            .iter()
            .map(|(neighbor, cost)| format!("{} ({})", neighbor, cost))
            .collect();
        println!("{}: {}", node, entries.join(", "));
    }
}

/// Output in JSON format
fn output_json(graph: &Graph) -> Result<()> {
    let adjacency: serde_json::Map<String, serde_json::Value> = graph
        .nodes()
        .iter()
        .map(|node| {
            let entries: Vec<serde_json::Value> = graph
                .neighbors(node)
                .iter()
                .map(|(neighbor, cost)| serde_json::json!({"to": neighbor, "cost": cost}))
                .collect();
            ((*node).to_string(), serde_json::Value::Array(entries))
        })
        .collect();

    let envelope = serde_json::json!({
        "nodes": graph.node_count(),
        "edges": graph.edge_count(),
        "adjacency": adjacency,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
