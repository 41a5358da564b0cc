//! Edge-list parsing for spoor
//!
//! Line-oriented format, one undirected edge per line:
//!
//! ```text
//! # comment
//! A B 4
//! A C 2
//! B D       # weight omitted, the default applies
//! ```
//!
//! Fields are whitespace-separated. A missing weight falls back to the
//! caller-supplied default (1 unless overridden); fewer than two fields,
//! a non-numeric weight, or a negative or non-finite weight is a data
//! error naming the offending line.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SpoorError};
use crate::graph::{Cost, Graph};

/// One parsed edge triple, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub cost: Cost,
}

/// Parse edge-list text into ordered edge triples
pub fn parse(text: &str, default_cost: Cost) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let mut fields = line.split_whitespace();

        let Some(from) = fields.next() else { continue };
        let line_no = index + 1;
        let Some(to) = fields.next() else {
            return Err(SpoorError::InvalidEdge {
                line: line_no,
                reason: "expected FROM TO [WEIGHT]".to_string(),
            });
        };

        let cost = match fields.next() {
            None => default_cost,
            Some(raw_weight) => parse_weight(raw_weight, line_no)?,
        };

        if fields.next().is_some() {
            return Err(SpoorError::InvalidEdge {
                line: line_no,
                reason: "trailing fields after weight".to_string(),
            });
        }

        edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            cost,
        });
    }

    Ok(edges)
}

fn parse_weight(raw: &str, line: usize) -> Result<Cost> {
    let value: f64 = raw.parse().map_err(|_| SpoorError::InvalidEdge {
        line,
        reason: format!("weight is not a number: {}", raw),
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(SpoorError::InvalidEdge {
            line,
            reason: format!("weight must be finite and non-negative: {}", raw),
        });
    }

    Ok(Cost::new(value))
}

/// Read and parse an edge list from a file, or stdin when `path` is `-`
pub fn load(path: &Path, default_cost: Cost) -> Result<Vec<Edge>> {
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|err| SpoorError::EdgeListUnreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?
    };

    parse(&text, default_cost)
}

/// Build a graph from parsed edges, preserving input order
pub fn build_graph(edges: &[Edge]) -> Graph {
    let mut graph = Graph::new();
    for edge in edges {
        graph.add_edge(edge.from.clone(), edge.to.clone(), edge.cost);
    }
    graph
}
