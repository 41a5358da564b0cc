use std::collections::HashSet;

use crate::graph::types::{Cost, SearchResult};
use crate::graph::Graph;

/// Depth-first search for some path from `start` to `target`.
///
/// The frontier is a stack of partial paths with a lazy visited check: a
/// node may sit in several pending entries and is only marked when
/// popped. Neighbors are pushed in descending `(label, cost)` order so
/// that, under pop-from-end stack discipline, the smallest-labelled
/// neighbor is explored first. That push order is the reproducible
/// contract; the returned path is not necessarily shortest.
#[tracing::instrument(skip(graph), fields(start = %start, target = %target))]
pub fn dfs_path(graph: &Graph, start: &str, target: &str) -> SearchResult {
    let mut visited: HashSet<String> = HashSet::new();
    let mut stack: Vec<(String, Vec<String>)> =
        vec![(start.to_string(), vec![start.to_string()])];

    while let Some((node, path)) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node.clone());

        if node == target {
            tracing::debug!(steps = path.len().saturating_sub(1), "dfs_path_found");
            return SearchResult::found(path, None);
        }

        let mut neighbors: Vec<&(String, Cost)> = graph.neighbors(&node).iter().collect();
        neighbors.sort_unstable_by(|a, b| b.cmp(a));

        for (neighbor, _) in neighbors {
            if !visited.contains(neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                stack.push((neighbor.clone(), extended));
            }
        }
    }

    tracing::debug!("dfs_frontier_exhausted");
    SearchResult::NotFound
}
