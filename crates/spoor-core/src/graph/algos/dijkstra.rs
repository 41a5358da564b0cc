use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::types::{Cost, SearchResult};
use crate::graph::Graph;

/// Frontier entry ordered by accumulated cost, then node label, then
/// path. The label tie-break keeps equal-cost pops deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    pub cost: Cost,
    pub node: String,
    pub path: Vec<String>,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Dijkstra shortest path from `start` to `target` over non-negative
/// edge weights.
///
/// A node may appear in the frontier under several tentative costs; only
/// the first (cheapest) pop finalizes it, and later pops are discarded.
/// With non-negative weights the first time the target is popped its
/// accumulated cost is minimal. An absent entry in the best-known map
/// stands for an infinite distance.
#[tracing::instrument(skip(graph), fields(start = %start, target = %target))]
pub fn dijkstra_path(graph: &Graph, start: &str, target: &str) -> SearchResult {
    let mut best: HashMap<String, Cost> = HashMap::new();
    let mut finalized: HashSet<String> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    best.insert(start.to_string(), Cost::ZERO);
    heap.push(Reverse(HeapEntry {
        cost: Cost::ZERO,
        node: start.to_string(),
        path: vec![start.to_string()],
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        if finalized.contains(&entry.node) {
            continue;
        }
        finalized.insert(entry.node.clone());

        if entry.node == target {
            tracing::debug!(cost = entry.cost.value(), "dijkstra_path_found");
            return SearchResult::found(entry.path, Some(entry.cost));
        }

        for (neighbor, weight) in graph.neighbors(&entry.node) {
            if finalized.contains(neighbor) {
                continue;
            }
            let candidate = entry.cost + *weight;
            let improved = best
                .get(neighbor)
                .is_none_or(|current| candidate < *current);
            if improved {
                best.insert(neighbor.clone(), candidate);
                let mut extended = entry.path.clone();
                extended.push(neighbor.clone());
                heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    node: neighbor.clone(),
                    path: extended,
                }));
            }
        }
    }

    tracing::debug!("dijkstra_frontier_exhausted");
    SearchResult::NotFound
}
