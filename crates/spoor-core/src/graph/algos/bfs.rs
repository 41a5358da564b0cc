use std::collections::{HashSet, VecDeque};

use crate::graph::types::SearchResult;
use crate::graph::Graph;

/// Breadth-first search for a fewest-edges path from `start` to `target`.
///
/// The frontier holds partial paths, processed oldest-first; a node is
/// marked visited the moment it is enqueued, so the first dequeued path
/// ending at the target has the minimum edge count. Ties among
/// equal-length paths are broken by adjacency insertion order.
#[tracing::instrument(skip(graph), fields(start = %start, target = %target))]
pub fn bfs_path(graph: &Graph, start: &str, target: &str) -> SearchResult {
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(String, Vec<String>)> = VecDeque::new();

    visited.insert(start.to_string());
    queue.push_back((start.to_string(), vec![start.to_string()]));

    while let Some((node, path)) = queue.pop_front() {
        if node == target {
            tracing::debug!(steps = path.len().saturating_sub(1), "bfs_path_found");
            return SearchResult::found(path, None);
        }

        for (neighbor, _) in graph.neighbors(&node) {
            if !visited.contains(neighbor) {
                visited.insert(neighbor.clone());
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                queue.push_back((neighbor.clone(), extended));
            }
        }
    }

    tracing::debug!("bfs_frontier_exhausted");
    SearchResult::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Cost;

    fn chain() -> Graph {
        Graph::from_edges([
            ("A", "B", Cost::UNIT),
            ("B", "C", Cost::UNIT),
            ("C", "D", Cost::UNIT),
        ])
    }

    /// Every simple path between two nodes, found by exhaustive
    /// backtracking. Small graphs only.
    fn enumerate_paths(graph: &Graph, start: &str, target: &str) -> Vec<Vec<String>> {
        let mut found = Vec::new();
        let mut current = vec![start.to_string()];
        walk(graph, target, &mut current, &mut found);
        found
    }

    fn walk(graph: &Graph, target: &str, current: &mut Vec<String>, found: &mut Vec<Vec<String>>) {
        let node = current.last().cloned().unwrap();
        if node == target {
            found.push(current.clone());
            return;
        }
        for (neighbor, _) in graph.neighbors(&node) {
            if !current.contains(neighbor) {
                current.push(neighbor.clone());
                walk(graph, target, current, found);
                current.pop();
            }
        }
    }

    #[test]
    fn test_bfs_finds_chain_path() {
        let result = bfs_path(&chain(), "A", "D");
        assert_eq!(result.path(), Some(&["A", "B", "C", "D"].map(String::from)[..]));
        assert_eq!(result.cost(), None);
    }

    #[test]
    fn test_bfs_start_equals_target() {
        let result = bfs_path(&chain(), "B", "B");
        assert_eq!(result.path(), Some(&["B".to_string()][..]));
    }

    #[test]
    fn test_bfs_unknown_nodes_not_found() {
        let graph = chain();
        assert_eq!(bfs_path(&graph, "A", "Z"), SearchResult::NotFound);
        assert_eq!(bfs_path(&graph, "Z", "A"), SearchResult::NotFound);
    }

    #[test]
    fn test_bfs_disconnected_not_found() {
        let graph = Graph::from_edges([("A", "B", Cost::UNIT), ("X", "Y", Cost::UNIT)]);
        assert_eq!(bfs_path(&graph, "A", "Y"), SearchResult::NotFound);
    }

    #[test]
    fn test_bfs_prefers_fewest_edges_over_weight() {
        // Direct heavy edge vs light two-hop detour: BFS ignores weight
        let graph = Graph::from_edges([
            ("A", "B", Cost::new(100.0)),
            ("A", "M", Cost::new(1.0)),
            ("M", "B", Cost::new(1.0)),
        ]);
        let result = bfs_path(&graph, "A", "B");
        assert_eq!(result.path(), Some(&["A", "B"].map(String::from)[..]));
    }

    #[test]
    fn test_bfs_tie_break_follows_insertion_order() {
        // Two equal-length routes; the first-inserted edge wins
        let graph = Graph::from_edges([
            ("A", "C", Cost::UNIT),
            ("A", "B", Cost::UNIT),
            ("C", "D", Cost::UNIT),
            ("B", "D", Cost::UNIT),
        ]);
        let result = bfs_path(&graph, "A", "D");
        assert_eq!(result.path(), Some(&["A", "C", "D"].map(String::from)[..]));
    }

    #[test]
    fn test_bfs_minimality_against_enumeration() {
        let graph = Graph::from_edges([
            ("A", "B", Cost::new(4.0)),
            ("A", "C", Cost::new(2.0)),
            ("B", "D", Cost::new(5.0)),
            ("C", "D", Cost::new(8.0)),
            ("C", "E", Cost::new(10.0)),
            ("D", "F", Cost::new(6.0)),
            ("E", "F", Cost::new(3.0)),
            ("D", "E", Cost::new(2.0)),
        ]);

        for target in ["B", "C", "D", "E", "F"] {
            let all = enumerate_paths(&graph, "A", target);
            let shortest = all.iter().map(Vec::len).min().unwrap();
            match bfs_path(&graph, "A", target) {
                SearchResult::Found { path, steps, .. } => {
                    assert!(graph.is_path(&path));
                    assert_eq!(path.len(), shortest);
                    assert_eq!(steps, shortest - 1);
                }
                SearchResult::NotFound => panic!("{} should be reachable", target),
            }
        }
    }

    #[test]
    fn test_bfs_concrete_scenario() {
        let graph = Graph::from_edges([
            ("A", "B", Cost::new(4.0)),
            ("A", "C", Cost::new(2.0)),
            ("B", "D", Cost::new(5.0)),
            ("C", "D", Cost::new(8.0)),
            ("C", "E", Cost::new(10.0)),
            ("D", "F", Cost::new(6.0)),
            ("E", "F", Cost::new(3.0)),
            ("D", "E", Cost::new(2.0)),
        ]);

        // No two-edge route exists, so the earliest-discovered three-edge
        // route wins
        let result = bfs_path(&graph, "A", "F");
        assert_eq!(
            result.path(),
            Some(&["A", "B", "D", "F"].map(String::from)[..])
        );
    }

    #[test]
    fn test_bfs_deterministic() {
        let graph = chain();
        let first = bfs_path(&graph, "A", "D");
        let second = bfs_path(&graph, "A", "D");
        assert_eq!(first, second);
    }
}
