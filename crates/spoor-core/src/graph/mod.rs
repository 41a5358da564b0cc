//! Graph store and path-finding operations
//!
//! Provides the adjacency store and search algorithms for navigating
//! weighted, undirected graphs:
//! - BFS for fewest-edge paths
//! - DFS for deterministic deepest-first exploration
//! - Dijkstra for weighted shortest paths
//! - a query façade dispatching on the selected strategy

pub mod algos;
pub mod find;
pub mod types;

pub use algos::{bfs_path, dfs_path, dijkstra_path};
pub use find::find;
pub use types::{Cost, SearchResult, Strategy};

use std::collections::HashMap;

/// In-memory adjacency store for a weighted, undirected graph.
///
/// Built once from an ordered edge list and read-only thereafter; every
/// query runs over a shared borrow, so `&Graph` can be handed to
/// concurrent searches without locking. Duplicate edges and self-loops
/// are recorded as-is, and each node's adjacency keeps edge-insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<(String, Cost)>>,
    edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an ordered sequence of edge triples
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, Cost)>,
        S: Into<String>,
    {
        let mut graph = Graph::new();
        for (from, to, cost) in edges {
            graph.add_edge(from, to, cost);
        }
        graph
    }

    /// Insert the symmetric adjacency entries for one undirected edge.
    ///
    /// Never fails: duplicates and self-loops are accepted.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, cost: Cost) {
        let from = from.into();
        let to = to.into();
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push((to.clone(), cost));
        self.adjacency.entry(to).or_default().push((from, cost));
        self.edges += 1;
    }

    /// Ordered `(neighbor, cost)` adjacency for a node.
    ///
    /// Unknown or isolated nodes yield an empty slice, never an error.
    pub fn neighbors(&self, node: &str) -> &[(String, Cost)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges added (duplicates and self-loops count)
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// All node labels, sorted for deterministic listing
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        nodes.sort_unstable();
        nodes
    }

    /// Whether every consecutive pair in `path` is a recorded edge.
    ///
    /// A single-node path is trivially valid; an empty one is not.
    pub fn is_path(&self, path: &[String]) -> bool {
        if path.is_empty() {
            return false;
        }
        path.windows(2).all(|pair| {
            self.neighbors(&pair[0])
                .iter()
                .any(|(neighbor, _)| neighbor == &pair[1])
        })
    }

    /// Total weight along `path`, or `None` if it is not a valid path.
    ///
    /// When duplicate edges join the same pair, the first adjacency
    /// entry (edge-insertion order) supplies the weight.
    pub fn path_cost(&self, path: &[String]) -> Option<Cost> {
        if !self.is_path(path) {
            return None;
        }
        let mut total = Cost::ZERO;
        for pair in path.windows(2) {
            let (_, cost) = self
                .neighbors(&pair[0])
                .iter()
                .find(|(neighbor, _)| neighbor == &pair[1])?;
            total = total + *cost;
        }
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(nodes: &[&str]) -> Vec<String> {
        nodes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", Cost::new(4.0));

        assert_eq!(graph.neighbors("A"), &[("B".to_string(), Cost::new(4.0))]);
        assert_eq!(graph.neighbors("B"), &[("A".to_string(), Cost::new(4.0))]);
    }

    #[test]
    fn test_neighbors_unknown_node_is_empty() {
        let graph = Graph::new();
        assert!(graph.neighbors("Z").is_empty());
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", Cost::new(1.0));
        graph.add_edge("A", "B", Cost::new(7.0));

        assert_eq!(graph.neighbors("A").len(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_is_accepted() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", Cost::new(2.0));

        // Both symmetric entries land in the same adjacency list
        assert_eq!(graph.neighbors("A").len(), 2);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_adjacency_keeps_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("A", "C", Cost::UNIT);
        graph.add_edge("A", "B", Cost::UNIT);

        let labels: Vec<&str> = graph
            .neighbors("A")
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(labels, ["C", "B"]);
    }

    #[test]
    fn test_nodes_sorted() {
        let graph = Graph::from_edges([("C", "B", Cost::UNIT), ("B", "A", Cost::UNIT)]);
        assert_eq!(graph.nodes(), ["A", "B", "C"]);
    }

    #[test]
    fn test_is_path() {
        let graph = Graph::from_edges([("A", "B", Cost::UNIT), ("B", "C", Cost::UNIT)]);

        assert!(graph.is_path(&path(&["A", "B", "C"])));
        assert!(graph.is_path(&path(&["C", "B", "A"])));
        assert!(graph.is_path(&path(&["B"])));
        assert!(!graph.is_path(&path(&["A", "C"])));
        assert!(!graph.is_path(&[]));
    }

    #[test]
    fn test_path_cost() {
        let graph = Graph::from_edges([("A", "B", Cost::new(4.0)), ("B", "C", Cost::new(2.5))]);

        assert_eq!(graph.path_cost(&path(&["A", "B", "C"])), Some(Cost::new(6.5)));
        assert_eq!(graph.path_cost(&path(&["A"])), Some(Cost::ZERO));
        assert_eq!(graph.path_cost(&path(&["A", "C"])), None);
    }

    #[test]
    fn test_path_cost_duplicate_edge_uses_first_entry() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", Cost::new(5.0));
        graph.add_edge("A", "B", Cost::new(1.0));

        assert_eq!(graph.path_cost(&path(&["A", "B"])), Some(Cost::new(5.0)));
    }

    #[test]
    fn test_shared_borrow_across_threads() {
        let graph = Graph::from_edges([
            ("A", "B", Cost::UNIT),
            ("B", "C", Cost::UNIT),
            ("C", "D", Cost::UNIT),
        ]);

        // Read-only queries may run concurrently over one store
        std::thread::scope(|scope| {
            for strategy in [Strategy::Bfs, Strategy::Dfs, Strategy::Dijkstra] {
                let graph = &graph;
                scope.spawn(move || {
                    let result = find(graph, strategy, "A", "D");
                    assert!(result.is_found());
                });
            }
        });
    }
}
