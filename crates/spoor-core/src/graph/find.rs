//! Query façade dispatching to the search strategies

use crate::graph::types::{SearchResult, Strategy};
use crate::graph::{algos, Graph};

/// Run a single path query with the selected strategy.
///
/// Unknown start or target nodes are not an error: the store treats them
/// as isolated and the search reports `NotFound`. Every strategy returns
/// the single-node path when `start == target`; only Dijkstra populates
/// the result's cost.
#[tracing::instrument(skip(graph), fields(strategy = %strategy, start = %start, target = %target))]
pub fn find(graph: &Graph, strategy: Strategy, start: &str, target: &str) -> SearchResult {
    match strategy {
        Strategy::Bfs => algos::bfs_path(graph, start, target),
        Strategy::Dfs => algos::dfs_path(graph, start, target),
        Strategy::Dijkstra => algos::dijkstra_path(graph, start, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Cost;

    const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::Dijkstra];

    fn diamond() -> Graph {
        Graph::from_edges([
            ("A", "B", Cost::new(1.0)),
            ("A", "C", Cost::new(4.0)),
            ("B", "D", Cost::new(2.0)),
            ("C", "D", Cost::new(1.0)),
        ])
    }

    #[test]
    fn test_find_dispatches_per_strategy() {
        let graph = diamond();

        assert_eq!(
            find(&graph, Strategy::Bfs, "A", "D"),
            algos::bfs_path(&graph, "A", "D")
        );
        assert_eq!(
            find(&graph, Strategy::Dfs, "A", "D"),
            algos::dfs_path(&graph, "A", "D")
        );
        assert_eq!(
            find(&graph, Strategy::Dijkstra, "A", "D").cost(),
            Some(Cost::new(3.0))
        );
    }

    #[test]
    fn test_find_cost_population_rules() {
        let graph = diamond();

        assert_eq!(find(&graph, Strategy::Bfs, "A", "D").cost(), None);
        assert_eq!(find(&graph, Strategy::Dfs, "A", "D").cost(), None);
        assert!(find(&graph, Strategy::Dijkstra, "A", "D").cost().is_some());
    }

    #[test]
    fn test_find_all_strategies_return_valid_paths() {
        let graph = diamond();
        for strategy in ALL {
            match find(&graph, strategy, "A", "D") {
                SearchResult::Found { path, .. } => assert!(graph.is_path(&path)),
                SearchResult::NotFound => panic!("{} found no path", strategy),
            }
        }
    }

    #[test]
    fn test_find_degenerate_query() {
        let graph = diamond();
        for strategy in ALL {
            let result = find(&graph, strategy, "B", "B");
            assert_eq!(result.path(), Some(&["B".to_string()][..]));
        }
        assert_eq!(
            find(&graph, Strategy::Dijkstra, "B", "B").cost(),
            Some(Cost::ZERO)
        );
    }

    #[test]
    fn test_find_unknown_nodes_report_not_found() {
        let graph = diamond();
        for strategy in ALL {
            assert_eq!(find(&graph, strategy, "A", "Z"), SearchResult::NotFound);
            assert_eq!(find(&graph, strategy, "Z", "D"), SearchResult::NotFound);
        }
    }

    #[test]
    fn test_find_disconnected_components_report_not_found() {
        let graph = Graph::from_edges([("A", "B", Cost::UNIT), ("X", "Y", Cost::UNIT)]);
        for strategy in ALL {
            assert_eq!(find(&graph, strategy, "A", "Y"), SearchResult::NotFound);
        }
    }
}
