use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SpoorError;

/// Accumulated or per-edge traversal cost.
///
/// Weights are non-negative and finite (the edge-list parser enforces
/// this), so `total_cmp` gives a safe total order for priority queues.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    /// Weight applied to an edge listed without one
    pub const UNIT: Cost = Cost(1.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(weight: u32) -> Self {
        Cost(f64::from(weight))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole costs print without a trailing ".0"
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Search strategy selected at the query façade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Breadth-first search: fewest edges, weights ignored
    Bfs,
    /// Depth-first search: some path, deepest-first exploration
    Dfs,
    /// Dijkstra: minimum total weight over non-negative edges
    Dijkstra,
}

impl FromStr for Strategy {
    type Err = SpoorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "dijkstra" => Ok(Strategy::Dijkstra),
            other => Err(SpoorError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// Outcome of a single path query.
///
/// An unreachable target is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchResult {
    /// A path exists; `cost` is populated only by Dijkstra
    Found {
        path: Vec<String>,
        /// Edge count of the path
        steps: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        cost: Option<Cost>,
    },
    NotFound,
}

impl SearchResult {
    /// Build a `Found` result, deriving the step count from the path
    pub fn found(path: Vec<String>, cost: Option<Cost>) -> Self {
        let steps = path.len().saturating_sub(1);
        SearchResult::Found { path, steps, cost }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    pub fn path(&self) -> Option<&[String]> {
        match self {
            SearchResult::Found { path, .. } => Some(path),
            SearchResult::NotFound => None,
        }
    }

    pub fn cost(&self) -> Option<Cost> {
        match self {
            SearchResult::Found { cost, .. } => *cost,
            SearchResult::NotFound => None,
        }
    }
}
