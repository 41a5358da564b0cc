//! Graph algorithm implementations
//!
//! Contains concrete implementations of the search strategies:
//! - `bfs`: breadth-first search for fewest-edge paths
//! - `dfs`: depth-first search with a deterministic exploration order
//! - `dijkstra`: weighted shortest-path search

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::bfs_path;
pub use dfs::dfs_path;
pub use dijkstra::dijkstra_path;
