//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths with a caller-supplied edge cost

pub mod dijkstra;

pub use dijkstra::{shortest_path, shortest_paths, ShortestPaths};
