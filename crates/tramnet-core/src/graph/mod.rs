//! Generic directed graphs and path finding
//!
//! Provides the graph layer the transit network is built on:
//! - `GraphOps` / `WeightedOps` capability traits
//! - `Graph`: arena-backed adjacency with stable integer handles
//! - `WeightedGraph`: a `Graph` composed with per-edge weights
//! - Dijkstra shortest paths over any `GraphOps` implementor

pub mod adjacency;
pub mod algos;
pub mod ops;
pub mod types;
pub mod weighted;

pub use adjacency::Graph;
pub use algos::{shortest_path, shortest_paths, ShortestPaths};
pub use ops::{GraphOps, WeightedOps};
pub use types::{Cost, Vertex, VertexId};
pub use weighted::WeightedGraph;
