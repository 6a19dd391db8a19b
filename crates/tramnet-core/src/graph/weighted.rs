use std::collections::HashMap;

use crate::error::{Result, TramError};
use crate::graph::adjacency::Graph;
use crate::graph::ops::{GraphOps, WeightedOps};
use crate::graph::types::{Vertex, VertexId};

/// A [`Graph`] plus a weight per existing edge.
///
/// Weights are keyed by vertex handles and can only be attached to edges
/// that already exist, so there are never orphaned weights.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V: Vertex, W: Copy> {
    graph: Graph<V>,
    weights: HashMap<(VertexId, VertexId), W>,
}

impl<V: Vertex, W: Copy> Default for WeightedGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, W: Copy> WeightedGraph<V, W> {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            weights: HashMap::new(),
        }
    }

    /// Build a graph from `(from, to, weight)` triples.
    pub fn from_weighted_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (a, b, w) in edges {
            let from = graph.graph.intern(a);
            let to = graph.graph.intern(b);
            graph.graph.link(from, to);
            graph.weights.insert((from, to), w);
        }
        graph
    }

    /// The unweighted adjacency structure underneath.
    pub fn graph(&self) -> &Graph<V> {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Number of edges carrying a weight.
    pub fn weighted_edge_count(&self) -> usize {
        self.weights.len()
    }

    fn edge_key(&self, a: &V, b: &V) -> Option<(VertexId, VertexId)> {
        let from = self.graph.id_of(a)?;
        let to = self.graph.id_of(b)?;
        self.graph
            .successors(from)
            .contains(&to)
            .then_some((from, to))
    }
}

impl<V: Vertex, W: Copy> GraphOps for WeightedGraph<V, W> {
    type Vertex = V;

    fn add_vertex(&mut self, v: V) {
        self.graph.add_vertex(v);
    }

    fn add_edge(&mut self, a: V, b: V) {
        self.graph.add_edge(a, b);
    }

    fn remove_vertex(&mut self, v: &V) -> Result<()> {
        if let Some(id) = self.graph.id_of(v) {
            self.weights.retain(|(from, to), _| *from != id && *to != id);
        }
        self.graph.remove_vertex(v)
    }

    fn remove_edge(&mut self, a: &V, b: &V) -> Result<()> {
        let key = self.edge_key(a, b);
        self.graph.remove_edge(a, b)?;
        if let Some(key) = key {
            self.weights.remove(&key);
        }
        Ok(())
    }

    fn neighbours(&self, v: &V) -> Result<Vec<V>> {
        self.graph.neighbours(v)
    }

    fn vertices(&self) -> Vec<V> {
        self.graph.vertices()
    }

    fn edges(&self) -> Vec<(V, V)> {
        self.graph.edges()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.graph.contains_vertex(v)
    }

    fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.graph.contains_edge(a, b)
    }

    fn vertex_count(&self) -> usize {
        self.graph.len()
    }
}

impl<V: Vertex, W: Copy> WeightedOps for WeightedGraph<V, W> {
    type Weight = W;

    fn get_weight(&self, a: &V, b: &V) -> Option<W> {
        let key = self.edge_key(a, b)?;
        self.weights.get(&key).copied()
    }

    fn set_weight(&mut self, a: &V, b: &V, w: W) -> Result<()> {
        let key = self
            .edge_key(a, b)
            .ok_or_else(|| TramError::no_such_edge(a, b))?;
        self.weights.insert(key, w);
        Ok(())
    }
}
