use std::collections::HashMap;

use crate::error::{Result, TramError};
use crate::graph::ops::GraphOps;
use crate::graph::types::{Vertex, VertexId};

/// Directed adjacency structure over an arena of vertex slots.
///
/// Vertices are stored once in `slots`; adjacency lists hold [`VertexId`]
/// handles and keep insertion order, so `neighbours` is deterministic.
/// Slots emptied by `remove_vertex` go on `free` and are filled first.
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    slots: Vec<Option<V>>,
    index: HashMap<V, VertexId>,
    adjacency: Vec<Vec<VertexId>>,
    free: Vec<VertexId>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Build a graph from an edge list.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Allocated slots, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn id_of(&self, v: &V) -> Option<VertexId> {
        self.index.get(v).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Successor handles of `id`; empty for unknown or removed handles.
    pub fn successors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn require(&self, v: &V) -> Result<VertexId> {
        self.id_of(v)
            .ok_or_else(|| TramError::not_found("vertex", v))
    }

    /// Insert `v` if absent and return its handle.
    pub(crate) fn intern(&mut self, v: V) -> VertexId {
        if let Some(id) = self.index.get(&v) {
            return *id;
        }
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(v.clone());
                id
            }
            None => {
                self.slots.push(Some(v.clone()));
                self.adjacency.push(Vec::new());
                VertexId::new(self.slots.len() - 1)
            }
        };
        self.index.insert(v, id);
        id
    }

    /// Add `from -> to` between existing handles unless already present.
    pub(crate) fn link(&mut self, from: VertexId, to: VertexId) {
        if let Some(successors) = self.adjacency.get_mut(from.index()) {
            if !successors.contains(&to) {
                successors.push(to);
            }
        }
    }

    fn resolve(&self, ids: &[VertexId]) -> Vec<V> {
        ids.iter().filter_map(|id| self.vertex(*id).cloned()).collect()
    }
}

impl<V: Vertex> GraphOps for Graph<V> {
    type Vertex = V;

    fn add_vertex(&mut self, v: V) {
        self.intern(v);
    }

    fn add_edge(&mut self, a: V, b: V) {
        let from = self.intern(a);
        let to = self.intern(b);
        self.link(from, to);
    }

    fn remove_vertex(&mut self, v: &V) -> Result<()> {
        let id = self.require(v)?;
        self.index.remove(v);
        self.slots[id.index()] = None;
        self.adjacency[id.index()].clear();
        for successors in &mut self.adjacency {
            successors.retain(|s| *s != id);
        }
        self.free.push(id);
        Ok(())
    }

    fn remove_edge(&mut self, a: &V, b: &V) -> Result<()> {
        let from = self.require(a)?;
        let to = self.require(b)?;
        let successors = &mut self.adjacency[from.index()];
        let before = successors.len();
        successors.retain(|s| *s != to);
        if successors.len() == before {
            return Err(TramError::no_such_edge(a, b));
        }
        Ok(())
    }

    fn neighbours(&self, v: &V) -> Result<Vec<V>> {
        let id = self.require(v)?;
        Ok(self.resolve(self.successors(id)))
    }

    fn vertices(&self) -> Vec<V> {
        self.slots.iter().flatten().cloned().collect()
    }

    fn edges(&self) -> Vec<(V, V)> {
        let mut edges = Vec::new();
        for (index, successors) in self.adjacency.iter().enumerate() {
            let Some(from) = self.vertex(VertexId::new(index)) else {
                continue;
            };
            for to in self.resolve(successors) {
                edges.push((from.clone(), to));
            }
        }
        edges
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    fn contains_edge(&self, a: &V, b: &V) -> bool {
        match (self.id_of(a), self.id_of(b)) {
            (Some(from), Some(to)) => self.successors(from).contains(&to),
            _ => false,
        }
    }

    fn vertex_count(&self) -> usize {
        self.len()
    }
}
