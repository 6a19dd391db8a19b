use crate::error::Result;
use crate::graph::types::Vertex;

/// Capability set of a directed graph without weights.
///
/// `add_vertex` and `add_edge` never fail. Every other operation fails with
/// `NotFound` when it references an unknown vertex.
pub trait GraphOps {
    type Vertex: Vertex;

    /// Add a vertex. Re-adding an existing vertex is a no-op.
    fn add_vertex(&mut self, v: Self::Vertex);

    /// Add the directed edge `a -> b`, creating missing endpoints.
    /// Re-adding an existing edge is a no-op.
    fn add_edge(&mut self, a: Self::Vertex, b: Self::Vertex);

    /// Remove `v` and every edge that has it as source or target.
    fn remove_vertex(&mut self, v: &Self::Vertex) -> Result<()>;

    /// Remove the directed edge `a -> b`.
    fn remove_edge(&mut self, a: &Self::Vertex, b: &Self::Vertex) -> Result<()>;

    /// Direct successors of `v` in insertion order.
    fn neighbours(&self, v: &Self::Vertex) -> Result<Vec<Self::Vertex>>;

    fn vertices(&self) -> Vec<Self::Vertex>;

    fn edges(&self) -> Vec<(Self::Vertex, Self::Vertex)>;

    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    fn contains_edge(&self, a: &Self::Vertex, b: &Self::Vertex) -> bool;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}

/// Weights attached to existing edges.
pub trait WeightedOps: GraphOps {
    type Weight: Copy;

    /// Weight of `a -> b`, or `None` when unset or when the edge does not exist.
    fn get_weight(&self, a: &Self::Vertex, b: &Self::Vertex) -> Option<Self::Weight>;

    /// Attach a weight to `a -> b`. Fails with `NoSuchEdge` if the edge was
    /// not created through `add_edge` first.
    fn set_weight(&mut self, a: &Self::Vertex, b: &Self::Vertex, w: Self::Weight) -> Result<()>;
}
