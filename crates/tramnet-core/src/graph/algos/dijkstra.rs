use crate::error::{Result, TramError};
use crate::graph::ops::GraphOps;
use crate::graph::types::{Cost, Vertex};
use std::cmp::{Ordering, Reverse};
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost).
///
/// `seq` is the push order; it breaks ties between equal costs so the entry
/// discovered first is popped first.
#[derive(Debug, Clone)]
pub struct HeapEntry<V, C> {
    pub vertex: V,
    pub accumulated_cost: C,
    pub seq: u64,
}

impl<V, C: Ord> PartialEq for HeapEntry<V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, C: Ord> Eq for HeapEntry<V, C> {}

impl<V, C: Ord> PartialOrd for HeapEntry<V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, C: Ord> Ord for HeapEntry<V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Minimal costs and predecessors for every vertex reachable from `source`.
///
/// Unreachable vertices are absent; there is no infinite-cost sentinel.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V: Vertex, C> {
    source: V,
    distances: HashMap<V, C>,
    predecessors: HashMap<V, V>,
}

impl<V: Vertex, C: Cost> ShortestPaths<V, C> {
    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn distance(&self, v: &V) -> Option<C> {
        self.distances.get(v).copied()
    }

    pub fn predecessor(&self, v: &V) -> Option<&V> {
        self.predecessors.get(v)
    }

    pub fn contains(&self, v: &V) -> bool {
        self.distances.contains_key(v)
    }

    /// Number of reachable vertices, the source included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &C)> + '_ {
        self.distances.iter()
    }

    /// Vertices from `source` to `target` inclusive, `None` if unreachable.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.contains(target) {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(previous) = self.predecessors.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra from `source`, evaluating `cost_fn(u, v)` lazily for every edge
/// relaxed. The graph is only read.
///
/// Fails with `NotFound` if `source` is not a vertex of `graph`.
#[tracing::instrument(skip(graph, source, cost_fn), fields(source = %source, vertices = graph.vertex_count()))]
pub fn shortest_paths<G, C, F>(
    graph: &G,
    source: &G::Vertex,
    mut cost_fn: F,
) -> Result<ShortestPaths<G::Vertex, C>>
where
    G: GraphOps,
    C: Cost,
    F: FnMut(&G::Vertex, &G::Vertex) -> C,
{
    if !graph.contains_vertex(source) {
        return Err(TramError::not_found("vertex", source));
    }

    let mut distances: HashMap<G::Vertex, C> = HashMap::new();
    let mut predecessors: HashMap<G::Vertex, G::Vertex> = HashMap::new();
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;
    let mut stale = 0usize;

    distances.insert(source.clone(), C::default());
    heap.push(Reverse(HeapEntry {
        vertex: source.clone(),
        accumulated_cost: C::default(),
        seq,
    }));

    // Main Dijkstra loop
    while let Some(Reverse(HeapEntry {
        vertex: current,
        accumulated_cost,
        ..
    })) = heap.pop()
    {
        // Superseded entry: a cheaper path was recorded after this was pushed
        if distances
            .get(&current)
            .is_some_and(|best| accumulated_cost > *best)
        {
            stale += 1;
            continue;
        }

        for next in graph.neighbours(&current)? {
            let candidate = accumulated_cost + cost_fn(&current, &next);
            let improved = match distances.entry(next.clone()) {
                Entry::Occupied(mut best) => {
                    if candidate < *best.get() {
                        best.insert(candidate);
                        true
                    } else {
                        false
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(candidate);
                    true
                }
            };

            if improved {
                predecessors.insert(next.clone(), current.clone());
                seq += 1;
                heap.push(Reverse(HeapEntry {
                    vertex: next,
                    accumulated_cost: candidate,
                    seq,
                }));
            }
        }
    }

    tracing::debug!(reached = distances.len(), pushed = seq + 1, stale, "dijkstra_done");

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    })
}

/// Cheapest path from `source` to `target` as `(cost, vertices)`.
///
/// Fails with `NotFound` for unknown endpoints and with `Unreachable` when
/// `target` is not connected to `source`.
pub fn shortest_path<G, C, F>(
    graph: &G,
    source: &G::Vertex,
    target: &G::Vertex,
    cost_fn: F,
) -> Result<(C, Vec<G::Vertex>)>
where
    G: GraphOps,
    C: Cost,
    F: FnMut(&G::Vertex, &G::Vertex) -> C,
{
    if !graph.contains_vertex(target) {
        return Err(TramError::not_found("vertex", target));
    }
    let paths = shortest_paths(graph, source, cost_fn)?;
    match (paths.distance(target), paths.path_to(target)) {
        (Some(cost), Some(path)) => Ok((cost, path)),
        _ => Err(TramError::Unreachable {
            from: source.to_string(),
            to: target.to_string(),
        }),
    }
}
