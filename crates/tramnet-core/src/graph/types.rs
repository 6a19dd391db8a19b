use std::fmt;
use std::hash::Hash;
use std::ops::Add;

/// Integer handle for a vertex slot in a [`Graph`](super::Graph) arena.
///
/// Slots freed by `remove_vertex` are recycled, so a handle is only
/// meaningful while its vertex is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Bounds every vertex identifier must satisfy.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> Vertex for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Accumulated path cost. `Default` is the zero cost.
///
/// Only unsigned integers implement it: Dijkstra settles a vertex on its
/// first pop, which is wrong as soon as an edge can lower the total.
pub trait Cost: Copy + Ord + Add<Output = Self> + Default + fmt::Debug {}

macro_rules! unsigned_cost {
    ($($t:ty),*) => {
        $(impl Cost for $t {})*
    };
}

unsigned_cost!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_roundtrips_index() {
        let id = VertexId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.to_string(), "#7");
    }

    #[test]
    fn test_zero_cost_is_default() {
        fn zero<C: Cost>() -> C {
            C::default()
        }
        assert_eq!(zero::<u32>(), 0);
        assert_eq!(zero::<u64>() + 5, 5);
        assert_eq!(zero::<usize>(), 0);
    }

    #[test]
    fn test_vertex_id_keeps_wide_indices() {
        let index = usize::MAX;
        assert_eq!(VertexId::new(index).index(), index);
    }
}
