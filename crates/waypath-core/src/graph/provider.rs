use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::encoding::VertexEncoding;
use crate::graph::types::Weight;

/// Trait for providing graph adjacency to the traversal algorithms
pub trait GraphProvider {
    type Vertex: Clone + Eq + Hash + Debug;

    /// Vertex <-> index bijection; traversals address vertices by index
    fn encoding(&self) -> &VertexEncoding<Self::Vertex>;

    /// Outgoing `(neighbor index, weight)` pairs of the vertex at `index`
    fn neighbor_indices(&self, index: usize) -> Vec<(usize, Weight)>;
}
