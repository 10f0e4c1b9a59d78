use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::config::HeapConfig;
use crate::error::{Result, WaypathError};
use crate::graph::algos::{bfs, dfs, dijkstra};
use crate::graph::encoding::VertexEncoding;
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::props::PropertyTable;
use crate::graph::provider::GraphProvider;
use crate::graph::types::{GraphOptions, Neighbor, NeighborView, Relation, Weight, UNIT_WEIGHT};

/// An encoded relation: `(from, to, weight)` as vertex indices
type EncodedRelation = (usize, usize, Weight);

/// Immutable vertex/relation store with two derived adjacency views.
///
/// One canonical relation set (already symmetrized for undirected graphs)
/// feeds the adjacency list, the adjacency matrix and the weight lookup, all
/// built once at construction. Nothing is mutated afterwards, so a store can
/// be shared read-only between traversals.
#[derive(Debug, Clone)]
pub struct GraphStore<V> {
    options: GraphOptions,
    encoding: VertexEncoding<V>,
    relations: Vec<EncodedRelation>,
    adjacency: Vec<Vec<(usize, Weight)>>,
    matrix: AdjacencyMatrix,
    weights: HashMap<(usize, usize), Weight>,
}

impl<V: Clone + Eq + Hash + Debug> GraphStore<V> {
    /// Build a store from unique `vertices` and `relations` between them.
    ///
    /// Fails with `DuplicateVertex`, `DanglingEdge` or `MissingWeight`
    /// before any view is built, and with `InvalidValue` when there are more
    /// vertices than the adjacency matrix allows.
    pub fn new<I, R>(vertices: I, relations: R, options: GraphOptions) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        R: IntoIterator<Item = Relation<V>>,
    {
        let encoding = VertexEncoding::new(vertices.into_iter().collect())?;
        let encoded = encode_relations(&encoding, relations, options.weighted)?;
        let relations = if options.directed {
            encoded
        } else {
            symmetrize(encoded)
        };

        let n = encoding.len();
        let mut adjacency = vec![Vec::new(); n];
        let mut matrix = AdjacencyMatrix::new(n)?;
        let mut weights: HashMap<(usize, usize), Weight> = HashMap::with_capacity(relations.len());
        for &(from, to, weight) in &relations {
            adjacency[from].push((to, weight));
            matrix.set(from, to, weight);
            weights
                .entry((from, to))
                .and_modify(|current| *current = (*current).min(weight))
                .or_insert(weight);
        }

        tracing::debug!(
            vertices = n,
            relations = relations.len(),
            directed = options.directed,
            weighted = options.weighted,
            "built graph store"
        );

        Ok(Self {
            options,
            encoding,
            relations,
            adjacency,
            matrix,
            weights,
        })
    }

    /// Same store, reading neighbors through `view`
    pub fn with_view(mut self, view: NeighborView) -> Self {
        self.options.view = view;
        self
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.encoding.contains(vertex)
    }

    pub fn encode(&self, vertex: &V) -> Option<usize> {
        self.encoding.encode(vertex)
    }

    pub fn decode(&self, index: usize) -> Option<&V> {
        self.encoding.decode(index)
    }

    /// Weight of the relation `from -> to`, the lightest one for parallel relations
    pub fn weight(&self, from: &V, to: &V) -> Option<Weight> {
        let from = self.encode(from)?;
        let to = self.encode(to)?;
        self.weights.get(&(from, to)).copied()
    }

    /// Neighbors of `vertex` through the configured view
    pub fn neighbors(&self, vertex: &V) -> Result<Vec<Neighbor<'_, V>>> {
        self.neighbors_via(vertex, self.options.view)
    }

    /// Neighbors of `vertex` through an explicit view.
    ///
    /// Both views yield the same neighbor set; the list keeps relation order
    /// (and parallel relations), the matrix yields vertex order.
    pub fn neighbors_via(&self, vertex: &V, view: NeighborView) -> Result<Vec<Neighbor<'_, V>>> {
        let index = self
            .encode(vertex)
            .ok_or_else(|| WaypathError::unknown_vertex(vertex))?;
        Ok(self
            .neighbor_indices_via(index, view)
            .into_iter()
            .map(|(i, weight)| Neighbor {
                vertex: &self.encoding.vertices()[i],
                weight,
            })
            .collect())
    }

    /// Adjacency list snapshot, one entry per vertex in vertex order
    pub fn adjacency_list(&self) -> Vec<(&V, Vec<Neighbor<'_, V>>)> {
        let vertices = self.encoding.vertices();
        vertices
            .iter()
            .zip(&self.adjacency)
            .map(|(vertex, row)| {
                let neighbors = row
                    .iter()
                    .map(|&(i, weight)| Neighbor {
                        vertex: &vertices[i],
                        weight,
                    })
                    .collect();
                (vertex, neighbors)
            })
            .collect()
    }

    /// Breadth-first search from `source`
    pub fn bfs(&self, source: &V) -> Result<PropertyTable<'_, V>> {
        bfs::bfs(self, source)
    }

    /// Whole-graph depth-first search
    pub fn dfs(&self) -> PropertyTable<'_, V> {
        dfs::dfs(self)
    }

    /// Single-source shortest paths with the default heap strategies
    pub fn dijkstra(&self, source: &V) -> Result<PropertyTable<'_, V>> {
        dijkstra::dijkstra(self, source, HeapConfig::default())
    }

    /// Single-source shortest paths with explicit heap strategies
    pub fn dijkstra_with(&self, source: &V, config: HeapConfig) -> Result<PropertyTable<'_, V>> {
        dijkstra::dijkstra(self, source, config)
    }
}

impl<V> GraphStore<V> {
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.options.weighted
    }

    pub fn view(&self) -> NeighborView {
        self.options.view
    }

    /// Vertices in encoding order
    pub fn vertices(&self) -> &[V] {
        self.encoding.vertices()
    }

    pub fn vertex_count(&self) -> usize {
        self.encoding.len()
    }

    /// Number of stored relations, counting both directions of undirected ones
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Canonical relation set as `(from, to, weight)`
    pub fn relations(&self) -> impl Iterator<Item = (&V, &V, Weight)> + '_ {
        let vertices = self.encoding.vertices();
        self.relations
            .iter()
            .map(move |&(from, to, weight)| (&vertices[from], &vertices[to], weight))
    }

    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    fn neighbor_indices_via(&self, index: usize, view: NeighborView) -> Vec<(usize, Weight)> {
        match view {
            NeighborView::List => self.adjacency.get(index).cloned().unwrap_or_default(),
            NeighborView::Matrix => self.matrix.row(index).collect(),
        }
    }
}

impl<V: Clone + Eq + Hash + Debug> GraphProvider for GraphStore<V> {
    type Vertex = V;

    fn encoding(&self) -> &VertexEncoding<V> {
        &self.encoding
    }

    fn neighbor_indices(&self, index: usize) -> Vec<(usize, Weight)> {
        self.neighbor_indices_via(index, self.options.view)
    }
}

fn encode_relations<V, R>(
    encoding: &VertexEncoding<V>,
    relations: R,
    weighted: bool,
) -> Result<Vec<EncodedRelation>>
where
    V: Clone + Eq + Hash + Debug,
    R: IntoIterator<Item = Relation<V>>,
{
    relations
        .into_iter()
        .map(|relation| {
            let (from, to) = match (encoding.encode(&relation.from), encoding.encode(&relation.to)) {
                (Some(from), Some(to)) => (from, to),
                _ => {
                    return Err(WaypathError::DanglingEdge {
                        from: format!("{:?}", relation.from),
                        to: format!("{:?}", relation.to),
                    })
                }
            };
            let weight = match (weighted, relation.weight) {
                (true, Some(weight)) => weight,
                (true, None) => {
                    return Err(WaypathError::MissingWeight {
                        from: format!("{:?}", relation.from),
                        to: format!("{:?}", relation.to),
                    })
                }
                (false, _) => UNIT_WEIGHT,
            };
            Ok((from, to, weight))
        })
        .collect()
}

/// Add the reverse of every relation once, dropping exact repeats while
/// keeping first-seen order
fn symmetrize(relations: Vec<EncodedRelation>) -> Vec<EncodedRelation> {
    let mut seen = HashSet::with_capacity(relations.len() * 2);
    let mut symmetric = Vec::with_capacity(relations.len() * 2);
    for (from, to, weight) in relations {
        for relation in [(from, to, weight), (to, from, weight)] {
            if seen.insert(relation) {
                symmetric.push(relation);
            }
        }
    }
    symmetric
}
