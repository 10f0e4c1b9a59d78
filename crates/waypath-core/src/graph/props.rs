use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::path::reconstruct_path;
use crate::graph::encoding::VertexEncoding;
use crate::graph::types::Distance;

/// Visitation state of a vertex during a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Not yet discovered
    White,
    /// Discovered, still on the frontier
    Gray,
    /// Finished
    Black,
}

/// Per-vertex scratch state of one traversal run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexProps {
    pub color: Color,
    /// Hop count (BFS), path weight (Dijkstra) or discovery time (DFS)
    pub distance: Distance,
    /// Index of the predecessor vertex
    pub parent: Option<usize>,
    /// DFS finish time
    pub finish: Option<u64>,
}

impl Default for VertexProps {
    fn default() -> Self {
        Self {
            color: Color::White,
            distance: Distance::INFINITY,
            parent: None,
            finish: None,
        }
    }
}

/// Result of a traversal: one [`VertexProps`] per vertex of the graph.
///
/// Each run allocates its own table, so concurrent read-only traversals over
/// one store never share state.
#[derive(Debug, Clone)]
pub struct PropertyTable<'g, V> {
    encoding: &'g VertexEncoding<V>,
    props: Vec<VertexProps>,
}

/// Serializable view of one vertex's final properties
#[derive(Debug, Serialize)]
pub struct VertexRecord<'g, V> {
    pub vertex: &'g V,
    pub color: Color,
    pub distance: Distance,
    pub parent: Option<&'g V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish: Option<u64>,
    /// Source-to-vertex path; empty when unreached
    pub path: Vec<&'g V>,
}

impl<'g, V: Clone + Eq + Hash + Debug> PropertyTable<'g, V> {
    /// Fresh table: every vertex white at infinite distance, `source` at zero
    pub(crate) fn new(encoding: &'g VertexEncoding<V>, source: Option<usize>) -> Self {
        let mut props = vec![VertexProps::default(); encoding.len()];
        if let Some(source) = source {
            props[source].distance = Distance::ZERO;
        }
        Self { encoding, props }
    }

    pub(crate) fn at(&self, index: usize) -> &VertexProps {
        &self.props[index]
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut VertexProps {
        &mut self.props[index]
    }

    pub(crate) fn encoding(&self) -> &'g VertexEncoding<V> {
        self.encoding
    }

    pub fn get(&self, vertex: &V) -> Option<&VertexProps> {
        self.encoding.encode(vertex).map(|i| &self.props[i])
    }

    pub fn distance(&self, vertex: &V) -> Option<Distance> {
        self.get(vertex).map(|p| p.distance)
    }

    pub fn color(&self, vertex: &V) -> Option<Color> {
        self.get(vertex).map(|p| p.color)
    }

    pub fn parent(&self, vertex: &V) -> Option<&'g V> {
        self.get(vertex)
            .and_then(|p| p.parent)
            .and_then(|i| self.encoding.decode(i))
    }

    pub fn finish_time(&self, vertex: &V) -> Option<u64> {
        self.get(vertex).and_then(|p| p.finish)
    }

    /// Number of vertices with a finite distance
    pub fn reached(&self) -> usize {
        self.props
            .iter()
            .filter(|p| !p.distance.is_infinite())
            .count()
    }

    /// `(vertex, props)` in vertex order
    pub fn iter(&self) -> impl Iterator<Item = (&'g V, &VertexProps)> + '_ {
        self.encoding.vertices().iter().zip(&self.props)
    }

    /// Ordered path from the source to `target`
    pub fn path(&self, target: &V) -> Result<Vec<&'g V>> {
        reconstruct_path(self, target)
    }

    /// One serializable record per vertex, in vertex order
    pub fn records(&self) -> Vec<VertexRecord<'g, V>> {
        self.iter()
            .map(|(vertex, props)| VertexRecord {
                vertex,
                color: props.color,
                distance: props.distance,
                parent: props.parent.and_then(|i| self.encoding.decode(i)),
                finish: props.finish,
                path: self.path(vertex).unwrap_or_default(),
            })
            .collect()
    }
}
