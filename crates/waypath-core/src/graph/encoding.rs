use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, WaypathError};

/// Bijection between vertices and dense indices `0..n`, in insertion order.
///
/// Built once from the final vertex list and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct VertexEncoding<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
}

impl<V: Clone + Eq + Hash + Debug> VertexEncoding<V> {
    /// Encode `vertices`; fails on the first repeated vertex
    pub fn new(vertices: Vec<V>) -> Result<Self> {
        let mut index = HashMap::with_capacity(vertices.len());
        for (i, vertex) in vertices.iter().enumerate() {
            if index.insert(vertex.clone(), i).is_some() {
                return Err(WaypathError::DuplicateVertex {
                    vertex: format!("{:?}", vertex),
                });
            }
        }
        Ok(Self { vertices, index })
    }

    pub fn encode(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub fn decode(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }
}

impl<V> VertexEncoding<V> {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in index order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }
}
