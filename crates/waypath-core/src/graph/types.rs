use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::WaypathError;

/// Edge weight. Weights are non-negative by construction.
pub type Weight = u64;

/// Weight recorded for relations of an unweighted graph
pub const UNIT_WEIGHT: Weight = 1;

/// Tentative or final distance of a vertex; `INFINITY` until reached.
///
/// BFS stores hop counts, Dijkstra path weights and DFS discovery times.
/// Every finite value orders below `Infinite`, including `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);
    pub const INFINITY: Distance = Distance::Infinite;

    pub fn new(value: u64) -> Self {
        Distance::Finite(value)
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Distance::Infinite)
    }

    /// Finite value, `None` for infinity
    pub fn value(&self) -> Option<u64> {
        match self {
            Distance::Finite(value) => Some(*value),
            Distance::Infinite => None,
        }
    }

    /// Extend by one relation of `weight`. Infinity stays infinite; `None`
    /// when a finite total no longer fits in `u64`.
    pub fn checked_add(self, weight: Weight) -> Option<Distance> {
        match self {
            Distance::Finite(value) => value.checked_add(weight).map(Distance::Finite),
            Distance::Infinite => Some(Distance::Infinite),
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "inf"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            Some(value) => serializer.serialize_u64(value),
            None => serializer.serialize_none(),
        }
    }
}

/// A relation between two vertices, optionally weighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation<V> {
    pub from: V,
    pub to: V,
    pub weight: Option<Weight>,
}

impl<V> Relation<V> {
    pub fn new(from: V, to: V) -> Self {
        Self {
            from,
            to,
            weight: None,
        }
    }

    pub fn weighted(from: V, to: V, weight: Weight) -> Self {
        Self {
            from,
            to,
            weight: Some(weight),
        }
    }
}

impl<V> From<(V, V)> for Relation<V> {
    fn from((from, to): (V, V)) -> Self {
        Relation::new(from, to)
    }
}

impl<V> From<(V, V, Weight)> for Relation<V> {
    fn from((from, to, weight): (V, V, Weight)) -> Self {
        Relation::weighted(from, to, weight)
    }
}

/// Which representation neighbor lookups read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborView {
    /// Adjacency list, relation-insertion order
    #[default]
    List,
    /// Adjacency matrix row scan, vertex order
    Matrix,
}

impl FromStr for NeighborView {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(NeighborView::List),
            "matrix" => Ok(NeighborView::Matrix),
            other => Err(WaypathError::invalid_value("neighbor view", other)),
        }
    }
}

impl fmt::Display for NeighborView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeighborView::List => write!(f, "list"),
            NeighborView::Matrix => write!(f, "matrix"),
        }
    }
}

/// Construction flags for a [`GraphStore`](super::GraphStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    pub directed: bool,
    pub weighted: bool,
    pub view: NeighborView,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: true,
            weighted: false,
            view: NeighborView::List,
        }
    }
}

/// A neighbor reached over one relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor<'a, V> {
    pub vertex: &'a V,
    pub weight: Weight,
}
