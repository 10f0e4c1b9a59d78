use super::types::Weight;
use crate::error::{Result, WaypathError};

/// Largest vertex count a matrix is built for. Cells are dense, so memory
/// grows with the square of this.
pub const MAX_VERTICES: usize = 4096;

/// `n x n` adjacency matrix addressed by vertex encoding, row-major.
///
/// A cell holds the relation weight, or `None` when there is no relation.
/// Zero-weight relations therefore stay distinguishable from absent ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<Option<Weight>>,
}

impl AdjacencyMatrix {
    /// Empty `size x size` matrix; fails with `InvalidValue` above
    /// [`MAX_VERTICES`]
    pub fn new(size: usize) -> Result<Self> {
        let too_large = || {
            WaypathError::invalid_value(
                "adjacency matrix size",
                format!("{} vertices (limit {})", size, MAX_VERTICES),
            )
        };
        if size > MAX_VERTICES {
            return Err(too_large());
        }
        let len = size.checked_mul(size).ok_or_else(too_large)?;
        Ok(Self {
            size,
            cells: vec![None; len],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Weight> {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col]
        } else {
            None
        }
    }

    /// Record a relation; parallel relations keep the lightest weight
    pub(crate) fn set(&mut self, row: usize, col: usize, weight: Weight) {
        let cell = &mut self.cells[row * self.size + col];
        *cell = Some(cell.map_or(weight, |current| current.min(weight)));
    }

    /// Present cells of `row` as `(col, weight)`, in column order
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let start = row * self.size;
        let cells: &[Option<Weight>] = if row < self.size {
            &self.cells[start..start + self.size]
        } else {
            &[]
        };
        cells
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.map(|weight| (col, weight)))
    }

    /// Numeric snapshot with `0` meaning "no relation"
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.cells
            .chunks(self.size.max(1))
            .take(self.size)
            .map(|row| row.iter().map(|cell| cell.unwrap_or(0)).collect())
            .collect()
    }
}
