//! Grid labyrinths
//!
//! A labyrinth is a rectangular grid of non-negative values where `0` marks a
//! wall. Open cells become vertices and orthogonal moves between open cells
//! become relations.

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::matrix::MAX_VERTICES;
use crate::graph::store::GraphStore;
use crate::graph::types::{GraphOptions, NeighborView, Relation};

/// `(row, col)` coordinate of a grid cell
pub type Cell = (usize, usize);

/// Value marking an impassable cell
pub const WALL: u32 = 0;

/// Most cells a generated labyrinth may have; every cell can become a vertex
pub const MAX_CELLS: usize = MAX_VERTICES;

/// Up, down, left, right
const MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labyrinth {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl Labyrinth {
    /// Build from row vectors; rows must be non-empty and of equal length
    pub fn new(grid: Vec<Vec<u32>>) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            bail_invalid!("labyrinth", format!("{}x{}", rows, cols));
        }
        if let Some(row) = grid.iter().position(|row| row.len() != cols) {
            bail_invalid!(
                "labyrinth row",
                format!("row {} has {} cells, expected {}", row, grid[row].len(), cols)
            );
        }

        Ok(Self {
            rows,
            cols,
            cells: grid.into_iter().flatten().collect(),
        })
    }

    /// Fill a `rows x cols` grid from `value(row, col)`
    pub fn generate<F>(rows: usize, cols: usize, mut value: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> u32,
    {
        check_dimensions(rows, cols)?;
        let grid = (0..rows)
            .map(|r| (0..cols).map(|c| value(r, c)).collect())
            .collect();
        Self::new(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, (row, col): Cell) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(|value| value != WALL)
    }

    /// First cell holding `value`, scanning row-major
    pub fn find(&self, value: u32) -> Option<Cell> {
        self.cells
            .iter()
            .position(|&v| v == value)
            .map(|i| (i / self.cols, i % self.cols))
    }

    /// Row vectors, top to bottom
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.cols).map(<[u32]>::to_vec).collect()
    }

    /// Directed unweighted graph over the open cells
    pub fn to_graph(&self) -> Result<GraphStore<Cell>> {
        self.to_graph_with_view(NeighborView::List)
    }

    /// Directed unweighted graph over the open cells, reading through `view`.
    ///
    /// Vertices are the open cells in row-major order. Every move between two
    /// open cells is listed, so each adjacency appears in both directions.
    pub fn to_graph_with_view(&self, view: NeighborView) -> Result<GraphStore<Cell>> {
        let open: Vec<Cell> = (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .filter(|&cell| self.is_open(cell))
            .collect();

        let relations: Vec<Relation<Cell>> = open
            .iter()
            .flat_map(|&cell| {
                self.moves(cell)
                    .filter(|&next| self.is_open(next))
                    .map(move |next| Relation::new(cell, next))
            })
            .collect();

        tracing::debug!(
            rows = self.rows,
            cols = self.cols,
            open = open.len(),
            "converting labyrinth to graph"
        );

        GraphStore::new(
            open,
            relations,
            GraphOptions {
                directed: true,
                weighted: false,
                view,
            },
        )
    }

    /// In-bounds orthogonal neighbors of `cell`
    fn moves(&self, (row, col): Cell) -> impl Iterator<Item = Cell> + '_ {
        MOVES.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.rows && c < self.cols).then_some((r, c))
        })
    }
}

/// Reject grids with no cells or more than [`MAX_CELLS`]
pub fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    match rows.checked_mul(cols) {
        Some(cells) if cells > 0 && cells <= MAX_CELLS => Ok(()),
        _ => bail_invalid!(
            "labyrinth size",
            format!("{}x{} (at most {} cells)", rows, cols, MAX_CELLS)
        ),
    }
}
