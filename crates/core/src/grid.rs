//! Grid module - the cubic voxel field
//!
//! The grid is a `D`x`D`x`D` cube where each voxel is empty, snake body, or
//! food. Uses a flat vector for cache locality; the side length is a runtime
//! value, so the storage cannot be a fixed-size array.
//! Coordinates: `(x, y, z)` with each component in `0..D`.
//!
//! The grid never drives the simulation. It is rebuilt from the snake and
//! food positions for every rendered frame.

use crate::types::{CellState, Voxel};

/// The cubic voxel field backing frame rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    dimension: i16,
    /// Flat storage, indexed `(x * D + y) * D + z`.
    cells: Vec<CellState>,
}

impl VoxelGrid {
    /// Create a grid of side `dimension` with every voxel empty.
    ///
    /// Callers validate the dimension; a non-positive value here is a logic
    /// error upstream and yields an empty grid.
    pub fn new(dimension: i16) -> Self {
        let side = dimension.max(0) as usize;
        Self {
            dimension,
            cells: vec![CellState::Empty; side * side * side],
        }
    }

    /// Side length of the cube.
    pub fn dimension(&self) -> i16 {
        self.dimension
    }

    /// Calculate flat index from `(x, y, z)` coordinates.
    #[inline(always)]
    fn index(&self, x: i16, y: i16, z: i16) -> Option<usize> {
        let d = self.dimension;
        if x < 0 || x >= d || y < 0 || y >= d || z < 0 || z >= d {
            return None;
        }
        let d = d as usize;
        Some(((x as usize) * d + (y as usize)) * d + (z as usize))
    }

    /// Get the cell at `(x, y, z)`.
    /// Returns `None` if out of bounds.
    pub fn get(&self, x: i16, y: i16, z: i16) -> Option<CellState> {
        self.index(x, y, z).map(|idx| self.cells[idx])
    }

    /// Set the cell at `voxel`.
    /// Returns false if out of bounds.
    pub fn set(&mut self, voxel: Voxel, cell: CellState) -> bool {
        match self.index(voxel.x, voxel.y, voxel.z) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Reset every voxel to empty.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }
}
