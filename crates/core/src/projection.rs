//! Projection module - collapsing the cube onto a 2D character frame
//!
//! Each [`Side`] fixes one axis of the cube. The projection walks the `D`
//! layers along that axis, extracts the 2D slice of the remaining two axes,
//! and squashes the slice's second axis into a single line by occlusion
//! priority: food over snake body over empty. This is a depth-collapse, not a
//! nearest-surface projection - a voxel anywhere along the collapsed axis
//! shows through.
//!
//! Frame orientation per side (row-major output):
//!
//! - `FrontZx`: row = y, column = x, z collapsed.
//! - `TopYx`:   row = z, column = x, y collapsed.
//! - `RightYz`: row = x, column = y, z collapsed.

use crate::grid::VoxelGrid;
use crate::types::{CellState, Side};

/// A projected `D`x`D` plane of cells, one per frame position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    dimension: i16,
    /// Row-major storage, indexed `row * D + col`.
    cells: Vec<CellState>,
}

impl Frame {
    fn new(dimension: i16) -> Self {
        let side = dimension.max(0) as usize;
        Self {
            dimension,
            cells: vec![CellState::Empty; side * side],
        }
    }

    /// Side length of the frame.
    pub fn dimension(&self) -> i16 {
        self.dimension
    }

    /// Get the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: i16, col: i16) -> Option<CellState> {
        let d = self.dimension;
        if row < 0 || row >= d || col < 0 || col >= d {
            return None;
        }
        Some(self.cells[(row as usize) * (d as usize) + (col as usize)])
    }

    fn set(&mut self, row: i16, col: i16, cell: CellState) {
        let d = self.dimension as usize;
        self.cells[(row as usize) * d + (col as usize)] = cell;
    }

    /// Render the frame as text: `D` rows of `D` two-character glyphs, each
    /// row terminated by a newline.
    pub fn to_text(&self) -> String {
        let d = self.dimension as usize;
        // Every cell is a 2-byte ASCII glyph, plus one newline per row.
        let mut out = String::with_capacity(d * (d * 2 + 1));
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                out.push_str(self.get(row, col).unwrap_or_default().glyph());
            }
            out.push('\n');
        }
        out
    }
}

/// Project the grid onto the 2D frame for the given side.
pub fn project(grid: &VoxelGrid, side: Side) -> Frame {
    let d = grid.dimension();
    let mut frame = Frame::new(d);

    for row in 0..d {
        for col in 0..d {
            frame.set(row, col, squash_column(grid, side, row, col));
        }
    }

    frame
}

/// Collapse one column of the slice at `row` into a single cell.
///
/// Food wins over snake body wins over empty, regardless of depth order.
fn squash_column(grid: &VoxelGrid, side: Side, row: i16, col: i16) -> CellState {
    let mut squashed = CellState::Empty;

    for depth in 0..grid.dimension() {
        match slice_cell(grid, side, row, col, depth) {
            CellState::Food => return CellState::Food,
            CellState::SnakeBody => squashed = CellState::SnakeBody,
            CellState::Empty => {}
        }
    }

    squashed
}

/// Read one voxel of the 2D slice selected by `side` at layer `row`.
#[inline]
fn slice_cell(grid: &VoxelGrid, side: Side, row: i16, col: i16, depth: i16) -> CellState {
    let (x, y, z) = match side {
        Side::FrontZx => (col, row, depth),
        Side::TopYx => (col, depth, row),
        Side::RightYz => (row, col, depth),
    };
    grid.get(x, y, z).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Voxel;

    fn grid_with(cells: &[(Voxel, CellState)]) -> VoxelGrid {
        let mut grid = VoxelGrid::new(4);
        for &(v, c) in cells {
            assert!(grid.set(v, c));
        }
        grid
    }

    #[test]
    fn front_projection_collapses_z() {
        // Two body voxels at the same (x, y) but different depths produce one
        // projected cell.
        let grid = grid_with(&[
            (Voxel::new(2, 1, 0), CellState::SnakeBody),
            (Voxel::new(2, 1, 3), CellState::SnakeBody),
        ]);

        let frame = project(&grid, Side::FrontZx);
        assert_eq!(frame.get(1, 2), Some(CellState::SnakeBody));
        assert_eq!(frame.get(2, 1), Some(CellState::Empty));
    }

    #[test]
    fn food_occludes_body_in_same_column() {
        let grid = grid_with(&[
            (Voxel::new(1, 1, 0), CellState::SnakeBody),
            (Voxel::new(1, 1, 2), CellState::Food),
        ]);

        let frame = project(&grid, Side::FrontZx);
        assert_eq!(frame.get(1, 1), Some(CellState::Food));
    }

    #[test]
    fn top_projection_maps_z_to_rows() {
        let grid = grid_with(&[(Voxel::new(3, 0, 2), CellState::Food)]);

        // TopYx: row = z, col = x.
        let frame = project(&grid, Side::TopYx);
        assert_eq!(frame.get(2, 3), Some(CellState::Food));
    }

    #[test]
    fn right_projection_maps_x_to_rows() {
        let grid = grid_with(&[(Voxel::new(1, 3, 0), CellState::SnakeBody)]);

        // RightYz: row = x, col = y.
        let frame = project(&grid, Side::RightYz);
        assert_eq!(frame.get(1, 3), Some(CellState::SnakeBody));
    }

    #[test]
    fn text_output_has_one_line_per_layer() {
        let grid = VoxelGrid::new(4);
        let frame = project(&grid, Side::FrontZx);
        assert_eq!(frame.dimension(), 4);

        let text = frame.to_text();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line, ". . . . ");
        }
    }
}
