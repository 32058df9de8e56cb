//! Scene/grid coordinate mapping.
//!
//! Scene space is the continuous coordinate system of the loaded map image;
//! the fog grid divides it into square cells of a configurable size. The
//! [`GridMapper`] converts between the two with plain floor/ceil arithmetic
//! and holds no grid state of its own, so changing the cell size never
//! remaps fog data that was stored under the old size.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BmError, BmResult};

/// A point in scene space, the continuous coordinate system of the map
/// image (scene units are map pixels at zoom 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenePoint {
    /// Horizontal position in scene units.
    pub x: f64,
    /// Vertical position in scene units.
    pub y: f64,
}

impl ScenePoint {
    /// Create a point from its scene-space coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A cell address on the fog grid.
///
/// Column and row are signed: scene points left of or above the map origin
/// map to negative addresses rather than wrapping. Bounds are checked where
/// the grid is consulted, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// Column index, 0-based, increasing rightward.
    pub col: i32,
    /// Row index, 0-based, increasing downward.
    pub row: i32,
}

impl GridCell {
    /// Create a cell address from column and row indices.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Fog grid extent in whole cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    /// Number of columns.
    pub cols: u32,
    /// Number of rows.
    pub rows: u32,
}

impl GridDims {
    /// Create an extent from column and row counts.
    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Whether a cell address falls inside this extent.
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as u32) < self.cols
            && (cell.row as u32) < self.rows
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Converts between scene coordinates and grid cell addresses for one cell
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMapper {
    cell_size: u32,
}

impl GridMapper {
    /// Create a mapper with the given cell size in scene units.
    ///
    /// A zero cell size is rejected with [`BmError::InvalidCellSize`].
    pub fn new(cell_size: u32) -> BmResult<Self> {
        if cell_size == 0 {
            return Err(BmError::InvalidCellSize);
        }
        Ok(Self { cell_size })
    }

    /// The configured cell size in scene units.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// The cell containing a scene point: floor division on both axes, so
    /// points on a cell boundary belong to the cell below/right of it.
    ///
    /// No bounds checking. Points outside the map yield addresses outside
    /// the grid, which fog operations clamp or reject.
    pub fn cell_at(&self, point: ScenePoint) -> GridCell {
        let size = f64::from(self.cell_size);
        GridCell::new(
            (point.x / size).floor() as i32,
            (point.y / size).floor() as i32,
        )
    }

    /// The scene-space origin (top-left corner) of a cell, used by the
    /// shell to draw cell-aligned rectangles for the fog overlay and grid
    /// lines.
    pub fn cell_origin(&self, cell: GridCell) -> ScenePoint {
        let size = f64::from(self.cell_size);
        ScenePoint::new(f64::from(cell.col) * size, f64::from(cell.row) * size)
    }

    /// Grid extent covering a map of the given pixel size: the smallest
    /// whole-cell rectangle at least as large as the map on both axes.
    pub fn grid_dims(&self, map_width: u32, map_height: u32) -> GridDims {
        GridDims::new(
            map_width.div_ceil(self.cell_size),
            map_height.div_ceil(self.cell_size),
        )
    }
}
