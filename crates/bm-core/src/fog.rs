//! Fog-of-war visibility mask.
//!
//! A [`FogGrid`] is a rectangular grid of per-cell visibility flags sized to
//! one loaded map. Cells start hidden; the game master reveals or re-hides
//! square regions with a brush, or reveals everything at once. The mask is
//! a flat reveal/hide grid, not a line-of-sight simulation: nothing here
//! knows about walls, light, or which token is looking.

use crate::error::{BmError, BmResult};
use crate::geometry::{GridCell, GridDims};

/// The fog-of-war mask for one loaded map.
///
/// Mutated only through [`apply_brush`](FogGrid::apply_brush) and
/// [`clear_all`](FogGrid::clear_all); the rendering shell reads the mask to
/// draw the overlay but never writes it directly. Every mutation is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FogGrid {
    dims: GridDims,
    // Row-major: cell (col, row) lives at row * cols + col.
    revealed: Vec<bool>,
}

impl FogGrid {
    /// Create a fully hidden mask with the given extent.
    ///
    /// Zero-area extents are rejected with [`BmError::InvalidDimensions`].
    pub fn new(dims: GridDims) -> BmResult<Self> {
        if dims.cols == 0 || dims.rows == 0 {
            return Err(BmError::InvalidDimensions {
                cols: dims.cols,
                rows: dims.rows,
            });
        }
        Ok(Self {
            dims,
            revealed: vec![false; dims.cell_count()],
        })
    }

    /// The mask's extent in cells.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    fn index(&self, cell: GridCell) -> Option<usize> {
        if self.dims.contains(cell) {
            Some(cell.row as usize * self.dims.cols as usize + cell.col as usize)
        } else {
            None
        }
    }

    fn cell_at_index(&self, index: usize) -> GridCell {
        let cols = self.dims.cols as usize;
        GridCell::new((index % cols) as i32, (index / cols) as i32)
    }

    /// Set every cell under the square brush footprint to `reveal`.
    ///
    /// The footprint spans `center - radius + 1 ..= center + radius - 1` on
    /// both axes: a filled square of side `2 * radius - 1`, so radius 1
    /// touches exactly the center cell. A radius of 0 is treated as 1. The
    /// footprint is clamped to the grid; centers outside it shrink the
    /// overlap, possibly to nothing, and the call never fails.
    ///
    /// Returns the cells whose visibility actually changed, in row-major
    /// order, so the shell can redraw just those overlay rectangles. An
    /// empty delta means the stroke was redundant (or fell entirely off the
    /// grid) and nothing needs repainting.
    pub fn apply_brush(&mut self, center: GridCell, radius: u32, reveal: bool) -> Vec<GridCell> {
        let radius = i64::from(radius.max(1));
        let cols = i64::from(self.dims.cols);
        let rows = i64::from(self.dims.rows);

        let col_start = (i64::from(center.col) - radius + 1).clamp(0, cols);
        let col_end = (i64::from(center.col) + radius).clamp(0, cols);
        let row_start = (i64::from(center.row) - radius + 1).clamp(0, rows);
        let row_end = (i64::from(center.row) + radius).clamp(0, rows);

        let mut changed = Vec::new();
        for row in row_start..row_end {
            for col in col_start..col_end {
                let index = (row * cols + col) as usize;
                if self.revealed[index] != reveal {
                    self.revealed[index] = reveal;
                    changed.push(GridCell::new(col as i32, row as i32));
                }
            }
        }
        changed
    }

    /// Reveal every cell. Returns how many cells flipped from hidden.
    ///
    /// There is no inverse bulk operation; re-hiding is done by reloading
    /// the map or brushing with `reveal = false`.
    pub fn clear_all(&mut self) -> usize {
        let mut flipped = 0;
        for state in &mut self.revealed {
            if !*state {
                *state = true;
                flipped += 1;
            }
        }
        flipped
    }

    /// Whether a cell is revealed.
    ///
    /// Addresses outside the grid, including negative ones, are rejected
    /// with [`BmError::OutOfBounds`].
    pub fn is_revealed(&self, cell: GridCell) -> BmResult<bool> {
        self.index(cell)
            .map(|index| self.revealed[index])
            .ok_or(BmError::OutOfBounds {
                cell,
                dims: self.dims,
            })
    }

    /// Iterate over the currently hidden cells in row-major order: the set
    /// the shell draws fog rectangles over on a full redraw.
    pub fn hidden_cells(&self) -> impl Iterator<Item = GridCell> {
        self.revealed
            .iter()
            .enumerate()
            .filter_map(|(index, &revealed)| (!revealed).then(|| self.cell_at_index(index)))
    }

    /// Number of revealed cells.
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&revealed| revealed).count()
    }

    /// Number of hidden cells.
    pub fn hidden_count(&self) -> usize {
        self.revealed.len() - self.revealed_count()
    }
}
