//! Drag-to-brush stroke translation.
//!
//! A pointer drag arrives as discrete position samples. Brushing each
//! sample as-is has two problems: samples that stay inside one cell brush
//! it again for nothing, and a fast drag skips cells entirely, leaving
//! unpainted gaps across the swept path. A [`BrushStroke`] fixes both by
//! remembering the last sampled cell and yielding every distinct cell on
//! the straight line to the next sample, exactly once.

use bm_core::GridCell;

/// State of one pointer-down → drag → release painting gesture.
///
/// The shell creates one per gesture, mapping its button to the reveal
/// flag (left reveals, right hides), and feeds every drag sample through
/// [`MapSession::paint_stroke`](crate::session::MapSession::paint_stroke).
#[derive(Debug, Clone)]
pub struct BrushStroke {
    radius: u32,
    reveal: bool,
    last_cell: Option<GridCell>,
}

impl BrushStroke {
    /// Begin a stroke with the brush radius and reveal flag that hold for
    /// the whole gesture.
    pub fn new(radius: u32, reveal: bool) -> Self {
        Self {
            radius,
            reveal,
            last_cell: None,
        }
    }

    /// Brush radius for this stroke.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Whether this stroke reveals (`true`) or hides (`false`).
    pub fn reveal(&self) -> bool {
        self.reveal
    }

    /// Advance the stroke to the cell under the newest drag sample and
    /// return the cells to brush.
    ///
    /// The first sample yields its own cell; a sample in the same cell as
    /// the previous one yields nothing; a sample further away yields each
    /// cell along the straight line from the previous cell (exclusive) to
    /// the new one (inclusive).
    pub fn step(&mut self, cell: GridCell) -> Vec<GridCell> {
        let cells = match self.last_cell {
            None => vec![cell],
            Some(last) if last == cell => Vec::new(),
            Some(last) => line_between(last, cell),
        };
        self.last_cell = Some(cell);
        cells
    }
}

/// Cells on the straight line from `from` (exclusive) to `to` (inclusive).
///
/// Integer Bresenham walk; consecutive cells are always edge- or
/// corner-adjacent. Runs in `i64` so even cell addresses saturated from
/// wild scene coordinates cannot overflow.
fn line_between(from: GridCell, to: GridCell) -> Vec<GridCell> {
    let (mut x, mut y) = (i64::from(from.col), i64::from(from.row));
    let (tx, ty) = (i64::from(to.col), i64::from(to.row));
    let dx = (tx - x).abs();
    let dy = -(ty - y).abs();
    let sx = if x < tx { 1 } else { -1 };
    let sy = if y < ty { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::new();
    while x != tx || y != ty {
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
        cells.push(GridCell::new(x as i32, y as i32));
    }
    cells
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn first_sample_yields_its_own_cell() {
        let mut stroke = BrushStroke::new(2, true);
        assert_eq!(stroke.step(GridCell::new(3, 4)), vec![GridCell::new(3, 4)]);
        assert_eq!(stroke.radius(), 2);
        assert!(stroke.reveal());
    }

    #[test]
    fn repeated_sample_in_the_same_cell_yields_nothing() {
        let mut stroke = BrushStroke::new(1, true);
        stroke.step(GridCell::new(3, 4));
        assert!(stroke.step(GridCell::new(3, 4)).is_empty());
        assert!(stroke.step(GridCell::new(3, 4)).is_empty());
    }

    #[test]
    fn adjacent_sample_yields_just_the_new_cell() {
        let mut stroke = BrushStroke::new(1, false);
        stroke.step(GridCell::new(3, 4));
        assert_eq!(stroke.step(GridCell::new(4, 4)), vec![GridCell::new(4, 4)]);
        assert_eq!(stroke.step(GridCell::new(5, 5)), vec![GridCell::new(5, 5)]);
    }

    #[test]
    fn horizontal_jump_fills_every_skipped_cell() {
        let mut stroke = BrushStroke::new(1, true);
        stroke.step(GridCell::new(0, 0));
        let cells = stroke.step(GridCell::new(4, 0));
        assert_eq!(
            cells,
            vec![
                GridCell::new(1, 0),
                GridCell::new(2, 0),
                GridCell::new(3, 0),
                GridCell::new(4, 0),
            ]
        );
    }

    #[test]
    fn diagonal_jump_walks_the_diagonal() {
        let mut stroke = BrushStroke::new(1, true);
        stroke.step(GridCell::new(0, 0));
        let cells = stroke.step(GridCell::new(3, 3));
        assert_eq!(
            cells,
            vec![
                GridCell::new(1, 1),
                GridCell::new(2, 2),
                GridCell::new(3, 3),
            ]
        );
    }

    #[test]
    fn shallow_jump_stays_connected() {
        let mut stroke = BrushStroke::new(1, true);
        stroke.step(GridCell::new(0, 0));
        let cells = stroke.step(GridCell::new(2, 1));
        assert_eq!(cells, vec![GridCell::new(1, 1), GridCell::new(2, 1)]);
    }

    #[test]
    fn backwards_jump_works_too() {
        let mut stroke = BrushStroke::new(1, true);
        stroke.step(GridCell::new(5, 5));
        let cells = stroke.step(GridCell::new(2, 5));
        assert_eq!(
            cells,
            vec![
                GridCell::new(4, 5),
                GridCell::new(3, 5),
                GridCell::new(2, 5),
            ]
        );
    }

    proptest! {
        #[test]
        fn stroke_paths_are_gapless_and_duplicate_free(
            from_col in -50i32..=50,
            from_row in -50i32..=50,
            to_col in -50i32..=50,
            to_row in -50i32..=50,
        ) {
            let from = GridCell::new(from_col, from_row);
            let to = GridCell::new(to_col, to_row);
            let mut stroke = BrushStroke::new(1, true);
            stroke.step(from);
            let cells = stroke.step(to);

            if from == to {
                prop_assert!(cells.is_empty());
            } else {
                // Ends on the target, never revisits the start
                prop_assert_eq!(*cells.last().unwrap(), to);
                prop_assert!(!cells.contains(&from));
                // Every hop is to an edge- or corner-adjacent cell
                let mut prev = from;
                for cell in &cells {
                    let dc = (cell.col - prev.col).abs();
                    let dr = (cell.row - prev.row).abs();
                    prop_assert!(dc.max(dr) == 1);
                    prev = *cell;
                }
                // No cell painted twice
                let mut seen = cells.clone();
                seen.sort_by_key(|c| (c.col, c.row));
                seen.dedup();
                prop_assert_eq!(seen.len(), cells.len());
            }
        }
    }
}
