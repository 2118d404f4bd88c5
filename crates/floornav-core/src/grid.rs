//! The [`Grid`] type — a rows × cols field of [`CellState`]s.

use std::fmt;

use crate::cell::CellState;
use crate::geom::Coord;

/// A rectangular floor grid with owned storage.
///
/// Dimensions are fixed at construction. The grid holds only static cell
/// states; search bookkeeping such as visited marks lives with the searcher,
/// so one `&Grid` can back any number of concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid of the given dimensions, every cell `Empty`.
    /// Negative dimensions are clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            rows,
            cols,
            cells: vec![CellState::default(); (rows * cols) as usize],
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `c` lies inside the grid. Each axis is checked against its
    /// own dimension, so non-square grids bound rows and columns
    /// independently.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.row * self.cols + c.col) as usize)
        } else {
            None
        }
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Set the cell at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Coord, state: CellState) {
        if let Some(i) = self.index(c) {
            self.cells[i] = state;
        }
    }

    /// Count how many cells hold the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Iterate over `(Coord, CellState)` pairs in row-major order.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, pos: 0 }
    }
}

/// Renders one glyph per cell, rows separated by newlines.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                write!(f, "{}", self.cells[(r * self.cols + c) as usize].glyph())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the `(Coord, CellState)` pairs of a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    pos: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Coord, CellState);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.grid.cells.len() {
            return None;
        }
        let i = self.pos;
        self.pos += 1;
        let c = Coord::new(i as i32 / self.grid.cols, i as i32 % self.grid.cols);
        Some((c, self.grid.cells[i]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.cells.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Coord, CellState);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_empty() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.count(CellState::Empty), 12);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4);
        let c = Coord::new(2, 3);
        g.set(c, CellState::Blocked);
        assert_eq!(g.at(c), Some(CellState::Blocked));
        assert_eq!(g.at(Coord::new(0, 0)), Some(CellState::Empty));
        assert_eq!(g.at(Coord::new(10, 10)), None);
    }

    #[test]
    fn set_out_of_bounds_is_noop() {
        let mut g = Grid::new(2, 2);
        g.set(Coord::new(-1, 0), CellState::Blocked);
        g.set(Coord::new(0, 5), CellState::Blocked);
        assert_eq!(g.count(CellState::Blocked), 0);
    }

    #[test]
    fn contains_checks_each_axis() {
        // 5 rows by 4 columns: row indices may exceed the column count.
        let g = Grid::new(5, 4);
        assert!(g.contains(Coord::new(4, 0)));
        assert!(g.contains(Coord::new(4, 3)));
        assert!(!g.contains(Coord::new(5, 0)));
        assert!(!g.contains(Coord::new(0, 4)));
        assert!(!g.contains(Coord::new(-1, 0)));
        assert!(!g.contains(Coord::new(0, -1)));
    }

    #[test]
    fn degenerate_dims_clamp_to_zero() {
        let g = Grid::new(-3, 4);
        assert_eq!(g.rows(), 0);
        assert_eq!(g.at(Coord::new(0, 0)), None);
        assert_eq!(g.iter().count(), 0);
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = Grid::new(2, 3);
        g.set(Coord::new(0, 1), CellState::Blocked);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].0, Coord::new(0, 0));
        assert_eq!(items[1], (Coord::new(0, 1), CellState::Blocked));
        assert_eq!(items[3].0, Coord::new(1, 0));
        assert_eq!(items[5].0, Coord::new(1, 2));
    }

    #[test]
    fn display_renders_glyphs() {
        let mut g = Grid::new(2, 3);
        g.set(Coord::new(0, 0), CellState::Start);
        g.set(Coord::new(0, 2), CellState::Blocked);
        g.set(Coord::new(1, 2), CellState::End);
        assert_eq!(g.to_string(), "@.#\n..>");
    }
}
