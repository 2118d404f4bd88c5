use std::collections::VecDeque;

use floornav_core::{Coord, Grid};

/// Coordinator for route searches on a floor grid.
///
/// `Pathfinder` owns the per-search state (the visited arena and the queue
/// of partial routes) so that repeated queries reuse their allocations. It
/// borrows the grid immutably for the duration of a run; to search one grid
/// from several threads, give each thread its own `Pathfinder`.
#[derive(Debug, Default)]
pub struct Pathfinder {
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    // visited flags, one per cell of the last-seen grid
    pub(crate) visited: Vec<bool>,
    // FIFO of partial routes, each a route from the start to its last cell
    pub(crate) queue: VecDeque<Vec<Coord>>,
}

impl Pathfinder {
    /// Create a pathfinder with empty caches. They are sized to fit the
    /// grid on each [`run`](Self::run).
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the caches for a search over `grid`, keeping capacity.
    pub(crate) fn reset_for(&mut self, grid: &Grid) {
        self.rows = grid.rows();
        self.cols = grid.cols();
        self.visited.clear();
        self.visited.resize((self.rows * self.cols) as usize, false);
        self.queue.clear();
    }

    /// Convert a `Coord` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols {
            Some((c.row * self.cols + c.col) as usize)
        } else {
            None
        }
    }
}
