use floornav_core::{CellState, Coord, Grid};

use crate::Pathfinder;
use crate::dirs::filter_directions;

impl Pathfinder {
    /// Find a shortest 4-connected route from `start` to `end` on `grid`.
    ///
    /// The search explores whole partial routes in breadth-first order. At
    /// each step the candidate moves are tried down, right, up, left; a cell
    /// is marked visited the moment a route reaches it, so every cell joins
    /// at most one partial route and the first route to arrive at `end` is a
    /// shortest one.
    ///
    /// When a route currently stands on `constraint`, its candidate set for
    /// that step is replaced by [`filter_directions`], which removes the
    /// direct step into `end`. A constraint adjacent to `end` therefore
    /// forces the route to approach the destination from another side; any
    /// other constraint placement filters nothing and leaves the result
    /// unchanged.
    ///
    /// Returns the full route including both endpoints. Arrival is checked
    /// before passability, so a blocked `end` is still entered. Returns
    /// `None` when either endpoint is out of bounds, when `start` is
    /// blocked, or when no route exists; a `start` equal to `end` yields
    /// the single-cell route.
    pub fn run(
        &mut self,
        grid: &Grid,
        start: Coord,
        end: Coord,
        constraint: Option<Coord>,
    ) -> Option<Vec<Coord>> {
        if !grid.contains(start) || !grid.contains(end) {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }
        if grid.at(start).is_some_and(CellState::is_blocked) {
            return None;
        }

        log::trace!("searching {start} -> {end}, constraint {constraint:?}");

        self.reset_for(grid);
        let start_idx = self.idx(start)?;
        self.visited[start_idx] = true;
        self.queue.push_back(vec![start]);

        while let Some(route) = self.queue.pop_front() {
            let position = route[route.len() - 1];

            // A route standing on the constraint swaps in the filtered
            // candidate set for this step.
            let steps = match constraint {
                Some(c) if position == c => filter_directions(c, end),
                _ => position.neighbors_4().to_vec(),
            };

            for step in steps {
                if step == end {
                    let mut found = route;
                    found.push(end);
                    log::debug!("reached {end} in {} hops", found.len() - 1);
                    return Some(found);
                }
                let Some(i) = self.idx(step) else {
                    continue;
                };
                if self.visited[i] || grid.at(step).is_some_and(CellState::is_blocked) {
                    continue;
                }
                self.visited[i] = true;
                let mut extended = route.clone();
                extended.push(step);
                self.queue.push_back(extended);
            }
        }

        log::debug!("no route from {start} to {end}");
        None
    }
}
