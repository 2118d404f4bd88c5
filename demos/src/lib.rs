//! Shared demo scenario: an office floor with city-named meeting rooms.
//!
//! Demonstrates: building a [`FloorPlan`], rendering it into a grid,
//! running the constrained route search, and printing the result.

use floornav_core::{CellState, Coord, FloorPlan, Grid, Label};

/// The office floor. The walk starts at the desk in the bottom-left
/// corner and heads for the "SF" room; the constraint cell sits right in
/// front of that room's door, forcing the route to swing around it.
pub fn office_plan() -> FloorPlan {
    FloorPlan::new(5, 4)
        .with_location("NY", Coord::new(0, 1), Some(Label::Block))
        .with_location("SF", Coord::new(0, 3), Some(Label::End))
        .with_location("NJ", Coord::new(1, 1), Some(Label::Block))
        .with_location("LA", Coord::new(2, 1), Some(Label::Block))
        .with_location("SD", Coord::new(2, 2), Some(Label::Block))
        .with_location("Start", Coord::new(4, 0), Some(Label::Start))
        .with_location("Lobby", Coord::new(4, 1), Some(Label::Block))
        .with_route("Start", "SF")
        .with_constraint(Coord::new(1, 3))
}

/// Format a route as an arrow-separated list of coordinates.
pub fn format_route(route: &[Coord]) -> String {
    route
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render the grid with the route overlaid as `*` on empty cells. Labeled
/// cells keep their glyphs.
pub fn render_route(grid: &Grid, route: &[Coord]) -> String {
    let mut out = String::new();
    for (c, state) in grid {
        if c.col == 0 && c.row > 0 {
            out.push('\n');
        }
        if state == CellState::Empty && route.contains(&c) {
            out.push('*');
        } else {
            out.push(state.glyph());
        }
    }
    out
}
