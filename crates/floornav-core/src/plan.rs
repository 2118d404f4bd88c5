//! Floor plans: named locations that build a [`Grid`].
//!
//! A [`FloorPlan`] is the static description of a floor: its dimensions, a
//! set of named locations with optional cell labels, the names of the start
//! and destination locations, and an optional constraint coordinate that
//! searches treat specially but the grid never renders.

use std::collections::BTreeMap;
use std::fmt;

use crate::cell::CellState;
use crate::geom::Coord;
use crate::grid::Grid;

/// The cell label a named location may carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// Marks the starting cell.
    Start,
    /// Marks the destination cell.
    End,
    /// Marks an impassable cell.
    Block,
}

impl From<Label> for CellState {
    fn from(label: Label) -> Self {
        match label {
            Label::Start => CellState::Start,
            Label::End => CellState::End,
            Label::Block => CellState::Blocked,
        }
    }
}

/// A named location on a floor plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Grid coordinate of the location.
    pub at: Coord,
    /// Label rendered into the grid; `None` leaves the cell `Empty`.
    pub label: Option<Label>,
}

/// A floor description that can be rendered into a [`Grid`].
///
/// Locations are kept in a name-ordered map, so building the grid is
/// deterministic even when two names share a coordinate (the
/// lexicographically last name wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorPlan {
    /// Grid row count.
    pub rows: i32,
    /// Grid column count.
    pub cols: i32,
    /// Named locations, applied to the grid in name order.
    pub locations: BTreeMap<String, Location>,
    /// Name of the starting location.
    pub start: String,
    /// Name of the destination location.
    pub end: String,
    /// Constraint coordinate, if any. Never rendered into the grid.
    pub constraint: Option<Coord>,
}

impl FloorPlan {
    /// Create an empty plan of the given dimensions.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Add a named location (builder).
    pub fn with_location(
        mut self,
        name: impl Into<String>,
        at: Coord,
        label: Option<Label>,
    ) -> Self {
        self.locations.insert(name.into(), Location { at, label });
        self
    }

    /// Set the start and destination location names (builder).
    pub fn with_route(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = start.into();
        self.end = end.into();
        self
    }

    /// Set the constraint coordinate (builder).
    pub fn with_constraint(mut self, at: Coord) -> Self {
        self.constraint = Some(at);
        self
    }

    /// Resolve a location name to its coordinate.
    pub fn coord_of(&self, name: &str) -> Result<Coord, PlanError> {
        self.locations
            .get(name)
            .map(|loc| loc.at)
            .ok_or_else(|| PlanError::UnknownLocation(name.to_string()))
    }

    /// Coordinate of the start location.
    pub fn start_coord(&self) -> Result<Coord, PlanError> {
        self.coord_of(&self.start)
    }

    /// Coordinate of the destination location.
    pub fn end_coord(&self) -> Result<Coord, PlanError> {
        self.coord_of(&self.end)
    }

    /// Render the plan into a fresh grid.
    ///
    /// Labeled locations set their cell state; unlabeled ones leave the cell
    /// `Empty`. Locations outside the grid are skipped. The constraint is a
    /// search-time rule, not a cell, and does not appear in the grid.
    pub fn build_grid(&self) -> Grid {
        let mut grid = Grid::new(self.rows, self.cols);
        for loc in self.locations.values() {
            if let Some(label) = loc.label {
                grid.set(loc.at, label.into());
            }
        }
        grid
    }
}

/// Errors from resolving names against a [`FloorPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The plan has no location with the given name.
    UnknownLocation(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLocation(name) => {
                write!(f, "floor plan has no location named \u{201c}{name}\u{201d}")
            }
        }
    }
}

impl std::error::Error for PlanError {}
