//! **floornav-core** — Floor-map navigation (core types).
//!
//! This crate provides the foundational types used across the *floornav*
//! workspace: grid coordinates, cell states, the floor grid itself, and the
//! named-location plan a grid is built from.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod plan;

pub use cell::CellState;
pub use geom::Coord;
pub use grid::Grid;
pub use plan::{FloorPlan, Label, Location, PlanError};
