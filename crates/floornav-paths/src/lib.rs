//! Route search for floor grids.
//!
//! This crate finds shortest 4-connected routes on a [`floornav_core::Grid`]:
//!
//! - **Breadth-first search** over whole partial routes ([`Pathfinder::run`])
//! - **Constraint handling** that steers a route around the destination when
//!   it stands on a designated cell ([`filter_directions`])
//!
//! Searches run through [`Pathfinder`], which owns and reuses its internal
//! caches so that repeated queries incur few allocations after warm-up. The
//! grid itself is only borrowed, so one grid can serve several pathfinders
//! at once.
//!
//! Candidate steps are always tried in a fixed order (down, right, up,
//! left), which makes results fully deterministic: equal-length routes tie
//! in favour of the earlier direction.

mod bfs;
mod dirs;
mod pathfinder;

pub use dirs::filter_directions;
pub use pathfinder::Pathfinder;
