//! Direction filtering for constraint cells.

use floornav_core::Coord;

/// Candidate steps out of `constraint`, with the direct step into `end`
/// removed.
///
/// Candidates keep the fixed order of [`Coord::neighbors_4`] (down, right,
/// up, left). A search standing on the constraint cell therefore has to
/// leave it some other way and approach `end` from a different side. When
/// `end` is not adjacent to `constraint`, nothing matches the filter and
/// all four steps are returned.
pub fn filter_directions(constraint: Coord, end: Coord) -> Vec<Coord> {
    constraint
        .neighbors_4()
        .into_iter()
        .filter(|&step| step != end)
        .collect()
}
