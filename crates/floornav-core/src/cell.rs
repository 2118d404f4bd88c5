//! The [`CellState`] type — what a single floor cell holds.

/// State of a single floor cell.
///
/// `Blocked` cells are impassable for the lifetime of a grid. `Start` and
/// `End` are display labels as far as the grid is concerned; a search takes
/// its endpoints as explicit coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Open floor.
    #[default]
    Empty,
    /// An impassable cell.
    Blocked,
    /// The marked starting cell.
    Start,
    /// The marked destination cell.
    End,
}

impl CellState {
    /// Whether this state is impassable.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Single-character form used when rendering a grid.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Blocked => '#',
            Self::Start => '@',
            Self::End => '>',
        }
    }
}
