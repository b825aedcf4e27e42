//! Tile labels.

use std::fmt::{self, Display};

use crate::Position;

/// A tile label in the range 0-15, where `0` is the blank.
///
/// # Examples
///
/// ```
/// use fifteen_core::{Position, Tile};
///
/// let tile = Tile::new(6);
/// assert_eq!(tile.label(), 6);
/// assert_eq!(tile.goal_position(), Position::new(1, 1));
///
/// // The blank belongs in the bottom-right corner.
/// assert!(Tile::BLANK.is_blank());
/// assert_eq!(Tile::BLANK.goal_position(), Position::new(3, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

impl Tile {
    /// The blank cell.
    pub const BLANK: Self = Self(0);

    /// The largest valid label.
    pub const MAX_LABEL: u8 = 15;

    /// Creates a tile from its label.
    ///
    /// # Panics
    ///
    /// Panics if `label` is greater than 15.
    #[must_use]
    pub const fn new(label: u8) -> Self {
        assert!(label <= Self::MAX_LABEL);
        Self(label)
    }

    /// Creates a tile from its label, returning `None` if it is out of range.
    #[must_use]
    pub const fn try_new(label: u8) -> Option<Self> {
        if label <= Self::MAX_LABEL {
            Some(Self(label))
        } else {
            None
        }
    }

    /// Returns the tile expected at the given row-major cell index in the goal configuration.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-15.
    #[must_use]
    pub const fn goal_for_cell(index: u8) -> Self {
        assert!(index < 16);
        if index == 15 { Self::BLANK } else { Self(index + 1) }
    }

    /// Returns the numeric label (0 for the blank).
    #[must_use]
    pub const fn label(self) -> u8 {
        self.0
    }

    /// Returns `true` if this is the blank.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// Returns the row-major cell index this tile occupies in the goal configuration.
    ///
    /// Label `L` belongs at index `L - 1`; the blank belongs at index 15.
    #[must_use]
    pub const fn goal_index(self) -> u8 {
        if self.is_blank() { 15 } else { self.0 - 1 }
    }

    /// Returns the cell this tile occupies in the goal configuration.
    #[must_use]
    pub const fn goal_position(self) -> Position {
        Position::from_index(self.goal_index())
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            f.pad("B")
        } else {
            Display::fmt(&self.0, f)
        }
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.label()
    }
}
