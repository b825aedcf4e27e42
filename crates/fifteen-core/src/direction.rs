//! Move directions.

use std::fmt::{self, Display};

/// The direction a tile slides into the blank.
///
/// A move names where the *tile* goes; the blank travels the opposite way.
/// For example, [`Direction::Left`] slides the tile to the right of the blank
/// leftwards, which moves the blank one cell to the right. A direction is
/// inapplicable when no tile sits on the required side of the blank.
///
/// | direction | tile taken from | inapplicable when the blank is in |
/// |-----------|-----------------|-----------------------------------|
/// | `Left`    | right of blank  | column 3                          |
/// | `Right`   | left of blank   | column 0                          |
/// | `Up`      | below blank     | row 3                             |
/// | `Down`    | above blank     | row 0                             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Slide a tile to the left.
    Left,
    /// Slide a tile to the right.
    Right,
    /// Slide a tile upwards.
    Up,
    /// Slide a tile downwards.
    Down,
}

impl Direction {
    /// All directions, in the order searches try them.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the direction that undoes this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use fifteen_core::Direction;
    ///
    /// for direction in Direction::ALL {
    ///     assert_eq!(direction.opposite().opposite(), direction);
    /// }
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the `(row, col)` offset from the blank to the tile that slides.
    #[must_use]
    pub const fn source_offset(self) -> (i8, i8) {
        match self {
            Self::Left => (0, 1),
            Self::Right => (0, -1),
            Self::Up => (1, 0),
            Self::Down => (-1, 0),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        f.pad(s)
    }
}
