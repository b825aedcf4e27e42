//! Board positions.

use std::fmt::{self, Display};

/// Number of rows (and columns) on the board.
pub const SIDE: u8 = 4;

/// Number of cells on the board.
pub const CELLS: usize = 16;

/// A cell on the 4×4 board, addressed by row and column (both 0-3).
///
/// Cells are numbered in row-major order: `index = row * 4 + col`.
///
/// # Examples
///
/// ```
/// use fifteen_core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.index(), 9);
/// assert_eq!(Position::from_index(9), pos);
/// assert_eq!(pos.manhattan_distance(Position::new(3, 3)), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All positions in row-major order.
    pub const ALL: [Self; CELLS] = {
        let mut all = [Self { row: 0, col: 0 }; CELLS];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CELLS {
            all[i] = Self::from_index(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-3.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < SIDE && col < SIDE);
        Self { row, col }
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-15.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 16);
        Self {
            row: index / SIDE,
            col: index % SIDE,
        }
    }

    /// Returns the row (0-3).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-3).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index (0-15).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row * SIDE + self.col) as usize
    }

    /// Returns the position shifted by the given row and column deltas, or `None`
    /// if the result falls off the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < SIDE && col < SIDE).then_some(Self { row, col })
    }

    /// Returns the city-block distance between two positions.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
