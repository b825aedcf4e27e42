//! Puzzle configurations.

use std::{
    fmt::{self, Display},
    num::IntErrorKind,
    str::FromStr,
};

use crate::{CELLS, Direction, InvalidMoveError, ParseStateError, Position, SIDE, Tile};

/// A compact, hashable key identifying a grid arrangement.
///
/// Each cell's label occupies one nibble of a `u64` (cell 0 in the lowest
/// nibble). Two states share a configuration exactly when their grids are
/// identical, regardless of any search bookkeeping attached to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Configuration(u64);

impl Configuration {
    fn from_tiles(tiles: &[Tile; CELLS]) -> Self {
        let bits = tiles
            .iter()
            .rev()
            .fold(0_u64, |acc, tile| (acc << 4) | u64::from(tile.label()));
        Self(bits)
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// One arrangement of the 16 labels on the 4×4 board.
///
/// A `PuzzleState` always holds every label 0-15 exactly once. It is immutable:
/// [`make_move`](Self::make_move) returns a new state. It carries no search
/// bookkeeping; see [`ScoredState`](crate::ScoredState) for a state paired
/// with its path cost and heuristic estimate.
///
/// `PuzzleState` deliberately does not implement `PartialEq`. Compare states
/// with [`same_configuration_as`](Self::same_configuration_as), or key
/// collections by [`configuration`](Self::configuration).
///
/// # Examples
///
/// ```
/// use fifteen_core::{Direction, PuzzleState};
///
/// let state: PuzzleState = "
/// 1 2 3 4
/// 5 6 7 8
/// 9 10 11 12
/// 13 14 B 15
/// "
/// .trim_start()
/// .parse()?;
/// assert!(!state.is_solution());
///
/// let solved = state.make_move(Direction::Left)?;
/// assert!(solved.is_solution());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleState {
    tiles: [Tile; CELLS],
    blank: Position,
}

impl PuzzleState {
    /// The solved configuration: 1-15 in row-major order, blank last.
    pub const GOAL: Self = {
        let mut tiles = [Tile::BLANK; CELLS];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CELLS {
            tiles[i] = Tile::goal_for_cell(i as u8);
            i += 1;
        }
        Self {
            tiles,
            blank: Position::new(3, 3),
        }
    };

    /// Parses a state from four lines of four whitespace-separated tokens.
    ///
    /// Each token is an integer 0-15 or `B`/`b` for the blank (`0` also denotes the
    /// blank). A trailing line break and trailing blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseStateError`] if the row or column count is wrong, a token
    /// cannot be parsed, a value is out of range, or the labels are not a
    /// permutation of 0-15.
    ///
    /// # Examples
    ///
    /// ```
    /// use fifteen_core::{ParseStateError, PuzzleState};
    ///
    /// let goal = PuzzleState::parse("1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 15 b\n")?;
    /// assert!(goal.is_solution());
    ///
    /// let err = PuzzleState::parse("1 2 3 4\n5 6 7 8\n9 10 11 12\n").unwrap_err();
    /// assert_eq!(err, ParseStateError::RowCount { found: 3 });
    /// # Ok::<(), ParseStateError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseStateError> {
        let rows = s.trim_end().lines().collect::<Vec<_>>();
        if rows.len() != usize::from(SIDE) {
            return Err(ParseStateError::RowCount { found: rows.len() });
        }

        let mut labels = [0; CELLS];
        for (row, line) in rows.into_iter().enumerate() {
            let tokens = line.split_whitespace().collect::<Vec<_>>();
            if tokens.len() != usize::from(SIDE) {
                return Err(ParseStateError::ColumnCount {
                    line: row + 1,
                    found: tokens.len(),
                });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                labels[row * usize::from(SIDE) + col] = parse_token(token, row + 1, col + 1)?;
            }
        }

        Self::from_labels(labels)
    }

    /// Builds a state from 16 labels in row-major order.
    ///
    /// Every label is checked before failing, so the error reports all
    /// duplicated and missing labels at once.
    ///
    /// # Errors
    ///
    /// Returns [`ParseStateError::OutOfRange`] for a label above 15 and
    /// [`ParseStateError::NotAPermutation`] if the labels are not a permutation of 0-15.
    pub fn from_labels(labels: [u8; CELLS]) -> Result<Self, ParseStateError> {
        let mut counts = [0_usize; CELLS];
        let mut tiles = [Tile::BLANK; CELLS];
        for (i, (&label, tile)) in labels.iter().zip(&mut tiles).enumerate() {
            *tile = Tile::try_new(label).ok_or_else(|| ParseStateError::OutOfRange {
                line: i / usize::from(SIDE) + 1,
                column: i % usize::from(SIDE) + 1,
                value: label.to_string(),
            })?;
            counts[usize::from(label)] += 1;
        }

        let labels_with = |pred: fn(usize) -> bool| {
            (0..=Tile::MAX_LABEL)
                .filter(|&label| pred(counts[usize::from(label)]))
                .collect::<Vec<_>>()
        };
        let duplicated = labels_with(|count| count > 1);
        let missing = labels_with(|count| count == 0);
        if !duplicated.is_empty() || !missing.is_empty() {
            return Err(ParseStateError::NotAPermutation {
                duplicated,
                missing,
            });
        }

        let blank = Position::ALL
            .into_iter()
            .find(|pos| tiles[pos.index()].is_blank())
            .unwrap_or(Position::new(3, 3));
        Ok(Self { tiles, blank })
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; CELLS] {
        &self.tiles
    }

    /// Returns the tile at a position.
    #[must_use]
    pub const fn tile_at(&self, pos: Position) -> Tile {
        self.tiles[pos.index()]
    }

    /// Returns the position of the blank.
    #[must_use]
    pub const fn blank_position(&self) -> Position {
        self.blank
    }

    /// Returns the key identifying this state's grid arrangement.
    #[must_use]
    pub fn configuration(&self) -> Configuration {
        Configuration::from_tiles(&self.tiles)
    }

    /// Returns `true` if this is the goal configuration.
    ///
    /// Cell `k` (1-indexed, row-major) must hold label `k` for `k = 1..=15`, and
    /// the last cell must hold the blank.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        self.same_configuration_as(&Self::GOAL)
    }

    /// Returns `true` if both states have identical grids.
    #[must_use]
    pub fn same_configuration_as(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }

    /// Slides the tile on the `direction` side of the blank into it.
    ///
    /// See [`Direction`] for which neighbor each direction takes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError`] if there is no tile on that side of the blank.
    pub fn make_move(&self, direction: Direction) -> Result<Self, InvalidMoveError> {
        let (d_row, d_col) = direction.source_offset();
        let source = self.blank.offset(d_row, d_col).ok_or(InvalidMoveError {
            blank: self.blank,
            direction,
        })?;

        let mut tiles = self.tiles;
        tiles.swap(self.blank.index(), source.index());
        Ok(Self {
            tiles,
            blank: source,
        })
    }

    /// Returns every state reachable in one move, with the direction that reaches it.
    ///
    /// Directions are tried in [`Direction::ALL`] order; inapplicable ones are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use fifteen_core::PuzzleState;
    ///
    /// // The blank is in a corner, so only two moves apply.
    /// assert_eq!(PuzzleState::GOAL.successors().count(), 2);
    /// ```
    pub fn successors(&self) -> impl Iterator<Item = (Direction, Self)> + use<> {
        let state = *self;
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| Some((direction, state.make_move(direction).ok()?)))
    }
}

fn parse_token(token: &str, line: usize, column: usize) -> Result<u8, ParseStateError> {
    if token.eq_ignore_ascii_case("b") {
        return Ok(Tile::BLANK.label());
    }
    let out_of_range = || ParseStateError::OutOfRange {
        line,
        column,
        value: token.to_owned(),
    };
    let value = token.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => ParseStateError::InvalidToken {
            line,
            column,
            token: token.to_owned(),
        },
    })?;
    u8::try_from(value)
        .ok()
        .filter(|&label| label <= Tile::MAX_LABEL)
        .ok_or_else(out_of_range)
}

impl FromStr for PuzzleState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::GOAL
    }
}

impl Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(usize::from(SIDE)) {
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
