use crate::{Direction, Position};

/// Errors produced when a text or label array is not a valid 15-puzzle state.
///
/// Line and column numbers are 1-based so they can be shown to users as-is.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseStateError {
    /// The input does not have exactly four rows.
    #[display("expected 4 rows, found {found}")]
    RowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not have exactly four tokens.
    #[display("line {line}: expected 4 columns, found {found}")]
    ColumnCount {
        /// Line number of the offending row.
        line: usize,
        /// Number of tokens found on that row.
        found: usize,
    },
    /// A token is neither an integer nor the blank marker.
    #[display("line {line}, column {column}: invalid token `{token}`")]
    InvalidToken {
        /// Line number of the token.
        line: usize,
        /// Column number of the token.
        column: usize,
        /// The token as written.
        token: String,
    },
    /// A token is an integer outside 0-15.
    #[display("line {line}, column {column}: value {value} is out of range 0-15")]
    OutOfRange {
        /// Line number of the token.
        line: usize,
        /// Column number of the token.
        column: usize,
        /// The value as written.
        value: String,
    },
    /// The sixteen labels are not a permutation of 0-15.
    #[display("labels are not a permutation of 0-15 (duplicated: {duplicated:?}, missing: {missing:?})")]
    NotAPermutation {
        /// Labels that occur more than once.
        duplicated: Vec<u8>,
        /// Labels that do not occur at all.
        missing: Vec<u8>,
    },
}

impl ParseStateError {
    /// Description of the accepted input format, suitable for user-facing messages.
    pub const ACCEPTED_FORMS: &str = "Admitted characters: 1-15, 0 or B for blank, \
        blankspace-separated columns, newline-separated rows.";
}

/// Error returned when a move cannot be made because no tile sits on the
/// required side of the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot slide a tile {direction} with the blank at {blank}")]
pub struct InvalidMoveError {
    /// Position of the blank when the move was attempted.
    pub blank: Position,
    /// The attempted direction.
    pub direction: Direction,
}
