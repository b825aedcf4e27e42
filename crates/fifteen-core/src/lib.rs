//! Core data structures for the sliding 15-puzzle.
//!
//! This crate provides the immutable state abstraction that search algorithms
//! are built on. It performs no I/O and no searching itself.
//!
//! # Overview
//!
//! - [`Tile`]: a label 0-15, where 0 is the blank
//! - [`Position`]: a cell on the 4×4 board
//! - [`Direction`]: the four ways a tile can slide into the blank
//! - [`PuzzleState`]: one arrangement of all 16 labels, with parsing, rendering
//!   and move generation
//! - [`Configuration`]: a compact hashable key for an arrangement, used for
//!   frontier and explored-set membership
//! - [`ScoredState`]: a state paired with its path cost and heuristic estimate
//!
//! # Equality
//!
//! States expose two separately named comparisons:
//! [`same_configuration_as`](PuzzleState::same_configuration_as) compares grids
//! only, while [`same_node_as`](ScoredState::same_node_as) additionally requires
//! equal total estimates. Neither type implements `PartialEq`.
//!
//! # Examples
//!
//! ```
//! use fifteen_core::{Direction, PuzzleState};
//!
//! let state = PuzzleState::GOAL.make_move(Direction::Down)?;
//! assert!(!state.is_solution());
//! assert!(!state.same_configuration_as(&PuzzleState::GOAL));
//!
//! // Undoing the move restores the goal.
//! let back = state.make_move(Direction::Up)?;
//! assert!(back.is_solution());
//! # Ok::<(), fifteen_core::InvalidMoveError>(())
//! ```

pub mod direction;
mod error;
pub mod position;
pub mod scored_state;
pub mod state;
pub mod tile;

pub use self::{
    direction::Direction,
    error::{InvalidMoveError, ParseStateError},
    position::{CELLS, Position, SIDE},
    scored_state::ScoredState,
    state::{Configuration, PuzzleState},
    tile::Tile,
};
