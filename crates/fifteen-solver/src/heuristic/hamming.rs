use fifteen_core::{Position, PuzzleState};

use super::{BoxedHeuristic, Heuristic};

const NAME: &str = "hamming";

/// Number of cells whose label differs from the goal label for that cell.
///
/// The cell holding the blank counts when it is not the bottom-right corner,
/// and so does the bottom-right corner when it holds a tile.
///
/// # Examples
///
/// ```
/// use fifteen_core::{Direction, PuzzleState};
/// use fifteen_solver::heuristic::{Hamming, Heuristic};
///
/// let state = PuzzleState::GOAL.make_move(Direction::Right)?;
/// assert_eq!(Hamming::new().estimate(&state), 2);
/// # Ok::<(), fifteen_core::InvalidMoveError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Hamming;

impl Hamming {
    /// Creates a new `Hamming` heuristic.
    #[must_use]
    pub const fn new() -> Self {
        Hamming
    }
}

impl Heuristic for Hamming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedHeuristic {
        Box::new(*self)
    }

    fn estimate(&self, state: &PuzzleState) -> u32 {
        Position::ALL
            .into_iter()
            .map(|pos| u32::from(state.tile_at(pos).goal_position() != pos))
            .sum()
    }
}
