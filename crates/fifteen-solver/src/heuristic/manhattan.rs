use fifteen_core::{Position, PuzzleState};

use super::{BoxedHeuristic, Heuristic};

const NAME: &str = "manhattan";

/// Sum of city-block distances between every cell and its label's goal cell.
///
/// The blank is counted like any other tile, with its goal in the bottom-right
/// corner. Because of that, the estimate can exceed the true distance.
///
/// # Examples
///
/// ```
/// use fifteen_core::{Direction, PuzzleState};
/// use fifteen_solver::heuristic::{Heuristic, Manhattan};
///
/// let state = PuzzleState::GOAL.make_move(Direction::Down)?;
/// // Tile 12 and the blank are each one row away from home.
/// assert_eq!(Manhattan::new().estimate(&state), 2);
/// # Ok::<(), fifteen_core::InvalidMoveError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Manhattan;

impl Manhattan {
    /// Creates a new `Manhattan` heuristic.
    #[must_use]
    pub const fn new() -> Self {
        Manhattan
    }
}

impl Heuristic for Manhattan {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedHeuristic {
        Box::new(*self)
    }

    fn estimate(&self, state: &PuzzleState) -> u32 {
        Position::ALL
            .into_iter()
            .map(|pos| u32::from(pos.manhattan_distance(state.tile_at(pos).goal_position())))
            .sum()
    }
}
