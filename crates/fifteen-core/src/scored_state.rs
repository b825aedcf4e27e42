//! Puzzle states paired with search scores.

use crate::{Configuration, PuzzleState};

/// A [`PuzzleState`] together with its path cost and heuristic estimate.
///
/// A `ScoredState` can only be built once both scores are known, so its total
/// estimate is always defined.
///
/// # Examples
///
/// ```
/// use fifteen_core::{PuzzleState, ScoredState};
///
/// let node = ScoredState::new(PuzzleState::GOAL, 3, 2);
/// assert_eq!(node.total_estimate(), 5);
///
/// let other = ScoredState::new(PuzzleState::GOAL, 4, 0);
/// assert!(node.same_configuration_as(&other));
/// assert!(!node.same_node_as(&other));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoredState {
    state: PuzzleState,
    path_cost: u32,
    heuristic: u32,
}

impl ScoredState {
    /// Scores a state with its path cost `g` and heuristic estimate `h`.
    #[must_use]
    pub const fn new(state: PuzzleState, path_cost: u32, heuristic: u32) -> Self {
        Self {
            state,
            path_cost,
            heuristic,
        }
    }

    /// Returns the underlying state.
    #[must_use]
    pub const fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Consumes the wrapper and returns the underlying state.
    #[must_use]
    pub const fn into_state(self) -> PuzzleState {
        self.state
    }

    /// Returns the number of moves from the initial state (`g`).
    #[must_use]
    pub const fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// Returns the estimated number of remaining moves (`h`).
    #[must_use]
    pub const fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// Returns `f = g + h`.
    #[must_use]
    pub const fn total_estimate(&self) -> u32 {
        self.path_cost.saturating_add(self.heuristic)
    }

    /// Returns the configuration key of the underlying state.
    #[must_use]
    pub fn configuration(&self) -> Configuration {
        self.state.configuration()
    }

    /// Returns `true` if this is the goal configuration.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        self.state.is_solution()
    }

    /// Returns `true` if both grids are identical, ignoring scores.
    #[must_use]
    pub fn same_configuration_as(&self, other: &Self) -> bool {
        self.state.same_configuration_as(&other.state)
    }

    /// Returns `true` if both grids are identical and both total estimates are equal.
    #[must_use]
    pub fn same_node_as(&self, other: &Self) -> bool {
        self.same_configuration_as(other) && self.total_estimate() == other.total_estimate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_same_node_requires_equal_total() {
        let a = ScoredState::new(PuzzleState::GOAL, 2, 3);
        let b = ScoredState::new(PuzzleState::GOAL, 5, 0);
        let c = ScoredState::new(PuzzleState::GOAL, 1, 1);
        assert!(a.same_node_as(&b));
        assert!(a.same_configuration_as(&c));
        assert!(!a.same_node_as(&c));
    }

    #[test]
    fn test_different_grids_are_never_the_same_node() {
        let moved = PuzzleState::GOAL.make_move(Direction::Down).unwrap();
        let a = ScoredState::new(PuzzleState::GOAL, 1, 1);
        let b = ScoredState::new(moved, 1, 1);
        assert!(!a.same_configuration_as(&b));
        assert!(!a.same_node_as(&b));
    }
}
