use fifteen_core::PuzzleState;

use super::{BoxedHeuristic, Heuristic};

const NAME: &str = "zero";

/// The heuristic that always estimates zero.
///
/// With this heuristic A* orders its frontier by path cost alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zero;

impl Zero {
    /// Creates a new `Zero` heuristic.
    #[must_use]
    pub const fn new() -> Self {
        Zero
    }
}

impl Heuristic for Zero {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedHeuristic {
        Box::new(*self)
    }

    fn estimate(&self, _state: &PuzzleState) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::one_move_from_goal;

    #[test]
    fn test_always_zero() {
        assert_eq!(Zero::new().estimate(&one_move_from_goal()), 0);
        assert_eq!(Zero::new().estimate(&PuzzleState::GOAL), 0);
    }
}
