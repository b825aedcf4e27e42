use fifteen_core::PuzzleState;

use crate::{AStarSearch, BreadthFirstSearch, SearchError, heuristic::Heuristic};

/// The search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum Strategy {
    /// Best-first search ordered by `f = g + h`.
    #[default]
    #[display("A*")]
    AStar,
    /// Uninformed level-by-level search.
    #[display("breadth-first")]
    BreadthFirst,
}

/// Bounds on how much work a search may do.
///
/// The default is unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of states to expand before failing with
    /// [`SearchError::LimitReached`].
    pub max_expanded: Option<usize>,
}

impl SearchLimits {
    /// No limits.
    pub const UNLIMITED: Self = Self { max_expanded: None };

    /// Creates limits that stop after `max_expanded` expansions.
    #[must_use]
    pub const fn with_max_expanded(max_expanded: usize) -> Self {
        Self {
            max_expanded: Some(max_expanded),
        }
    }

    /// Fails if another expansion would exceed the limit.
    pub(crate) fn check(self, stats: &SearchStats) -> Result<(), SearchError> {
        match self.max_expanded {
            Some(max) if stats.expanded >= max => Err(SearchError::LimitReached {
                expanded: stats.expanded,
            }),
            _ => Ok(()),
        }
    }
}

/// Statistics collected during a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub(crate) expanded: usize,
    pub(crate) generated: usize,
    pub(crate) discarded: usize,
    pub(crate) replaced: usize,
    pub(crate) cheaper_explored: usize,
    pub(crate) peak_frontier: usize,
}

impl SearchStats {
    /// Returns the number of states whose successors were generated.
    #[must_use]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Returns the number of states created, including the initial state.
    #[must_use]
    pub fn generated(&self) -> usize {
        self.generated
    }

    /// Returns the number of generated states dropped as duplicates.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Returns the number of frontier entries replaced by a cheaper duplicate.
    ///
    /// Always zero for breadth-first search.
    #[must_use]
    pub fn replaced(&self) -> usize {
        self.replaced
    }

    /// Returns the number of discarded children that reached an already
    /// expanded configuration with a lower path cost than its expansion had.
    ///
    /// Such configurations are not reopened. Always zero for breadth-first
    /// search and for consistent heuristics.
    #[must_use]
    pub fn cheaper_explored(&self) -> usize {
        self.cheaper_explored
    }

    /// Returns the largest frontier size observed.
    #[must_use]
    pub fn peak_frontier(&self) -> usize {
        self.peak_frontier
    }

    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }
}

/// A goal state found by a search.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The goal state reached.
    pub state: PuzzleState,
    /// Number of moves along the path the search took.
    pub path_cost: u32,
    /// Work done by the search.
    pub stats: SearchStats,
}

/// Searches for the goal from `initial` with the given strategy.
///
/// `heuristic` is used by [`Strategy::AStar`] and ignored by
/// [`Strategy::BreadthFirst`].
///
/// # Errors
///
/// Returns [`SearchError::NoSolution`] if every reachable state is explored
/// without reaching the goal.
///
/// # Examples
///
/// ```
/// use fifteen_core::{Direction, PuzzleState};
/// use fifteen_solver::{Strategy, heuristic::Manhattan, search};
///
/// let initial = PuzzleState::GOAL
///     .make_move(Direction::Down)?
///     .make_move(Direction::Right)?;
///
/// let solution = search(&initial, Strategy::AStar, &Manhattan::new())?;
/// assert!(solution.state.is_solution());
/// assert_eq!(solution.path_cost, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn search(
    initial: &PuzzleState,
    strategy: Strategy,
    heuristic: &dyn Heuristic,
) -> Result<Solution, SearchError> {
    search_with_limits(initial, strategy, heuristic, SearchLimits::UNLIMITED)
}

/// Like [`search`], but stops once `limits` are exceeded.
///
/// # Errors
///
/// Returns [`SearchError::NoSolution`] if the frontier is exhausted, or
/// [`SearchError::LimitReached`] if the limits are hit first.
pub fn search_with_limits(
    initial: &PuzzleState,
    strategy: Strategy,
    heuristic: &dyn Heuristic,
    limits: SearchLimits,
) -> Result<Solution, SearchError> {
    match strategy {
        Strategy::AStar => AStarSearch::new(heuristic)
            .with_limits(limits)
            .search(initial),
        Strategy::BreadthFirst => BreadthFirstSearch::new().with_limits(limits).search(initial),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        heuristic::{Manhattan, Zero},
        testing::{corner_blank_state, one_move_from_goal},
    };

    #[test]
    fn test_both_strategies_solve_one_move() {
        for strategy in [Strategy::AStar, Strategy::BreadthFirst] {
            let solution = search(&one_move_from_goal(), strategy, &Manhattan::new()).unwrap();
            assert!(solution.state.is_solution(), "{strategy}");
            assert_eq!(solution.path_cost, 1, "{strategy}");
        }
    }

    #[test]
    fn test_corner_blank_terminates() {
        for strategy in [Strategy::AStar, Strategy::BreadthFirst] {
            let solution = search(&corner_blank_state(), strategy, &Manhattan::new()).unwrap();
            assert!(solution.state.is_solution(), "{strategy}");
        }
    }

    #[test]
    fn test_limit_reached() {
        let err = search_with_limits(
            &corner_blank_state(),
            Strategy::AStar,
            &Zero::new(),
            SearchLimits::with_max_expanded(1),
        )
        .unwrap_err();
        assert_eq!(err, SearchError::LimitReached { expanded: 1 });
    }

    #[test]
    fn test_limit_not_needed_for_solved_initial_state() {
        let solution = search_with_limits(
            &PuzzleState::GOAL,
            Strategy::BreadthFirst,
            &Zero::new(),
            SearchLimits::with_max_expanded(0),
        )
        .unwrap();
        assert_eq!(solution.path_cost, 0);
        assert_eq!(solution.stats.expanded(), 0);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::AStar.to_string(), "A*");
        assert_eq!(Strategy::BreadthFirst.to_string(), "breadth-first");
        assert_eq!(Strategy::default(), Strategy::AStar);
    }
}
