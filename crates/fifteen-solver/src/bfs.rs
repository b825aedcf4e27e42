use std::collections::VecDeque;

use fifteen_core::PuzzleState;
use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::{SearchError, SearchLimits, SearchStats, Solution};

/// Uninformed search that expands states level by level.
///
/// Children are checked for the goal as soon as they are generated, so the
/// search stops one level earlier than a check on expansion would. A child is
/// dropped if its configuration has already been expanded or is waiting in the
/// frontier.
///
/// Because every move costs 1, the path found is a shortest one.
///
/// # Examples
///
/// ```
/// use fifteen_core::{Direction, PuzzleState};
/// use fifteen_solver::BreadthFirstSearch;
///
/// let initial = PuzzleState::GOAL
///     .make_move(Direction::Down)?
///     .make_move(Direction::Down)?;
/// let solution = BreadthFirstSearch::new().search(&initial)?;
/// assert_eq!(solution.path_cost, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch {
    limits: SearchLimits,
}

impl BreadthFirstSearch {
    /// Creates a search without limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limits: SearchLimits::UNLIMITED,
        }
    }

    /// Returns a copy of this search that stops once `limits` are exceeded.
    #[must_use]
    pub const fn with_limits(self, limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Runs the search from `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoSolution`] if the frontier is exhausted, or
    /// [`SearchError::LimitReached`] if the expansion limit is hit first.
    pub fn search(&self, initial: &PuzzleState) -> Result<Solution, SearchError> {
        let mut stats = SearchStats {
            generated: 1,
            ..SearchStats::default()
        };
        if initial.is_solution() {
            return Ok(Solution {
                state: *initial,
                path_cost: 0,
                stats,
            });
        }

        debug!("breadth-first search started");
        // Configurations that are either explored or in the frontier.
        let mut seen = FxHashSet::default();
        let mut frontier = VecDeque::new();
        seen.insert(initial.configuration());
        frontier.push_back((*initial, 0));
        stats.observe_frontier(frontier.len());

        while let Some((state, depth)) = frontier.pop_front() {
            self.limits.check(&stats)?;

            trace!("expanding {} (depth {depth})", state.configuration());
            stats.expanded += 1;

            for (_, child) in state.successors() {
                stats.generated += 1;
                if !seen.insert(child.configuration()) {
                    stats.discarded += 1;
                    continue;
                }
                if child.is_solution() {
                    debug!(
                        "breadth-first search found a solution at depth {} after {} expansions",
                        depth + 1,
                        stats.expanded
                    );
                    return Ok(Solution {
                        state: child,
                        path_cost: depth + 1,
                        stats,
                    });
                }
                frontier.push_back((child, depth + 1));
            }
            stats.observe_frontier(frontier.len());
        }

        debug!("breadth-first search exhausted the frontier");
        Err(SearchError::NoSolution {
            expanded: stats.expanded,
        })
    }
}

#[cfg(test)]
mod tests {
    use fifteen_core::Direction;

    use super::*;
    use crate::testing::{corner_blank_state, one_move_from_goal, scramble, state};

    #[test]
    fn test_solved_initial_state_returns_immediately() {
        let solution = BreadthFirstSearch::new().search(&PuzzleState::GOAL).unwrap();
        assert!(solution.state.is_solution());
        assert_eq!(solution.path_cost, 0);
        assert_eq!(solution.stats.expanded(), 0);
    }

    #[test]
    fn test_one_move_expands_only_initial_state() {
        let solution = BreadthFirstSearch::new()
            .search(&one_move_from_goal())
            .unwrap();
        assert!(solution.state.same_configuration_as(&PuzzleState::GOAL));
        assert_eq!(solution.path_cost, 1);
        assert_eq!(solution.stats.expanded(), 1);
        assert_eq!(solution.stats.replaced(), 0);
    }

    #[test]
    fn test_corner_blank() {
        let solution = BreadthFirstSearch::new()
            .search(&corner_blank_state())
            .unwrap();
        assert!(solution.state.is_solution());
        assert_eq!(solution.path_cost, 6);
    }

    #[test]
    fn test_depth_counts_moves() {
        let initial = state(
            "
            1 2 3 4
            5 6 7 8
            9 10 11 12
            B 13 14 15
            ",
        );
        let solution = BreadthFirstSearch::new().search(&initial).unwrap();
        assert_eq!(solution.path_cost, 3);
    }

    #[test]
    fn test_path_cost_is_at_most_scramble_length() {
        for seed in 0..8 {
            let solution = BreadthFirstSearch::new()
                .search(&scramble(seed, 10))
                .unwrap();
            assert!(solution.path_cost <= 10, "seed {seed}");
        }
    }

    #[test]
    fn test_reverse_moves_are_discarded() {
        let initial = PuzzleState::GOAL
            .make_move(Direction::Down)
            .unwrap()
            .make_move(Direction::Down)
            .unwrap();
        let solution = BreadthFirstSearch::new().search(&initial).unwrap();
        // Expanding the first child regenerates the initial state.
        assert!(solution.stats.discarded() >= 1);
    }

    #[test]
    fn test_limit_reached() {
        let err = BreadthFirstSearch::new()
            .with_limits(SearchLimits::with_max_expanded(2))
            .search(&corner_blank_state())
            .unwrap_err();
        assert_eq!(err, SearchError::LimitReached { expanded: 2 });
    }
}
