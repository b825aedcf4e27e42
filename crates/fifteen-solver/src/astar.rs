use fifteen_core::{PuzzleState, ScoredState};
use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::{
    SearchError, SearchLimits, SearchStats, Solution,
    frontier::{Frontier, Offer},
    heuristic::Heuristic,
};

/// Best-first search ordered by `f = g + h`.
///
/// Each move costs 1. The frontier keeps at most one state per configuration,
/// replacing a member only when a duplicate has a strictly lower total
/// estimate (see [`Frontier`]).
///
/// The explored set records configurations only. A successor whose
/// configuration has already been expanded is dropped even if it was reached
/// more cheaply this time, so with an inadmissible heuristic (including
/// [`Manhattan`](crate::heuristic::Manhattan) and
/// [`Hamming`](crate::heuristic::Hamming), which both count the blank) the path
/// found may be longer than the shortest one. Such drops are counted in
/// [`SearchStats::cheaper_explored`].
///
/// Every expanded state is logged at `trace` level.
///
/// # Examples
///
/// ```
/// use fifteen_core::{Direction, PuzzleState};
/// use fifteen_solver::{AStarSearch, heuristic::Hamming};
///
/// let initial = PuzzleState::GOAL.make_move(Direction::Right)?;
/// let solution = AStarSearch::new(&Hamming::new()).search(&initial)?;
/// assert_eq!(solution.path_cost, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AStarSearch<'a> {
    heuristic: &'a dyn Heuristic,
    limits: SearchLimits,
}

impl<'a> AStarSearch<'a> {
    /// Creates a search guided by `heuristic`, without limits.
    #[must_use]
    pub fn new(heuristic: &'a dyn Heuristic) -> Self {
        Self {
            heuristic,
            limits: SearchLimits::UNLIMITED,
        }
    }

    /// Returns a copy of this search that stops once `limits` are exceeded.
    #[must_use]
    pub fn with_limits(self, limits: SearchLimits) -> Self {
        Self { limits, ..self }
    }

    /// Runs the search from `initial`.
    ///
    /// Returns immediately, without expanding anything, if `initial` is
    /// already solved.
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

        debug!("A* search started (heuristic: {})", self.heuristic.name());
        let mut frontier = Frontier::new();
        // Path cost at which each configuration was expanded.
        let mut explored = FxHashMap::default();
        frontier.offer(self.score(*initial, 0));
        stats.observe_frontier(frontier.len());

        while let Some(node) = frontier.pop() {
            if node.is_solution() {
                debug!(
                    "A* search found a solution at cost {} after {} expansions",
                    node.path_cost(),
                    stats.expanded
                );
                return Ok(Solution {
                    state: node.into_state(),
                    path_cost: node.path_cost(),
                    stats,
                });
            }
            self.limits.check(&stats)?;

            trace!(
                "expanding {} (g={}, h={})",
                node.configuration(),
                node.path_cost(),
                node.heuristic()
            );
            explored.insert(node.configuration(), node.path_cost());
            stats.expanded += 1;

            let child_cost = node.path_cost() + 1;
            for (_, child) in node.state().successors() {
                stats.generated += 1;
                if let Some(&expanded_cost) = explored.get(&child.configuration()) {
                    stats.discarded += 1;
                    if child_cost < expanded_cost {
                        stats.cheaper_explored += 1;
                    }
                    continue;
                }
                match frontier.offer(self.score(child, child_cost)) {
                    Offer::Inserted => {}
                    Offer::Replaced => stats.replaced += 1,
                    Offer::Discarded => stats.discarded += 1,
                }
            }
            stats.observe_frontier(frontier.len());
        }

        debug!("A* search exhausted the frontier");
        Err(SearchError::NoSolution {
            expanded: stats.expanded,
        })
    }

    fn score(&self, state: PuzzleState, path_cost: u32) -> ScoredState {
        let heuristic = self.heuristic.estimate(&state);
        ScoredState::new(state, path_cost, heuristic)
    }
}
