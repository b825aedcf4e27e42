//! Graph search over sliding 15-puzzle states.
//!
//! Two strategies are provided on top of [`fifteen_core`]:
//!
//! - [`AStarSearch`]: best-first search guided by a [`Heuristic`](heuristic::Heuristic),
//!   with a [`Frontier`](frontier::Frontier) that keeps one scored state per
//!   configuration
//! - [`BreadthFirstSearch`]: level-by-level search with a goal check on
//!   generation
//!
//! [`search`] dispatches on a [`Strategy`]. Both drivers report a [`Solution`]
//! carrying the goal state, the number of moves along the path taken, and
//! [`SearchStats`].
//!
//! Search progress is logged through the [`log`] facade: lifecycle events at
//! `debug` level and every expanded state at `trace` level.
//!
//! # Examples
//!
//! ```
//! use fifteen_core::PuzzleState;
//! use fifteen_solver::{Strategy, heuristic, search};
//!
//! let initial: PuzzleState = "1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 B 15".parse()?;
//! let manhattan = heuristic::by_name("manhattan").unwrap();
//!
//! let solution = search(&initial, Strategy::AStar, manhattan.as_ref())?;
//! assert_eq!(solution.path_cost, 1);
//!
//! let solution = search(&initial, Strategy::BreadthFirst, manhattan.as_ref())?;
//! assert_eq!(solution.stats.expanded(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    astar::AStarSearch,
    bfs::BreadthFirstSearch,
    error::SearchError,
    search::{SearchLimits, SearchStats, Solution, Strategy, search, search_with_limits},
};

mod astar;
mod bfs;
mod error;
pub mod frontier;
pub mod heuristic;
mod search;
#[cfg(test)]
mod testing;
