//! Heuristic estimates of the distance to the goal.
//!
//! Each heuristic implements the [`Heuristic`] trait and maps a
//! [`PuzzleState`] to a non-negative estimate of the number of moves still
//! needed. Estimates depend only on the grid, never on the path cost.

use std::fmt::Debug;

use fifteen_core::PuzzleState;

pub use self::{hamming::Hamming, manhattan::Manhattan, zero::Zero};

mod hamming;
mod manhattan;
mod zero;

/// Returns all available heuristics.
///
/// # Examples
///
/// ```
/// use fifteen_solver::heuristic;
///
/// let names = heuristic::all_heuristics()
///     .iter()
///     .map(|h| h.name())
///     .collect::<Vec<_>>();
/// assert_eq!(names, ["manhattan", "hamming", "zero"]);
/// ```
#[must_use]
pub fn all_heuristics() -> Vec<BoxedHeuristic> {
    vec![
        Box::new(Manhattan::new()),
        Box::new(Hamming::new()),
        Box::new(Zero::new()),
    ]
}

/// Looks up a heuristic by name, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use fifteen_solver::heuristic;
///
/// assert_eq!(heuristic::by_name("Hamming").unwrap().name(), "hamming");
/// assert!(heuristic::by_name("euclid").is_none());
/// ```
#[must_use]
pub fn by_name(name: &str) -> Option<BoxedHeuristic> {
    all_heuristics()
        .into_iter()
        .find(|heuristic| heuristic.name().eq_ignore_ascii_case(name))
}

/// A function estimating the remaining distance from a state to the goal.
pub trait Heuristic: Debug + Send + Sync {
    /// Returns the name of the heuristic.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the heuristic.
    fn clone_box(&self) -> BoxedHeuristic;

    /// Estimates the number of moves from `state` to the goal.
    fn estimate(&self, state: &PuzzleState) -> u32;
}

/// A boxed heuristic.
pub type BoxedHeuristic = Box<dyn Heuristic>;

impl Clone for BoxedHeuristic {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_estimates_zero() {
        for heuristic in all_heuristics() {
            assert_eq!(
                heuristic.estimate(&PuzzleState::GOAL),
                0,
                "{}",
                heuristic.name()
            );
        }
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(by_name("MANHATTAN").unwrap().name(), "manhattan");
        assert_eq!(by_name("zero").unwrap().name(), "zero");
        assert!(by_name("").is_none());
    }

    #[test]
    fn test_boxed_clone_keeps_identity() {
        let heuristic: BoxedHeuristic = Box::new(Hamming::new());
        let cloned = heuristic.clone();
        assert_eq!(cloned.name(), heuristic.name());
    }
}
