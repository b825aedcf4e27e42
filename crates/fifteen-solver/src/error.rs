/// Errors that end a search without a solution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SearchError {
    /// The frontier was exhausted without reaching the goal.
    #[display("no solution found after expanding {expanded} states")]
    NoSolution {
        /// Number of states expanded before giving up.
        expanded: usize,
    },
    /// The configured expansion limit was reached before the goal.
    #[display("expansion limit reached after expanding {expanded} states")]
    LimitReached {
        /// Number of states expanded before stopping.
        expanded: usize,
    },
}
