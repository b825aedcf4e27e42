//! The A* frontier.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, hash_map::Entry},
};

use fifteen_core::{Configuration, ScoredState};
use rustc_hash::FxHashMap;

/// Outcome of offering a state to a [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Offer {
    /// No member had the same configuration; the state was added.
    Inserted,
    /// A member with the same configuration and a strictly greater total
    /// estimate was replaced by the state.
    Replaced,
    /// A member with the same configuration and an equal or lower total
    /// estimate was kept; the state was dropped.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    total: u32,
    seq: u64,
    configuration: Configuration,
}

// `BinaryHeap` is a max-heap; invert so the lowest total, then the oldest entry, pops first.
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .total
            .cmp(&self.total)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy)]
struct Member {
    seq: u64,
    node: ScoredState,
}

/// Scored states awaiting expansion, at most one per configuration.
///
/// [`pop`](Self::pop) returns the member with the lowest total estimate
/// `f = g + h`. Ties are broken by insertion order, oldest first; a replacement
/// counts as a new insertion.
///
/// Membership is keyed by [`Configuration`], so lookups ignore scores.
/// Replaced members are removed lazily: their heap entries stay behind and
/// are skipped when popped.
///
/// # Examples
///
/// ```
/// use fifteen_core::{Direction, PuzzleState, ScoredState};
/// use fifteen_solver::frontier::{Frontier, Offer};
///
/// let state = PuzzleState::GOAL.make_move(Direction::Down)?;
/// let mut frontier = Frontier::new();
///
/// assert_eq!(frontier.offer(ScoredState::new(state, 3, 2)), Offer::Inserted);
/// assert_eq!(frontier.offer(ScoredState::new(state, 4, 2)), Offer::Discarded);
/// assert_eq!(frontier.offer(ScoredState::new(state, 1, 2)), Offer::Replaced);
///
/// let best = frontier.pop().unwrap();
/// assert_eq!(best.total_estimate(), 3);
/// assert!(frontier.pop().is_none());
/// # Ok::<(), fifteen_core::InvalidMoveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<HeapEntry>,
    members: FxHashMap<Configuration, Member>,
    next_seq: u64,
}

impl Frontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if there are no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Offers a state, resolving duplicates by configuration.
    ///
    /// The state is inserted if no member shares its configuration, replaces a
    /// member whose total estimate is strictly greater, and is dropped otherwise.
    pub fn offer(&mut self, node: ScoredState) -> Offer {
        let configuration = node.configuration();
        let offer = match self.members.entry(configuration) {
            Entry::Vacant(entry) => {
                entry.insert(Member {
                    seq: self.next_seq,
                    node,
                });
                Offer::Inserted
            }
            Entry::Occupied(mut entry) => {
                if entry.get().node.total_estimate() <= node.total_estimate() {
                    return Offer::Discarded;
                }
                entry.insert(Member {
                    seq: self.next_seq,
                    node,
                });
                Offer::Replaced
            }
        };
        self.heap.push(HeapEntry {
            total: node.total_estimate(),
            seq: self.next_seq,
            configuration,
        });
        self.next_seq += 1;
        offer
    }

    /// Removes and returns the member with the lowest total estimate.
    pub fn pop(&mut self) -> Option<ScoredState> {
        while let Some(entry) = self.heap.pop() {
            if let Entry::Occupied(member) = self.members.entry(entry.configuration)
                && member.get().seq == entry.seq
            {
                return Some(member.remove().node);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use fifteen_core::{Direction, PuzzleState};

    use super::*;

    fn neighbors() -> (PuzzleState, PuzzleState) {
        (
            PuzzleState::GOAL.make_move(Direction::Down).unwrap(),
            PuzzleState::GOAL.make_move(Direction::Right).unwrap(),
        )
    }

    #[test]
    fn test_pops_lowest_total_first() {
        let (a, b) = neighbors();
        let mut frontier = Frontier::new();
        frontier.offer(ScoredState::new(a, 5, 5));
        frontier.offer(ScoredState::new(b, 1, 2));
        frontier.offer(ScoredState::new(PuzzleState::GOAL, 4, 0));

        let order = std::iter::from_fn(|| frontier.pop())
            .map(|node| node.total_estimate())
            .collect::<Vec<_>>();
        assert_eq!(order, [3, 4, 10]);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let (a, b) = neighbors();
        let mut frontier = Frontier::new();
        frontier.offer(ScoredState::new(b, 2, 2));
        frontier.offer(ScoredState::new(a, 1, 3));
        frontier.offer(ScoredState::new(PuzzleState::GOAL, 4, 0));

        assert!(frontier.pop().unwrap().state().same_configuration_as(&b));
        assert!(frontier.pop().unwrap().state().same_configuration_as(&a));
        assert!(frontier.pop().unwrap().is_solution());
    }

    #[test]
    fn test_equal_total_duplicate_is_discarded() {
        let (a, _) = neighbors();
        let mut frontier = Frontier::new();
        assert!(frontier.offer(ScoredState::new(a, 2, 2)).is_inserted());
        assert!(frontier.offer(ScoredState::new(a, 3, 1)).is_discarded());
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop().unwrap().path_cost(), 2);
    }

    #[test]
    fn test_replacement_moves_to_back_of_tie() {
        let (a, b) = neighbors();
        let mut frontier = Frontier::new();
        frontier.offer(ScoredState::new(a, 4, 2));
        frontier.offer(ScoredState::new(b, 1, 2));
        assert!(frontier.offer(ScoredState::new(a, 1, 2)).is_replaced());
        assert_eq!(frontier.len(), 2);

        // Both have total 3; `b` was inserted before the replacement of `a`.
        assert!(frontier.pop().unwrap().state().same_configuration_as(&b));
        let replaced = frontier.pop().unwrap();
        assert!(replaced.state().same_configuration_as(&a));
        assert_eq!(replaced.path_cost(), 1);

        // The stale entry for the old `a` is skipped.
        assert!(frontier.pop().is_none());
        assert!(frontier.is_empty());
    }
}
