use fifteen_core::{Direction, PuzzleState};
use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg64;

/// Parses a grid written as an indented multi-line string literal.
pub(crate) fn state(s: &str) -> PuzzleState {
    let grid = s
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    grid.parse().unwrap()
}

/// Tile 15 slid one cell to the right of its goal.
pub(crate) fn one_move_from_goal() -> PuzzleState {
    state(
        "
        1 2 3 4
        5 6 7 8
        9 10 11 12
        13 14 B 15
        ",
    )
}

/// Blank in the top-left corner, six moves from the goal.
pub(crate) fn corner_blank_state() -> PuzzleState {
    state(
        "
        B 1 2 3
        5 6 7 4
        9 10 11 8
        13 14 15 12
        ",
    )
}

/// Applies `steps` random legal moves to the goal.
///
/// The walk is deterministic for a given `seed`.
pub(crate) fn scramble(seed: u64, steps: usize) -> PuzzleState {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut state = PuzzleState::GOAL;
    for _ in 0..steps {
        let moves = state.successors().collect::<Vec<_>>();
        let &(_, next) = moves.choose(&mut rng).unwrap();
        state = next;
    }
    state
}

/// Applies `directions` to the goal, skipping inapplicable ones.
pub(crate) fn walk(directions: &[Direction]) -> PuzzleState {
    directions
        .iter()
        .fold(PuzzleState::GOAL, |state, &direction| {
            state.make_move(direction).unwrap_or(state)
        })
}
