//! Search the state space of a puzzle for solutions and hints
//!
//! Everything here operates purely through the
//! [`PuzzleState`](crate::puzzle::PuzzleState) contract. No-solution and
//! no-hint outcomes are normal results, never errors.

use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::puzzle::{Puzzle, PuzzleState, SearchStrategy};

use self::search::{breadth_first, depth_first, depth_first_all, solvable_within};

mod search;

/// Bound on [`hint_by_depth`] lookahead, capping runaway recursion on deep or
/// unsolvable branches
pub const DEFAULT_HINT_DEPTH: u32 = 100;

/// The outcome of a hint request
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Hint {
    /// The puzzle is already solved; there is nothing to suggest
    AlreadySolved,
    /// No reachable solution was found within the search bounds
    NoExtensions,
    /// A suggested next move, in the puzzle's move grammar
    Move(String),
}

impl Hint {
    pub fn as_move(&self) -> Option<&str> {
        match self {
            Hint::Move(text) => Some(text),
            _ => None,
        }
    }
}

impl Display for Hint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Hint::AlreadySolved => write!(f, "Already at a solution!"),
            Hint::NoExtensions => write!(f, "No possible extensions!"),
            Hint::Move(text) => write!(f, "{}", text),
        }
    }
}

/// Return a solution of the puzzle, or `None` if it cannot be solved.
///
/// The search strategy is whichever the puzzle variant declares for itself:
/// exhaustive depth-first backtracking or breadth-first shortest-path search.
/// Either way, `solve` returns `None` exactly when [`solve_all`] is empty.
pub fn solve(puzzle: &Puzzle) -> Option<Puzzle> {
    if puzzle.is_solved() {
        return Some(puzzle.clone());
    }
    match puzzle.strategy() {
        SearchStrategy::DepthFirst => depth_first(puzzle),
        SearchStrategy::BreadthFirst => breadth_first(puzzle).map(|found| found.state),
    }
}

/// Return every solution of the puzzle, in depth-first successor order.
///
/// An already-solved puzzle yields itself as the single solution; an
/// unsolvable puzzle yields nothing.
pub fn solve_all(puzzle: &Puzzle) -> Vec<Puzzle> {
    depth_first_all(puzzle)
}

/// Suggest a move by bounded depth-first lookahead.
///
/// Tests each successor in order for a solution within `limit - 1` further
/// moves and suggests the first that can reach one. `limit` exists solely to
/// cap the lookahead; see [`DEFAULT_HINT_DEPTH`].
pub fn hint_by_depth(puzzle: &Puzzle, limit: u32) -> Hint {
    if puzzle.is_solved() {
        return Hint::AlreadySolved;
    }
    for extension in puzzle.extensions() {
        if solvable_within(&extension, limit.saturating_sub(1)) {
            return Hint::Move(puzzle.describe_move(&extension));
        }
    }
    Hint::NoExtensions
}

/// Suggest a move by breadth-first shortest-path search.
///
/// The first solution found lies at minimal depth, so the suggested move is
/// the first step of a shortest path from this state.
pub fn hint_by_breadth(puzzle: &Puzzle) -> Hint {
    if puzzle.is_solved() {
        return Hint::AlreadySolved;
    }
    match breadth_first(puzzle) {
        Some(found) => {
            debug!("breadth-first hint enqueued {} states", found.visited);
            Hint::Move(found.first_move)
        }
        None => Hint::NoExtensions,
    }
}
