//! Puzzle states and their legal moves

pub use self::grid::{Cell, GridPuzzle};
pub use self::ladder::{LadderPuzzle, WordList};

mod grid;
mod ladder;

use std::fmt::{self, Display, Formatter};

use enum_dispatch::enum_dispatch;

use crate::error::InvalidMove;

/// How a solver should explore a puzzle's state space
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchStrategy {
    /// Exhaustive backtracking, suited to constraint-satisfaction puzzles
    DepthFirst,
    /// Shortest-path search, suited to move-graph puzzles
    BreadthFirst,
}

/// The capability contract every puzzle variant provides.
///
/// A state is an immutable snapshot. Every operation that changes the puzzle
/// produces a new, independent state; nothing here mutates `self`.
#[enum_dispatch]
pub trait PuzzleState {
    /// Whether this state satisfies the puzzle's winning condition
    fn is_solved(&self) -> bool;

    /// All states reachable from this one by a single legal move.
    ///
    /// The sequence is finite, deterministically ordered, and never contains
    /// a state equal to its own source.
    fn extensions(&self) -> Vec<Puzzle>;

    /// Apply the move named by `text`, producing the successor state.
    ///
    /// The move grammar is variant-specific: `"(row, col) -> letter"` for
    /// grid puzzles, the literal next word for ladder puzzles.
    fn apply_move(&self, text: &str) -> Result<Puzzle, InvalidMove>;

    /// The search strategy this variant declares for itself
    fn strategy(&self) -> SearchStrategy;

    /// A string identifying this state within one breadth-first search call.
    ///
    /// Two states with the same key are interchangeable for the purposes of
    /// shortest-path search, even if their committed paths differ.
    fn search_key(&self) -> String;
}

/// A puzzle state, one of the concrete variants
#[enum_dispatch(PuzzleState)]
#[derive(Clone, Debug)]
pub enum Puzzle {
    Grid(GridPuzzle),
    Ladder(LadderPuzzle),
}

impl Puzzle {
    /// Describe the move that turns `self` into `other`.
    ///
    /// `other` must be reachable from `self` in exactly one move, such as an
    /// element of `self.extensions()`.
    ///
    /// # Panics
    ///
    /// Panics if `self` and `other` are different puzzle variants.
    pub fn describe_move(&self, other: &Puzzle) -> String {
        match (self, other) {
            (Puzzle::Grid(a), Puzzle::Grid(b)) => a.describe_move(b),
            (Puzzle::Ladder(a), Puzzle::Ladder(b)) => a.describe_move(b),
            _ => panic!("mismatched puzzle variants"),
        }
    }

    /// State equality, defined as display-string equality
    pub fn same_state(&self, other: &Puzzle) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Puzzle::Grid(grid) => grid.fmt(f),
            Puzzle::Ladder(ladder) => ladder.fmt(f),
        }
    }
}
