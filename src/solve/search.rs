//! Work-stack depth-first search and shared-accumulator breadth-first search

use std::collections::VecDeque;

use log::debug;

use crate::puzzle::{Puzzle, PuzzleState};
use crate::LinkedHashSet;

/// Exhaustive backtracking search, first solution wins.
///
/// The explicit work stack replaces call-stack recursion; successors are
/// pushed in reverse so they are explored in `extensions()` order.
pub(crate) fn depth_first(puzzle: &Puzzle) -> Option<Puzzle> {
    let mut stack = vec![puzzle.clone()];
    let mut visited = 0u64;
    while let Some(state) = stack.pop() {
        visited += 1;
        if state.is_solved() {
            debug!("solution found after {} states", visited);
            return Some(state);
        }
        stack.extend(state.extensions().into_iter().rev());
    }
    debug!("no solution after {} states", visited);
    None
}

/// Exhaustive backtracking search collecting every solution, in the order
/// depth-first recursion would yield them
pub(crate) fn depth_first_all(puzzle: &Puzzle) -> Vec<Puzzle> {
    let mut solutions = Vec::new();
    let mut stack = vec![puzzle.clone()];
    while let Some(state) = stack.pop() {
        if state.is_solved() {
            solutions.push(state);
            continue;
        }
        stack.extend(state.extensions().into_iter().rev());
    }
    debug!("enumerated {} solutions", solutions.len());
    solutions
}

/// Whether a solution is reachable within `limit` moves of this state
pub(crate) fn solvable_within(puzzle: &Puzzle, limit: u32) -> bool {
    let mut stack = vec![(puzzle.clone(), limit)];
    while let Some((state, remaining)) = stack.pop() {
        if state.is_solved() {
            return true;
        }
        if remaining == 0 {
            continue;
        }
        stack.extend(
            state
                .extensions()
                .into_iter()
                .rev()
                .map(|extension| (extension, remaining - 1)),
        );
    }
    false
}

pub(crate) struct BreadthFirstFind {
    /// The solved state that was reached
    pub state: Puzzle,
    /// The description of the first move on the path from the search root
    pub first_move: String,
    /// How many states were enqueued before the solution was generated
    pub visited: u64,
}

/// Breadth-first search from `puzzle` to the nearest solved state.
///
/// One accumulator of search keys is shared across the whole call: a
/// successor whose key was already recorded is never enqueued again, so each
/// state is first visited at minimal depth and the search terminates on any
/// finite move graph. The accumulator is discarded when the call returns.
pub(crate) fn breadth_first(puzzle: &Puzzle) -> Option<BreadthFirstFind> {
    let mut tried: LinkedHashSet<String> = LinkedHashSet::default();
    let mut frontier: VecDeque<(Puzzle, Option<String>)> = VecDeque::new();
    let mut visited = 0u64;
    frontier.push_back((puzzle.clone(), None));
    while let Some((state, first_move)) = frontier.pop_front() {
        for extension in state.extensions() {
            if tried.contains(&extension.search_key()) {
                continue;
            }
            let first_move = first_move
                .clone()
                .unwrap_or_else(|| state.describe_move(&extension));
            if extension.is_solved() {
                return Some(BreadthFirstFind {
                    state: extension,
                    first_move,
                    visited,
                });
            }
            tried.insert(extension.search_key());
            frontier.push_back((extension, Some(first_move)));
            visited += 1;
        }
    }
    debug!("breadth-first search exhausted {} states", visited);
    None
}
