//! Errors raised at the puzzle boundary

use thiserror::Error;

/// A move rejected by [`apply_move`](crate::puzzle::PuzzleState::apply_move)
#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum InvalidMove {
    #[error("malformed move: \"{0}\"")]
    Malformed(String),
    #[error("cell ({0}, {1}) is out of range")]
    OutOfRange(usize, usize),
    #[error("cell ({0}, {1}) is already filled")]
    CellFilled(usize, usize),
    #[error("letter {0} cannot go in cell ({1}, {2})")]
    LetterConflict(char, usize, usize),
    #[error("\"{0}\" is not a legal next word")]
    WordNotReachable(String),
}

/// A puzzle rejected at construction
#[derive(Error, Debug)]
#[error("invalid puzzle: {}", msg)]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
