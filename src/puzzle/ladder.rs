//! Word ladder puzzles
//!
//! Starting from one word, change a single letter at a time, always forming a
//! word from the supplied word list, until the target word is reached. The
//! sequence of words from start to target is the ladder.

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use itertools::Itertools;

use crate::error::{InvalidMove, InvalidPuzzle};
use crate::puzzle::{Puzzle, PuzzleState, SearchStrategy};

/// An immutable word set shared by every state of a ladder puzzle.
///
/// Built once by the embedder (already filtered to the puzzle's word length)
/// and passed by handle, so puzzle states are cheap value snapshots.
#[derive(Clone, Debug)]
pub struct WordList {
    words: Arc<Vec<String>>,
}

impl WordList {
    /// Creates a word list; words are sorted and deduplicated
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self {
            words: Arc::new(words),
        }
    }

    /// Iterates over the words in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// An immutable word ladder puzzle state
#[derive(Clone, Debug)]
pub struct LadderPuzzle {
    words: WordList,
    start: String,
    target: String,
    /// Words committed on this path, always ending in `start`
    chain: Vec<String>,
}

impl LadderPuzzle {
    /// Creates a puzzle at its starting word.
    ///
    /// `start` and `target` must be lowercase and of equal length.
    pub fn new(start: &str, target: &str, words: WordList) -> Result<Self, InvalidPuzzle> {
        if start.len() != target.len() {
            return Err(InvalidPuzzle::new(format!(
                "start word \"{}\" and target word \"{}\" have different lengths",
                start, target
            )));
        }
        for word in &[start, target] {
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(InvalidPuzzle::new(format!(
                    "\"{}\" is not a lowercase word",
                    word
                )));
            }
        }
        Ok(Self {
            words,
            start: start.to_string(),
            target: target.to_string(),
            chain: vec![start.to_string()],
        })
    }

    /// The current word of the ladder
    pub fn current(&self) -> &str {
        &self.start
    }

    /// The word this ladder is trying to reach
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The committed words on this path, ending with the current word
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Describe the move from `self` to `other`: the word to enter
    pub fn describe_move(&self, other: &LadderPuzzle) -> String {
        other.start.clone()
    }

    /// Words reachable by one move: in the word list, not already on the
    /// chain, and differing from the current word in exactly one position.
    /// Alphabetical order falls out of the sorted word list.
    fn candidates(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|&word| !self.chain.iter().any(|used| used == word))
            .filter(|&word| differs_in_one_position(word, &self.start))
            .collect()
    }

    fn extend(&self, word: &str) -> LadderPuzzle {
        let mut chain = self.chain.clone();
        chain.push(word.to_string());
        LadderPuzzle {
            words: self.words.clone(),
            start: word.to_string(),
            target: self.target.clone(),
            chain,
        }
    }
}

fn differs_in_one_position(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1
}

impl PuzzleState for LadderPuzzle {
    fn is_solved(&self) -> bool {
        self.start == self.target
    }

    fn extensions(&self) -> Vec<Puzzle> {
        self.candidates()
            .into_iter()
            .map(|word| self.extend(word).into())
            .collect()
    }

    fn apply_move(&self, text: &str) -> Result<Puzzle, InvalidMove> {
        let word = text.trim();
        if !self.candidates().contains(&word) {
            return Err(InvalidMove::WordNotReachable(word.to_string()));
        }
        Ok(self.extend(word).into())
    }

    fn strategy(&self) -> SearchStrategy {
        SearchStrategy::BreadthFirst
    }

    fn search_key(&self) -> String {
        self.start.clone()
    }
}

impl Display for LadderPuzzle {
    /// ```text
    /// word chain:
    /// house -> mouse
    /// target word: party
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "word chain: ")?;
        writeln!(f, "{}", self.chain.iter().join(" -> "))?;
        write!(f, "target word: {}", self.target)
    }
}
