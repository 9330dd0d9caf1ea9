//! Explore, solve, and hint letter-grid and word ladder puzzles
//!
//! A puzzle is an immutable state value implementing the
//! [`PuzzleState`](puzzle::PuzzleState) contract: it reports whether it is
//! solved, enumerates its legal successor states, and applies textual moves.
//! The [`solve`] module searches the state space through that contract alone,
//! and [`history`] records the states a player has actually committed to so
//! moves can be undone or reviewed.

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

pub mod collections;
pub mod error;
pub mod history;
pub mod puzzle;
pub mod solve;

pub(crate) type LinkedHashSet<T> = linked_hash_set::LinkedHashSet<T, ahash::RandomState>;
