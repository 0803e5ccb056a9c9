//! Core domain types for the letter grid
//!
//! Dice, boards and the dictionary trie. Nothing here performs I/O; board
//! generation takes its randomness from the caller.

mod alphabet;
mod board;
mod dice;
mod lexicon;

pub use alphabet::{ALPHABET_SIZE, AlphabetError, letter_at, letter_index};
pub use board::{Board, BoardError, Cell, Dimension, PathError, Position};
pub use dice::{Die, DiePool, FREQUENCY_CAP, LetterCounts};
pub use lexicon::{Lexicon, NodeId};
