//! Typed-word validation: trie and board searched in lockstep
//!
//! A typed word is valid when it is in the dictionary and can be traced as a
//! simple path of adjacent cells. The search only follows neighbors whose
//! letter continues a real dictionary prefix, so the trie prunes the board
//! walk at every step.

use crate::core::{Board, Lexicon, NodeId, Position};

/// Set of board cells already on the current path
///
/// Boards have at most 25 cells, so one bit per cell fits in a `u32`. The set
/// is passed by value down the recursion: each frame owns its copy and there
/// is nothing to restore when a branch backtracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Visited(u32);

impl Visited {
    #[inline]
    pub(crate) const fn contains(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    #[inline]
    #[must_use]
    pub(crate) const fn with(self, index: usize) -> Self {
        Self(self.0 | (1 << index))
    }
}

/// Checks typed words against one board and one dictionary
#[derive(Debug, Clone, Copy)]
pub struct PathValidator<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
}

impl<'a> PathValidator<'a> {
    #[must_use]
    pub const fn new(board: &'a Board, lexicon: &'a Lexicon) -> Self {
        Self { board, lexicon }
    }

    /// True if `word` is a dictionary word traceable somewhere on the board
    ///
    /// Every cell showing the first letter is tried as a start.
    #[must_use]
    pub fn validate(&self, word: &str) -> bool {
        let Some(&first) = word.as_bytes().first() else {
            return false;
        };
        let Some(node) = self.lexicon.child_at(self.lexicon.root(), first) else {
            return false;
        };

        self.board
            .cells_with(first)
            .any(|start| self.walk(word.as_bytes(), 0, start, node, Visited::default()))
    }

    /// True if `word` can be traced starting from the cell at `start`
    #[must_use]
    pub fn validate_from(&self, word: &str, start: Position) -> bool {
        let (Some(&first), Some(index)) = (word.as_bytes().first(), self.board.index_of(start))
        else {
            return false;
        };
        self.lexicon
            .child_at(self.lexicon.root(), first)
            .is_some_and(|node| self.walk(word.as_bytes(), 0, index, node, Visited::default()))
    }

    /// Match `word[depth]` at `cell`, whose trie node is `node`
    fn walk(&self, word: &[u8], depth: usize, cell: usize, node: NodeId, visited: Visited) -> bool {
        let current = self.board.cell_at(cell);
        if current.letter() != word[depth] {
            return false;
        }
        let visited = visited.with(cell);

        if depth == word.len() - 1 {
            // Only reachable through valid child slots, so `word` is ASCII here
            return std::str::from_utf8(word)
                .is_ok_and(|text| self.lexicon.is_terminal_match(node, text));
        }

        let next = word[depth + 1];
        let Some(child) = self.lexicon.child_at(node, next) else {
            return false;
        };

        current.neighbors().iter().any(|&neighbor| {
            !visited.contains(neighbor)
                && self.board.cell_at(neighbor).letter() == next
                && self.walk(word, depth + 1, neighbor, child, visited)
        })
    }
}
