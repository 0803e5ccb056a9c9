//! Every dictionary word on a board
//!
//! Walks the board from each start cell, descending the trie alongside, and
//! collects the words stored at terminal nodes. Start cells are searched in
//! parallel; each search owns its own visited set.

use super::ledger::{MIN_SCORING_LENGTH, points_for};
use super::validator::Visited;
use crate::core::{Board, Lexicon, NodeId};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// All scoring words that can be traced on `board`
///
/// Sorted longest first, then alphabetically.
#[must_use]
pub fn find_words(board: &Board, lexicon: &Lexicon) -> Vec<String> {
    let found: FxHashSet<&str> = (0..board.cells().len())
        .into_par_iter()
        .map(|start| {
            let mut words = FxHashSet::default();
            let letter = board.cell_at(start).letter();
            if let Some(node) = lexicon.child_at(lexicon.root(), letter) {
                collect(board, lexicon, start, node, Visited::default(), &mut words);
            }
            words
        })
        .reduce(FxHashSet::default, |mut acc, words| {
            acc.extend(words);
            acc
        });

    let mut words: Vec<String> = found.into_iter().map(str::to_string).collect();
    words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    log::debug!("found {} words on the board", words.len());
    words
}

fn collect<'l>(
    board: &Board,
    lexicon: &'l Lexicon,
    cell: usize,
    node: NodeId,
    visited: Visited,
    words: &mut FxHashSet<&'l str>,
) {
    let visited = visited.with(cell);

    // Words with skipped characters sit on a path they do not spell
    if let Some(word) = lexicon.word_at(node)
        && word.len() >= MIN_SCORING_LENGTH
        && word.bytes().all(|b| b.is_ascii_lowercase())
    {
        words.insert(word);
    }

    for &neighbor in board.cell_at(cell).neighbors() {
        if visited.contains(neighbor) {
            continue;
        }
        if let Some(child) = lexicon.child_at(node, board.cell_at(neighbor).letter()) {
            collect(board, lexicon, neighbor, child, visited, words);
        }
    }
}

/// Total points available from a list of found words
#[must_use]
pub fn max_score(words: &[String]) -> u32 {
    words.iter().map(|word| points_for(word.len())).sum()
}
