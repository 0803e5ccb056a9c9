//! Board solving command
//!
//! Lists every dictionary word on one board along with the best possible score.

use crate::core::{Board, BoardError, Dimension, Lexicon};
use crate::game::{GameConfig, find_words, max_score};
use std::time::{Duration, Instant};

/// Configuration for solving a board
pub struct SolveConfig {
    /// Fixed layout to solve instead of rolling one
    pub letters: Option<String>,
    pub game: GameConfig,
    /// Cap on how many words are printed
    pub limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(game: GameConfig) -> Self {
        Self {
            letters: None,
            game,
            limit: None,
        }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    pub words: Vec<String>,
    pub max_score: u32,
    pub duration: Duration,
}

/// Build the board described by `letters`, inferring its size
///
/// Whitespace is ignored and letters are lowercased, so `"CATS DOGS ..."`
/// works as well as a packed string.
///
/// # Errors
/// Returns `BoardError::InvalidDimension` unless there are 16 or 25 letters,
/// or `BoardError::InvalidLetter` for anything outside `a..=z`.
pub fn parse_board(letters: &str) -> Result<Board, BoardError> {
    let packed: String = letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let cells = packed.chars().count();
    let dimension = [Dimension::Standard, Dimension::Big]
        .into_iter()
        .find(|dimension| dimension.cell_count() == cells)
        .ok_or(BoardError::InvalidDimension(cells))?;
    Board::from_letters(dimension, &packed)
}

/// Solve the configured board, rolling one if no layout was given
///
/// # Errors
/// Returns `BoardError` if the layout is malformed or generation fails.
pub fn solve_board(config: &SolveConfig, lexicon: &Lexicon) -> Result<SolveResult, BoardError> {
    let board = match &config.letters {
        Some(letters) => parse_board(letters)?,
        None => Board::generate(config.game.dimension, &mut config.game.rng())?,
    };

    let start = Instant::now();
    let words = find_words(&board, lexicon);
    let duration = start.elapsed();

    Ok(SolveResult {
        max_score: max_score(&words),
        board,
        words,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::lexicon_from_slice;

    #[test]
    fn parses_packed_and_spaced_layouts() {
        let packed = parse_board("catxxexxxxxxxxxx").unwrap();
        let spaced = parse_board("CATX XEXX XXXX XXXX").unwrap();

        assert_eq!(packed.dimension(), Dimension::Standard);
        assert_eq!(packed.to_string(), spaced.to_string());

        let big = parse_board(&"a".repeat(25)).unwrap();
        assert_eq!(big.dimension(), Dimension::Big);
    }

    #[test]
    fn rejects_wrong_letter_counts() {
        assert_eq!(
            parse_board("abcdef").unwrap_err(),
            BoardError::InvalidDimension(6)
        );
        assert!(matches!(
            parse_board("abcdefghijklmno1"),
            Err(BoardError::InvalidLetter('1'))
        ));
    }

    #[test]
    fn solves_fixed_board() {
        let lexicon = lexicon_from_slice(&["cat", "eat", "tea", "act"]);
        let mut config = SolveConfig::new(GameConfig::default());
        config.letters = Some("catx xexx xxxx xxxx".to_string());

        let result = solve_board(&config, &lexicon).unwrap();
        assert_eq!(result.words, vec!["cat", "eat", "tea"]);
        assert_eq!(result.max_score, 3);
    }

    #[test]
    fn seeded_boards_solve_identically() {
        let lexicon = crate::wordlists::embedded_lexicon();
        let config = SolveConfig::new(GameConfig::default().with_seed(Some(5)));

        let first = solve_board(&config, &lexicon).unwrap();
        let second = solve_board(&config, &lexicon).unwrap();
        assert_eq!(first.board.to_string(), second.board.to_string());
        assert_eq!(first.words, second.words);
    }
}
