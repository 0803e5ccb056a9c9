//! One game: a board, the shared dictionary, the ledger and the clock
//!
//! The session is the only owner of game state. Display layers hold a session
//! and call into it; nothing reaches the board or ledger any other way.

use super::config::GameConfig;
use super::ledger::{LedgerError, Outcome, WordLedger};
use super::timer::{Countdown, TimerNotice};
use super::validator::PathValidator;
use crate::core::{Board, BoardError, Lexicon, PathError, Position};
use rand::Rng;
use std::fmt;

/// Error type for submitting a selected path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Path(PathError),
    Ledger(LedgerError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(err) => write!(f, "Invalid selection: {err}"),
            Self::Ledger(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<PathError> for SessionError {
    fn from(err: PathError) -> Self {
        Self::Path(err)
    }
}

impl From<LedgerError> for SessionError {
    fn from(err: LedgerError) -> Self {
        Self::Ledger(err)
    }
}

/// State of a single game from board roll to game over
pub struct GameSession<'a> {
    lexicon: &'a Lexicon,
    board: Board,
    ledger: WordLedger,
    clock: Countdown,
}

impl<'a> GameSession<'a> {
    /// Roll a new board and start a game with it
    ///
    /// # Errors
    /// Returns `BoardError` if the board cannot be generated.
    pub fn new<R: Rng>(
        lexicon: &'a Lexicon,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let board = Board::generate(config.dimension, rng)?;
        log::debug!("new {} board:\n{board}", config.dimension);
        Ok(Self::with_board(lexicon, board, config.duration_secs))
    }

    /// Start a game on a board built elsewhere
    #[must_use]
    pub fn with_board(lexicon: &'a Lexicon, board: Board, duration_secs: u32) -> Self {
        Self {
            lexicon,
            board,
            ledger: WordLedger::new(),
            clock: Countdown::new(duration_secs),
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[inline]
    #[must_use]
    pub const fn ledger(&self) -> &WordLedger {
        &self.ledger
    }

    #[inline]
    #[must_use]
    pub const fn clock(&self) -> &Countdown {
        &self.clock
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.ledger.score()
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.ledger.is_closed()
    }

    #[must_use]
    pub const fn validator(&self) -> PathValidator<'_> {
        PathValidator::new(&self.board, self.lexicon)
    }

    /// Submit a word typed by the player
    ///
    /// No path is known, so the word must be traced on the board as well as
    /// found in the dictionary. Repeats are answered from the ledger without
    /// searching again. Surrounding whitespace is ignored and blank input is
    /// a no-op.
    ///
    /// # Errors
    /// Returns `LedgerError::Closed` once the game is over.
    pub fn submit_typed(&mut self, word: &str) -> Result<Outcome, LedgerError> {
        let word = word.trim();
        let valid =
            !self.ledger.contains(word) && !word.is_empty() && self.validator().validate(word);
        self.ledger.submit(word, valid)
    }

    /// Submit a word spelled by a selection whose adjacency was already enforced
    ///
    /// Only dictionary membership is checked.
    ///
    /// # Errors
    /// Returns `LedgerError::Closed` once the game is over.
    pub fn submit_selected_path(&mut self, word: &str) -> Result<Outcome, LedgerError> {
        let valid = self.lexicon.contains_exact(word);
        self.ledger.submit(word, valid)
    }

    /// Spell a path of cells, checking adjacency, then submit it as a selection
    ///
    /// Returns the spelled word along with the outcome.
    ///
    /// # Errors
    /// Returns `SessionError::Path` for a broken selection and
    /// `SessionError::Ledger` once the game is over.
    pub fn submit_path(&mut self, path: &[Position]) -> Result<(String, Outcome), SessionError> {
        if self.is_over() {
            return Err(LedgerError::Closed.into());
        }
        let word = self.board.path_word(path)?;
        let outcome = self.submit_selected_path(&word)?;
        Ok((word, outcome))
    }

    /// Freeze the game; further calls do nothing
    pub fn end_game(&mut self) {
        self.ledger.close();
    }

    /// Advance the clock one second, ending the game when it runs out
    pub fn tick(&mut self) -> Option<TimerNotice> {
        if self.is_over() {
            return None;
        }
        let notice = self.clock.tick();
        if notice == Some(TimerNotice::TimeUp) {
            self.end_game();
        }
        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimension;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // c a x x
    // x t x x
    // x x x x
    // x x x x
    const LAYOUT: &str = "caxx xtxx xxxx xxxx";

    fn lexicon() -> Lexicon {
        ["cat", "at", "act", "tax"].into_iter().collect()
    }

    fn session(lexicon: &Lexicon) -> GameSession<'_> {
        let board = Board::from_letters(Dimension::Standard, LAYOUT).unwrap();
        GameSession::with_board(lexicon, board, 180)
    }

    #[test]
    fn typed_word_on_board_scores() {
        let lexicon = lexicon();
        let mut game = session(&lexicon);

        let outcome = game.submit_typed("cat").unwrap();
        assert!(outcome.first_seen);
        assert!(outcome.valid);
        assert_eq!(outcome.points, 1);
        assert_eq!(game.score(), 1);

        let again = game.submit_typed("cat").unwrap();
        assert!(!again.first_seen);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn typed_word_off_board_is_invalid() {
        let lexicon = lexicon();
        let mut game = session(&lexicon);

        // "act" is a word but c-t are not adjacent in that order
        let outcome = game.submit_typed("act").unwrap();
        assert!(outcome.first_seen);
        assert!(!outcome.valid);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn typed_input_is_trimmed_and_blank_ignored() {
        let lexicon = lexicon();
        let mut game = session(&lexicon);

        assert_eq!(game.submit_typed("   "), Ok(Outcome::default()));
        assert!(game.submit_typed("  cat\n").unwrap().valid);
        assert!(game.ledger().contains("cat"));
    }

    #[test]
    fn short_word_is_found_without_points() {
        let lexicon = lexicon();
        let mut game = session(&lexicon);

        let outcome = game.submit_typed("at").unwrap();
        assert!(outcome.valid);
        assert_eq!(outcome.points, 0);
        assert_eq!(game.ledger().found_words().count(), 1);
    }

    #[test]
    fn selected_word_only_checks_dictionary() {
        let lexicon = lexicon();
        let mut game = session(&lexicon);

        assert!(game.submit_selected_path("tax").unwrap().valid);
        assert!(!game.submit_selected_path("cta").unwrap().valid);
    }

    #[test]
    fn selected_path_is_spelled_and_checked() {
        let lexicon = lexicon();
        let mut game = session(&lexicon);

        let path = [Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)];
        let (word, outcome) = game.submit_path(&path).unwrap();
        assert_eq!(word, "cat");
        assert!(outcome.valid);
        assert_eq!(outcome.points, 1);

        let broken = [Position::new(0, 0), Position::new(1, 1), Position::new(3, 3)];
        assert!(matches!(
            game.submit_path(&broken),
            Err(SessionError::Path(PathError::NotAdjacent(_, _)))
        ));
    }

    #[test]
    fn end_game_freezes_and_is_idempotent() {
        let lexicon = lexicon();
        let mut game = session(&lexicon);
        game.submit_typed("cat").unwrap();

        game.end_game();
        game.end_game();

        assert!(game.is_over());
        assert_eq!(game.submit_typed("at"), Err(LedgerError::Closed));
        assert_eq!(
            game.submit_path(&[Position::new(0, 1), Position::new(1, 1)]),
            Err(SessionError::Ledger(LedgerError::Closed))
        );
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn clock_running_out_ends_the_game() {
        let lexicon = lexicon();
        let board = Board::from_letters(Dimension::Standard, LAYOUT).unwrap();
        let mut game = GameSession::with_board(&lexicon, board, 2);

        assert_eq!(game.tick(), None);
        assert!(!game.is_over());
        assert_eq!(game.tick(), Some(TimerNotice::TimeUp));
        assert!(game.is_over());
        assert_eq!(game.tick(), None);
    }

    #[test]
    fn generated_session_uses_requested_dimension() {
        let lexicon = lexicon();
        let config = GameConfig::new(Dimension::Big);
        let mut rng = StdRng::seed_from_u64(17);

        let game = GameSession::new(&lexicon, &config, &mut rng).unwrap();
        assert_eq!(game.board().cells().len(), 25);
        assert_eq!(game.clock().remaining(), 180);
        assert_eq!(game.score(), 0);
    }
}
