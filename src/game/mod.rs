//! Game rules on top of the core board and dictionary
//!
//! - [`PathValidator`]: traces typed words on a board
//! - [`WordLedger`]: deduplicates and scores submissions
//! - [`Countdown`]: game clock with minute notices
//! - [`GameSession`]: one game from roll to game over
//! - [`find_words`]: every dictionary word on a board

mod config;
mod finder;
mod ledger;
mod session;
mod timer;
mod validator;

pub use config::GameConfig;
pub use finder::{find_words, max_score};
pub use ledger::{LedgerError, MIN_SCORING_LENGTH, Outcome, WordEntry, WordLedger, points_for};
pub use session::{GameSession, SessionError};
pub use timer::{Countdown, DEFAULT_GAME_SECONDS, TimerNotice};
pub use validator::PathValidator;
