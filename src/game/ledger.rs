//! Record of the words submitted during one game
//!
//! The ledger is append-only: each distinct string is recorded the first time
//! it is submitted and never changes afterwards. Scores accumulate as valid
//! words of three or more letters are recorded.

use rustc_hash::FxHashSet;
use std::fmt;

/// Shortest word that scores
pub const MIN_SCORING_LENGTH: usize = 3;

/// Points a valid word of `length` letters is worth
///
/// # Examples
/// ```
/// use boggle_engine::game::points_for;
///
/// assert_eq!(points_for(2), 0);
/// assert_eq!(points_for(3), 1);
/// assert_eq!(points_for(8), 6);
/// ```
#[inline]
#[must_use]
pub const fn points_for(length: usize) -> u32 {
    if length >= MIN_SCORING_LENGTH {
        (length - 2) as u32
    } else {
        0
    }
}

/// Error type for ledger updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    Closed,
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "The game is over; no more words are accepted"),
        }
    }
}

impl std::error::Error for LedgerError {}

/// One recorded submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub text: String,
    pub valid: bool,
    /// Position in submission order, starting at 0
    pub order: usize,
}

impl WordEntry {
    #[must_use]
    pub fn points(&self) -> u32 {
        if self.valid {
            points_for(self.text.len())
        } else {
            0
        }
    }
}

/// Result of submitting a word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// False for repeats and ignored input
    pub first_seen: bool,
    pub valid: bool,
    pub points: u32,
}

/// Deduplicating, scoring log of a game's submissions
#[derive(Debug, Clone, Default)]
pub struct WordLedger {
    entries: Vec<WordEntry>,
    seen: FxHashSet<String>,
    score: u32,
    closed: bool,
}

impl WordLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word whose validity has already been decided
    ///
    /// The first submission of a string is recorded and scored; later
    /// submissions of the same string change nothing and report
    /// `first_seen: false` along with the original verdict. Empty input is
    /// ignored.
    ///
    /// # Errors
    /// Returns `LedgerError::Closed` after [`WordLedger::close`].
    pub fn submit(&mut self, word: &str, valid: bool) -> Result<Outcome, LedgerError> {
        if self.closed {
            return Err(LedgerError::Closed);
        }
        if word.is_empty() {
            return Ok(Outcome::default());
        }

        if self.seen.contains(word) {
            let valid = self.entry(word).is_some_and(|entry| entry.valid);
            return Ok(Outcome {
                first_seen: false,
                valid,
                points: 0,
            });
        }

        let entry = WordEntry {
            text: word.to_string(),
            valid,
            order: self.entries.len(),
        };
        let points = entry.points();
        self.score += points;
        self.seen.insert(entry.text.clone());
        self.entries.push(entry);

        Ok(Outcome {
            first_seen: true,
            valid,
            points,
        })
    }

    /// Stop accepting submissions; calling it again has no effect
    pub fn close(&mut self) {
        if !self.closed {
            log::info!(
                "ledger closed with {} words, score {}",
                self.entries.len(),
                self.score
            );
        }
        self.closed = true;
    }

    #[inline]
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Every recorded word in submission order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    #[must_use]
    pub fn entry(&self, word: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|entry| entry.text == word)
    }

    /// Valid words in submission order
    pub fn found_words(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter().filter(|entry| entry.valid)
    }
}
