//! The fixed lowercase alphabet shared by dice, board and lexicon
//!
//! Every letter on the board and every edge in the trie is one of these 26 slots.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Error returned when a character has no slot in the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetError {
    NotLowercase(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotLowercase(c) => write!(f, "{c:?} is not a lowercase letter"),
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Index of a letter in `a..=z`
///
/// # Errors
/// Returns `AlphabetError::NotLowercase` for anything outside `a..=z`.
///
/// # Examples
/// ```
/// use boggle_engine::core::letter_index;
///
/// assert_eq!(letter_index(b'a'), Ok(0));
/// assert_eq!(letter_index(b'z'), Ok(25));
/// assert!(letter_index(b'Q').is_err());
/// ```
#[inline]
pub const fn letter_index(letter: u8) -> Result<usize, AlphabetError> {
    if letter.is_ascii_lowercase() {
        Ok((letter - b'a') as usize)
    } else {
        Err(AlphabetError::NotLowercase(letter as char))
    }
}

/// Letter stored at an alphabet slot
///
/// # Panics
/// Panics if `index >= ALPHABET_SIZE`
#[inline]
#[must_use]
pub const fn letter_at(index: usize) -> u8 {
    assert!(index < ALPHABET_SIZE);
    b'a' + index as u8
}
