//! Dictionary loading utilities
//!
//! Builds a lexicon from a file, a reader or the embedded word list.

use super::WORDS;
use crate::core::Lexicon;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Error type for dictionary loading
///
/// Words read before the failure stay in the lexicon; `loaded` says how many.
#[derive(Debug)]
pub struct LoadError {
    pub loaded: usize,
    pub source: io::Error,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to read dictionary after {} words: {}",
            self.loaded, self.source
        )
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A load that failed part way, with everything read before the failure
#[derive(Debug)]
pub struct PartialLoad {
    pub lexicon: Lexicon,
    pub error: LoadError,
}

impl fmt::Display for PartialLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for PartialLoad {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Insert one word per line from `reader`
///
/// Lines are trimmed and blank lines skipped. A line that is not valid UTF-8
/// is logged and skipped without ending the load. Returns the number of new
/// words.
///
/// # Errors
/// Returns `LoadError` if reading fails part way; the lexicon keeps what was
/// read up to that point.
pub fn fill_lexicon<R: BufRead>(lexicon: &mut Lexicon, mut reader: R) -> Result<usize, LoadError> {
    let mut loaded = 0;
    let mut buf = Vec::new();
    let mut line_number = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LoadError { loaded, source })?;
        if read == 0 {
            return Ok(loaded);
        }
        line_number += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            log::warn!("skipping dictionary line {line_number}: not valid UTF-8");
            continue;
        };
        let word = line.trim();
        if !word.is_empty() && lexicon.insert(word) {
            loaded += 1;
        }
    }
}

/// Load a dictionary from any buffered reader into a new lexicon
///
/// # Errors
/// Returns `PartialLoad` holding the words read before a failure.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Lexicon, PartialLoad> {
    let mut lexicon = Lexicon::new();
    match fill_lexicon(&mut lexicon, reader) {
        Ok(loaded) => {
            log::info!("loaded {loaded} dictionary words");
            Ok(lexicon)
        }
        Err(error) => Err(PartialLoad { lexicon, error }),
    }
}

/// Load a dictionary file into a new lexicon
///
/// # Errors
/// Returns `PartialLoad` with an empty lexicon if the file cannot be opened,
/// or with the words read so far if reading fails later.
///
/// # Examples
/// ```no_run
/// use boggle_engine::wordlists::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt").unwrap_or_else(|partial| partial.lexicon);
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, PartialLoad> {
    match File::open(path) {
        Ok(file) => load_from_reader(BufReader::new(file)),
        Err(source) => Err(PartialLoad {
            lexicon: Lexicon::new(),
            error: LoadError { loaded: 0, source },
        }),
    }
}

/// Build a lexicon from a slice of words
///
/// # Examples
/// ```
/// use boggle_engine::wordlists::loader::lexicon_from_slice;
///
/// let lexicon = lexicon_from_slice(&["tea", "eat", "ate"]);
/// assert_eq!(lexicon.len(), 3);
/// ```
#[must_use]
pub fn lexicon_from_slice(slice: &[&str]) -> Lexicon {
    slice.iter().collect()
}

/// Lexicon over the embedded word list
#[must_use]
pub fn embedded_lexicon() -> Lexicon {
    lexicon_from_slice(WORDS)
}
