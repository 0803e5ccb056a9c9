//! Dictionaries for building a [`Lexicon`](crate::core::Lexicon)
//!
//! An English word list is embedded at build time; a replacement can be read
//! from any newline-separated file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{
    LoadError, PartialLoad, embedded_lexicon, fill_lexicon, lexicon_from_slice, load_from_file,
    load_from_reader,
};
