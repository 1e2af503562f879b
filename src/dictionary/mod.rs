//! The set of words a game may use
//!
//! A [`Dictionary`] is built once at startup, either from the word list
//! compiled into the binary or from a file, and is read-only afterwards. Any
//! number of sessions can borrow the same dictionary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors while building a dictionary
///
/// These are startup failures; there is no way to play without a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not read dictionary {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary contains no five-letter words")]
    Empty,
}

/// An immutable, non-empty set of valid words
///
/// Keeps words in first-seen order for answer selection alongside a hash set
/// for membership checks.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from words, dropping duplicates
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if `words` yields nothing.
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Result<Self, DictionaryError> {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| lookup.insert(*word))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, lookup })
    }

    /// Parse a whitespace-delimited word list
    ///
    /// Entries are case-insensitive. Entries that are not five ASCII letters
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if no entry is a usable word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::parse("crane\nSLATE\n  toolong trace").unwrap();
    /// assert_eq!(dictionary.len(), 3);
    /// ```
    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        let mut skipped = 0usize;
        let words = text.split_whitespace().filter_map(|entry| {
            let word = Word::new(entry).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        });
        let dictionary = Self::from_words(words)?;

        if skipped > 0 {
            tracing::warn!(skipped, "skipped entries that are not five-letter words");
        }

        Ok(dictionary)
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] only if the bundled list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_words(loader::words_from_slice(DICTIONARY))
    }

    /// Check whether a word is in the dictionary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// All words, in the order they were first seen
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A constructed dictionary is never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a word uniformly at random
    pub fn random_word<R: Rng>(&self, rng: &mut R) -> Word {
        // Non-empty by construction
        self.words[rng.random_range(0..self.words.len())]
    }
}
