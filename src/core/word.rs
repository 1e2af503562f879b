//! Wordle word representation
//!
//! A Word stores exactly five ASCII letters, normalized to uppercase.

use rustc_hash::FxHashMap;
use std::fmt::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every answer and guess
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, stored uppercase
///
/// Construction is the well-formedness check: every `Word` in existence has the
/// right length and contains only ASCII letters. Dictionary membership is a
/// separate concern (see [`crate::game::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

/// Error type for malformed words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    WrongLength(usize),

    #[error("word must contain only letters A-Z")]
    NonAlphabetic,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Length is checked before content, so `"ab1"` is a length error rather
    /// than an alphabet error.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let found = text.chars().count();
        if found != WORD_LENGTH {
            return Err(WordError::WrongLength(found));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::NonAlphabetic);
            }
            *slot = ch.to_ascii_uppercase() as u8;
        }

        Ok(Self(letters))
    }

    /// Get the uppercase letters as bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the word contains a specific letter (either case)
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter.to_ascii_uppercase())
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.0 {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            f.write_char(char::from(letter))?;
        }
        Ok(())
    }
}
