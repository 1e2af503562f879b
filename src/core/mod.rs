//! Core domain types for Wordle
//!
//! Words, per-letter scoring and the running alphabet summary. Everything here
//! is pure: no I/O, no randomness, no logging.

mod alphabet;
mod feedback;
mod word;

pub use alphabet::{ALPHABET_SIZE, AlphabetPolicy, AlphabetState, DEFAULT_ALPHABET};
pub use feedback::{DEFAULT_SCORING, Feedback, LetterResult, ScoringPolicy, score};
pub use word::{WORD_LENGTH, Word, WordError};
