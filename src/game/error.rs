//! Reasons a guess can be rejected

use crate::core::{WORD_LENGTH, WordError};
use thiserror::Error;

/// A rejected guess
///
/// Every variant is recoverable: the session is left exactly as it was and
/// the player may try again (unless the game is over).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("you must guess a {expected} letter word (got {found} characters)")]
    WrongLength { expected: usize, found: usize },

    #[error("your guess must contain only letters")]
    NonAlphabetic,

    #[error("{0} is not in the word list")]
    NotInDictionary(String),

    #[error("the game is already over")]
    GameAlreadyOver,
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::WrongLength(found) => Self::WrongLength {
                expected: WORD_LENGTH,
                found,
            },
            WordError::NonAlphabetic => Self::NonAlphabetic,
        }
    }
}
