//! Guess admissibility
//!
//! Scoring lives in [`crate::core::score`]; this is the other half of the
//! evaluator, deciding whether a raw string may be scored at all.

use super::error::GuessError;
use crate::core::Word;
use crate::dictionary::Dictionary;

/// Validate a raw guess against the dictionary
///
/// Rules are checked in order and the first failure is returned:
/// 1. exactly five characters ([`GuessError::WrongLength`])
/// 2. only ASCII letters, either case ([`GuessError::NonAlphabetic`])
/// 3. present in `dictionary` ([`GuessError::NotInDictionary`])
///
/// # Errors
///
/// Returns the [`GuessError`] for the first rule that fails.
///
/// # Examples
/// ```
/// use wordle_game::dictionary::Dictionary;
/// use wordle_game::game::{GuessError, validate};
///
/// let dictionary = Dictionary::parse("crane slate").unwrap();
///
/// assert_eq!(validate("Crane", &dictionary).unwrap().to_string(), "CRANE");
/// assert_eq!(
///     validate("zzzzz", &dictionary),
///     Err(GuessError::NotInDictionary("ZZZZZ".to_string()))
/// );
/// ```
pub fn validate(raw: &str, dictionary: &Dictionary) -> Result<Word, GuessError> {
    let word = Word::new(raw)?;

    if dictionary.contains(&word) {
        Ok(word)
    } else {
        Err(GuessError::NotInDictionary(word.to_string()))
    }
}
