//! One-shot scoring command
//!
//! Scores a single guess against a chosen answer without starting a game.

use crate::core::{Feedback, ScoringPolicy, Word, score};
use crate::dictionary::Dictionary;
use crate::game::{GuessError, validate};

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
    pub policy: ScoringPolicy,
}

/// Score `guess` against `answer` under `policy`
///
/// # Errors
///
/// Both words must pass [`validate`]; the first failure is returned, checking
/// the guess before the answer.
pub fn score_words(
    guess: &str,
    answer: &str,
    dictionary: &Dictionary,
    policy: ScoringPolicy,
) -> Result<ScoreResult, GuessError> {
    let guess = validate(guess, dictionary)?;
    let answer = validate(answer, dictionary)?;

    Ok(ScoreResult {
        guess,
        answer,
        feedback: score(&guess, &answer, policy),
        policy,
    })
}
