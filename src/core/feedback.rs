//! Per-letter scoring of a guess against the answer
//!
//! Each position of a guess is classified as one of three [`LetterResult`]s.
//! How repeated letters are handled is a [`ScoringPolicy`]:
//! - `Multiset`: standard Wordle rules, a letter is only marked as present as
//!   many times as it occurs in the answer
//! - `Containment`: a letter is marked present whenever the answer contains
//!   it anywhere, regardless of how many copies the guess has

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Classification of one guessed letter
///
/// Variants are declared from least to most informative, so the derived
/// ordering is `Incorrect < CorrectLetterWrongPosition < CorrectPosition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterResult {
    /// Letter does not occur in the answer (or all copies are accounted for)
    Incorrect,
    /// Letter occurs in the answer at another position
    CorrectLetterWrongPosition,
    /// Letter occurs in the answer at this position
    CorrectPosition,
}

impl LetterResult {
    /// Every result, least informative first
    pub const ALL: [Self; 3] = [
        Self::Incorrect,
        Self::CorrectLetterWrongPosition,
        Self::CorrectPosition,
    ];

    /// Human readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Incorrect => "Incorrect",
            Self::CorrectLetterWrongPosition => "Correct letter, wrong index",
            Self::CorrectPosition => "Correct",
        }
    }

    /// Emoji tile for this result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Incorrect => '⬜',
            Self::CorrectLetterWrongPosition => '🟨',
            Self::CorrectPosition => '🟩',
        }
    }
}

impl fmt::Display for LetterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Per-position results of one guess
pub type Feedback = [LetterResult; WORD_LENGTH];

/// How repeated letters in a guess are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringPolicy {
    /// Occurrence-aware scoring (standard Wordle)
    Multiset,
    /// Presence-only scoring, ignoring occurrence counts
    Containment,
}

/// Scoring policy used unless a session is configured otherwise
pub const DEFAULT_SCORING: ScoringPolicy = ScoringPolicy::Multiset;

impl Default for ScoringPolicy {
    fn default() -> Self {
        DEFAULT_SCORING
    }
}

impl ScoringPolicy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Multiset => "multiset",
            Self::Containment => "containment",
        }
    }
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "multiset" | "standard" => Ok(Self::Multiset),
            "containment" | "simple" => Ok(Self::Containment),
            other => Err(format!(
                "unknown scoring policy '{other}' (expected 'multiset' or 'containment')"
            )),
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score `guess` against `answer`
///
/// Pure function of its inputs: both words are already normalized, and the
/// result always has exactly one entry per letter.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterResult::*, ScoringPolicy, Word, score};
///
/// let guess = Word::new("trace").unwrap();
/// let answer = Word::new("crane").unwrap();
///
/// assert_eq!(
///     score(&guess, &answer, ScoringPolicy::Multiset),
///     [
///         Incorrect,
///         CorrectPosition,
///         CorrectPosition,
///         CorrectLetterWrongPosition,
///         CorrectPosition,
///     ]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, answer: &Word, policy: ScoringPolicy) -> Feedback {
    match policy {
        ScoringPolicy::Multiset => score_multiset(guess, answer),
        ScoringPolicy::Containment => score_containment(guess, answer),
    }
}

fn score_containment(guess: &Word, answer: &Word) -> Feedback {
    let mut result = [LetterResult::Incorrect; WORD_LENGTH];

    for (i, slot) in result.iter_mut().enumerate() {
        let letter = guess.letter_at(i);
        if answer.contains(letter) {
            *slot = if answer.letter_at(i) == letter {
                LetterResult::CorrectPosition
            } else {
                LetterResult::CorrectLetterWrongPosition
            };
        }
    }

    result
}

fn score_multiset(guess: &Word, answer: &Word) -> Feedback {
    let mut result = [LetterResult::Incorrect; WORD_LENGTH];
    let mut answer_available = answer.letter_counts();

    // First pass: exact position matches, removed from the available pool
    for (i, slot) in result.iter_mut().enumerate() {
        let letter = guess.letter_at(i);
        if answer.letter_at(i) == letter {
            *slot = LetterResult::CorrectPosition;
            if let Some(count) = answer_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass, left to right: present letters while copies remain
    for (i, slot) in result.iter_mut().enumerate() {
        if *slot == LetterResult::CorrectPosition {
            continue;
        }
        let letter = guess.letter_at(i);
        if let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            *slot = LetterResult::CorrectLetterWrongPosition;
            *count -= 1;
        }
    }

    result
}
