//! Running per-letter summary of every guess in a game

use super::feedback::{Feedback, LetterResult};
use super::word::Word;
use std::fmt;
use std::str::FromStr;

/// Number of letters tracked
pub const ALPHABET_SIZE: usize = 26;

/// How a new guess is folded into the letters already recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphabetPolicy {
    /// Keep the most informative result ever seen for each letter
    Upgrade,
    /// Replace a letter's result with whatever the latest guess says
    Overwrite,
}

/// Alphabet policy used unless a session is configured otherwise
pub const DEFAULT_ALPHABET: AlphabetPolicy = AlphabetPolicy::Upgrade;

impl Default for AlphabetPolicy {
    fn default() -> Self {
        DEFAULT_ALPHABET
    }
}

impl AlphabetPolicy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Upgrade => "upgrade",
            Self::Overwrite => "overwrite",
        }
    }
}

impl FromStr for AlphabetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upgrade" | "monotonic" => Ok(Self::Upgrade),
            "overwrite" => Ok(Self::Overwrite),
            other => Err(format!(
                "unknown alphabet policy '{other}' (expected 'upgrade' or 'overwrite')"
            )),
        }
    }
}

impl fmt::Display for AlphabetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Best known classification for each letter A-Z
///
/// Every slot starts unset. Only letters that appear in a recorded guess are
/// ever touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetState {
    slots: [Option<LetterResult>; ALPHABET_SIZE],
}

/// Slot index of an ASCII letter, either case
#[inline]
fn slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
}

/// Uppercase letter for a slot index
#[inline]
fn letter(index: usize) -> u8 {
    b'A' + index as u8
}

impl AlphabetState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the summary
    pub fn record(&mut self, guess: &Word, feedback: &Feedback, policy: AlphabetPolicy) {
        for (&guessed, &result) in guess.letters().iter().zip(feedback) {
            let Some(index) = slot(guessed) else {
                continue;
            };
            let current = &mut self.slots[index];
            *current = match (policy, *current) {
                (AlphabetPolicy::Upgrade, Some(previous)) => Some(previous.max(result)),
                _ => Some(result),
            };
        }
    }

    /// Recorded result for a letter, `None` if never guessed or not a letter
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterResult> {
        slot(letter).and_then(|index| self.slots[index])
    }

    /// Every letter with its recorded result, A first
    pub fn iter(&self) -> impl Iterator<Item = (u8, Option<LetterResult>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, &result)| (letter(index), result))
    }

    /// Letters currently recorded as `result`, in alphabetical order
    pub fn letters_with(&self, result: LetterResult) -> impl Iterator<Item = u8> + '_ {
        self.iter()
            .filter(move |&(_, recorded)| recorded == Some(result))
            .map(|(letter, _)| letter)
    }

    /// Letters that have not appeared in any guess
    pub fn unguessed(&self) -> impl Iterator<Item = u8> + '_ {
        self.iter()
            .filter(|(_, recorded)| recorded.is_none())
            .map(|(letter, _)| letter)
    }

    /// Number of letters with a recorded result
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
