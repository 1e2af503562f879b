//! Formatting utilities for terminal output

use crate::core::{AlphabetState, Feedback, LetterResult};
use crate::game::{GuessRecord, MAX_GUESSES};

/// Placeholder for a guess row that has not been played
const EMPTY_ROW: &str = "_____";

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.iter().map(|result| result.emoji()).collect()
}

/// Format one guess as plain text
///
/// Exact letters are uppercase, misplaced letters lowercase and absent
/// letters `_`.
#[must_use]
pub fn guess_to_text(record: &GuessRecord) -> String {
    record
        .tiles()
        .map(|(letter, result)| match result {
            LetterResult::CorrectPosition => char::from(letter.to_ascii_uppercase()),
            LetterResult::CorrectLetterWrongPosition => char::from(letter.to_ascii_lowercase()),
            LetterResult::Incorrect => '_',
        })
        .collect()
}

/// Render the whole board, one line per possible guess
#[must_use]
pub fn render_board(guesses: &[GuessRecord]) -> String {
    let mut board = String::with_capacity(MAX_GUESSES * (EMPTY_ROW.len() + 1));
    for row in 0..MAX_GUESSES {
        match guesses.get(row) {
            Some(record) => board.push_str(&guess_to_text(record)),
            None => board.push_str(EMPTY_ROW),
        }
        board.push('\n');
    }
    board
}

/// Render the alphabet summary, grouped by result
#[must_use]
pub fn render_alphabet(alphabet: &AlphabetState) -> String {
    let groups: [(&str, Vec<u8>); 4] = [
        ("Unguessed", alphabet.unguessed().collect()),
        (
            LetterResult::Incorrect.description(),
            alphabet.letters_with(LetterResult::Incorrect).collect(),
        ),
        (
            LetterResult::CorrectPosition.description(),
            alphabet.letters_with(LetterResult::CorrectPosition).collect(),
        ),
        (
            LetterResult::CorrectLetterWrongPosition.description(),
            alphabet
                .letters_with(LetterResult::CorrectLetterWrongPosition)
                .collect(),
        ),
    ];

    let mut output = String::new();
    for (label, letters) in groups {
        output.push_str(label);
        output.push_str(" [ ");
        for letter in letters {
            output.push(char::from(letter));
            output.push(' ');
        }
        output.push_str("]\n");
    }
    output
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
