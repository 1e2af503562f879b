//! Display functions for game state and command results
//!
//! Everything writes to a caller-supplied `Write` so the text front end can
//! be driven from tests.

use super::formatters::{create_progress_bar, feedback_to_emoji, render_alphabet, render_board};
use crate::commands::ScoreResult;
use crate::game::{GameState, MAX_GUESSES, Session, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the board and alphabet summary after a guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_turn<W: Write>(out: &mut W, session: &Session<'_>) -> io::Result<()> {
    writeln!(out, "{}", render_board(session.guesses()))?;
    writeln!(out, "{}", render_alphabet(session.alphabet()))
}

/// Print the end-of-game banner, guess history and answer
///
/// Prints nothing while the game is still in progress.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_game_over<W: Write>(out: &mut W, session: &Session<'_>) -> io::Result<()> {
    let Some(answer) = session.answer() else {
        return Ok(());
    };
    let turns = session.guesses().len();

    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    match session.state() {
        GameState::Won => {
            let message = match turns {
                1 => "🏆 Perfect!",
                2 => "⭐ Excellent!",
                3 => "💫 Great!",
                4 => "✨ Good!",
                5 => "👍 Solved!",
                _ => "😅 Phew!",
            };
            writeln!(out, "  {}", message.bright_green().bold())?;
            writeln!(
                out,
                "  Solved in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            )?;
        }
        GameState::Lost => {
            let banner = format!("Out of guesses ({MAX_GUESSES})");
            writeln!(out, "  {}", banner.red().bold())?;
        }
        GameState::InProgress => {}
    }

    for (i, record) in session.guesses().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.word().to_string().bright_white().bold(),
            feedback_to_emoji(record.feedback())
        )?;
    }
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "Good game! The word was {answer}")
}

/// Print the tally of every game played in this run
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:       {}", stats.games_played)?;
    writeln!(out, "   Win rate:     {:.0}%", stats.win_rate())?;
    writeln!(out, "   Max streak:   {}", stats.max_streak)?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "   {}: {} {count:3}", i + 1, bar.green())?;
    }
    Ok(())
}

/// Print the result of scoring one word against another
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_score_result<W: Write>(out: &mut W, result: &ScoreResult) -> io::Result<()> {
    writeln!(
        out,
        "{} vs {} ({} scoring)",
        result.guess.to_string().bright_yellow().bold(),
        result.answer,
        result.policy
    )?;
    writeln!(out, "{}", feedback_to_emoji(&result.feedback))?;
    for (&letter, outcome) in result.guess.letters().iter().zip(&result.feedback) {
        writeln!(out, "  {} {}", char::from(letter), outcome.description())?;
    }
    Ok(())
}
