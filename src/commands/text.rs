//! Text console mode
//!
//! Line-based game loop without the TUI. Reads guesses from any `BufRead`
//! and writes to any `Write`, so a whole run can be scripted.

use crate::dictionary::Dictionary;
use crate::game::{Rules, Session, Statistics};
use crate::output::display::{write_game_over, write_statistics, write_turn};
use colored::Colorize;
use rand::Rng;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// Play games until the player declines another or input runs out
///
/// Returns the statistics for every finished game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_text<R, W, G>(
    dictionary: &Dictionary,
    rules: Rules,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> io::Result<Statistics>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let stats = Rc::new(RefCell::new(Statistics::default()));

    writeln!(output, "{}", "Wordle".bright_cyan().bold())?;
    writeln!(output, "Guess the five letter word in six tries.\n")?;

    loop {
        let mut session = Session::with_rules(dictionary, rules, rng);
        session.subscribe(Statistics::tracker(&stats));

        if !play_one(&mut session, input, output)? {
            break;
        }
        write_game_over(output, &session)?;

        let Some(answer) = prompt(input, output, "Would you like to play again? yes/no")? else {
            break;
        };
        if !answer.eq_ignore_ascii_case("yes") {
            break;
        }
    }

    let stats = stats.borrow().clone();
    write_statistics(output, &stats)?;
    output.flush()?;
    Ok(stats)
}

/// Prompt until the session ends; `false` if input ran out first
fn play_one<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    while !session.is_over() {
        let Some(guess) = prompt(input, output, "Enter a guess:")? else {
            return Ok(false);
        };
        match session.submit_guess(&guess) {
            Ok(_) => write_turn(output, session)?,
            Err(err) => writeln!(output, "{}", err.to_string().red())?,
        }
    }
    Ok(true)
}

/// Write `message` and read one line, without its line ending
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message} ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Some(line))
}
