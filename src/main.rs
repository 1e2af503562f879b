//! Wordle - CLI
//!
//! Play Wordle in the terminal, either as a full-screen TUI or as a plain
//! line-based console game.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_text, score_words},
    core::{AlphabetPolicy, ScoringPolicy},
    dictionary::{Dictionary, loader::load_from_file},
    game::Rules,
    interactive::{App, run_tui},
    output::write_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Front end: gui (default, full-screen TUI) or text (line-based)
    #[arg(short, long, value_enum, default_value_t = Mode::Gui)]
    mode: Mode,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for answer selection, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Duplicate-letter scoring: multiset (default) or containment
    #[arg(long, global = true, default_value_t = ScoringPolicy::default())]
    scoring: ScoringPolicy,

    /// Keyboard colouring: upgrade (default) or overwrite
    #[arg(long, default_value_t = AlphabetPolicy::default())]
    alphabet: AlphabetPolicy,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Text,
    Gui,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one guess against an answer and exit
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path).context("failed to load dictionary"),
        None => Dictionary::embedded().context("built-in dictionary is empty"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.no_color)?;
    if cli.no_color {
        colored::control::set_override(false);
    }

    let dictionary = load_dictionary(cli.dictionary.as_ref())?;
    tracing::info!(words = dictionary.len(), "dictionary loaded");

    if let Some(Commands::Score { guess, answer }) = cli.command {
        let result = score_words(&guess, &answer, &dictionary, cli.scoring)?;
        write_score_result(&mut io::stdout().lock(), &result)?;
        return Ok(());
    }

    let rules = Rules::new(cli.scoring, cli.alphabet);
    let rng = cli
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    match cli.mode {
        Mode::Gui => run_tui(App::new(&dictionary, rules, rng)),
        Mode::Text => {
            let mut rng = rng;
            run_text(
                &dictionary,
                rules,
                &mut rng,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )?;
            Ok(())
        }
    }
}
