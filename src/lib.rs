//! Wordle
//!
//! A Wordle game engine: guess validation, per-letter scoring, a session state
//! machine with observers, and text and TUI front ends built on top of it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::LetterResult;
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::game::{GameState, Rules, Session};
//! use wordle_game::core::Word;
//!
//! let dictionary = Dictionary::parse("crane trace slate").unwrap();
//! let answer = Word::new("crane").unwrap();
//! let mut session = Session::with_answer(&dictionary, Rules::default(), answer).unwrap();
//!
//! let outcome = session.submit_guess("trace").unwrap();
//! assert_eq!(outcome.record.feedback()[0], LetterResult::Incorrect);
//! assert_eq!(outcome.state, GameState::InProgress);
//!
//! let outcome = session.submit_guess("crane").unwrap();
//! assert_eq!(outcome.state, GameState::Won);
//! ```

// Core domain types
pub mod core;

// Sessions, validation and statistics
pub mod game;

// Word lists
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
