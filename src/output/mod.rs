//! Terminal output formatting
//!
//! Plain-text rendering of boards and alphabets, plus the coloured reports
//! the text front end prints.

pub mod display;
pub mod formatters;

pub use display::{write_game_over, write_score_result, write_statistics, write_turn};
