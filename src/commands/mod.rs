//! Command implementations

pub mod score;
pub mod text;

pub use score::{ScoreResult, score_words};
pub use text::run_text;
