//! Game sessions
//!
//! A [`Session`] owns one answer and the guesses made against it. Guesses are
//! checked with [`validate`], scored with [`crate::core::score`] under the
//! session's [`Rules`], and announced to any [`SessionObserver`]s.

mod error;
mod evaluator;
mod observer;
mod rules;
mod session;
mod statistics;

pub use error::GuessError;
pub use evaluator::validate;
pub use observer::SessionObserver;
pub use rules::{MAX_GUESSES, Rules};
pub use session::{GameState, GuessOutcome, GuessRecord, Session};
pub use statistics::Statistics;
