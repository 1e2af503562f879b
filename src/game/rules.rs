//! Per-session rule configuration

use crate::core::{AlphabetPolicy, ScoringPolicy};

/// Maximum number of guesses in one game
pub const MAX_GUESSES: usize = 6;

/// The policies a session is played under
///
/// `Rules::default()` is standard Wordle: occurrence-aware scoring and an
/// alphabet summary that only ever gains information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rules {
    pub scoring: ScoringPolicy,
    pub alphabet: AlphabetPolicy,
}

impl Rules {
    #[must_use]
    pub const fn new(scoring: ScoringPolicy, alphabet: AlphabetPolicy) -> Self {
        Self { scoring, alphabet }
    }

    /// The simplified rules: presence-only scoring, alphabet overwritten by
    /// every guess
    #[must_use]
    pub const fn simplified() -> Self {
        Self::new(ScoringPolicy::Containment, AlphabetPolicy::Overwrite)
    }
}
