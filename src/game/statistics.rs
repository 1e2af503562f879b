//! Results across the games of one run

use super::observer::SessionObserver;
use super::rules::MAX_GUESSES;
use super::session::{GameState, Session};
use std::cell::RefCell;
use std::rc::Rc;

/// Win/loss tally for every finished session in this process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of guesses; index 0 is a win in one guess
    pub guess_distribution: [usize; MAX_GUESSES],
}

impl Statistics {
    /// Count a session if it has just finished
    ///
    /// In-progress sessions are ignored. A finished session accepts no more
    /// guesses, so an observer calling this sees each game end exactly once.
    pub fn record(&mut self, session: &Session<'_>) {
        match session.state() {
            GameState::InProgress => {}
            GameState::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = session
                    .guesses()
                    .len()
                    .checked_sub(1)
                    .and_then(|index| self.guess_distribution.get_mut(index))
                {
                    *slot += 1;
                }
            }
            GameState::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of games won, 0 before any game finishes
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }

    /// Observer that records into shared statistics
    ///
    /// Subscribe the returned observer to every new session.
    pub fn tracker(stats: &Rc<RefCell<Self>>) -> impl SessionObserver + 'static {
        let stats = Rc::clone(stats);
        move |session: &Session<'_>| stats.borrow_mut().record(session)
    }
}
