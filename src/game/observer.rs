//! Change notification for front ends

use super::session::Session;

/// Something that wants to hear about accepted guesses
///
/// Called synchronously after every successful [`Session::submit_guess`],
/// once the new guess, alphabet and state are all in place. The session is
/// handed over read-only; observers pull whatever they need from it.
///
/// Any `FnMut(&Session)` closure is an observer:
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use wordle_game::core::Word;
/// use wordle_game::dictionary::Dictionary;
/// use wordle_game::game::{Rules, Session};
///
/// let dictionary = Dictionary::parse("crane slate").unwrap();
/// let answer = Word::new("crane").unwrap();
/// let mut session = Session::with_answer(&dictionary, Rules::default(), answer).unwrap();
///
/// let seen = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&seen);
/// session.subscribe(move |session: &Session<'_>| counter.set(session.guesses().len()));
///
/// session.submit_guess("slate").unwrap();
/// assert_eq!(seen.get(), 1);
/// ```
pub trait SessionObserver {
    fn state_changed(&mut self, session: &Session<'_>);
}

impl<F> SessionObserver for F
where
    F: FnMut(&Session<'_>),
{
    fn state_changed(&mut self, session: &Session<'_>) {
        self(session);
    }
}
