//! One game, from answer selection to win or loss

use super::error::GuessError;
use super::evaluator::validate;
use super::observer::SessionObserver;
use super::rules::{MAX_GUESSES, Rules};
use crate::core::{AlphabetState, Feedback, LetterResult, Word, score};
use crate::dictionary::Dictionary;
use rand::Rng;
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// `true` for `Won` and `Lost`
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess and how it scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
    is_winning: bool,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(word: Word, feedback: Feedback, is_winning: bool) -> Self {
        Self {
            word,
            feedback,
            is_winning,
        }
    }

    #[must_use]
    pub const fn word(&self) -> Word {
        self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub const fn is_winning(&self) -> bool {
        self.is_winning
    }

    /// Letters paired with their results, in guess order
    pub fn tiles(&self) -> impl Iterator<Item = (u8, LetterResult)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.iter().copied())
    }
}

/// What an accepted guess did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub record: GuessRecord,
    pub state: GameState,
}

/// A single game of Wordle
///
/// The answer is fixed at construction. [`submit_guess`](Self::submit_guess)
/// is the only mutation; everything else is a read-only query. Sessions borrow
/// their dictionary, so many can share one word list.
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    rules: Rules,
    answer: Word,
    guesses: Vec<GuessRecord>,
    alphabet: AlphabetState,
    state: GameState,
    observers: Vec<Box<dyn SessionObserver + 'a>>,
}

impl<'a> Session<'a> {
    /// Start a game under default rules with an answer drawn from `rng`
    pub fn new<R: Rng>(dictionary: &'a Dictionary, rng: &mut R) -> Self {
        Self::with_rules(dictionary, Rules::default(), rng)
    }

    /// Start a game under `rules` with an answer drawn from `rng`
    pub fn with_rules<R: Rng>(dictionary: &'a Dictionary, rules: Rules, rng: &mut R) -> Self {
        let answer = dictionary.random_word(rng);
        Self::start(dictionary, rules, answer)
    }

    /// Start a game with a chosen answer
    ///
    /// # Errors
    ///
    /// The answer goes through the same checks as a guess, so this fails with
    /// the corresponding [`GuessError`] if it is malformed or not in the
    /// dictionary.
    pub fn with_answer(
        dictionary: &'a Dictionary,
        rules: Rules,
        answer: Word,
    ) -> Result<Self, GuessError> {
        let answer = validate(&answer.to_string(), dictionary)?;
        Ok(Self::start(dictionary, rules, answer))
    }

    fn start(dictionary: &'a Dictionary, rules: Rules, answer: Word) -> Self {
        tracing::debug!(
            scoring = %rules.scoring,
            alphabet = %rules.alphabet,
            "new session"
        );
        Self {
            dictionary,
            rules,
            answer,
            guesses: Vec::with_capacity(MAX_GUESSES),
            alphabet: AlphabetState::new(),
            state: GameState::InProgress,
            observers: Vec::new(),
        }
    }

    /// Register an observer, called after every accepted guess
    pub fn subscribe<O: SessionObserver + 'a>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Submit a guess
    ///
    /// On success the guess is recorded, the alphabet summary updated, the
    /// state advanced and observers notified, in that order.
    ///
    /// # Errors
    ///
    /// - [`GuessError::GameAlreadyOver`] once the game has been won or lost
    /// - any validation error from [`validate`]
    ///
    /// Nothing changes when an error is returned; a rejected guess does not
    /// use up a turn.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.state.is_over() || self.guesses.len() >= MAX_GUESSES {
            return Err(GuessError::GameAlreadyOver);
        }

        let word = validate(raw, self.dictionary)?;
        let feedback = score(&word, &self.answer, self.rules.scoring);
        let is_winning = word == self.answer;
        let record = GuessRecord::new(word, feedback, is_winning);

        self.guesses.push(record);
        self.alphabet.record(&word, &feedback, self.rules.alphabet);
        self.state = if is_winning {
            GameState::Won
        } else if self.guesses.len() == MAX_GUESSES {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        tracing::debug!(guess = %word, turn = self.guesses.len(), "guess accepted");
        if self.state.is_over() {
            tracing::info!(
                state = ?self.state,
                guesses = self.guesses.len(),
                answer = %self.answer,
                "game over"
            );
        }

        self.notify();

        Ok(GuessOutcome {
            record,
            state: self.state,
        })
    }

    fn notify(&mut self) {
        // Observers get `&Session`, so they cannot subscribe while we iterate
        let mut observers = std::mem::take(&mut self.observers);
        for observer in &mut observers {
            observer.state_changed(self);
        }
        self.observers = observers;
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&GuessRecord> {
        self.guesses.last()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    #[must_use]
    pub const fn alphabet(&self) -> &AlphabetState {
        &self.alphabet
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// The answer, revealed only once the game is over
    #[must_use]
    pub fn answer(&self) -> Option<Word> {
        self.state.is_over().then_some(self.answer)
    }
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("rules", &self.rules)
            .field("state", &self.state)
            .field("guesses", &self.guesses)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        ALPHABET_SIZE, AlphabetPolicy, LetterResult::CorrectLetterWrongPosition as Y,
        LetterResult::CorrectPosition as G, LetterResult::Incorrect as X, ScoringPolicy,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    const WORDS: &str = "crane trace slate level erase eerie audio built robot floor spool sober \
                         pints ratio earth";

    fn dictionary() -> Dictionary {
        Dictionary::parse(WORDS).unwrap()
    }

    fn session_with<'a>(dictionary: &'a Dictionary, answer: &str, rules: Rules) -> Session<'a> {
        Session::with_answer(dictionary, rules, Word::new(answer).unwrap()).unwrap()
    }

    fn session<'a>(dictionary: &'a Dictionary, answer: &str) -> Session<'a> {
        session_with(dictionary, answer, Rules::default())
    }

    /// Everything observable about a session, for no-mutation checks
    fn snapshot(session: &Session<'_>) -> (GameState, Vec<GuessRecord>, AlphabetState) {
        (
            session.state(),
            session.guesses().to_vec(),
            session.alphabet().clone(),
        )
    }

    #[test]
    fn new_session_starts_in_progress() {
        let dictionary = dictionary();
        let session = Session::new(&dictionary, &mut StdRng::seed_from_u64(1));

        assert_eq!(session.state(), GameState::InProgress);
        assert!(session.guesses().is_empty());
        assert_eq!(session.guesses_remaining(), MAX_GUESSES);
        assert_eq!(session.alphabet().unguessed().count(), ALPHABET_SIZE);
        assert_eq!(session.answer(), None);
    }

    #[test]
    fn seeded_sessions_agree_on_answer() {
        let dictionary = dictionary();
        let mut first = Session::new(&dictionary, &mut StdRng::seed_from_u64(99));
        let mut second = Session::new(&dictionary, &mut StdRng::seed_from_u64(99));

        // Play both to a loss with the same guesses; the revealed answers match
        let guesses = [
            "crane", "trace", "slate", "level", "erase", "eerie", "audio",
        ];
        for guess in guesses {
            if first.is_over() {
                break;
            }
            let a = first.submit_guess(guess).unwrap();
            let b = second.submit_guess(guess).unwrap();
            assert_eq!(a, b);
        }
        assert!(first.is_over());
        assert_eq!(first.answer(), second.answer());
        assert!(dictionary.contains(&first.answer().unwrap()));
    }

    #[test]
    fn answer_must_be_in_dictionary() {
        let dictionary = dictionary();
        let answer = Word::new("zzzzz").unwrap();
        let result = Session::with_answer(&dictionary, Rules::default(), answer);
        assert_eq!(
            result.unwrap_err(),
            GuessError::NotInDictionary("ZZZZZ".into())
        );
    }

    #[test]
    fn correct_guess_wins() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        let outcome = session.submit_guess("Crane").unwrap();

        assert_eq!(outcome.state, GameState::Won);
        assert!(outcome.record.is_winning());
        assert_eq!(outcome.record.feedback(), &[G; 5]);
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.answer(), Some(Word::new("crane").unwrap()));
    }

    #[test]
    fn crane_win_records_alphabet() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");
        session.submit_guess("crane").unwrap();

        let alphabet = session.alphabet();
        for letter in *b"CRANE" {
            assert_eq!(alphabet.get(letter), Some(G));
        }
        assert_eq!(alphabet.unguessed().count(), 21);
    }

    #[test]
    fn wrong_guess_keeps_playing() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        let outcome = session.submit_guess("trace").unwrap();

        assert_eq!(outcome.state, GameState::InProgress);
        assert!(!outcome.record.is_winning());
        assert_eq!(outcome.record.feedback(), &[X, G, G, Y, G]);
        assert_eq!(session.guesses_remaining(), MAX_GUESSES - 1);
        assert_eq!(session.last_guess(), Some(&outcome.record));
        assert_eq!(session.answer(), None);
    }

    #[test]
    fn rejected_guesses_do_not_mutate() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");
        session.submit_guess("slate").unwrap();
        let before = snapshot(&session);

        assert!(matches!(
            session.submit_guess("cranes"),
            Err(GuessError::WrongLength { found: 6, .. })
        ));
        let result = session.submit_guess("cr4ne");
        assert_eq!(result, Err(GuessError::NonAlphabetic));
        assert_eq!(
            session.submit_guess("xylem"),
            Err(GuessError::NotInDictionary("XYLEM".into()))
        );

        assert_eq!(snapshot(&session), before);
        assert_eq!(session.guesses_remaining(), MAX_GUESSES - 1);
    }

    #[test]
    fn six_misses_lose_and_seventh_is_rejected() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        let misses = ["slate", "level", "erase", "eerie", "audio", "built"];
        for (turn, guess) in misses.iter().enumerate() {
            let outcome = session.submit_guess(guess).unwrap();
            let expected = if turn + 1 == MAX_GUESSES {
                GameState::Lost
            } else {
                GameState::InProgress
            };
            assert_eq!(outcome.state, expected);
        }

        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.guesses_remaining(), 0);
        assert_eq!(session.answer(), Some(Word::new("crane").unwrap()));

        let before = snapshot(&session);
        let result = session.submit_guess("crane");
        assert_eq!(result, Err(GuessError::GameAlreadyOver));
        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn winning_on_last_turn_is_a_win() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");
        for guess in ["slate", "level", "erase", "eerie", "audio"] {
            session.submit_guess(guess).unwrap();
        }
        let outcome = session.submit_guess("crane").unwrap();
        assert_eq!(outcome.state, GameState::Won);
    }

    #[test]
    fn game_over_checked_before_validation() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");
        session.submit_guess("crane").unwrap();

        // Even malformed input reports the game as over
        assert_eq!(session.submit_guess("x"), Err(GuessError::GameAlreadyOver));
    }

    #[test]
    fn duplicate_letters_follow_rules() {
        let dictionary = dictionary();

        let mut standard = session(&dictionary, "crane");
        let outcome = standard.submit_guess("eerie").unwrap();
        assert_eq!(outcome.record.feedback(), &[X, X, Y, X, G]);

        let mut simplified = session_with(&dictionary, "crane", Rules::simplified());
        let outcome = simplified.submit_guess("eerie").unwrap();
        assert_eq!(outcome.record.feedback(), &[Y, Y, Y, X, G]);
    }

    #[test]
    fn level_erase_is_the_same_under_both_rules() {
        let dictionary = dictionary();
        for rules in [Rules::default(), Rules::simplified()] {
            let mut session = session_with(&dictionary, "level", rules);
            let outcome = session.submit_guess("erase").unwrap();
            assert_eq!(outcome.record.feedback(), &[Y, X, X, X, Y]);
        }
    }

    #[test]
    fn alphabet_policy_applies_across_guesses() {
        let dictionary = dictionary();

        let upgrade = Rules::new(ScoringPolicy::Multiset, AlphabetPolicy::Upgrade);
        let mut session = session_with(&dictionary, "slate", upgrade);
        session.submit_guess("crane").unwrap(); // A exact
        session.submit_guess("audio").unwrap(); // A elsewhere
        assert_eq!(session.alphabet().get(b'A'), Some(G));

        let overwrite = Rules::new(ScoringPolicy::Multiset, AlphabetPolicy::Overwrite);
        let mut session = session_with(&dictionary, "slate", overwrite);
        session.submit_guess("crane").unwrap();
        session.submit_guess("audio").unwrap();
        assert_eq!(session.alphabet().get(b'A'), Some(Y));
    }

    #[test]
    fn observers_fire_once_per_accepted_guess() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        let seen: Rc<RefCell<Vec<(usize, GameState)>>> = Rc::default();
        let log = Rc::clone(&seen);
        session.subscribe(move |session: &Session<'_>| {
            let entry = (session.guesses().len(), session.state());
            log.borrow_mut().push(entry);
        });

        session.submit_guess("slate").unwrap();
        let _ = session.submit_guess("nope!");
        let _ = session.submit_guess("xylem");
        session.submit_guess("crane").unwrap();
        let _ = session.submit_guess("crane");

        assert_eq!(
            *seen.borrow(),
            [(1, GameState::InProgress), (2, GameState::Won)]
        );
    }

    #[test]
    fn observers_see_answer_only_after_game_over() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        let answers: Rc<RefCell<Vec<Option<Word>>>> = Rc::default();
        let log = Rc::clone(&answers);
        session.subscribe(move |session: &Session<'_>| {
            log.borrow_mut().push(session.answer());
        });

        session.submit_guess("trace").unwrap();
        session.submit_guess("crane").unwrap();

        assert_eq!(*answers.borrow(), [None, Some(Word::new("crane").unwrap())]);
    }

    #[test]
    fn every_observer_is_notified() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");
        let count = Rc::new(RefCell::new(0));

        for _ in 0..3 {
            let count = Rc::clone(&count);
            session.subscribe(move |_: &Session<'_>| *count.borrow_mut() += 1);
        }
        session.submit_guess("slate").unwrap();

        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn record_tiles_pair_letters_with_results() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");
        let outcome = session.submit_guess("trace").unwrap();

        let tiles: Vec<(u8, LetterResult)> = outcome.record.tiles().collect();
        assert_eq!(tiles[0], (b'T', X));
        assert_eq!(tiles[3], (b'C', Y));
    }

    #[test]
    fn sessions_share_a_dictionary() {
        let dictionary = dictionary();
        let mut first = session(&dictionary, "crane");
        let second = session(&dictionary, "slate");

        first.submit_guess("crane").unwrap();

        assert!(first.is_over());
        assert!(!second.is_over());
        assert!(second.guesses().is_empty());
    }
}
