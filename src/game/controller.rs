//! Game controller
//!
//! Owns one session: the secret, the submitted rows, the open row and the
//! keyboard. Every key press goes through [`Game::handle_key`].
//!
//! ```text
//! AwaitingInput --letter/backspace--> AwaitingInput
//! AwaitingInput --submit (wrong, rows left)--> Continue --> AwaitingInput
//! AwaitingInput --submit (solved)--> Won
//! AwaitingInput --submit (sixth miss)--> Lost
//! ```

use super::{Attempt, GameError, GameObserver, Key, MAX_ATTEMPTS, Summary};
use crate::core::{Feedback, LetterBoard, Word};
use crate::wordlists::Dictionary;
use log::{debug, trace};
use rand::Rng;

/// Where the session is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingInput,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What an accepted key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The open row changed
    Edited,
    /// Nothing to do (full row, empty row on backspace)
    Unchanged,
    /// Wrong guess, a fresh row is open
    Continue,
    Won,
    Lost,
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Game<'d> {
    dictionary: &'d Dictionary,
    secret: Word,
    history: Vec<Attempt>,
    current: Option<Attempt>,
    letters: LetterBoard,
    state: GameState,
}

impl<'d> Game<'d> {
    /// Start a session with a secret drawn uniformly from `dictionary`
    pub fn new<R: Rng>(dictionary: &'d Dictionary, rng: &mut R) -> Self {
        let secret = dictionary.random_word(rng).clone();
        Self::with_secret(dictionary, secret)
    }

    /// Start a session with a known secret
    ///
    /// The secret does not have to be in the dictionary.
    #[must_use]
    pub fn with_secret(dictionary: &'d Dictionary, secret: Word) -> Self {
        debug!("new session ({} words in dictionary)", dictionary.len());
        Self {
            dictionary,
            secret,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            current: Some(Attempt::new()),
            letters: LetterBoard::new(),
            state: GameState::AwaitingInput,
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// - `GameError::InputIgnored` once the game has ended
    /// - `GameError::IncompleteGuess` on submit with fewer than 5 letters
    /// - `GameError::UnrecognizedWord` on submit of a word not in the dictionary
    ///
    /// A rejected key leaves the session untouched.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    /// use wordle_clone::game::{Game, GameError, Key, Transition};
    /// use wordle_clone::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_slice(&["apple", "alloy"]).unwrap();
    /// let mut game = Game::with_secret(&dictionary, Word::new("apple").unwrap());
    ///
    /// assert_eq!(game.handle_key(Key::Submit, &mut ()), Err(GameError::IncompleteGuess));
    /// for b in *b"apple" {
    ///     game.handle_key(Key::Letter(b), &mut ()).unwrap();
    /// }
    /// assert_eq!(game.handle_key(Key::Submit, &mut ()), Ok(Transition::Won));
    /// ```
    pub fn handle_key(
        &mut self,
        key: Key,
        observer: &mut dyn GameObserver,
    ) -> Result<Transition, GameError> {
        trace!("key {key:?} in {:?}", self.state);
        let row = self.history.len();
        let Some(current) = self.current.as_mut() else {
            return Err(GameError::InputIgnored);
        };

        match key {
            Key::Letter(letter) => {
                if current.push(letter) {
                    observer.row_edited(row, current);
                    Ok(Transition::Edited)
                } else {
                    Ok(Transition::Unchanged)
                }
            }
            Key::Backspace => {
                if current.pop().is_some() {
                    observer.row_edited(row, current);
                    Ok(Transition::Edited)
                } else {
                    Ok(Transition::Unchanged)
                }
            }
            Key::Submit => self.submit(observer),
        }
    }

    /// Replace the open row with `word` and submit it
    ///
    /// For line-oriented front ends that read whole words.
    ///
    /// # Errors
    ///
    /// Same as [`Game::handle_key`]. Anything other than exactly five ASCII
    /// letters is `IncompleteGuess`. A rejected word leaves the open row as
    /// it was and sends no notification.
    pub fn submit_word(
        &mut self,
        word: &str,
        observer: &mut dyn GameObserver,
    ) -> Result<Transition, GameError> {
        if self.current.is_none() {
            return Err(GameError::InputIgnored);
        }

        let guess = Word::new(word).map_err(|_| GameError::IncompleteGuess)?;
        if !self.dictionary.contains_word(&guess) {
            return Err(GameError::UnrecognizedWord(guess.text().to_string()));
        }

        let row = self.history.len();
        if let Some(current) = self.current.as_mut() {
            current.clear();
            for &b in guess.chars() {
                current.push(b);
            }
            observer.row_edited(row, current);
        }
        self.submit(observer)
    }

    fn submit(&mut self, observer: &mut dyn GameObserver) -> Result<Transition, GameError> {
        let guess = {
            let current = self.current.as_ref().ok_or(GameError::InputIgnored)?;
            if !current.is_full() {
                return Err(GameError::IncompleteGuess);
            }
            let text = current.text();
            match Word::new(&text) {
                Ok(word) if self.dictionary.contains_word(&word) => word,
                _ => return Err(GameError::UnrecognizedWord(text)),
            }
        };

        let feedback = Feedback::resolve(&self.secret, &guess);
        debug!("{guess} -> {}", feedback.to_emoji());

        // Keyboard first, then the reveal
        for (letter, state) in feedback.letter_updates() {
            if self.letters.merge(letter, state) {
                observer.letter_changed(char::from(letter), self.letters.get(letter));
            }
        }

        let mut attempt = self.current.take().ok_or(GameError::InputIgnored)?;
        attempt.submit(feedback);
        let row = self.history.len();
        self.history.push(attempt);
        observer.row_revealed(row, &self.history[row]);

        let transition = if feedback.is_solved() {
            self.state = GameState::Won;
            Transition::Won
        } else if self.history.len() == MAX_ATTEMPTS {
            self.state = GameState::Lost;
            Transition::Lost
        } else {
            self.current = Some(Attempt::new());
            Transition::Continue
        };
        debug!("attempt {} -> {transition:?}", row + 1);

        if let Some(summary) = self.summary() {
            observer.game_over(&summary);
        }
        Ok(transition)
    }

    /// Summary of the session, once it has ended
    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        if !self.is_ended() {
            return None;
        }
        Some(Summary {
            won: self.state == GameState::Won,
            secret: self.secret.clone(),
            attempts: self
                .history
                .iter()
                .filter_map(Attempt::feedback)
                .copied()
                .collect(),
        })
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.state.is_terminal()
    }

    /// Submitted rows, oldest first
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// The open row; `None` once the game has ended
    #[must_use]
    pub const fn current(&self) -> Option<&Attempt> {
        self.current.as_ref()
    }

    /// Index of the open row
    #[must_use]
    pub fn current_row(&self) -> Option<usize> {
        self.current.as_ref().map(|_| self.history.len())
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterBoard {
        &self.letters
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// The secret word
    ///
    /// Front ends should only reveal it after the game ends.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }
}
