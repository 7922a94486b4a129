//! Keyboard letter states
//!
//! Tracks what the player has learned about each of the 26 letters. States only
//! ever move up: `Unknown < Used < Present < Exact`.

use super::word::{ALPHABET_LEN, letter_index};

/// What is known about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterState {
    #[default]
    Unknown,
    Used,
    Present,
    Exact,
}

/// On-screen keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Per-letter state for the whole alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBoard {
    states: [LetterState; ALPHABET_LEN],
}

impl Default for LetterBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterBoard {
    /// A board with every letter unknown
    #[must_use]
    pub const fn new() -> Self {
        Self {
            states: [LetterState::Unknown; ALPHABET_LEN],
        }
    }

    /// Current state of a lowercase ASCII letter
    ///
    /// Anything outside `a..=z` reports `Unknown`.
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterState {
        if letter.is_ascii_lowercase() {
            self.states[letter_index(letter)]
        } else {
            LetterState::Unknown
        }
    }

    /// Merge a proposed state, keeping the more informative one
    ///
    /// Returns `true` if the stored state changed.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{LetterBoard, LetterState};
    ///
    /// let mut board = LetterBoard::new();
    /// assert!(board.merge(b'a', LetterState::Exact));
    /// assert!(!board.merge(b'a', LetterState::Used));
    /// assert_eq!(board.get(b'a'), LetterState::Exact);
    /// ```
    pub fn merge(&mut self, letter: u8, state: LetterState) -> bool {
        if !letter.is_ascii_lowercase() {
            return false;
        }
        let slot = &mut self.states[letter_index(letter)];
        if state > *slot {
            *slot = state;
            true
        } else {
            false
        }
    }

    /// Iterate `(letter, state)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterState)> + '_ {
        (b'a'..=b'z').zip(self.states.iter().copied())
    }
}
