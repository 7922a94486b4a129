//! Collaborator notifications
//!
//! The controller calls these directly while it applies a key press. Within one
//! submission every `letter_changed` comes before the `row_revealed` for that
//! row, and `game_over` comes last.

use super::{Attempt, Summary};
use crate::core::LetterState;

/// Receives state changes from a [`Game`](super::Game)
///
/// Every method defaults to doing nothing, so a collaborator only implements
/// what it draws.
pub trait GameObserver {
    /// A keyboard letter became more informative
    fn letter_changed(&mut self, _letter: char, _state: LetterState) {}

    /// The open row gained or lost a letter
    fn row_edited(&mut self, _row: usize, _attempt: &Attempt) {}

    /// A row was submitted and classified
    fn row_revealed(&mut self, _row: usize, _attempt: &Attempt) {}

    /// The session reached `Won` or `Lost`
    fn game_over(&mut self, _summary: &Summary) {}
}

impl GameObserver for () {}
