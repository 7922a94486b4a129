//! Rejected input
//!
//! None of these are fatal. The controller reports them and leaves its state
//! exactly as it was.

use thiserror::Error;

/// Why the controller refused a key press
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Word must be exactly 5 letters")]
    IncompleteGuess,
    #[error("'{}' is not in the word list", .0.to_uppercase())]
    UnrecognizedWord(String),
    #[error("The game is over")]
    InputIgnored,
}
