//! One-shot resolve command
//!
//! Classifies a single guess against a given secret without starting a game.

use crate::core::{Feedback, Word, WordError};
use crate::game::Attempt;

/// Result of resolving one guess
pub struct ResolveResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
    /// The guess as a submitted board row, ready to print
    pub attempt: Attempt,
}

/// Resolve `guess` against `secret`
///
/// Neither word has to be in the dictionary.
///
/// # Errors
///
/// Returns `WordError` if either argument is not a valid 5-letter word.
pub fn resolve_guess(secret: &str, guess: &str) -> Result<ResolveResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = Feedback::resolve(&secret, &guess);

    let mut attempt = Attempt::new();
    for &b in guess.chars() {
        attempt.push(b);
    }
    attempt.submit(feedback);

    Ok(ResolveResult {
        secret,
        guess,
        feedback,
        attempt,
    })
}
