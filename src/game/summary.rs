//! End-of-game summary and share grid

use crate::core::{Feedback, Word};
use std::fmt::Write;

use super::MAX_ATTEMPTS;

/// Outcome of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub won: bool,
    pub secret: Word,
    pub attempts: Vec<Feedback>,
}

impl Summary {
    /// Number of guesses used
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.attempts.len()
    }

    /// Score as shown in the share header: "3/6" or "X/6"
    #[must_use]
    pub fn score(&self) -> String {
        if self.won {
            format!("{}/{MAX_ATTEMPTS}", self.guesses())
        } else {
            format!("X/{MAX_ATTEMPTS}")
        }
    }

    /// One emoji row per attempt
    #[must_use]
    pub fn grid(&self) -> Vec<String> {
        self.attempts.iter().map(Feedback::to_emoji).collect()
    }

    /// Emoji rows numbered from 1, as listed in the end-of-game panel
    ///
    /// ```
    /// use wordle_clone::core::{Feedback, Word};
    /// use wordle_clone::game::Summary;
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let attempts = vec![Feedback::resolve(&secret, &secret)];
    /// let summary = Summary { won: true, secret, attempts };
    /// assert_eq!(summary.numbered_grid(), vec!["(1) 🟩🟩🟩🟩🟩"]);
    /// ```
    #[must_use]
    pub fn numbered_grid(&self) -> Vec<String> {
        self.grid()
            .into_iter()
            .enumerate()
            .map(|(i, row)| format!("({}) {row}", i + 1))
            .collect()
    }

    /// Plain-text result for sharing
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Feedback, Word};
    /// use wordle_clone::game::Summary;
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let attempts = vec![
    ///     Feedback::resolve(&secret, &Word::new("alloy").unwrap()),
    ///     Feedback::resolve(&secret, &secret),
    /// ];
    /// let summary = Summary { won: true, secret, attempts };
    ///
    /// assert_eq!(summary.share_text(), "Wordle 2/6\n\n🟩🟨⬛⬛⬛\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let mut out = format!("Wordle {}\n", self.score());
        for row in self.grid() {
            // Writing to a String cannot fail
            let _ = write!(out, "\n{row}");
        }
        out
    }
}
