//! One row of the board
//!
//! An attempt is open while the player types into it and becomes immutable once
//! the controller attaches its [`Feedback`].

use crate::core::{Classification, Feedback, WORD_LEN, Word};

/// A guess row: up to five letters, classified after submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attempt {
    slots: [Option<u8>; WORD_LEN],
    len: usize,
    feedback: Option<Feedback>,
}

impl Attempt {
    /// An empty, open attempt
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; WORD_LEN],
            len: 0,
            feedback: None,
        }
    }

    /// Append a lowercase letter to the first empty slot
    ///
    /// Returns `false` (and changes nothing) if the row is full, already
    /// submitted, or `letter` is not in `a..=z`.
    pub fn push(&mut self, letter: u8) -> bool {
        if self.is_submitted() || self.is_full() || !letter.is_ascii_lowercase() {
            return false;
        }
        self.slots[self.len] = Some(letter);
        self.len += 1;
        true
    }

    /// Remove the last filled letter, if any
    pub fn pop(&mut self) -> Option<u8> {
        if self.is_submitted() || self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    /// Empty every slot of an open attempt
    pub fn clear(&mut self) {
        if !self.is_submitted() {
            *self = Self::new();
        }
    }

    pub(crate) fn submit(&mut self, feedback: Feedback) {
        debug_assert!(self.is_full());
        self.feedback = Some(feedback);
    }

    /// Number of filled slots
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == WORD_LEN
    }

    #[inline]
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.feedback.is_some()
    }

    /// Letter in a slot (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn slot(&self, position: usize) -> Option<u8> {
        self.slots[position]
    }

    /// The letters typed so far
    #[must_use]
    pub fn text(&self) -> String {
        self.slots.iter().flatten().map(|&b| char::from(b)).collect()
    }

    /// Feedback, once submitted
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Dictionary link for a submitted row
    #[must_use]
    pub fn definition_url(&self) -> Option<String> {
        if !self.is_submitted() {
            return None;
        }
        Word::new(&self.text()).ok().map(|word| word.definition_url())
    }

    /// Classification of a slot, once submitted
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn classification(&self, position: usize) -> Option<Classification> {
        self.feedback.as_ref().map(|f| f.at(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> Attempt {
        let mut attempt = Attempt::new();
        for b in text.bytes() {
            attempt.push(b);
        }
        attempt
    }

    #[test]
    fn push_fills_in_order() {
        let attempt = typed("app");
        assert_eq!(attempt.len(), 3);
        assert_eq!(attempt.text(), "app");
        assert_eq!(attempt.slot(2), Some(b'p'));
        assert_eq!(attempt.slot(3), None);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn slot_past_last_position_panics() {
        let _ = typed("app").slot(WORD_LEN);
    }

    #[test]
    fn push_stops_at_five() {
        let mut attempt = typed("apple");
        assert!(attempt.is_full());
        assert!(!attempt.push(b's'));
        assert_eq!(attempt.text(), "apple");
    }

    #[test]
    fn push_rejects_non_letters() {
        let mut attempt = Attempt::new();
        assert!(!attempt.push(b'1'));
        assert!(!attempt.push(b'A'));
        assert!(attempt.is_empty());
    }

    #[test]
    fn pop_removes_last() {
        let mut attempt = typed("ap");
        assert_eq!(attempt.pop(), Some(b'p'));
        assert_eq!(attempt.pop(), Some(b'a'));
        assert_eq!(attempt.pop(), None);
        assert!(attempt.is_empty());
    }

    #[test]
    fn submitted_attempt_is_frozen() {
        let mut attempt = typed("alloy");
        let secret = Word::new("apple").unwrap();
        let guess = Word::new("alloy").unwrap();
        attempt.submit(Feedback::resolve(&secret, &guess));

        assert!(attempt.is_submitted());
        assert!(!attempt.push(b'x'));
        assert_eq!(attempt.pop(), None);
        attempt.clear();
        assert_eq!(attempt.text(), "alloy");
        assert_eq!(attempt.classification(0), Some(Classification::Exact));
    }

    #[test]
    fn clear_empties_open_attempt() {
        let mut attempt = typed("cran");
        attempt.clear();
        assert!(attempt.is_empty());
        assert_eq!(attempt.classification(0), None);
    }

    #[test]
    fn definition_url_only_after_submission() {
        let mut attempt = typed("alloy");
        assert_eq!(attempt.definition_url(), None);

        let secret = Word::new("apple").unwrap();
        attempt.submit(Feedback::resolve(&secret, &Word::new("alloy").unwrap()));
        assert_eq!(
            attempt.definition_url().as_deref(),
            Some("https://en.wiktionary.org/wiki/alloy")
        );
    }
}
