//! The game dictionary
//!
//! An immutable, ordered list of valid words. Secrets are drawn from it uniformly
//! and every submitted guess must be a member.

use crate::core::{WORD_LEN, Word};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("word list contains no valid 5-letter words")]
    Empty,
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Immutable word list with case-insensitive membership
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LEN]>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(*word.chars()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Build a dictionary from raw strings, skipping entries that are not valid words
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if nothing valid remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_slice(&["apple", "ALLOY", "toolong"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("Apple"));
    /// assert!(!dictionary.contains("toolong"));
    /// ```
    pub fn from_slice(slice: &[&str]) -> Result<Self, DictionaryError> {
        Self::new(super::loader::words_from_slice(slice))
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the embedded list was built empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_slice(super::WORDS)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty dictionary cannot be built
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Case-insensitive exact membership test
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains_word(&word))
    }

    /// Membership test for an already validated word
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Pick a word uniformly at random
    pub fn random_word<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(
            Dictionary::from_slice(&[]),
            Err(DictionaryError::Empty)
        ));
        assert!(matches!(
            Dictionary::from_slice(&["abc", "123456"]),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn duplicates_are_dropped_in_order() {
        let dictionary = Dictionary::from_slice(&["crane", "apple", "CRANE", "alloy"]).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "apple", "alloy"]);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dictionary = Dictionary::from_slice(&["apple"]).unwrap();
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains("APPLE"));
        assert!(dictionary.contains("aPpLe"));
        assert!(!dictionary.contains("appl"));
        assert!(!dictionary.contains("alloy"));
    }

    #[test]
    fn random_word_comes_from_dictionary() {
        let dictionary = Dictionary::from_slice(&["crane", "apple", "alloy"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = dictionary.random_word(&mut rng);
            assert!(dictionary.contains_word(word));
        }
    }

    #[test]
    fn random_word_reaches_every_entry() {
        let dictionary = Dictionary::from_slice(&["crane", "apple", "alloy"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: FxHashSet<&str> = (0..200)
            .map(|_| dictionary.random_word(&mut rng).text())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn seeded_choice_is_reproducible() {
        let dictionary = Dictionary::embedded().unwrap();
        let a = dictionary.random_word(&mut StdRng::seed_from_u64(1)).clone();
        let b = dictionary.random_word(&mut StdRng::seed_from_u64(1)).clone();
        assert_eq!(a, b);
    }
}
