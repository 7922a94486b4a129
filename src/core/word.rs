//! Five-letter word representation
//!
//! A `Word` is the validated form of every guess and every secret: exactly five
//! lowercase ASCII letters.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Dictionary site used to look up a guessed word
pub const DEFINITION_BASE_URL: &str = "https://en.wiktionary.org/wiki/";

/// A validated 5-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased and surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    ///
    /// let word = Word::new("APPLE").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("apples").is_err());
    /// assert!(Word::new("app1e").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Link to the word's dictionary entry
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.definition_url(), "https://en.wiktionary.org/wiki/crane");
    /// ```
    #[must_use]
    pub fn definition_url(&self) -> String {
        format!("{DEFINITION_BASE_URL}{}", self.text)
    }

    /// Count of each letter, indexed by `letter - b'a'`
    ///
    /// The resolver spends these counts as it hands out exact and present marks.
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

/// Alphabet index of a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new(" CrAnE\n").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("añejo"), Err(WordError::NonAscii));
    }

    #[test]
    fn definition_url_uses_lowercase_text() {
        let word = Word::new("  ALLOY ").unwrap();
        assert_eq!(word.definition_url(), format!("{DEFINITION_BASE_URL}alloy"));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.char_at(0), b'a');
        assert_eq!(word.char_at(1), b'p');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let counts = Word::new("level").unwrap().letter_counts();
        assert_eq!(counts[letter_index(b'l')], 2);
        assert_eq!(counts[letter_index(b'e')], 2);
        assert_eq!(counts[letter_index(b'v')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "Alloy".parse().unwrap();
        assert_eq!(format!("{word}"), "alloy");
    }
}
