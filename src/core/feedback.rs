//! Guess resolution
//!
//! Resolving a guess against the secret produces one [`Classification`] per
//! position:
//! - `Exact`   = right letter, right spot
//! - `Present` = letter is in the secret, but elsewhere
//! - `Absent`  = letter not in the secret, or every copy is already accounted for

use super::letters::LetterState;
use super::word::{WORD_LEN, Word, letter_index};

/// Per-position result of a submitted guess
///
/// Ordered by how much it tells the player: `Absent < Present < Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Absent,
    Present,
    Exact,
}

impl Classification {
    /// The keyboard state this classification proposes for its letter
    #[must_use]
    pub const fn letter_state(self) -> LetterState {
        match self {
            Self::Exact => LetterState::Exact,
            Self::Present => LetterState::Present,
            Self::Absent => LetterState::Used,
        }
    }

    /// Share-grid square for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Classification of a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    guess: [u8; WORD_LEN],
    positions: [Classification; WORD_LEN],
}

impl Feedback {
    /// Resolve `guess` against `secret`
    ///
    /// Duplicate letters are handled the way the real game does: a letter is
    /// only marked as many times (exact + present) as it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. Count every letter of the secret
    /// 2. First pass: mark exact matches and spend their counts
    /// 3. Second pass: mark present from whatever count is left, else absent
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Classification::*, Feedback, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("alloy").unwrap();
    /// let feedback = Feedback::resolve(&secret, &guess);
    ///
    /// assert_eq!(feedback.positions(), &[Exact, Present, Absent, Absent, Absent]);
    /// assert!(!feedback.is_solved());
    /// ```
    #[must_use]
    pub fn resolve(secret: &Word, guess: &Word) -> Self {
        let mut positions = [Classification::Absent; WORD_LEN];
        let mut available = secret.letter_counts();

        // Exact matches must consume their letters before any present marks
        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                positions[i] = Classification::Exact;
                available[letter_index(g)] -= 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if positions[i] == Classification::Exact {
                continue;
            }
            let count = &mut available[letter_index(g)];
            if *count > 0 {
                positions[i] = Classification::Present;
                *count -= 1;
            }
        }

        Self {
            guess: *guess.chars(),
            positions,
        }
    }

    /// Classification of each position
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[Classification; WORD_LEN] {
        &self.positions
    }

    /// Classification at a single position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Classification {
        self.positions[position]
    }

    /// The guessed letters this feedback belongs to
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &[u8; WORD_LEN] {
        &self.guess
    }

    /// True when every position is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.positions.iter().all(|&c| c == Classification::Exact)
    }

    /// Number of exact positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Classification::Exact)
    }

    /// Number of present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Classification::Present)
    }

    fn count(&self, class: Classification) -> usize {
        self.positions.iter().filter(|&&c| c == class).count()
    }

    /// One keyboard update per position, in position order
    ///
    /// The same letter may be proposed more than once with different states;
    /// merging them is up to the keyboard owner.
    pub fn letter_updates(&self) -> impl Iterator<Item = (u8, LetterState)> + '_ {
        self.guess
            .iter()
            .zip(self.positions)
            .map(|(&letter, class)| (letter, class.letter_state()))
    }

    /// Share-grid row, e.g. "🟩🟨⬛⬛⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.positions.iter().map(|c| c.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Exact, Present};
    use super::*;

    fn resolve(secret: &str, guess: &str) -> Feedback {
        Feedback::resolve(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn at_past_last_position_panics() {
        let _ = resolve("apple", "alloy").at(WORD_LEN);
    }

    #[test]
    fn all_absent() {
        let feedback = resolve("abcde", "fghij");
        assert_eq!(feedback.positions(), &[Absent; 5]);
        assert_eq!(feedback.count_exact(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn guess_equal_to_secret_is_solved() {
        for word in ["crane", "level", "aaaaa", "speed"] {
            let feedback = resolve(word, word);
            assert!(feedback.is_solved());
            assert_eq!(feedback.count_exact(), 5);
        }
    }

    #[test]
    fn apple_alloy_spends_single_l_once() {
        let feedback = resolve("apple", "alloy");
        assert_eq!(
            feedback.positions(),
            &[Exact, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn level_elfel_respects_multiplicity() {
        let feedback = resolve("level", "elfel");
        assert_eq!(
            feedback.positions(),
            &[Present, Present, Absent, Exact, Exact]
        );
    }

    #[test]
    fn exact_match_consumes_budget_before_present() {
        // The only E is matched exactly at the end, so the leading E gets nothing
        let feedback = resolve("crane", "eerie");
        assert_eq!(feedback.positions(), &[Absent, Absent, Present, Absent, Exact]);
    }

    #[test]
    fn naive_contains_check_would_be_wrong() {
        // SPEED has one S; the guess repeats it, only one may light up
        let feedback = resolve("speed", "sassy");
        assert_eq!(feedback.positions(), &[Exact, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn duplicate_letters_both_present() {
        // Both E's of ERASE are available to the two E's of SPEED
        let feedback = resolve("erase", "speed");
        assert_eq!(
            feedback.positions(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn robot_against_floor() {
        let feedback = resolve("floor", "robot");
        assert_eq!(
            feedback.positions(),
            &[Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn marks_never_exceed_secret_letter_count() {
        let words = [
            "level", "elfel", "apple", "alloy", "speed", "erase", "sassy", "aaaaa", "llama",
            "belle", "eerie", "robot", "floor", "mamma",
        ];
        for secret in words {
            for guess in words {
                let feedback = resolve(secret, guess);
                let secret_counts = Word::new(secret).unwrap().letter_counts();
                let mut marked = [0u8; 26];
                for (i, &letter) in guess.as_bytes().iter().enumerate() {
                    if feedback.at(i) != Absent {
                        marked[letter_index(letter)] += 1;
                    }
                    if feedback.at(i) == Exact {
                        assert_eq!(secret.as_bytes()[i], letter);
                    }
                }
                for l in 0..26 {
                    assert!(
                        marked[l] <= secret_counts[l],
                        "{guess} vs {secret}: letter {} over-marked",
                        (b'a' + l as u8) as char
                    );
                }
            }
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        assert_eq!(resolve("level", "elfel"), resolve("level", "elfel"));
        assert_eq!(resolve("apple", "alloy"), resolve("apple", "alloy"));
    }

    #[test]
    fn letter_updates_follow_positions() {
        let feedback = resolve("apple", "alloy");
        let updates: Vec<_> = feedback.letter_updates().collect();
        assert_eq!(
            updates,
            vec![
                (b'a', LetterState::Exact),
                (b'l', LetterState::Present),
                (b'l', LetterState::Used),
                (b'o', LetterState::Used),
                (b'y', LetterState::Used),
            ]
        );
    }

    #[test]
    fn emoji_row() {
        assert_eq!(resolve("apple", "alloy").to_emoji(), "🟩🟨⬛⬛⬛");
        assert_eq!(resolve("crane", "crane").to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn classification_ordering() {
        assert!(Exact > Present);
        assert!(Present > Absent);
    }
}
