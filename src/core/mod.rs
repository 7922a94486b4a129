//! Core domain types for Wordle
//!
//! Words, guess resolution and per-letter knowledge. Pure data with no I/O.

mod feedback;
mod letters;
mod word;

pub use feedback::{Classification, Feedback};
pub use letters::{KEYBOARD_ROWS, LetterBoard, LetterState};
pub use word::{ALPHABET_LEN, DEFINITION_BASE_URL, WORD_LEN, Word, WordError, letter_index};
