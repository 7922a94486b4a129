//! Formatting utilities for terminal output

use crate::core::{Classification, KEYBOARD_ROWS, LetterBoard, LetterState, WORD_LEN};
use crate::game::Attempt;
use colored::{ColoredString, Colorize};

/// Render one tile, e.g. " A " on a green background
#[must_use]
pub fn tile(letter: Option<u8>, class: Option<Classification>) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |b| char::from(b).to_ascii_uppercase()));
    match class {
        Some(Classification::Exact) => text.black().on_green().bold(),
        Some(Classification::Present) => text.black().on_yellow().bold(),
        Some(Classification::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a board row, classified or still open
#[must_use]
pub fn colored_row(attempt: &Attempt) -> String {
    (0..WORD_LEN)
        .map(|i| tile(attempt.slot(i), attempt.classification(i)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a single keyboard key
#[must_use]
pub fn key_cap(letter: u8, state: LetterState) -> ColoredString {
    let text = char::from(letter).to_ascii_uppercase().to_string();
    match state {
        LetterState::Exact => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Used => text.bright_black(),
        LetterState::Unknown => text.bold(),
    }
}

/// Render the keyboard, one string per row, each row indented like a real one
#[must_use]
pub fn colored_keyboard(letters: &LetterBoard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|b| key_cap(b, letters.get(b)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
