//! Normalized input vocabulary
//!
//! Physical keys, on-screen keys and typed lines all collapse into [`Key`]
//! before they reach the controller.

/// A single logical key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A lowercase letter `a..=z`
    Letter(u8),
    Backspace,
    Submit,
}

impl Key {
    /// Map a character to a key
    ///
    /// Letters are lowercased; newline submits; BS and DEL delete.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\n' | '\r' => Some(Self::Submit),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            c if c.is_ascii_alphabetic() => Some(Self::Letter(c.to_ascii_lowercase() as u8)),
            _ => None,
        }
    }

    /// Parse a key name such as `"Enter"`, `"Backspace"` or `"q"`
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::game::Key;
    ///
    /// assert_eq!(Key::parse("Enter"), Some(Key::Submit));
    /// assert_eq!(Key::parse("BACKSPACE"), Some(Key::Backspace));
    /// assert_eq!(Key::parse("Q"), Some(Key::Letter(b'q')));
    /// assert_eq!(Key::parse("Shift"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let lower = raw.to_ascii_lowercase();
        match lower.as_str() {
            "enter" => Some(Self::Submit),
            "backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }
}
