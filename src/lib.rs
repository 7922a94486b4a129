//! Wordle
//!
//! Guess a hidden five-letter word in six tries, in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::Word;
//! use wordle_clone::game::{Game, Transition};
//! use wordle_clone::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_slice(&["apple", "alloy"]).unwrap();
//! let mut game = Game::with_secret(&dictionary, Word::new("apple").unwrap());
//!
//! assert_eq!(game.submit_word("alloy", &mut ()), Ok(Transition::Continue));
//! assert_eq!(game.history()[0].feedback().unwrap().to_emoji(), "🟩🟨⬛⬛⬛");
//! assert_eq!(game.submit_word("apple", &mut ()), Ok(Transition::Won));
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
