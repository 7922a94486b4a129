//! Terminal key mapping
//!
//! Turns crossterm key events into app actions. Typing keys become game
//! [`Key`]s; everything else drives the app itself.

use crate::game::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Key),
    NewGame,
    Quit,
    None,
}

/// Map a key event to an action
///
/// After the game ends, plain `n` and `q` start over and quit; while playing
/// they are letters like any other.
#[must_use]
pub fn action_for(event: KeyEvent, game_over: bool) -> Action {
    // Only process key press events (fixes Windows double-input bug)
    if event.kind != KeyEventKind::Press {
        return Action::None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('n') if ctrl => Action::NewGame,
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('n' | 'N') if game_over => Action::NewGame,
        KeyCode::Char('q' | 'Q') if game_over => Action::Quit,
        KeyCode::Enter => Action::Game(Key::Submit),
        KeyCode::Backspace => Action::Game(Key::Backspace),
        KeyCode::Char(c) if !ctrl => Key::from_char(c).map_or(Action::None, Action::Game),
        _ => Action::None,
    }
}
