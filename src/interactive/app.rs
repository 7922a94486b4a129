//! TUI application state and logic

use super::input::{Action, action_for};
use crate::core::LetterState;
use crate::game::{Attempt, Game, GameError, GameObserver, Key, Statistics, Summary, Transition};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub game: Game<'a>,
    pub log: MessageLog,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Message history plus the summary of the last finished game
///
/// Receives the controller's notifications while a key is applied.
#[derive(Debug, Default)]
pub struct MessageLog {
    pub messages: Vec<Message>,
    pub summary: Option<Summary>,
}

impl MessageLog {
    pub fn add(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

impl GameObserver for MessageLog {
    fn letter_changed(&mut self, letter: char, state: LetterState) {
        debug!("keyboard {letter} -> {state:?}");
    }

    fn row_revealed(&mut self, row: usize, attempt: &Attempt) {
        if let Some(feedback) = attempt.feedback() {
            let mut text = format!(
                "{}: {} {}",
                row + 1,
                attempt.text().to_uppercase(),
                feedback.to_emoji()
            );
            if let Some(url) = attempt.definition_url() {
                text.push_str(&format!("  📕 {url}"));
            }
            self.add(text, MessageStyle::Info);
        }
    }

    fn game_over(&mut self, summary: &Summary) {
        let celebration = match (summary.won, summary.guesses()) {
            (false, _) => "Out of guesses!",
            (true, 1) => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            (true, 2) => "🔥 MAGNIFICENT! Two guesses! 🔥",
            (true, 3) => "✨ SPLENDID! Three guesses! ✨",
            (true, 4) => "👏 GREAT JOB! Four guesses! 👏",
            (true, 5) => "🎉 NICE WORK! Five guesses! 🎉",
            (true, _) => "😅 PHEW! Got it in six! 😅",
        };
        let style = if summary.won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add(celebration, style);
        self.summary = Some(summary.clone());
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, mut rng: StdRng) -> Self {
        let game = Game::new(dictionary, &mut rng);
        let mut log = MessageLog::default();
        log.add(
            "Guess the hidden 5-letter word. Type and press Enter.",
            MessageStyle::Info,
        );

        Self {
            dictionary,
            game,
            log,
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    /// Apply one action from the input layer
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Game(key) => self.press(key),
            Action::NewGame => self.new_game(),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn press(&mut self, key: Key) {
        match self.game.handle_key(key, &mut self.log) {
            Ok(Transition::Won | Transition::Lost) => {
                if let Some(summary) = &self.log.summary {
                    self.stats.record(summary);
                }
            }
            Ok(_) => {}
            // Keys after the end are simply dropped
            Err(GameError::InputIgnored) => {}
            Err(e) => self.log.add(e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::new(self.dictionary, &mut self.rng);
        self.log.messages.clear();
        self.log.summary = None;
        self.log.add("New game started!", MessageStyle::Info);
    }

    /// Summary to show, once the current game has ended
    #[must_use]
    pub fn summary(&self) -> Option<&Summary> {
        self.log.summary.as_ref()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut terminal = or_restore(enter_screen, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Run a setup step, undoing the terminal changes already made if it fails
fn or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.apply(action_for(key, app.game.is_ended()));
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use rand::SeedableRng;

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&["apple", "alloy", "crane", "robot", "lemon"]).unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for b in word.bytes() {
            app.apply(Action::Game(Key::Letter(b)));
        }
        app.apply(Action::Game(Key::Submit));
    }

    #[test]
    fn winning_records_stats_and_summary() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(9));
        let secret = app.game.secret().text().to_string();

        type_word(&mut app, &secret);

        assert_eq!(app.game.state(), GameState::Won);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.summary().is_some_and(|s| s.won));
    }

    #[test]
    fn revealed_row_links_to_its_definition() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(9));
        let guess = if app.game.secret().text() == "robot" { "lemon" } else { "robot" };
        type_word(&mut app, guess);

        let last = app.log.messages.last().unwrap();
        assert!(last.text.starts_with(&format!("1: {}", guess.to_uppercase())));
        assert!(last.text.ends_with(&format!("📕 https://en.wiktionary.org/wiki/{guess}")));
    }

    #[test]
    fn failed_setup_restores_terminal() {
        let mut restored = false;
        let result: Result<()> = or_restore(|| Err(anyhow::anyhow!("no tty")), || restored = true);
        assert!(result.is_err());
        assert!(restored);

        let mut restored = false;
        assert_eq!(or_restore(|| Ok(3), || restored = true).unwrap(), 3);
        assert!(!restored);
    }

    #[test]
    fn invalid_submission_shows_error() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(9));
        type_word(&mut app, "ab");

        let last = app.log.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, GameError::IncompleteGuess.to_string());
        assert!(app.game.history().is_empty());
    }

    #[test]
    fn new_game_resets_board_but_keeps_stats() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(9));
        let secret = app.game.secret().text().to_string();
        type_word(&mut app, &secret);

        app.apply(Action::NewGame);
        assert_eq!(app.game.state(), GameState::AwaitingInput);
        assert!(app.game.history().is_empty());
        assert!(app.summary().is_none());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn input_after_game_over_is_dropped_quietly() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(9));
        let secret = app.game.secret().text().to_string();
        type_word(&mut app, &secret);
        let messages = app.log.messages.len();

        app.apply(Action::Game(Key::Letter(b'x')));
        assert_eq!(app.log.messages.len(), messages);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn message_log_keeps_last_five() {
        let mut log = MessageLog::default();
        for i in 0..8 {
            log.add(format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(log.messages.len(), 5);
        assert_eq!(log.messages[0].text, "m3");
    }
}
