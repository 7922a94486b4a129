//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: one guess per line.

use crate::core::LetterState;
use crate::game::{Attempt, Game, GameObserver, MAX_ATTEMPTS, Statistics, Summary};
use crate::output::formatters::key_cap;
use crate::output::{print_board, print_keyboard, print_summary};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Prints each revealed row, its dictionary link and the letters it uncovered
#[derive(Default)]
struct LineReporter {
    discovered: Vec<(char, LetterState)>,
}

impl GameObserver for LineReporter {
    fn letter_changed(&mut self, letter: char, state: LetterState) {
        if state >= LetterState::Present {
            self.discovered.push((letter, state));
        }
    }

    fn row_revealed(&mut self, row: usize, attempt: &Attempt) {
        println!("\n  {}   ({}/{MAX_ATTEMPTS})", attempt.text().to_uppercase(), row + 1);
        if let Some(url) = attempt.definition_url() {
            println!("  📕 {url}");
        }
        if !self.discovered.is_empty() {
            let found: Vec<String> = self
                .discovered
                .drain(..)
                .map(|(letter, state)| key_cap(letter as u8, state).to_string())
                .collect();
            println!("  New letters: {}", found.join(" "));
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_simple<R: Rng>(dictionary: &Dictionary, rng: &mut R) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       Wordle - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in {MAX_ATTEMPTS} tries.");
    println!("Type a word and press Enter. Commands: 'quit' to exit, 'new' to start over.\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stats = Statistics::default();

    loop {
        let mut game = Game::new(dictionary, rng);
        match play_session(&mut game, &mut input)? {
            SessionEnd::Finished(summary) => {
                stats.record(&summary);
                print_summary(&summary, &stats);
                match get_user_input(&mut input, "Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => println!("\n🔄 New game started!\n"),
                    _ => break,
                }
            }
            SessionEnd::Restart => println!("\n🔄 New game started!\n"),
            SessionEnd::Quit => break,
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// How a line-mode session stopped
#[derive(Debug)]
pub enum SessionEnd {
    Finished(Summary),
    Restart,
    /// `quit` or end of input
    Quit,
}

/// Drive one game from line input until it ends or the player leaves
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn play_session<B: BufRead>(game: &mut Game, input: &mut B) -> io::Result<SessionEnd> {
    let mut reporter = LineReporter::default();

    while !game.is_ended() {
        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", game.attempts_used() + 1);
        let line = match read_line(input, &prompt)? {
            Some(line) => line,
            None => return Ok(SessionEnd::Quit),
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(SessionEnd::Quit),
            "new" | "n" => return Ok(SessionEnd::Restart),
            "" => continue,
            word => match game.submit_word(word, &mut reporter) {
                Ok(_) => {
                    print_board(game);
                    print_keyboard(game);
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }

    Ok(game
        .summary()
        .map_or(SessionEnd::Quit, SessionEnd::Finished))
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<B: BufRead>(input: &mut B, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Get user input with a prompt, empty at end of input
fn get_user_input<B: BufRead>(input: &mut B, prompt: &str) -> io::Result<String> {
    Ok(read_line(input, prompt)?.unwrap_or_default())
}
