//! Display functions for line-mode play and one-shot commands

use super::formatters::{colored_keyboard, colored_row, create_progress_bar};
use crate::commands::ResolveResult;
use crate::game::{Game, MAX_ATTEMPTS, Statistics, Summary};
use colored::Colorize;

/// Print every submitted row plus the open one
pub fn print_board(game: &Game) {
    println!();
    for attempt in game.history() {
        println!("  {}", colored_row(attempt));
    }
    if let Some(current) = game.current() {
        println!("  {}", colored_row(current));
    }
}

/// Print the keyboard with discovered letter states
pub fn print_keyboard(game: &Game) {
    println!();
    for row in colored_keyboard(game.letters()) {
        println!("  {row}");
    }
    println!();
}

/// Print the result of resolving a single guess
pub fn print_resolve_result(result: &ResolveResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_row(&result.attempt));
    println!("  {}\n", result.feedback.to_emoji());

    if result.feedback.is_solved() {
        println!("{}", "✅ Solved!".green().bold());
    } else {
        println!(
            "{} exact, {} present",
            result.feedback.count_exact(),
            result.feedback.count_present()
        );
    }
}

/// Print the end-of-game summary and running statistics
pub fn print_summary(summary: &Summary, stats: &Statistics) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    if summary.won {
        println!("{}", "  🎉 YOU WON! 🎉".bright_green().bold());
    } else {
        println!("{}", "  ❌ YOU LOST".red().bold());
    }
    println!(
        "  The word was {}",
        summary.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).bright_cyan());

    println!("\n  {}", "Your game:".bright_cyan());
    for row in summary.numbered_grid() {
        println!("  {row}");
    }

    println!("\n{}\n", summary.share_text());

    println!("📊 {}", "Statistics:".bright_cyan().bold());
    println!(
        "   Played: {}   Win %: {:.0}   Streak: {}   Max streak: {}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );

    let most = stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!();
}
