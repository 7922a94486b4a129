//! Wordle - CLI
//!
//! Play Wordle in a full-screen TUI or line by line, or resolve a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_clone::{
    commands::{resolve_guess, run_simple},
    output::print_resolve_result,
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for choosing the secret word (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type one guess per line)
    Simple,

    /// Show the feedback a guess would get against a secret
    Resolve {
        /// The secret word
        secret: String,

        /// The guess to classify
        guess: String,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "builtin" => Dictionary::embedded().context("embedded word list is unusable"),
        path => load_from_file(path).with_context(|| format!("could not load word list '{path}'")),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_play_command(&dictionary, make_rng(cli.seed))
        }
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_simple(&dictionary, &mut make_rng(cli.seed)).context("line-mode game failed")
        }
        Commands::Resolve { secret, guess } => run_resolve_command(&secret, &guess),
    }
}

fn run_resolve_command(secret: &str, guess: &str) -> Result<()> {
    let result = resolve_guess(secret, guess).context("invalid word")?;
    print_resolve_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, rng: StdRng) -> Result<()> {
    use wordle_clone::interactive::{App, run_tui};

    let app = App::new(dictionary, rng);
    run_tui(app)
}
