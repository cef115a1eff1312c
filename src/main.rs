//! Absurdle - CLI
//!
//! Adversarial Wordle with TUI and line-based modes.

use absurdle::{
    commands::{analyze_word, run_simple, suggest_guess},
    config::{WordlistSource, default_log_filter},
    game::{Dictionary, GameSession},
    output::{print_analysis_result, print_hint_result},
};
use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "absurdle",
    about = "Adversarial Wordle: the hidden word keeps changing to dodge your guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: WordlistSource,

    /// Log scoring details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show how a guess splits the word list and what the adversary keeps
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Find the opening guess that leaves the adversary the least room
    Hint,
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(verbose).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = Arc::new(cli.wordlist.load()?);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary),
        Commands::Simple => run_simple(&mut GameSession::new(dictionary)),
        Commands::Analyze { word } => run_analyze_command(&word, &dictionary),
        Commands::Hint => run_hint_command(&dictionary),
    }
}

fn run_analyze_command(word: &str, dictionary: &Dictionary) -> Result<()> {
    let result = analyze_word(word, dictionary)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_hint_command(dictionary: &Dictionary) -> Result<()> {
    println!("Scoring {} opening guesses...", dictionary.len());

    let pool = dictionary.sorted();
    let result = suggest_guess(&pool, dictionary.as_set(), true)
        .ok_or_else(|| anyhow!("word list is empty"))?;

    print_hint_result(&result);
    Ok(())
}

fn run_play_command(dictionary: Arc<Dictionary>) -> Result<()> {
    use absurdle::interactive::{App, run_tui};

    let app = App::new(GameSession::new(dictionary));
    run_tui(app)
}
