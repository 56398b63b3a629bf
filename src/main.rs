//! Wordle Board - CLI
//!
//! Play Wordle in the terminal (TUI or line mode), score single guesses, or
//! analyze opening words.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wordle_board::{
    commands::{analyze_opener, check_guess, run_simple},
    config::{DEFAULT_ROWS, GameConfig},
    logging,
    output::{print_analysis_result, print_check_result},
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Wordle-style word guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list accepted as guesses (default: bundled list)
    #[arg(long, global = true, env = "WORDLE_VALID_WORDS")]
    valid_words: Option<PathBuf>,

    /// Word list secrets are drawn from (default: bundled list)
    #[arg(long, global = true, env = "WORDLE_SOLUTIONS")]
    solutions: Option<PathBuf>,

    /// Number of guesses per game
    #[arg(short, long, global = true, env = "WORDLE_ROWS", default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Seed for reproducible secret selection
    #[arg(long, global = true, env = "WORDLE_SEED")]
    seed: Option<u64>,

    /// Log level when WORDLE_LOG is unset: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode, one guess per line
    Simple,

    /// Score a single guess against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Score an opening word against every possible secret
    Analyze {
        /// Opening word to analyze
        word: String,

        /// Number of most common patterns to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            valid_words: self.valid_words.clone(),
            solutions: self.solutions.clone(),
            rows: self.rows,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_file.as_deref())?;

    let config = cli.game_config();
    config.validate()?;
    let lists = config.load_word_lists()?;
    info!(
        valid = lists.valid().len(),
        solutions = lists.solutions().len(),
        word_len = lists.word_len(),
        "word lists ready"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &lists),
        Commands::Simple => run_simple_command(&config, &lists),
        Commands::Check { secret, guess } => {
            let result = check_guess(&secret, &guess, &lists)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Analyze { word, top } => {
            let result = analyze_opener(&word, &lists, top, true)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(config: &GameConfig, lists: &WordLists) -> Result<()> {
    use wordle_board::interactive::{App, run_tui};

    let app = App::new(lists, config.rows, config.rng())?;
    let stats = run_tui(app)?;
    info!(games = stats.total_games, won = stats.games_won, "session finished");
    Ok(())
}

fn run_simple_command(config: &GameConfig, lists: &WordLists) -> Result<()> {
    let mut rng = config.rng();
    let stats = run_simple(lists, config.rows, &mut rng)?;
    if stats.total_games > 0 {
        println!(
            "Played {} | Won {} | Win rate {:.0}% | Best streak {}",
            stats.total_games,
            stats.games_won,
            stats.win_rate(),
            stats.max_streak
        );
    }
    Ok(())
}
