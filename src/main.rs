//! Boggle - CLI
//!
//! Word-search game on a rolled letter grid with TUI and CLI modes, plus a
//! solver and a board statistics runner.

use anyhow::Result;
use boggle_engine::{
    commands::{SolveConfig, run_simple, run_stats, solve_board},
    core::{Dimension, Lexicon},
    game::{DEFAULT_GAME_SECONDS, GameConfig},
    log::init_logger,
    output::{print_board_statistics, print_solve_result},
    wordlists::{embedded_lexicon, load_from_file},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "boggle",
    about = "Boggle word game with an exhaustive board solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board side length: 4 (default) or 5
    #[arg(short, long, global = true, default_value = "4", value_parser = clap::value_parser!(u8).range(4..=5))]
    dimension: u8,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Game length in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_GAME_SECONDS)]
    seconds: u32,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// List every word on a board
    Solve {
        /// Board letters in row-major order, 16 or 25 of them (random if omitted)
        #[arg(short, long)]
        board: Option<String>,

        /// Only print this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Generate many boards and check them
    Stats {
        /// Number of boards to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Load the dictionary named by the -w flag
///
/// A read that fails part way is reported and the game goes on with the words
/// read so far. The embedded list is used only when nothing could be read.
fn load_lexicon(wordlist: &str) -> Lexicon {
    if wordlist == "embedded" {
        return embedded_lexicon();
    }
    match load_from_file(wordlist) {
        Ok(lexicon) => lexicon,
        Err(partial) if partial.lexicon.is_empty() => {
            log::warn!("{wordlist}: {partial}; falling back to the embedded dictionary");
            embedded_lexicon()
        }
        Err(partial) => {
            log::warn!(
                "{wordlist}: {partial}; continuing with {} words",
                partial.lexicon.len()
            );
            partial.lexicon
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let dimension = Dimension::try_from(usize::from(cli.dimension))?;
    let config = GameConfig::new(dimension)
        .with_seed(cli.seed)
        .with_duration(cli.seconds);
    let lexicon = load_lexicon(&cli.wordlist);
    log::debug!("dictionary holds {} words", lexicon.len());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&lexicon, config),
        Commands::Simple => run_simple(&lexicon, &config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { board, limit } => run_solve_command(&lexicon, config, board, limit),
        Commands::Stats { count } => {
            println!("🎲 Generating {count} {dimension} boards...");
            let stats = run_stats(&config, &lexicon, count, true)?;
            print_board_statistics(&stats);
            Ok(())
        }
    }
}

fn run_solve_command(
    lexicon: &Lexicon,
    config: GameConfig,
    board: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    let mut solve = SolveConfig::new(config);
    solve.letters = board;
    solve.limit = limit;

    let result = solve_board(&solve, lexicon)?;
    print_solve_result(&result, solve.limit);
    Ok(())
}

fn run_play_command(lexicon: &Lexicon, config: GameConfig) -> Result<()> {
    use boggle_engine::interactive::{App, run_tui};

    let app = App::new(lexicon, config)?;
    run_tui(app)
}
