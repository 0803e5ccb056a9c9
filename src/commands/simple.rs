//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. The clock runs on wall time and is
//! brought up to date after every line of input.

use crate::core::{Lexicon, Position};
use crate::game::{GameConfig, GameSession, Outcome, SessionError, TimerNotice};
use crate::output::display::{print_board, print_session_summary};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Word(String),
    Path(Vec<Position>),
    Board,
    Words,
    Quit,
    Unknown(String),
}

/// Parse one line of player input
///
/// `:board`, `:words` and `:quit` are commands, `@r,c r,c ...` selects a path
/// of cells, anything else is a typed word.
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    match input {
        ":board" | ":b" => Command::Board,
        ":words" | ":w" => Command::Words,
        ":quit" | ":q" => Command::Quit,
        _ if input.starts_with(':') => Command::Unknown(input.to_string()),
        _ => match input.strip_prefix('@') {
            Some(cells) => parse_path(cells).map_or_else(
                || Command::Unknown(input.to_string()),
                Command::Path,
            ),
            None => Command::Word(input.to_lowercase()),
        },
    }
}

fn parse_path(cells: &str) -> Option<Vec<Position>> {
    cells
        .split_whitespace()
        .map(|cell| {
            let (row, col) = cell.split_once(',')?;
            Some(Position::new(row.trim().parse().ok()?, col.trim().parse().ok()?))
        })
        .collect()
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// board cannot be generated.
pub fn run_simple(lexicon: &Lexicon, config: &GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Boggle - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find words by chaining adjacent letters; no cell twice per word.");
    println!("Type a word, or pick cells with '@row,col row,col ...' (0-based).\n");
    println!("Commands: ':board' to redraw, ':words' for your list, ':quit' to stop\n");

    let mut rng = config.rng();

    loop {
        let mut session =
            GameSession::new(lexicon, config, &mut rng).map_err(|e| e.to_string())?;
        play_round(&mut session)?;
        print_session_summary(&session);

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn play_round(session: &mut GameSession<'_>) -> Result<(), String> {
    let started = Instant::now();
    let mut elapsed = 0;

    print_board(session.board());
    while !session.is_over() {
        let input = get_user_input(&format!("[{}] Word", session.clock()))?;

        // Catch the clock up on the time spent typing
        let now = started.elapsed().as_secs();
        while elapsed < now && !session.is_over() {
            elapsed += 1;
            if let Some(notice) = session.tick() {
                announce(notice);
            }
        }
        if session.is_over() {
            println!("Too late for that one.\n");
            break;
        }

        match parse_command(&input) {
            Command::Board => print_board(session.board()),
            Command::Words => {
                for entry in session.ledger().entries() {
                    let text = if entry.valid {
                        entry.text.green()
                    } else {
                        entry.text.red()
                    };
                    println!("  • {text}");
                }
                println!();
            }
            Command::Quit => session.end_game(),
            Command::Word(word) => {
                let outcome = session.submit_typed(&word).map_err(|e| e.to_string())?;
                report(&word, outcome, session.score());
            }
            Command::Path(path) => match session.submit_path(&path) {
                Ok((word, outcome)) => report(&word, outcome, session.score()),
                Err(SessionError::Path(err)) => println!("❌ {err}\n"),
                Err(err) => return Err(err.to_string()),
            },
            Command::Unknown(text) => println!("❌ Not understood: {text}\n"),
        }
    }
    Ok(())
}

fn announce(notice: TimerNotice) {
    match notice {
        TimerNotice::TimeUp => println!("\n⏰ {}\n", notice.to_string().red().bold()),
        _ => println!("\n⏳ {}\n", notice.to_string().yellow()),
    }
}

fn report(word: &str, outcome: Outcome, score: u32) {
    if word.is_empty() {
        return;
    }
    let word = word.to_uppercase();
    if !outcome.first_seen {
        println!("Already tried {word}.\n");
    } else if outcome.valid {
        println!(
            "✓ {} +{} (score {})\n",
            word.green().bold(),
            outcome.points,
            score.to_string().bright_cyan()
        );
    } else {
        println!("✗ {} is not on the board\n", word.red());
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}
