//! Display functions for boards and command results

use super::formatters::{board_lines, create_progress_bar, percent};
use crate::commands::{BoardStatistics, SolveResult};
use crate::core::{Board, letter_at};
use crate::game::{GameSession, points_for};
use colored::Colorize;

/// Print a board as a framed grid
pub fn print_board(board: &Board) {
    println!("\n{}", "─".repeat(30).cyan());
    for line in board_lines(board) {
        println!("   {}", line.bright_white().bold());
    }
    println!("{}\n", "─".repeat(30).cyan());
}

/// Print the words a board holds and its best score
pub fn print_solve_result(result: &SolveResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BOARD SOLUTION:".bright_cyan().bold(),
        result.board.dimension().to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    print_board(&result.board);

    let shown = limit.unwrap_or(result.words.len()).min(result.words.len());
    let mut current_length = 0;
    for word in &result.words[..shown] {
        if word.len() != current_length {
            current_length = word.len();
            println!(
                "\n{} {}",
                format!("{current_length} letters").bright_cyan().bold(),
                format!("(+{} each)", points_for(current_length)).bright_black()
            );
        }
        println!("  • {}", word.to_uppercase());
    }
    if shown < result.words.len() {
        println!(
            "\n  … and {} more",
            (result.words.len() - shown).to_string().bright_black()
        );
    }

    println!();
    println!("📊 Words on board:  {}", result.words.len().to_string().bold());
    println!(
        "   Maximum score:   {}",
        result.max_score.to_string().bright_yellow().bold()
    );
    println!("   Time taken:      {:.2}ms", result.duration.as_secs_f64() * 1000.0);
}

/// Print the end-of-game summary for a session
pub fn print_session_summary(session: &GameSession<'_>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    G A M E   O V E R    ".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    let found: Vec<_> = session.ledger().found_words().collect();
    println!(
        "\n  Final score: {}",
        session.score().to_string().bright_yellow().bold()
    );
    println!("  Words found: {}", found.len());

    if !found.is_empty() {
        println!("\n  Your words:");
        for entry in found {
            println!(
                "    {} {}",
                entry.text.to_uppercase().bright_white().bold(),
                format!("+{}", entry.points()).green()
            );
        }
    }

    let missed = session
        .ledger()
        .entries()
        .iter()
        .filter(|entry| !entry.valid)
        .count();
    if missed > 0 {
        println!("\n  {} rejected submissions", missed.to_string().red());
    }

    let available = crate::game::find_words(session.board(), session.lexicon());
    let best = crate::game::max_score(&available);
    println!(
        "\n  Board held {} words worth {} points ({:.0}% scored)",
        available.len(),
        best,
        percent(session.score(), best)
    );
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Print the result of a statistics run
pub fn print_board_statistics(stats: &BoardStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOARD STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Boards generated: {}", stats.boards);
    println!("   Starved draws:    {} boards", stats.starved);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n🔍 {}", "Invariants:".bright_cyan().bold());
    if stats.violations.is_empty() {
        println!("   {}", "All boards passed".green().bold());
    } else {
        println!(
            "   {}",
            format!("{} violations", stats.violations.len()).red().bold()
        );
        for (board, violation) in stats.violations.iter().take(10) {
            println!("   board {board}: {violation:?}");
        }
    }

    println!("\n📖 {}", "Words:".bright_cyan().bold());
    println!(
        "   Average findable: {}",
        format!("{:.1}", stats.average_words()).bright_yellow().bold()
    );
    if let Some((rows, words)) = &stats.best_board {
        println!("   Richest board:    {} ({words} words)", rows.to_uppercase());
    }

    println!("\n📈 {}", "Letter frequencies:".bright_cyan().bold());
    let frequencies = stats.letter_frequencies();
    let max = frequencies.iter().copied().fold(0.0, f64::max);
    for (slot, frequency) in frequencies.iter().enumerate() {
        let bar = create_progress_bar(*frequency, max, 30);
        println!(
            "   {}: {} {:5.2}%",
            (letter_at(slot) as char).to_ascii_uppercase(),
            bar.green(),
            frequency * 100.0
        );
    }
}
