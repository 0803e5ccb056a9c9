//! Formatting utilities for terminal output

use crate::core::Board;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Board rows as spaced capitals, one letter per cell
///
/// A 'q' cell shows a plain "Q": its 'u' is a separate neighboring cell.
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    board
        .rows()
        .map(|row| {
            row.chars()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Share of a maximum as a whole percentage
#[must_use]
pub fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(whole) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimension, Position};

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn board_lines_show_q_as_its_own_cell() {
        let board = Board::from_letters(Dimension::Standard, "quit abcd efgh ijkl").unwrap();
        let lines = board_lines(&board);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Q  U  I  T");
        assert_eq!(lines[1], "A  B  C  D");
    }

    #[test]
    fn displayed_letters_match_spelled_path() {
        let board = Board::from_letters(Dimension::Standard, "qiet uxxx xxxx xxxx").unwrap();
        let shown: String = board_lines(&board)[0]
            .split_whitespace()
            .collect::<String>()
            .to_lowercase();
        let path: Vec<_> = (0..4).map(|col| Position::new(0, col)).collect();
        assert_eq!(board.path_word(&path), Ok(shown));
    }

    #[test]
    fn percent_handles_zero() {
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!(percent(3, 0).abs() < f64::EPSILON);
    }
}
