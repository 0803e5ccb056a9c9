//! Board statistics - bulk generation with invariant checks
//!
//! Rolls many boards, checks each one's structure and reports how often the
//! checks fail along with word counts and letter frequencies.

use crate::core::{ALPHABET_SIZE, Board, BoardError, FREQUENCY_CAP, Lexicon, letter_index};
use crate::game::{GameConfig, find_words};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// One structural problem found on a generated board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A cell's neighbor count does not match its place on the grid
    Degree { index: usize, degree: usize },
    /// A cell lists a neighbor that does not list it back
    Asymmetric { from: usize, to: usize },
    /// A letter appears more often than the cap allows
    OverCap { letter: char, count: u8 },
    /// A 'q' with no 'u' beside it
    LonelyQ { index: usize },
}

/// Statistics from generating many boards
#[derive(Debug)]
pub struct BoardStatistics {
    pub boards: usize,
    /// Boards where at least one draw had to exceed the cap
    pub starved: usize,
    pub violations: Vec<(usize, Violation)>,
    pub total_words: usize,
    pub best_board: Option<(String, usize)>,
    pub letter_totals: [usize; ALPHABET_SIZE],
    pub total_time: Duration,
}

impl BoardStatistics {
    #[must_use]
    pub fn average_words(&self) -> f64 {
        if self.boards == 0 {
            0.0
        } else {
            self.total_words as f64 / self.boards as f64
        }
    }

    /// Share of all cells showing each letter
    #[must_use]
    pub fn letter_frequencies(&self) -> [f64; ALPHABET_SIZE] {
        let cells: usize = self.letter_totals.iter().sum();
        let mut frequencies = [0.0; ALPHABET_SIZE];
        if cells > 0 {
            for (frequency, &total) in frequencies.iter_mut().zip(&self.letter_totals) {
                *frequency = total as f64 / cells as f64;
            }
        }
        frequencies
    }
}

/// Number of neighbors a cell at `index` must have
fn expected_degree(board: &Board, index: usize) -> usize {
    let last = board.side() - 1;
    let (row, col) = (index / board.side(), index % board.side());
    match (row == 0 || row == last, col == 0 || col == last) {
        (true, true) => 3,
        (true, false) | (false, true) => 5,
        (false, false) => 8,
    }
}

/// Every structural problem on `board`
#[must_use]
pub fn check_board(board: &Board) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (index, cell) in board.cells().iter().enumerate() {
        let degree = cell.neighbors().len();
        if degree != expected_degree(board, index) {
            violations.push(Violation::Degree { index, degree });
        }
        for &neighbor in cell.neighbors() {
            if !board.cell_at(neighbor).neighbors().contains(&index) {
                violations.push(Violation::Asymmetric {
                    from: index,
                    to: neighbor,
                });
            }
        }
        if cell.letter() == b'q'
            && !cell
                .neighbors()
                .iter()
                .any(|&n| board.cell_at(n).letter() == b'u')
        {
            violations.push(Violation::LonelyQ { index });
        }
    }

    // A starved draw is allowed past the cap, and each 'q' may add a 'u'
    if board.fallback_draws() == 0 {
        for letter in b'a'..=b'z' {
            let count = board.count_of(letter);
            let allowed = if letter == b'u' {
                FREQUENCY_CAP + board.count_of(b'q')
            } else {
                FREQUENCY_CAP
            };
            if count > allowed {
                violations.push(Violation::OverCap {
                    letter: letter as char,
                    count,
                });
            }
        }
    }

    violations
}

/// Generate `count` boards and collect statistics
///
/// With a seed in `config` the whole run is reproducible.
///
/// # Errors
/// Returns `BoardError` if a board cannot be generated.
pub fn run_stats(
    config: &GameConfig,
    lexicon: &Lexicon,
    count: usize,
    show_progress: bool,
) -> Result<BoardStatistics, BoardError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut rng = config.rng();
    let mut stats = BoardStatistics {
        boards: 0,
        starved: 0,
        violations: Vec::new(),
        total_words: 0,
        best_board: None,
        letter_totals: [0; ALPHABET_SIZE],
        total_time: Duration::ZERO,
    };

    let start = Instant::now();
    for board_number in 0..count {
        let board = Board::generate(config.dimension, &mut rng)?;
        stats.boards += 1;

        if board.fallback_draws() > 0 {
            stats.starved += 1;
        }
        stats
            .violations
            .extend(check_board(&board).into_iter().map(|v| (board_number, v)));

        for cell in board.cells() {
            if let Ok(slot) = letter_index(cell.letter()) {
                stats.letter_totals[slot] += 1;
            }
        }

        let words = find_words(&board, lexicon).len();
        stats.total_words += words;
        if stats.best_board.as_ref().is_none_or(|(_, best)| words > *best) {
            stats.best_board = Some((board.rows().collect::<Vec<_>>().join(" "), words));
        }

        if board_number % 10 == 0 {
            pb.set_message(format!("Avg words: {:.1}", stats.average_words()));
        }
        pb.inc(1);
    }
    pb.finish_with_message("Complete!");

    stats.total_time = start.elapsed();
    if !stats.violations.is_empty() {
        log::warn!("{} invariant violations found", stats.violations.len());
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimension;
    use crate::wordlists::loader::lexicon_from_slice;

    #[test]
    fn generated_boards_pass_every_check() {
        let lexicon = lexicon_from_slice(&["tea", "eat", "ate"]);
        for dimension in [Dimension::Standard, Dimension::Big] {
            let config = GameConfig::new(dimension).with_seed(Some(11));
            let stats = run_stats(&config, &lexicon, 50, false).unwrap();

            assert_eq!(stats.boards, 50);
            assert!(stats.violations.is_empty(), "{:?}", stats.violations);
            let cells: usize = stats.letter_totals.iter().sum();
            assert_eq!(cells, 50 * dimension.cell_count());
        }
    }

    #[test]
    fn lonely_q_is_reported() {
        let board = Board::from_letters(Dimension::Standard, "qabc defg hijk lmno").unwrap();
        assert_eq!(check_board(&board), vec![Violation::LonelyQ { index: 0 }]);
    }

    #[test]
    fn letter_over_cap_is_reported() {
        let board = Board::from_letters(Dimension::Standard, "aaaa abcd efgh ijkl").unwrap();
        assert_eq!(
            check_board(&board),
            vec![Violation::OverCap {
                letter: 'a',
                count: 5
            }]
        );
    }

    #[test]
    fn fixed_layout_within_rules_is_clean() {
        let board = Board::from_letters(Dimension::Standard, "quit abcd efgh ijkl").unwrap();
        assert!(check_board(&board).is_empty());
    }

    #[test]
    fn frequencies_sum_to_one() {
        let lexicon = Lexicon::new();
        let config = GameConfig::default().with_seed(Some(3));
        let stats = run_stats(&config, &lexicon, 10, false).unwrap();

        let total: f64 = stats.letter_frequencies().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(stats.average_words().abs() < f64::EPSILON);
        assert!(stats.best_board.is_some());
    }
}
