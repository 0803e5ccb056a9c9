//! Board graph: an N x N grid of lettered cells with 8-way adjacency
//!
//! Boards are generated once per game from a [`DiePool`] and never change
//! afterwards. Cells refer to their neighbors by index into the board's cell
//! vector, so the board is the sole owner of every cell and every edge.

use super::alphabet::{ALPHABET_SIZE, letter_index};
use super::dice::{DiePool, FREQUENCY_CAP, LetterCounts};
use rand::Rng;
use std::fmt;

/// Offsets to the neighbors that come later in row-major order
///
/// Walking only these from every cell discovers each undirected edge once.
const FORWARD_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];

/// Supported board sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// 4x4 board, 16 dice
    Standard,
    /// 5x5 board, 25 dice
    Big,
}

impl Dimension {
    /// Length of one side of the board
    #[inline]
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            Self::Standard => 4,
            Self::Big => 5,
        }
    }

    #[inline]
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }
}

impl TryFrom<usize> for Dimension {
    type Error = BoardError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            4 => Ok(Self::Standard),
            5 => Ok(Self::Big),
            other => Err(BoardError::InvalidDimension(other)),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

/// Error type for board construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimension(usize),
    PoolExhausted,
    LayoutLength { expected: usize, actual: usize },
    InvalidLetter(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension(side) => {
                write!(f, "Board side must be 4 or 5, got {side}")
            }
            Self::PoolExhausted => write!(f, "Die pool ran out before every cell had a letter"),
            Self::LayoutLength { expected, actual } => {
                write!(f, "Board layout needs {expected} letters, got {actual}")
            }
            Self::InvalidLetter(c) => write!(f, "Board letter {c:?} is not a lowercase letter"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for tracing a path of cells across the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    Empty,
    OffBoard(Position),
    NotAdjacent(Position, Position),
    Revisited(Position),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Path selects no cells"),
            Self::OffBoard(pos) => write!(f, "Cell {pos} is not on the board"),
            Self::NotAdjacent(from, to) => write!(f, "Cell {to} is not adjacent to {from}"),
            Self::Revisited(pos) => write!(f, "Cell {pos} is used twice"),
        }
    }
}

impl std::error::Error for PathError {}

/// Grid coordinate of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` is one of the 8 cells surrounding this one
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && !(dr == 0 && dc == 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One square of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    letter: u8,
    neighbors: Vec<usize>,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    /// Indices of the adjacent cells on the owning board
    #[inline]
    #[must_use]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }
}

/// A fully built letter grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: Dimension,
    cells: Vec<Cell>,
    counts: LetterCounts,
    fallback_draws: usize,
}

impl Board {
    /// Roll a fresh board
    ///
    /// Draws one die per cell in row-major order, capping every letter at
    /// [`FREQUENCY_CAP`] occurrences, wires adjacency, then makes sure every
    /// 'q' has a 'u' next to it.
    ///
    /// # Errors
    /// Returns `BoardError::PoolExhausted` if the catalog for `dimension`
    /// holds fewer dice than cells.
    pub fn generate<R: Rng>(dimension: Dimension, rng: &mut R) -> Result<Self, BoardError> {
        let mut pool = DiePool::for_dimension(dimension);
        let mut counts: LetterCounts = [0; ALPHABET_SIZE];
        let mut letters = Vec::with_capacity(dimension.cell_count());

        for _ in 0..dimension.cell_count() {
            let letter = pool.draw_letter(rng, FREQUENCY_CAP, &counts)?;
            let slot =
                letter_index(letter).map_err(|_| BoardError::InvalidLetter(letter as char))?;
            counts[slot] += 1;
            letters.push(letter);
        }

        let mut board = Self::wired(dimension, letters);
        board.fallback_draws = pool.fallbacks();
        board.force_u_after_q();
        Ok(board)
    }

    /// Build a board from a fixed row-major layout
    ///
    /// Whitespace in `layout` is ignored. The layout is taken as-is: no
    /// frequency cap and no 'q' substitution.
    ///
    /// # Errors
    /// Returns `BoardError` if the layout has the wrong number of letters or
    /// contains anything other than lowercase letters.
    ///
    /// # Examples
    /// ```
    /// use boggle_engine::core::{Board, Dimension, Position};
    ///
    /// let board = Board::from_letters(Dimension::Standard, "catx axxx xxxx xxxx").unwrap();
    /// assert_eq!(board.cell(Position::new(0, 1)).unwrap().letter(), b'a');
    /// ```
    pub fn from_letters(dimension: Dimension, layout: &str) -> Result<Self, BoardError> {
        let letters: Vec<u8> = layout
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();

        if letters.len() != dimension.cell_count() {
            return Err(BoardError::LayoutLength {
                expected: dimension.cell_count(),
                actual: letters.len(),
            });
        }
        if let Some(&bad) = letters.iter().find(|b| !b.is_ascii_lowercase()) {
            return Err(BoardError::InvalidLetter(bad as char));
        }

        Ok(Self::wired(dimension, letters))
    }

    /// Create the cells and link every pair of grid neighbors both ways
    fn wired(dimension: Dimension, letters: Vec<u8>) -> Self {
        let side = dimension.side();
        let mut counts: LetterCounts = [0; ALPHABET_SIZE];
        let mut cells: Vec<Cell> = letters
            .into_iter()
            .enumerate()
            .map(|(index, letter)| {
                if let Ok(slot) = letter_index(letter) {
                    counts[slot] += 1;
                }
                Cell {
                    position: Position::new(index / side, index % side),
                    letter,
                    neighbors: Vec::with_capacity(8),
                }
            })
            .collect();

        for index in 0..cells.len() {
            let (row, col) = (index / side, index % side);
            for (dr, dc) in FORWARD_OFFSETS {
                let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                else {
                    continue;
                };
                if r >= side || c >= side {
                    continue;
                }
                let other = r * side + c;
                cells[index].neighbors.push(other);
                cells[other].neighbors.push(index);
            }
        }

        Self {
            dimension,
            cells,
            counts,
            fallback_draws: 0,
        }
    }

    /// Guarantee a 'u' beside every 'q'
    ///
    /// A 'q' that already touches a 'u' is left alone. Otherwise its first
    /// neighbor that is not itself a 'q' is overwritten with 'u'. The
    /// substitution may push 'u' past the frequency cap.
    fn force_u_after_q(&mut self) {
        for index in 0..self.cells.len() {
            if self.cells[index].letter != b'q' {
                continue;
            }

            let neighbors = &self.cells[index].neighbors;
            if neighbors.iter().any(|&n| self.cells[n].letter == b'u') {
                continue;
            }

            let Some(&target) = neighbors
                .iter()
                .find(|&&n| self.cells[n].letter != b'q')
                .or_else(|| neighbors.first())
            else {
                continue;
            };

            let replaced = self.cells[target].letter;
            log::debug!(
                "forcing 'u' at {} next to 'q' at {} (was {:?})",
                self.cells[target].position,
                self.cells[index].position,
                replaced as char
            );
            if let Ok(slot) = letter_index(replaced) {
                self.counts[slot] -= 1;
            }
            self.counts[usize::from(b'u' - b'a')] += 1;
            self.cells[target].letter = b'u';
        }
    }

    #[inline]
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[inline]
    #[must_use]
    pub const fn side(&self) -> usize {
        self.dimension.side()
    }

    /// All cells in row-major order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at a row-major index
    ///
    /// # Panics
    /// Panics if `index` is not below the cell count
    #[inline]
    #[must_use]
    pub fn cell_at(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    #[must_use]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        let side = self.side();
        (position.row < side && position.col < side).then(|| position.row * side + position.col)
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index_of(position).map(|index| &self.cells[index])
    }

    /// How many times each letter appears on the board
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Cells whose die could only land on a letter already at the cap
    #[inline]
    #[must_use]
    pub const fn fallback_draws(&self) -> usize {
        self.fallback_draws
    }

    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        letter_index(letter).map_or(0, |slot| self.counts[slot])
    }

    /// Indices of every cell showing `letter`
    pub fn cells_with(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| cell.letter == letter)
            .map(|(index, _)| index)
    }

    /// Each row of the board as a string
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.side())
            .map(|row| row.iter().map(|cell| cell.letter as char).collect())
    }

    /// Spell the word along a selected path of cells
    ///
    /// # Errors
    /// Returns `PathError` if the path is empty, leaves the board, steps to a
    /// non-adjacent cell or uses a cell twice.
    pub fn path_word(&self, path: &[Position]) -> Result<String, PathError> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }

        let mut used: Vec<usize> = Vec::with_capacity(path.len());
        let mut word = String::with_capacity(path.len());

        for (step, &position) in path.iter().enumerate() {
            let index = self
                .index_of(position)
                .ok_or(PathError::OffBoard(position))?;
            if used.contains(&index) {
                return Err(PathError::Revisited(position));
            }
            if let Some(&previous) = used.last()
                && !self.cells[previous].neighbors.contains(&index)
            {
                return Err(PathError::NotAdjacent(path[step - 1], position));
            }
            used.push(index);
            word.push(self.cells[index].letter as char);
        }

        Ok(word)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let spaced: Vec<String> = row
                .chars()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect();
            write!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}
