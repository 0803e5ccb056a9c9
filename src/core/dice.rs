//! Letter dice and the pool they are drawn from
//!
//! A board is populated by drawing one die per cell without replacement and
//! rolling it. The two catalogs follow the letter distribution of the physical
//! 4x4 and 5x5 games.

use super::alphabet::{ALPHABET_SIZE, letter_index};
use super::board::{BoardError, Dimension};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Maximum number of times a letter may be rolled onto one board
pub const FREQUENCY_CAP: u8 = 4;

/// Running count of each letter on a board, indexed by alphabet slot
pub type LetterCounts = [u8; ALPHABET_SIZE];

/// Face-sets of the 16 dice used on a 4x4 board
const STANDARD_DICE: [&[u8; 6]; 16] = [
    b"aaeegn", b"abbjoo", b"achops", b"affkps", b"aoqttw", b"cimotu", b"deilrx", b"delrvy",
    b"distty", b"eeghnw", b"eeinsu", b"ehrtvw", b"eiosst", b"elrtty", b"himnuq", b"hlnnrz",
];

/// Face-sets of the 25 dice used on a 5x5 board
const BIG_DICE: [&[u8; 6]; 25] = [
    b"aaafrs", b"aaeeee", b"aafirs", b"adennn", b"aeeeem", b"aeegmu", b"aegmnn", b"afirsy",
    b"bbjkxz", b"ccenst", b"eiilst", b"ceiqst", b"ddhnot", b"dhhlor", b"dhhnow", b"dhlnor",
    b"eiiitt", b"eilpst", b"emotqt", b"ensssu", b"fiprsy", b"gorrvw", b"iprsyy", b"nootuw",
    b"ooottu",
];

/// One physical die: six lettered faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    faces: [u8; 6],
}

impl Die {
    #[must_use]
    pub const fn new(faces: [u8; 6]) -> Self {
        Self { faces }
    }

    #[inline]
    #[must_use]
    pub const fn faces(&self) -> &[u8; 6] {
        &self.faces
    }

    /// Roll the die, every face equally likely
    pub fn roll<R: Rng>(&self, rng: &mut R) -> u8 {
        self.faces[rng.random_range(0..self.faces.len())]
    }

    /// Roll again among the faces whose letter is still under `cap`
    ///
    /// Picking uniformly among the acceptable faces has the same distribution
    /// as re-rolling until one comes up, but always terminates. Returns `None`
    /// when every face is already capped.
    pub fn reroll_under_cap<R: Rng>(
        &self,
        rng: &mut R,
        counts: &LetterCounts,
        cap: u8,
    ) -> Option<u8> {
        let open: Vec<u8> = self
            .faces
            .iter()
            .copied()
            .filter(|&face| letter_index(face).is_ok_and(|i| counts[i] < cap))
            .collect();
        open.choose(rng).copied()
    }

    /// True if at least one face is still under `cap`
    #[must_use]
    pub fn has_open_face(&self, counts: &LetterCounts, cap: u8) -> bool {
        self.faces
            .iter()
            .any(|&face| letter_index(face).is_ok_and(|i| counts[i] < cap))
    }
}

/// The dice still available for the board being built
#[derive(Debug, Clone)]
pub struct DiePool {
    dice: Vec<Die>,
    fallbacks: usize,
}

impl DiePool {
    /// Full catalog for a board dimension: 16 dice for 4x4, 25 for 5x5
    #[must_use]
    pub fn for_dimension(dimension: Dimension) -> Self {
        let catalog: &[&[u8; 6]] = match dimension {
            Dimension::Standard => &STANDARD_DICE,
            Dimension::Big => &BIG_DICE,
        };
        Self {
            dice: catalog.iter().map(|&&faces| Die::new(faces)).collect(),
            fallbacks: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.dice.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Number of draws that had to accept a letter over the cap
    #[inline]
    #[must_use]
    pub const fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// Draw a random die out of the pool and roll it
    ///
    /// If the rolled letter already appears `cap` times on the board, the same
    /// die is rolled again among its faces that are still under the cap. A die
    /// whose faces are all capped goes back into the pool and a random
    /// remaining die with an open face is used instead. Only when no such die
    /// exists is the capped roll kept, counted in [`DiePool::fallbacks`].
    ///
    /// # Errors
    /// Returns `BoardError::PoolExhausted` if no dice remain.
    pub fn draw_letter<R: Rng>(
        &mut self,
        rng: &mut R,
        cap: u8,
        counts: &LetterCounts,
    ) -> Result<u8, BoardError> {
        if self.dice.is_empty() {
            return Err(BoardError::PoolExhausted);
        }

        let die = self.dice.swap_remove(rng.random_range(0..self.dice.len()));
        let rolled = die.roll(rng);

        let over_cap = letter_index(rolled).is_ok_and(|i| counts[i] >= cap);
        if !over_cap {
            return Ok(rolled);
        }

        if let Some(letter) = die.reroll_under_cap(rng, counts, cap) {
            return Ok(letter);
        }

        let open: Vec<usize> = (0..self.dice.len())
            .filter(|&i| self.dice[i].has_open_face(counts, cap))
            .collect();
        if let Some(&swap) = open.choose(rng) {
            let replacement = std::mem::replace(&mut self.dice[swap], die);
            return Ok(replacement
                .reroll_under_cap(rng, counts, cap)
                .unwrap_or(rolled));
        }

        self.fallbacks += 1;
        log::warn!(
            "every face of die {:?} is at the frequency cap, keeping {:?}",
            String::from_utf8_lossy(die.faces()),
            rolled as char
        );
        Ok(rolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_faces_lowercase(catalog: &[&[u8; 6]]) -> bool {
        catalog
            .iter()
            .all(|faces| faces.iter().all(u8::is_ascii_lowercase))
    }

    #[test]
    fn catalogs_have_expected_sizes() {
        assert_eq!(DiePool::for_dimension(Dimension::Standard).remaining(), 16);
        assert_eq!(DiePool::for_dimension(Dimension::Big).remaining(), 25);
    }

    #[test]
    fn catalog_faces_are_lowercase() {
        assert!(all_faces_lowercase(&STANDARD_DICE));
        assert!(all_faces_lowercase(&BIG_DICE));
    }

    #[test]
    fn each_draw_consumes_one_die() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = DiePool::for_dimension(Dimension::Standard);
        let counts = [0; ALPHABET_SIZE];

        for expected in (0..16).rev() {
            pool.draw_letter(&mut rng, FREQUENCY_CAP, &counts).unwrap();
            assert_eq!(pool.remaining(), expected);
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn exhausted_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = DiePool::for_dimension(Dimension::Standard);
        let counts = [0; ALPHABET_SIZE];
        for _ in 0..16 {
            pool.draw_letter(&mut rng, FREQUENCY_CAP, &counts).unwrap();
        }

        assert!(matches!(
            pool.draw_letter(&mut rng, FREQUENCY_CAP, &counts),
            Err(BoardError::PoolExhausted)
        ));
    }

    #[test]
    fn roll_returns_a_face() {
        let mut rng = StdRng::seed_from_u64(3);
        let die = Die::new(*b"abcdef");
        for _ in 0..50 {
            assert!(die.faces().contains(&die.roll(&mut rng)));
        }
    }

    #[test]
    fn reroll_skips_capped_letters() {
        let mut rng = StdRng::seed_from_u64(11);
        let die = Die::new(*b"aaaaab");
        let mut counts = [0; ALPHABET_SIZE];
        counts[0] = FREQUENCY_CAP;

        for _ in 0..20 {
            assert_eq!(
                die.reroll_under_cap(&mut rng, &counts, FREQUENCY_CAP),
                Some(b'b')
            );
        }
    }

    #[test]
    fn reroll_reports_fully_capped_die() {
        let mut rng = StdRng::seed_from_u64(11);
        let die = Die::new(*b"aaaaaa");
        let mut counts = [0; ALPHABET_SIZE];
        counts[0] = FREQUENCY_CAP;

        assert_eq!(die.reroll_under_cap(&mut rng, &counts, FREQUENCY_CAP), None);
    }

    #[test]
    fn fully_capped_die_still_yields_a_letter() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = DiePool {
            dice: vec![Die::new(*b"zzzzzz")],
            fallbacks: 0,
        };
        let mut counts = [0; ALPHABET_SIZE];
        counts[25] = FREQUENCY_CAP;

        assert_eq!(
            pool.draw_letter(&mut rng, FREQUENCY_CAP, &counts),
            Ok(b'z')
        );
        assert_eq!(pool.fallbacks(), 1);
    }

    #[test]
    fn starved_die_is_swapped_for_an_open_one() {
        let mut counts = [0; ALPHABET_SIZE];
        counts[25] = FREQUENCY_CAP;

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool = DiePool {
                dice: vec![Die::new(*b"zzzzzz"), Die::new(*b"abcdef")],
                fallbacks: 0,
            };

            let letter = pool.draw_letter(&mut rng, FREQUENCY_CAP, &counts).unwrap();
            assert!(b"abcdef".contains(&letter));
            assert_eq!(pool.remaining(), 1);
            assert_eq!(pool.dice[0].faces(), b"zzzzzz");
            assert_eq!(pool.fallbacks(), 0);
        }
    }

    #[test]
    fn has_open_face_checks_every_face() {
        let die = Die::new(*b"aaaaab");
        let mut counts = [0; ALPHABET_SIZE];
        counts[0] = FREQUENCY_CAP;
        assert!(die.has_open_face(&counts, FREQUENCY_CAP));
        counts[1] = FREQUENCY_CAP;
        assert!(!die.has_open_face(&counts, FREQUENCY_CAP));
    }

    #[test]
    fn capped_letter_is_avoided_when_possible() {
        let mut counts = [0; ALPHABET_SIZE];
        counts[0] = FREQUENCY_CAP;

        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool = DiePool {
                dice: vec![Die::new(*b"aaaaae")],
                fallbacks: 0,
            };
            assert_eq!(
                pool.draw_letter(&mut rng, FREQUENCY_CAP, &counts),
                Ok(b'e')
            );
        }
    }
}
